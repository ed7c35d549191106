use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

pub const LEGACY_COLLECTION_KEY: &str = "styles_001_100";
pub const V2_COLLECTION_KEY: &str = "styles_v2";
pub const DECK_CONSISTENCY_KEY: &str = "deck_consistency";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accents: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FreeText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_report: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_report: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub palette: Option<Palette>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(flatten)]
    pub free_text: FreeText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct V1Record {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_bucket: Option<String>,
    #[serde(default)]
    pub slide_intent: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt_one_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elaboration: Option<String>,
    #[serde(default)]
    pub palette: Option<Palette>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fidelity_score: Option<Number>,
    #[serde(flatten)]
    pub free_text: FreeText,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaRecord {
    pub module_id: String,
    pub style_name: String,
    pub role_bucket: String,
    pub design_dna: DesignDna,
    pub slide_usage: SlideUsage,
    pub image_prompt_one_line: String,
    pub negative_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elaboration: Option<String>,
    #[serde(flatten)]
    pub free_text: FreeText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignDna {
    pub tone_keywords: Vec<String>,
    pub color_palette: ColorPalette,
    pub layout_rules: LayoutRules,
    pub materiality: Materiality,
    pub line_shape: LineShape,
    pub typography: TypographySpec,
    pub emotional_profile: EmotionalProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRules {
    pub composition: String,
    pub whitespace_ratio: f64,
    pub reading_flow: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Materiality {
    pub base: String,
    pub texture: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineShape {
    pub line_style: String,
    pub stroke_variance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographySpec {
    pub headline: String,
    pub body: String,
    pub language_support: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionalProfile {
    pub mood: Vec<String>,
    pub tempo: String,
    pub weight: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideUsage {
    pub best_for: Vec<String>,
    pub avoid_for: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckConsistencyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_motif: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette_harmony_rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography_mood_hint: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeckConsistencyConfig {
    pub fn baseline() -> Self {
        Self {
            global_rule: Some("Consistent 16:9 layout with minimal clutter.".to_string()),
            anchor_motif: Some("Top-left geometric marker".to_string()),
            palette_harmony_rule: Some("Limit to 3 main colors per slide".to_string()),
            typography_mood_hint: Some("Clean, Sans-serif, deeply legible".to_string()),
            extra: Map::new(),
        }
    }
}

pub fn module_id(id: i64) -> String {
    format!("DNA_{:03}", id.max(0))
}
