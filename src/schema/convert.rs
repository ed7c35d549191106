use serde_json::Number;

use crate::model::{
    ColorPalette, DesignDna, DnaRecord, EmotionalProfile, LayoutRules, LegacyRecord, LineShape,
    Materiality, SlideUsage, TypographySpec, V1Record, module_id,
};
use crate::schema::rules::{
    COMPOSITION_RULES, DEFAULT_ROLE, MATERIAL_RULES, WHITESPACE_RULES, classify_role,
    first_match, slide_intent_for_role,
};

pub const LEGACY_NEGATIVE_PROMPT: &str = "clutter, text overlay, chaotic, low resolution, watermark";
pub const MISSING_PROMPT: &str = "No prompt available.";
pub const MIGRATED_PREFIX: &str = "Migrated from legacy: ";

const FALLBACK_TITLE: &str = "Untitled Style";
const FALLBACK_PRIMARY: &str = "#111111";
const FALLBACK_TEXT: &str = "#ffffff";
const FALLBACK_ACCENT: &str = "#00FF00";

pub fn v1_from_legacy(record: LegacyRecord) -> V1Record {
    let title = record.title.unwrap_or_default();
    let role = classify_role(&title);
    let elaboration = format!(
        "{MIGRATED_PREFIX}{}",
        record.free_text.tone.as_deref().unwrap_or_default()
    );

    V1Record {
        id: record.id,
        title: Some(title),
        role_bucket: Some(role.to_string()),
        slide_intent: slide_intent_for_role(role),
        image_prompt_one_line: Some(
            record
                .prompt
                .unwrap_or_else(|| MISSING_PROMPT.to_string()),
        ),
        image_prompt: None,
        negative_prompt: Some(LEGACY_NEGATIVE_PROMPT.to_string()),
        elaboration: Some(elaboration),
        palette: record.palette,
        fidelity_score: Some(Number::from(0)),
        free_text: record.free_text,
        extra: Default::default(),
    }
}

pub fn dna_from_v1(record: V1Record) -> DnaRecord {
    let title = record
        .title
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());
    let role = record
        .role_bucket
        .unwrap_or_else(|| DEFAULT_ROLE.to_string());
    let keywords = format!("{title} {role}");

    let palette = record.palette.unwrap_or_default();
    let primary = palette
        .background
        .unwrap_or_else(|| FALLBACK_PRIMARY.to_string());
    let text = palette.text.unwrap_or_else(|| FALLBACK_TEXT.to_string());
    let accent = palette
        .accents
        .first()
        .cloned()
        .unwrap_or_else(|| FALLBACK_ACCENT.to_string());
    let secondary = palette.accents.get(1).cloned().unwrap_or(text);

    let material = first_match(&keywords, MATERIAL_RULES);

    DnaRecord {
        module_id: module_id(record.id.unwrap_or(0)),
        style_name: title,
        role_bucket: role,
        design_dna: DesignDna {
            tone_keywords: record.slide_intent,
            color_palette: ColorPalette {
                primary,
                secondary,
                accent,
            },
            layout_rules: LayoutRules {
                composition: first_match(&keywords, COMPOSITION_RULES)
                    .copied()
                    .unwrap_or("determined_by_role")
                    .to_string(),
                whitespace_ratio: first_match(&keywords, WHITESPACE_RULES)
                    .copied()
                    .unwrap_or(0.5),
                reading_flow: "z-pattern".to_string(),
            },
            materiality: Materiality {
                base: material
                    .map(|rule| rule.base)
                    .unwrap_or("digital_screen")
                    .to_string(),
                texture: material
                    .map(|rule| rule.texture.iter().map(|t| t.to_string()).collect())
                    .unwrap_or_default(),
            },
            line_shape: LineShape {
                line_style: "default".to_string(),
                stroke_variance: "none".to_string(),
            },
            typography: TypographySpec {
                headline: "sans-serif".to_string(),
                body: "sans-serif".to_string(),
                language_support: vec!["en".to_string()],
            },
            emotional_profile: EmotionalProfile {
                mood: Vec::new(),
                tempo: "moderate".to_string(),
                weight: "balanced".to_string(),
            },
        },
        slide_usage: SlideUsage {
            best_for: Vec::new(),
            avoid_for: Vec::new(),
        },
        image_prompt_one_line: record
            .image_prompt_one_line
            .or(record.image_prompt)
            .unwrap_or_default(),
        negative_prompt: record.negative_prompt.unwrap_or_default(),
        elaboration: record.elaboration,
        free_text: record.free_text,
    }
}
