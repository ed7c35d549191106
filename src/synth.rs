use serde_json::Value;

use crate::model::{
    ColorPalette, DesignDna, DnaRecord, EmotionalProfile, FreeText, LayoutRules, LineShape,
    Materiality, SlideUsage, TypographySpec, module_id,
};

pub const SYNTHESIZED_START_ID: i64 = 200;
pub const SYNTHESIZED_NEGATIVE_PROMPT: &str =
    "low quality, text overlay, watermark, blurry, distorted";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StyleSeed {
    pub name: &'static str,
    pub colors: [&'static str; 3],
    pub mood: &'static str,
}

const fn seed(name: &'static str, colors: [&'static str; 3], mood: &'static str) -> StyleSeed {
    StyleSeed { name, colors, mood }
}

pub const SEED_CATALOGUE: &[(&str, &[StyleSeed])] = &[
    (
        "Corporate",
        &[
            seed("Swiss International", ["#FF0000", "#FFFFFF", "#000000"], "objective"),
            seed("McKinsey Clean", ["#002D62", "#F0F0F0", "#5E8DA6"], "professional"),
            seed("Tech Minimal", ["#000000", "#FFFFFF", "#00FF41"], "innovative"),
            seed("Big Four Audit", ["#FFFF00", "#000000", "#333333"], "bold"),
            seed("Legal Trust", ["#1C2833", "#FDFEFE", "#C0392B"], "authoritative"),
            seed("Startup Pitch", ["#6C3483", "#FFFFFF", "#F39C12"], "energetic"),
            seed("Financial Data", ["#117864", "#F2F3F4", "#85C1E9"], "trustworthy"),
            seed("Global Trade", ["#1F618D", "#F8F9F9", "#E74C3C"], "connected"),
            seed("Eco Corporate", ["#2ECC71", "#FFFFFF", "#27AE60"], "sustainable"),
            seed("Luxury Real Estate", ["#17202A", "#FDFEFE", "#D4AC0D"], "premium"),
            seed("Pharma Clean", ["#2980B9", "#FFFFFF", "#A9DFBF"], "clinical"),
            seed("Energy Sector", ["#E67E22", "#FDFEFE", "#2E86C1"], "powerful"),
            seed("Consulting Grid", ["#34495E", "#ECF0F1", "#3498DB"], "analytical"),
            seed("Executive Brief", ["#212F3D", "#FBFCFC", "#95A5A6"], "concise"),
            seed("Investor Relations", ["#154360", "#F4F6F7", "#D68910"], "stable"),
        ],
    ),
    (
        "Creative",
        &[
            seed("Acid Graphics", ["#CCFF00", "#111111", "#FF00FF"], "trippy"),
            seed("Risograph Print", ["#2E4057", "#FFE4E1", "#FF6B6B"], "textured"),
            seed("Collagen Art", ["#FAD7A0", "#6E2C00", "#D35400"], "mixed-media"),
            seed("Brutalism Mono", ["#000000", "#CCCCCC", "#0000FF"], "raw"),
            seed("Vaporwave Grid", ["#FF71CE", "#01CDFE", "#05FFA1"], "retro-future"),
            seed("Bauhaus Pop", ["#EAECEE", "#2C3E50", "#E74C3C"], "geometric"),
            seed("Y2K Chrome", ["#D5D8DC", "#17202A", "#82E0AA"], "glossy"),
            seed("Paper Cutout", ["#FEF9E7", "#A93226", "#2471A3"], "crafted"),
            seed("Watercolor Flow", ["#FFFFFF", "#85C1E9", "#F7DC6F"], "artistic"),
            seed("Graffiti Stencil", ["#1C2833", "#F2F3F4", "#E74C3C"], "urban"),
            seed("Pixel Art 8bit", ["#212F3D", "#F4D03F", "#58D68D"], "digital-retro"),
            seed("Dark Mode Glass", ["#000000", "#333333", "#00FFFF"], "sleek"),
            seed("Holographic Foil", ["#D7BDE2", "#F9E79F", "#A3E4D7"], "iridescent"),
            seed("Cinematic Noir", ["#000000", "#111111", "#AA0000"], "dramatic"),
            seed("Surreal Dream", ["#FADBD8", "#1A5276", "#D2B4DE"], "dreamy"),
        ],
    ),
    (
        "Emotional",
        &[
            seed("Calm Zen", ["#808B96", "#FDFEFE", "#566573"], "peaceful"),
            seed("Energetic Sport", ["#000000", "#FFFF00", "#FF0000"], "dynamic"),
            seed("Trustworthy Blue", ["#1B4F72", "#FFFFFF", "#AED6F1"], "reliable"),
            seed("Hopeful Green", ["#196F3D", "#EAFAF1", "#52BE80"], "optimistic"),
            seed("Urgent Red", ["#922B21", "#F9EBEA", "#CD6155"], "alert"),
            seed("Melancholy Grey", ["#212F3D", "#B3B6B7", "#5D6D7E"], "reflective"),
            seed("Joyful Yellow", ["#F1C40F", "#FFFFFF", "#F39C12"], "happy"),
            seed("Romantic Pink", ["#C0392B", "#FDEDEC", "#EC7063"], "loving"),
            seed("Mysterious Purple", ["#4A235A", "#F4ECF7", "#8E44AD"], "mystic"),
            seed("Grounding Earth", ["#5D4037", "#EFEBE9", "#8D6E63"], "grounded"),
            seed("Innocent White", ["#D7DBDD", "#FFFFFF", "#F0F3F4"], "pure"),
            seed("Nostalgic Sepia", ["#6E2C00", "#F6DDCC", "#DC7633"], "memories"),
            seed("Excited Orange", ["#A04000", "#FDF2E9", "#E59866"], "hyped"),
            seed("Serene Aqua", ["#0E6251", "#E8F8F5", "#48C9B0"], "calm"),
            seed("Focus Indigo", ["#1A237E", "#E8EAF6", "#3949AB"], "concentration"),
        ],
    ),
];

pub fn seed_prompt(category: &str, seed: &StyleSeed) -> String {
    format!(
        "{} style presentation background, {} category theme, {} atmosphere, colors: {}, high quality graphic design, architectural composition, {} lighting, 4k resolution",
        seed.name,
        category,
        seed.mood,
        seed.colors.join(", "),
        seed.mood
    )
}

pub fn synthesize(catalogue: &[(&str, &[StyleSeed])], start_id: i64) -> Vec<DnaRecord> {
    catalogue
        .iter()
        .flat_map(|(category, seeds)| seeds.iter().map(move |seed| (*category, seed)))
        .zip(start_id..)
        .map(|((category, seed), id)| record_from_seed(id, category, seed))
        .collect()
}

fn record_from_seed(id: i64, category: &str, seed: &StyleSeed) -> DnaRecord {
    let [primary, secondary, accent] = seed.colors;

    DnaRecord {
        module_id: module_id(id),
        style_name: seed.name.to_string(),
        role_bucket: category.to_string(),
        design_dna: DesignDna {
            tone_keywords: vec![
                category.to_lowercase(),
                seed.mood.to_string(),
                "professional".to_string(),
                "v2".to_string(),
            ],
            color_palette: ColorPalette {
                primary: primary.to_string(),
                secondary: secondary.to_string(),
                accent: accent.to_string(),
            },
            layout_rules: LayoutRules {
                composition: "dynamic".to_string(),
                whitespace_ratio: 0.5,
                reading_flow: "z-pattern".to_string(),
            },
            materiality: Materiality {
                base: "digital".to_string(),
                texture: vec!["clean".to_string(), "matte".to_string()],
            },
            line_shape: LineShape {
                line_style: "solid".to_string(),
                stroke_variance: "none".to_string(),
            },
            typography: TypographySpec {
                headline: "sans-serif".to_string(),
                body: "sans-serif".to_string(),
                language_support: vec!["en".to_string()],
            },
            emotional_profile: EmotionalProfile {
                mood: vec![seed.mood.to_string()],
                tempo: "moderate".to_string(),
                weight: "balanced".to_string(),
            },
        },
        slide_usage: SlideUsage {
            best_for: vec!["presentations".to_string(), "decks".to_string()],
            avoid_for: Vec::new(),
        },
        image_prompt_one_line: seed_prompt(category, seed),
        negative_prompt: SYNTHESIZED_NEGATIVE_PROMPT.to_string(),
        elaboration: None,
        free_text: FreeText::default(),
    }
}

pub fn prompt_for_record(record: &Value) -> String {
    for key in ["image_prompt_one_line", "prompt"] {
        if let Some(prompt) = record
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.trim().is_empty())
        {
            return prompt.to_string();
        }
    }

    let text = |key: &str| record.get(key).and_then(Value::as_str);
    let title = text("title")
        .or_else(|| text("style_name"))
        .unwrap_or("Abstract Design");
    let role = text("role_bucket").unwrap_or("background");
    let elaboration = text("elaboration").unwrap_or_default();
    let accents = record_accents(record);
    let accents = if accents.is_empty() {
        "harmonious colors".to_string()
    } else {
        accents.join(", ")
    };

    format!(
        "A premium presentation slide background in the style of '{title}'. \nDesign intent: {elaboration}. \nKey colors: {accents}. \nRole: {role}. \nHigh resolution, 8k, wallpaper quality, no text blocks, abstract and evocative representation of the theme."
    )
}

fn record_accents(record: &Value) -> Vec<&str> {
    if let Some(accents) = record
        .pointer("/palette/accents")
        .and_then(Value::as_array)
    {
        return accents.iter().filter_map(Value::as_str).collect();
    }

    record
        .pointer("/design_dna/color_palette/accent")
        .and_then(Value::as_str)
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;

    use super::{SEED_CATALOGUE, SYNTHESIZED_START_ID, prompt_for_record, seed_prompt, synthesize};

    #[test]
    fn built_in_catalogue_yields_45_sequential_records() {
        let records = synthesize(SEED_CATALOGUE, SYNTHESIZED_START_ID);

        assert_eq!(records.len(), 45);
        assert_eq!(records[0].module_id, "DNA_200");
        assert_eq!(records[44].module_id, "DNA_244");
        let ids = records
            .iter()
            .map(|record| record.module_id.as_str())
            .collect::<HashSet<&str>>();
        assert_eq!(ids.len(), 45);
        assert_eq!(records[15].role_bucket, "Creative");
        assert_eq!(records[15].module_id, "DNA_215");
    }

    #[test]
    fn synthesized_record_carries_seed_palette_and_mood() {
        let records = synthesize(SEED_CATALOGUE, SYNTHESIZED_START_ID);
        let swiss = &records[0];

        assert_eq!(swiss.style_name, "Swiss International");
        assert_eq!(swiss.design_dna.color_palette.primary, "#FF0000");
        assert_eq!(swiss.design_dna.color_palette.accent, "#000000");
        assert_eq!(
            swiss.design_dna.tone_keywords,
            vec!["corporate", "objective", "professional", "v2"]
        );
        assert_eq!(swiss.design_dna.emotional_profile.mood, vec!["objective"]);
        assert_eq!(
            swiss.image_prompt_one_line,
            "Swiss International style presentation background, Corporate category theme, objective atmosphere, colors: #FF0000, #FFFFFF, #000000, high quality graphic design, architectural composition, objective lighting, 4k resolution"
        );
    }

    #[test]
    fn synthesize_is_deterministic() {
        assert_eq!(
            synthesize(SEED_CATALOGUE, 300),
            synthesize(SEED_CATALOGUE, 300)
        );
    }

    #[test]
    fn seed_prompt_lists_colors_in_order() {
        let (category, seeds) = SEED_CATALOGUE[2];
        let prompt = seed_prompt(category, &seeds[0]);
        assert!(prompt.starts_with("Calm Zen style presentation background, Emotional"));
        assert!(prompt.contains("colors: #808B96, #FDFEFE, #566573"));
    }

    #[test]
    fn prompt_for_record_prefers_stored_prompt() {
        let record = json!({"image_prompt_one_line": "  stored  ", "prompt": "legacy"});
        assert_eq!(prompt_for_record(&record), "  stored  ");

        let record = json!({"image_prompt_one_line": " ", "prompt": "legacy"});
        assert_eq!(prompt_for_record(&record), "legacy");
    }

    #[test]
    fn prompt_for_record_synthesizes_fallback() {
        let record = json!({
            "title": "Chalk Talk",
            "elaboration": "칠판, 손글씨",
            "role_bucket": "Opening / Emotional",
            "palette": {"accents": ["#fff", "#ff0"]}
        });

        let prompt = prompt_for_record(&record);
        assert!(prompt.contains("in the style of 'Chalk Talk'"));
        assert!(prompt.contains("Design intent: 칠판, 손글씨."));
        assert!(prompt.contains("Key colors: #fff, #ff0."));
        assert!(prompt.contains("Role: Opening / Emotional."));

        let bare = prompt_for_record(&json!({}));
        assert!(bare.contains("'Abstract Design'"));
        assert!(bare.contains("Key colors: harmonious colors."));
    }
}
