pub const DEFAULT_ROLE: &str = "Structure";

pub const ROLE_RULES: &[(&[&str], &str)] = &[
    (&["notebook", "doodle"], "Opening / Emotional"),
    (&["neon", "cyber"], "High Impact"),
    (&["b&w", "minimal"], "Content / Data"),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MaterialRule {
    pub base: &'static str,
    pub texture: &'static [&'static str],
}

pub const MATERIAL_RULES: &[(&[&str], MaterialRule)] = &[
    (
        &["paper"],
        MaterialRule {
            base: "paper",
            texture: &["grain"],
        },
    ),
    (
        &["neon"],
        MaterialRule {
            base: "dark_glass",
            texture: &[],
        },
    ),
];

pub const COMPOSITION_RULES: &[(&[&str], &str)] = &[(&["grid"], "modular_grid")];

pub const WHITESPACE_RULES: &[(&[&str], f64)] = &[(&["minimal"], 0.8)];

pub fn first_match<'a, T>(text: &str, rules: &'a [(&[&str], T)]) -> Option<&'a T> {
    let haystack = text.to_lowercase();
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| haystack.contains(keyword)))
        .map(|(_, value)| value)
}

pub fn classify_role(title: &str) -> &'static str {
    first_match(title, ROLE_RULES).copied().unwrap_or(DEFAULT_ROLE)
}

pub fn slide_intent_for_role(role: &str) -> Vec<String> {
    if role == DEFAULT_ROLE {
        vec!["title".to_string(), "content".to_string()]
    } else {
        vec!["impact".to_string()]
    }
}
