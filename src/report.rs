use std::collections::BTreeSet;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredReport {
    #[serde(rename = "Tone", default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(rename = "Visual Identity", default)]
    pub visual_identity: VisualIdentity,
    #[serde(rename = "Typography", default)]
    pub typography: Typography,
    #[serde(rename = "Image Style", default)]
    pub image_style: ImageStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualIdentity {
    #[serde(rename = "Background", default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(rename = "Text", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "Accents", default, skip_serializing_if = "Option::is_none")]
    pub accents: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    #[serde(rename = "Headers", default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<String>,
    #[serde(rename = "Style", default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageStyle {
    #[serde(rename = "Features", default, skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    #[serde(rename = "Texture", default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    #[serde(rename = "Composition", default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReportField {
    Tone,
    Background,
    Text,
    Accents,
    Headers,
    Style,
    Features,
    Texture,
    Composition,
}

impl ReportField {
    pub fn path(self) -> &'static str {
        match self {
            Self::Tone => "Tone",
            Self::Background => "Visual Identity.Background",
            Self::Text => "Visual Identity.Text",
            Self::Accents => "Visual Identity.Accents",
            Self::Headers => "Typography.Headers",
            Self::Style => "Typography.Style",
            Self::Features => "Image Style.Features",
            Self::Texture => "Image Style.Texture",
            Self::Composition => "Image Style.Composition",
        }
    }
}

pub const FIELD_ALIASES: &[(ReportField, &[&str])] = &[
    (ReportField::Tone, &["Tone", "トーン", "톤"]),
    (ReportField::Background, &["Background Color", "背景色", "배경색"]),
    (ReportField::Text, &["Text Color", "文字色", "글자색"]),
    (ReportField::Accents, &["Accent Color", "アクセントカラー", "강조색"]),
    (ReportField::Headers, &["Headers", "見出し", "헤드라인"]),
    (ReportField::Style, &["Style", "スタイル", "스타일"]),
    (ReportField::Features, &["Features", "特徴", "특징"]),
    (ReportField::Texture, &["Texture", "質感", "질감"]),
    (ReportField::Composition, &["Composition", "構成", "구성"]),
];

impl StructuredReport {
    pub fn get(&self, field: ReportField) -> Option<&str> {
        let slot = match field {
            ReportField::Tone => &self.tone,
            ReportField::Background => &self.visual_identity.background,
            ReportField::Text => &self.visual_identity.text,
            ReportField::Accents => &self.visual_identity.accents,
            ReportField::Headers => &self.typography.headers,
            ReportField::Style => &self.typography.style,
            ReportField::Features => &self.image_style.features,
            ReportField::Texture => &self.image_style.texture,
            ReportField::Composition => &self.image_style.composition,
        };
        slot.as_deref()
    }

    fn set(&mut self, field: ReportField, value: String) {
        let slot = match field {
            ReportField::Tone => &mut self.tone,
            ReportField::Background => &mut self.visual_identity.background,
            ReportField::Text => &mut self.visual_identity.text,
            ReportField::Accents => &mut self.visual_identity.accents,
            ReportField::Headers => &mut self.typography.headers,
            ReportField::Style => &mut self.typography.style,
            ReportField::Features => &mut self.image_style.features,
            ReportField::Texture => &mut self.image_style.texture,
            ReportField::Composition => &mut self.image_style.composition,
        };
        *slot = Some(value);
    }
}

pub struct ReportExtractor {
    patterns: Vec<(ReportField, Regex)>,
    header_pattern: Regex,
}

impl ReportExtractor {
    pub fn new() -> Result<Self> {
        let mut patterns = Vec::with_capacity(FIELD_ALIASES.len());
        for (field, aliases) in FIELD_ALIASES {
            let alternation = aliases
                .iter()
                .map(|alias| regex::escape(alias))
                .collect::<Vec<String>>()
                .join("|");
            let pattern = Regex::new(&format!(
                r#"^\s*(?:[-*]\s*)?"?(?:{alternation})"?\s*[:：]\s*"?(.*?)"?\s*$"#
            ))
            .with_context(|| format!("failed to compile alias regex for {}", field.path()))?;
            patterns.push((*field, pattern));
        }

        let header_pattern =
            Regex::new(r"^\s*([^\s:：]+)[:：]").context("failed to compile header regex")?;

        Ok(Self {
            patterns,
            header_pattern,
        })
    }

    pub fn extract(&self, report: &str, dictionary: &Dictionary) -> StructuredReport {
        let mut extracted = StructuredReport::default();

        for (field, pattern) in &self.patterns {
            let value = report.lines().find_map(|line| {
                pattern
                    .captures(line)
                    .and_then(|captures| captures.get(1))
                    .map(|capture| capture.as_str().trim())
                    .filter(|value| !value.is_empty())
            });

            if let Some(value) = value {
                extracted.set(*field, dictionary.substitute(value).into_owned());
            }
        }

        extracted
    }

    pub fn headers(&self, report: &str) -> BTreeSet<String> {
        report
            .lines()
            .filter_map(|line| self.header_pattern.captures(line))
            .filter_map(|captures| captures.get(1))
            .map(|capture| capture.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{FIELD_ALIASES, ReportExtractor, ReportField, StructuredReport};
    use crate::cli::DictionaryChoice;
    use crate::dictionaries::builtin;

    fn extractor() -> ReportExtractor {
        ReportExtractor::new().expect("alias patterns should compile")
    }

    #[test]
    fn tone_only_report_keeps_sections_empty_not_null() {
        let dictionary = builtin(DictionaryChoice::JaEn);
        let report = extractor().extract("Tone: calm and bright", &dictionary);

        assert_eq!(report.tone.as_deref(), Some("calm and bright"));
        assert_eq!(
            serde_json::to_value(&report).expect("serialize report"),
            json!({
                "Tone": "calm and bright",
                "Visual Identity": {},
                "Typography": {},
                "Image Style": {}
            })
        );
    }

    #[test]
    fn extract_reads_japanese_aliases_and_translates_values() {
        let dictionary = builtin(DictionaryChoice::JaEn);
        let text = "全体デザイン設定:\n  トーン: \"モダン\"\n  ビジュアル・アイデンティティ:\n    背景色: 白\n    文字色: 黒\n    アクセントカラー: 金\n  タイポグラフィ:\n    見出し: bold sans\n  画像スタイル:\n    特徴: flat icons\n    質感: 和紙\n    構成: centered";

        let report = extractor().extract(text, &dictionary);

        assert_eq!(report.tone.as_deref(), Some("Modern"));
        assert_eq!(report.visual_identity.background.as_deref(), Some("White"));
        assert_eq!(report.visual_identity.text.as_deref(), Some("Black"));
        assert_eq!(report.visual_identity.accents.as_deref(), Some("Gold"));
        assert_eq!(report.typography.headers.as_deref(), Some("bold sans"));
        assert_eq!(report.typography.style, None);
        assert_eq!(report.image_style.features.as_deref(), Some("flat icons"));
        assert_eq!(report.image_style.texture.as_deref(), Some("Washi Paper"));
        assert_eq!(report.image_style.composition.as_deref(), Some("centered"));
    }

    #[test]
    fn extract_uses_first_occurrence_and_skips_section_headers() {
        let dictionary = builtin(DictionaryChoice::JaEn);
        let text = "Style:\n  Headers: first\n  Style: serif\n  Headers: second";

        let report = extractor().extract(text, &dictionary);

        assert_eq!(report.typography.headers.as_deref(), Some("first"));
        assert_eq!(report.typography.style.as_deref(), Some("serif"));
    }

    #[test]
    fn extract_is_line_anchored() {
        let dictionary = builtin(DictionaryChoice::JaEn);
        let text = "Image Style: painterly\nNotes: the Tone: is unknown";

        let report = extractor().extract(text, &dictionary);

        assert_eq!(report.typography.style, None);
        assert_eq!(report.tone, None);
    }

    #[test]
    fn extract_accepts_bullets_fullwidth_colon_and_korean_keys() {
        let dictionary = builtin(DictionaryChoice::JaEn);
        let text = "- 구성: 좌측 정렬\n* \"Texture\": \"grain\"\n背景色：黒";

        let report = extractor().extract(text, &dictionary);

        assert_eq!(report.image_style.composition.as_deref(), Some("좌측 정렬"));
        assert_eq!(report.image_style.texture.as_deref(), Some("grain"));
        assert_eq!(report.visual_identity.background.as_deref(), Some("Black"));
    }

    #[test]
    fn every_field_has_aliases_in_each_language() {
        assert_eq!(FIELD_ALIASES.len(), 9);
        for (field, aliases) in FIELD_ALIASES {
            assert_eq!(aliases.len(), 3, "{}", field.path());
        }
        let report = StructuredReport::default();
        assert_eq!(report.get(ReportField::Composition), None);
    }

    #[test]
    fn headers_lists_unique_line_keys() {
        let text = "Tone: calm\n  背景色: 白\nTone: again\nnot a header\n  Image Style:";
        let headers = extractor().headers(text);
        let headers = headers.into_iter().collect::<Vec<String>>();
        assert_eq!(headers, vec!["Tone", "背景色"]);
    }
}
