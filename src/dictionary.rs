use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::script::contains_cjk;

#[derive(Debug, Clone)]
pub struct Dictionary {
    name: String,
    version: u32,
    entries: Vec<(String, String)>,
    order: Vec<usize>,
}

impl Dictionary {
    pub fn new(name: impl Into<String>, version: u32, entries: Vec<(String, String)>) -> Self {
        let mut order = (0..entries.len()).collect::<Vec<usize>>();
        // stable sort keeps declared order between keys of equal length
        order.sort_by(|left, right| {
            let left_len = entries[*left].0.chars().count();
            let right_len = entries[*right].0.chars().count();
            right_len.cmp(&left_len)
        });

        Self {
            name: name.into(),
            version,
            entries,
            order,
        }
    }

    pub fn from_pairs(name: &str, version: u32, pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(source, target)| ((*source).to_string(), (*target).to_string()))
            .collect();
        Self::new(name, version, entries)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path)
            .with_context(|| format!("failed to read dictionary {}", path.display()))?;
        let pairs: Vec<(String, String)> = serde_json::from_slice(&raw).with_context(|| {
            format!(
                "failed to parse dictionary {} (expected an array of [source, target] pairs)",
                path.display()
            )
        })?;

        if pairs.iter().any(|(source, _)| source.is_empty()) {
            bail!("dictionary {} contains an empty source key", path.display());
        }

        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("custom")
            .to_string();
        Ok(Self::new(name, 1, pairs))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn longest_first(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.order.iter().map(|index| {
            let (source, target) = &self.entries[*index];
            (source.as_str(), target.as_str())
        })
    }

    pub fn substitute<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !contains_cjk(text) {
            return Cow::Borrowed(text);
        }

        let mut out = text.to_string();
        for (source, target) in self.longest_first() {
            if source.is_empty() || !out.contains(source) {
                continue;
            }
            out = out.replace(source, target);
        }

        if out == text {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::fs;

    use super::Dictionary;

    #[test]
    fn substitute_prefers_longest_key_in_cjk_text() {
        let dictionary = Dictionary::from_pairs("t", 1, &[("色", "color"), ("色調", "Color Tone")]);
        assert_eq!(dictionary.substitute("色調"), "Color Tone");
        assert_eq!(dictionary.substitute("色"), "color");
    }

    #[test]
    fn substitute_leaves_text_without_cjk_untouched_even_with_matching_keys() {
        let dictionary = Dictionary::from_pairs("t", 1, &[("A", "Y"), ("AB", "X")]);
        assert!(matches!(dictionary.substitute("AB"), Cow::Borrowed("AB")));
        assert_eq!(dictionary.substitute("AB色"), "X色");
    }

    #[test]
    fn substitute_longest_match_over_single_character_substring() {
        let dictionary = Dictionary::from_pairs("t", 1, &[("の", "Y"), ("色の見え方", "X")]);
        assert_eq!(dictionary.substitute("色の見え方"), "X");
    }

    #[test]
    fn substitute_replaces_every_occurrence() {
        let dictionary = Dictionary::from_pairs("t", 1, &[("白", "White")]);
        assert_eq!(dictionary.substitute("白 / 白"), "White / White");
    }

    #[test]
    fn substitute_returns_borrowed_text_without_cjk() {
        let dictionary = Dictionary::from_pairs("t", 1, &[("Modern", "모던한")]);
        let out = dictionary.substitute("Modern layout, 구성");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, "Modern layout, 구성");
    }

    #[test]
    fn substitute_is_idempotent_for_source_language_keys() {
        let dictionary = Dictionary::from_pairs("t", 1, &[("背景色", "배경색"), ("白", "흰색")]);
        let once = dictionary.substitute("背景色: 白").into_owned();
        let twice = dictionary.substitute(&once).into_owned();
        assert_eq!(once, "배경색: 흰색");
        assert_eq!(once, twice);
    }

    #[test]
    fn equal_length_keys_keep_declared_order() {
        let dictionary = Dictionary::from_pairs("t", 1, &[("ab", "1"), ("cd", "2"), ("abc", "3")]);
        let order = dictionary
            .longest_first()
            .map(|(source, _)| source)
            .collect::<Vec<&str>>();
        assert_eq!(order, vec!["abc", "ab", "cd"]);
    }

    #[test]
    fn load_reads_ordered_pairs_from_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("studio.json");
        fs::write(&path, r#"[["金", "Gold"], ["銀", "Silver"]]"#).expect("write dictionary");

        let dictionary = Dictionary::load(&path).expect("dictionary should load");
        assert_eq!(dictionary.name(), "studio");
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.substitute("金と銀"), "GoldとSilver");
    }

    #[test]
    fn load_rejects_empty_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"[["", "x"]]"#).expect("write dictionary");

        assert!(Dictionary::load(&path).is_err());
    }
}
