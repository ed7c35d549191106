use std::borrow::Cow;

use anyhow::Result;
use serde_json::Value;
use tracing::info;

use crate::cli::NormalizeArgs;
use crate::dictionaries::builtin;
use crate::dictionary::Dictionary;
use crate::residual::{StripReport, strip_document};
use crate::store::Database;
use crate::util::run_id;
use crate::visit::rewrite_strings;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub substituted: usize,
    pub stripped: StripReport,
}

pub fn run(args: NormalizeArgs) -> Result<()> {
    let run_id = run_id("normalize");
    let dictionary = match &args.dictionary_file {
        Some(path) => Dictionary::load(path)?,
        None => builtin(args.dictionary),
    };

    let mut db = Database::load(&args.db.db_path)?;
    let shape = db.shape()?;

    info!(
        run_id = %run_id,
        shape = shape.as_str(),
        dictionary = dictionary.name(),
        version = dictionary.version(),
        entries = dictionary.len(),
        "normalization requested"
    );

    let report = normalize_document(&mut db.root, &dictionary);
    info!(
        substituted = report.substituted,
        stripped = report.stripped.strings_changed,
        chars_discarded = report.stripped.chars_discarded,
        "normalization completed"
    );

    db.save()?;
    Ok(())
}

pub fn normalize_document(doc: &mut Value, dictionary: &Dictionary) -> NormalizeReport {
    let substituted = rewrite_strings(doc, &mut |text| match dictionary.substitute(text) {
        Cow::Owned(value) => Some(value),
        Cow::Borrowed(_) => None,
    });
    let stripped = strip_document(doc);

    NormalizeReport {
        substituted,
        stripped,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::normalize_document;
    use crate::cli::DictionaryChoice;
    use crate::dictionaries::builtin;
    use crate::dictionary::Dictionary;
    use crate::script::contains_cjk;
    use crate::visit::for_each_string;

    #[test]
    fn normalization_leaves_no_cjk_and_keeps_hangul() {
        let dictionary = Dictionary::from_pairs("test", 1, &[("モダン", "모던")]);
        let mut doc = json!({
            "styles_v2": [{
                "module_id": "DNA_001",
                "tone": "モダン 未知の語",
                "design_dna": {"tone_keywords": ["한국어", "カタカナ"]},
                "fidelity": 3
            }]
        });

        let report = normalize_document(&mut doc, &dictionary);

        assert_eq!(report.substituted, 1);
        assert_eq!(doc["styles_v2"][0]["tone"], "모던");
        assert_eq!(doc["styles_v2"][0]["design_dna"]["tone_keywords"][0], "한국어");
        assert_eq!(doc["styles_v2"][0]["design_dna"]["tone_keywords"][1], "");
        assert_eq!(doc["styles_v2"][0]["fidelity"], 3);

        let mut residual = false;
        for_each_string(&doc, &mut |text| residual |= contains_cjk(text));
        assert!(!residual);
    }

    #[test]
    fn normalization_is_idempotent() {
        let dictionary = builtin(DictionaryChoice::JaKo);
        let mut doc = json!([{"id": 1, "title": "ネオン", "tone": "Calm"}]);

        normalize_document(&mut doc, &dictionary);
        let snapshot = doc.clone();
        let second = normalize_document(&mut doc, &dictionary);

        assert_eq!(doc, snapshot);
        assert_eq!(second.substituted, 0);
        assert_eq!(second.stripped.strings_changed, 0);
    }
}
