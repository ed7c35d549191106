use std::borrow::Cow;

use serde_json::Value;
use tracing::debug;

use crate::script::{contains_cjk, is_cjk};
use crate::visit::rewrite_strings;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripReport {
    pub strings_changed: usize,
    pub chars_discarded: usize,
}

pub fn strip_residual(text: &str) -> Cow<'_, str> {
    if !contains_cjk(text) {
        return Cow::Borrowed(text);
    }

    let kept = text
        .chars()
        .filter(|character| !is_cjk(*character))
        .collect::<String>();
    Cow::Owned(collapse_whitespace(&kept))
}

pub fn strip_document(doc: &mut Value) -> StripReport {
    let mut chars_discarded = 0usize;
    let strings_changed = rewrite_strings(doc, &mut |text| {
        match strip_residual(text) {
            Cow::Borrowed(_) => None,
            Cow::Owned(value) => {
                let discarded = text.chars().filter(|character| is_cjk(*character)).count();
                chars_discarded += discarded;
                debug!(
                    original = %text,
                    stripped = %value,
                    discarded,
                    "discarded untranslated script"
                );
                Some(value)
            }
        }
    });

    StripReport {
        strings_changed,
        chars_discarded,
    }
}

pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<&str>>().join(" ")
}
