use serde_json::Value;

use crate::schema::MIGRATED_PREFIX;

pub struct KeywordMap<'a> {
    entries: &'a [(&'a str, &'a str)],
}

impl<'a> KeywordMap<'a> {
    pub fn new(entries: &'a [(&'a str, &'a str)]) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, token: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(source, _)| *source == token)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(source, _)| source.eq_ignore_ascii_case(token))
            })
            .map(|(_, target)| *target)
    }

    pub fn localize_list(&self, text: &str) -> Option<String> {
        let body = text.strip_prefix(MIGRATED_PREFIX).unwrap_or(text);
        let mut changed = body.len() != text.len();

        let tokens = body
            .split(',')
            .map(|token| {
                let token = token.trim();
                match self.lookup(token) {
                    Some(target) => {
                        changed = true;
                        target.to_string()
                    }
                    None => token.to_string(),
                }
            })
            .collect::<Vec<String>>();

        let joined = tokens.join(", ");
        (changed && joined != text).then_some(joined)
    }
}

/// Localizes the `elaboration` field of every record; returns how many records changed.
pub fn localize_elaborations(records: &mut [Value], map: &KeywordMap<'_>) -> usize {
    let mut changed = 0;
    for record in records.iter_mut() {
        let Some(Value::String(elaboration)) = record.get_mut("elaboration") else {
            continue;
        };
        if let Some(localized) = map.localize_list(elaboration) {
            *elaboration = localized;
            changed += 1;
        }
    }
    changed
}
