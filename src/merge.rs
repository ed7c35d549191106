use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub added: usize,
    pub skipped_duplicates: usize,
    pub skipped_without_identity: usize,
    pub dropped_identities: Vec<String>,
}

impl MergeReport {
    pub fn changed(&self) -> bool {
        self.added > 0
    }
}

pub fn merge_by_identity<T, K, I, F>(
    existing: &mut Vec<T>,
    candidates: I,
    identity: F,
) -> MergeReport
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Option<K>,
    K: Eq + Hash + Display,
{
    let mut seen = existing.iter().filter_map(&identity).collect::<HashSet<K>>();
    let mut report = MergeReport::default();

    for candidate in candidates {
        let Some(key) = identity(&candidate) else {
            report.skipped_without_identity += 1;
            continue;
        };

        if seen.contains(&key) {
            debug!(identity = %key, "dropping candidate with existing identity");
            report.dropped_identities.push(key.to_string());
            report.skipped_duplicates += 1;
            continue;
        }

        seen.insert(key);
        existing.push(candidate);
        report.added += 1;
    }

    report
}

/// Removes later records that repeat an identity; records without an identity are kept.
pub fn dedup_by_identity<T, K, F>(records: Vec<T>, identity: F) -> (Vec<T>, MergeReport)
where
    F: Fn(&T) -> Option<K>,
    K: Eq + Hash + Display,
{
    let mut kept = Vec::with_capacity(records.len());
    let mut seen = HashSet::<K>::new();
    let mut report = MergeReport::default();

    for record in records {
        match identity(&record) {
            Some(key) if seen.contains(&key) => {
                debug!(identity = %key, "dropping repeated identity");
                report.dropped_identities.push(key.to_string());
                report.skipped_duplicates += 1;
            }
            Some(key) => {
                seen.insert(key);
                kept.push(record);
            }
            None => {
                report.skipped_without_identity += 1;
                kept.push(record);
            }
        }
    }

    (kept, report)
}

pub fn module_identity(record: &Value) -> Option<String> {
    record
        .get("module_id")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
}

pub fn numeric_identity(record: &Value) -> Option<i64> {
    record.get("id").and_then(Value::as_i64)
}
