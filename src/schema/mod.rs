use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::merge::{MergeReport, dedup_by_identity, merge_by_identity, module_identity};
use crate::model::{
    DECK_CONSISTENCY_KEY, DeckConsistencyConfig, LEGACY_COLLECTION_KEY, LegacyRecord,
    V2_COLLECTION_KEY, V1Record,
};

mod convert;
pub mod rules;

pub use convert::{MIGRATED_PREFIX, dna_from_v1, v1_from_legacy};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Shape {
    LegacyFlat,
    V1Keyed,
    V2Keyed,
}

impl Shape {
    pub fn detect(root: &Value) -> Result<Self> {
        match root {
            Value::Array(_) => Ok(Self::LegacyFlat),
            Value::Object(map) if map.contains_key(LEGACY_COLLECTION_KEY) => Ok(Self::V1Keyed),
            Value::Object(map) if map.contains_key(V2_COLLECTION_KEY) => Ok(Self::V2Keyed),
            Value::Object(_) => bail!(
                "unrecognized database shape: object has neither `{LEGACY_COLLECTION_KEY}` nor `{V2_COLLECTION_KEY}`"
            ),
            _ => bail!("unrecognized database shape: root must be an array or an object"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LegacyFlat => "legacy-flat",
            Self::V1Keyed => "v1-keyed",
            Self::V2Keyed => "v2-keyed",
        }
    }

    pub fn collection_key(self) -> Option<&'static str> {
        match self {
            Self::LegacyFlat => None,
            Self::V1Keyed => Some(LEGACY_COLLECTION_KEY),
            Self::V2Keyed => Some(V2_COLLECTION_KEY),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOutcome {
    pub from: Shape,
    pub to: Shape,
    pub steps: Vec<(Shape, Shape)>,
    pub merge: MergeReport,
    pub records: usize,
}

impl MigrationOutcome {
    pub fn changed(&self) -> bool {
        !self.steps.is_empty()
    }
}

pub fn migrate(root: Value, target: Shape) -> Result<(Value, MigrationOutcome)> {
    let from = Shape::detect(&root)?;
    let mut current = from;
    let mut root = root;
    let mut steps = Vec::new();
    let mut merge = MergeReport::default();

    while current < target {
        let next = match current {
            Shape::LegacyFlat => {
                root = legacy_to_v1(root)?;
                Shape::V1Keyed
            }
            Shape::V1Keyed => {
                let (migrated, report) = v1_to_v2(root)?;
                root = migrated;
                merge = report;
                Shape::V2Keyed
            }
            Shape::V2Keyed => break,
        };
        info!(from = current.as_str(), to = next.as_str(), "applied migration step");
        steps.push((current, next));
        current = next;
    }

    let records = active_records(&root)?.len();
    Ok((
        root,
        MigrationOutcome {
            from,
            to: current,
            steps,
            merge,
            records,
        },
    ))
}

pub fn legacy_to_v1(root: Value) -> Result<Value> {
    if root.get(LEGACY_COLLECTION_KEY).is_some() {
        debug!("database already carries the v1 collection");
        return Ok(root);
    }
    let Value::Array(items) = root else {
        bail!("legacy migration expects a flat array of records");
    };

    let mut migrated = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let record: LegacyRecord = serde_json::from_value(item)
            .with_context(|| format!("legacy record #{index} is malformed"))?;
        migrated.push(v1_from_legacy(record));
    }

    let (records, report) = dedup_by_identity(migrated, |record: &V1Record| record.id);
    if report.skipped_duplicates > 0 {
        info!(
            dropped = report.skipped_duplicates,
            "dropped legacy records with repeated ids"
        );
    }

    let mut map = Map::new();
    map.insert(
        DECK_CONSISTENCY_KEY.to_string(),
        serde_json::to_value(DeckConsistencyConfig::baseline())
            .context("failed to serialize deck consistency config")?,
    );
    map.insert(
        LEGACY_COLLECTION_KEY.to_string(),
        serde_json::to_value(records).context("failed to serialize v1 records")?,
    );
    Ok(Value::Object(map))
}

pub fn v1_to_v2(root: Value) -> Result<(Value, MergeReport)> {
    let Value::Object(mut map) = root else {
        bail!("v2 migration expects a keyed database object");
    };

    let legacy = match map.remove(LEGACY_COLLECTION_KEY) {
        Some(Value::Array(items)) => items,
        Some(_) => bail!("`{LEGACY_COLLECTION_KEY}` must be an array"),
        None => bail!("database has no `{LEGACY_COLLECTION_KEY}` collection to migrate"),
    };
    let mut existing = match map.remove(V2_COLLECTION_KEY) {
        Some(Value::Array(items)) => items,
        Some(_) => bail!("`{V2_COLLECTION_KEY}` must be an array"),
        None => Vec::new(),
    };
    let deck = map
        .remove(DECK_CONSISTENCY_KEY)
        .unwrap_or_else(|| Value::Object(Map::new()));

    let mut candidates = Vec::with_capacity(legacy.len());
    for (index, item) in legacy.into_iter().enumerate() {
        let record: V1Record = serde_json::from_value(item)
            .with_context(|| format!("v1 record #{index} is malformed"))?;
        let dna = dna_from_v1(record);
        candidates.push(
            serde_json::to_value(&dna)
                .with_context(|| format!("failed to serialize {}", dna.module_id))?,
        );
    }

    let report = merge_by_identity(&mut existing, candidates, module_identity);
    info!(
        added = report.added,
        skipped = report.skipped_duplicates,
        total = existing.len(),
        "merged migrated records into v2 collection"
    );

    let mut out = Map::new();
    out.insert(DECK_CONSISTENCY_KEY.to_string(), deck);
    out.insert(V2_COLLECTION_KEY.to_string(), Value::Array(existing));
    out.extend(map);
    Ok((Value::Object(out), report))
}

pub fn active_records(root: &Value) -> Result<&Vec<Value>> {
    let shape = Shape::detect(root)?;
    let collection = match shape.collection_key() {
        None => root,
        Some(key) => &root[key],
    };
    collection
        .as_array()
        .with_context(|| format!("{} collection is not an array", shape.as_str()))
}

pub fn active_records_mut(root: &mut Value) -> Result<&mut Vec<Value>> {
    let shape = Shape::detect(root)?;
    let collection = match shape.collection_key() {
        None => root,
        Some(key) => &mut root[key],
    };
    collection
        .as_array_mut()
        .with_context(|| format!("{} collection is not an array", shape.as_str()))
}

/// The `styles_v2` array, created on a keyed object that does not carry it yet.
pub fn v2_collection_mut(root: &mut Value) -> Result<&mut Vec<Value>> {
    let Value::Object(map) = root else {
        bail!("legacy flat database has no `{V2_COLLECTION_KEY}`; run `migrate` first");
    };
    map.entry(V2_COLLECTION_KEY)
        .or_insert_with(|| Value::Array(Vec::new()))
        .as_array_mut()
        .with_context(|| format!("`{V2_COLLECTION_KEY}` must be an array"))
}

pub fn into_v2_records(root: Value) -> Result<Vec<Value>> {
    let (migrated, _) = migrate(root, Shape::V2Keyed)?;
    match migrated {
        Value::Object(mut map) => match map.remove(V2_COLLECTION_KEY) {
            Some(Value::Array(items)) => Ok(items),
            _ => bail!("`{V2_COLLECTION_KEY}` must be an array"),
        },
        _ => bail!("v2 migration did not produce a keyed database"),
    }
}

pub fn record_label(record: &Value) -> String {
    if let Some(id) = record.get("module_id").and_then(Value::as_str) {
        return id.to_string();
    }
    match record.get("id") {
        Some(Value::Number(id)) => id.to_string(),
        Some(Value::String(id)) => id.clone(),
        _ => "unknown".to_string(),
    }
}

pub fn record_title(record: &Value) -> Option<&str> {
    ["title", "style_name"]
        .iter()
        .find_map(|key| record.get(*key).and_then(Value::as_str))
}
