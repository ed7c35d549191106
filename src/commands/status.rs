use anyhow::Result;
use serde_json::Value;
use tracing::{info, warn};

use crate::cli::DbArgs;
use crate::model::{DECK_CONSISTENCY_KEY, V2_COLLECTION_KEY};
use crate::schema::{Shape, active_records};
use crate::store::Database;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseStatus {
    pub shape: Shape,
    pub records: usize,
    pub staged_v2_records: usize,
    pub has_deck_consistency: bool,
    pub with_structured_report: usize,
}

pub fn run(args: DbArgs) -> Result<()> {
    info!(path = %args.db_path.display(), "status requested");

    let db = Database::load(&args.db_path)?;
    let status = summarize(&db.root)?;

    info!(
        shape = status.shape.as_str(),
        records = status.records,
        staged_v2_records = status.staged_v2_records,
        deck_consistency = status.has_deck_consistency,
        with_structured_report = status.with_structured_report,
        "database status"
    );

    if !status.has_deck_consistency && status.shape != Shape::LegacyFlat {
        warn!(path = %db.path.display(), "deck consistency config missing");
    }
    Ok(())
}

pub fn summarize(root: &Value) -> Result<DatabaseStatus> {
    let shape = Shape::detect(root)?;
    let records = active_records(root)?;

    let staged_v2_records = match shape {
        Shape::V1Keyed => root
            .get(V2_COLLECTION_KEY)
            .and_then(Value::as_array)
            .map_or(0, Vec::len),
        Shape::LegacyFlat | Shape::V2Keyed => 0,
    };

    Ok(DatabaseStatus {
        shape,
        records: records.len(),
        staged_v2_records,
        has_deck_consistency: root.get(DECK_CONSISTENCY_KEY).is_some(),
        with_structured_report: records
            .iter()
            .filter(|record| record.get("structured_report").is_some())
            .count(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::summarize;
    use crate::schema::Shape;

    #[test]
    fn summarize_reports_transitional_v1_database() {
        let root = json!({
            "deck_consistency": {"global_rule": "one anchor motif"},
            "styles_001_100": [{"id": 1, "structured_report": {}}, {"id": 2}],
            "styles_v2": [{"module_id": "DNA_001"}]
        });

        let status = summarize(&root).expect("status");
        assert_eq!(status.shape, Shape::V1Keyed);
        assert_eq!(status.records, 2);
        assert_eq!(status.staged_v2_records, 1);
        assert!(status.has_deck_consistency);
        assert_eq!(status.with_structured_report, 1);
    }

    #[test]
    fn summarize_handles_legacy_array() {
        let status = summarize(&json!([{"id": 1}])).expect("status");
        assert_eq!(status.shape, Shape::LegacyFlat);
        assert_eq!(status.records, 1);
        assert!(!status.has_deck_consistency);
    }
}
