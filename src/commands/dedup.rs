use anyhow::Result;
use serde_json::Value;
use tracing::info;

use crate::cli::DbArgs;
use crate::merge::{MergeReport, dedup_by_identity, module_identity, numeric_identity};
use crate::schema::{Shape, active_records_mut};
use crate::store::Database;

pub fn run(args: DbArgs) -> Result<()> {
    let mut db = Database::load(&args.db_path)?;
    let shape = db.shape()?;

    let records = active_records_mut(&mut db.root)?;
    let report = dedup_records(shape, records);

    info!(
        shape = shape.as_str(),
        removed = report.skipped_duplicates,
        without_identity = report.skipped_without_identity,
        remaining = records.len(),
        "dedup completed"
    );

    if report.skipped_duplicates == 0 {
        return Ok(());
    }
    db.save()?;
    Ok(())
}

pub fn dedup_records(shape: Shape, records: &mut Vec<Value>) -> MergeReport {
    let taken = std::mem::take(records);
    let (kept, report) = match shape {
        Shape::V2Keyed => dedup_by_identity(taken, module_identity),
        Shape::LegacyFlat | Shape::V1Keyed => dedup_by_identity(taken, numeric_identity),
    };
    *records = kept;
    report
}
