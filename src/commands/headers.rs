use std::collections::BTreeMap;

use anyhow::Result;
use serde_json::Value;
use tracing::info;

use crate::cli::DbArgs;
use crate::report::ReportExtractor;
use crate::schema::active_records;
use crate::store::Database;

pub fn run(args: DbArgs) -> Result<()> {
    let db = Database::load(&args.db_path)?;
    let shape = db.shape()?;
    let records = active_records(&db.root)?;
    let extractor = ReportExtractor::new()?;

    let counts = count_headers(records, &extractor);
    for (header, records) in &counts {
        info!(header = %header, records, "report header");
    }

    info!(
        shape = shape.as_str(),
        records = records.len(),
        unique_headers = counts.len(),
        "header survey completed"
    );
    Ok(())
}

/// Number of records whose `full_report` uses each header.
pub fn count_headers(records: &[Value], extractor: &ReportExtractor) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for report in records
        .iter()
        .filter_map(|record| record.get("full_report").and_then(Value::as_str))
    {
        for header in extractor.headers(report) {
            *counts.entry(header).or_insert(0) += 1;
        }
    }
    counts
}
