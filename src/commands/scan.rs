use std::collections::BTreeSet;

use anyhow::Result;
use serde_json::Value;
use tracing::{info, warn};

use crate::cli::DbArgs;
use crate::schema::{active_records, record_label, record_title};
use crate::script::cjk_chars;
use crate::store::Database;
use crate::visit::for_each_string;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidualFinding {
    pub label: String,
    pub title: String,
    pub strings: usize,
    pub chars: BTreeSet<char>,
}

pub fn run(args: DbArgs) -> Result<()> {
    let db = Database::load(&args.db_path)?;
    let shape = db.shape()?;
    let records = active_records(&db.root)?;

    let findings = records
        .iter()
        .filter_map(scan_record)
        .collect::<Vec<ResidualFinding>>();

    for finding in &findings {
        warn!(
            record = %finding.label,
            title = %finding.title,
            strings = finding.strings,
            chars = %finding.chars.iter().collect::<String>(),
            "residual CJK text"
        );
    }

    info!(
        shape = shape.as_str(),
        records = records.len(),
        with_residual = findings.len(),
        "scan completed"
    );
    Ok(())
}

pub fn scan_record(record: &Value) -> Option<ResidualFinding> {
    let mut strings = 0usize;
    let mut chars = BTreeSet::new();
    for_each_string(record, &mut |text| {
        let found = cjk_chars(text);
        if !found.is_empty() {
            strings += 1;
            chars.extend(found);
        }
    });

    if strings == 0 {
        return None;
    }
    Some(ResidualFinding {
        label: record_label(record),
        title: record_title(record).unwrap_or_default().to_string(),
        strings,
        chars,
    })
}
