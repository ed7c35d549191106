use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::cli::ExtractReportArgs;
use crate::dictionaries::builtin;
use crate::dictionary::Dictionary;
use crate::report::{FIELD_ALIASES, ReportExtractor};
use crate::schema::{active_records_mut, record_label, record_title};
use crate::store::Database;
use crate::util::run_id;

pub fn run(args: ExtractReportArgs) -> Result<()> {
    let run_id = run_id("extract-report");
    let dictionary = builtin(args.dictionary);
    let extractor = ReportExtractor::new()?;

    let mut db = Database::load(&args.db.db_path)?;
    let shape = db.shape()?;

    info!(
        run_id = %run_id,
        shape = shape.as_str(),
        dictionary = dictionary.name(),
        version = dictionary.version(),
        "report extraction requested"
    );

    let records = active_records_mut(&mut db.root)?;
    let mut changed = 0usize;
    for record in records.iter_mut() {
        let updated = enrich_record(record, &extractor, &dictionary)
            .with_context(|| format!("failed to enrich record {}", record_label(record)))?;
        if updated {
            changed += 1;
        }
    }

    info!(records = records.len(), changed, "report extraction completed");

    if changed == 0 {
        return Ok(());
    }
    db.save()?;
    Ok(())
}

/// Sets `display_title`, translates `tone` and `full_report`, and regenerates
/// `structured_report` from the untranslated report text.
pub fn enrich_record(
    record: &mut Value,
    extractor: &ReportExtractor,
    dictionary: &Dictionary,
) -> Result<bool> {
    let title = record_title(record).map(ToOwned::to_owned);
    let Some(map) = record.as_object_mut() else {
        return Ok(false);
    };

    let mut changed = false;
    if let Some(title) = title {
        changed |= set_if_changed(map, "display_title", Value::String(title));
    }

    if let Some(tone) = map.get("tone").and_then(Value::as_str) {
        let translated = dictionary.substitute(tone).into_owned();
        changed |= set_if_changed(map, "tone", Value::String(translated));
    }

    if let Some(report) = map
        .get("full_report")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
    {
        let extracted = extractor.extract(&report, dictionary);
        let fields = FIELD_ALIASES
            .iter()
            .filter(|(field, _)| extracted.get(*field).is_some())
            .count();
        debug!(fields, "extracted structured report");

        let structured =
            serde_json::to_value(extracted).context("failed to serialize structured report")?;
        changed |= set_if_changed(map, "structured_report", structured);

        let translated = dictionary.substitute(&report).into_owned();
        changed |= set_if_changed(map, "full_report", Value::String(translated));
    }

    Ok(changed)
}

fn set_if_changed(map: &mut Map<String, Value>, key: &str, value: Value) -> bool {
    if map.get(key) == Some(&value) {
        return false;
    }
    map.insert(key.to_string(), value);
    true
}
