use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use crate::cli::SynthesizeArgs;
use crate::merge::{merge_by_identity, module_identity};
use crate::schema::v2_collection_mut;
use crate::store::Database;
use crate::synth::{SEED_CATALOGUE, synthesize};
use crate::util::run_id;

pub fn run(args: SynthesizeArgs) -> Result<()> {
    let run_id = run_id("synthesize");
    let mut db = Database::load(&args.db.db_path)?;
    db.shape()?;

    let batch = synthesize(SEED_CATALOGUE, args.start_id)
        .into_iter()
        .map(|record| {
            serde_json::to_value(&record)
                .with_context(|| format!("failed to serialize {}", record.module_id))
        })
        .collect::<Result<Vec<Value>>>()?;

    info!(
        run_id = %run_id,
        start_id = args.start_id,
        synthesized = batch.len(),
        "synthesized seed catalogue"
    );

    let collection = v2_collection_mut(&mut db.root)?;
    let report = merge_by_identity(collection, batch, module_identity);
    info!(
        added = report.added,
        skipped_duplicates = report.skipped_duplicates,
        total = collection.len(),
        "merged synthesized records"
    );

    if !report.changed() {
        return Ok(());
    }
    db.save()?;
    Ok(())
}
