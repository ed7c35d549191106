use anyhow::{Context, Result};
use tracing::info;

use crate::cli::MergeArgs;
use crate::merge::{merge_by_identity, module_identity};
use crate::schema::{into_v2_records, v2_collection_mut};
use crate::store::Database;
use crate::util::run_id;

pub fn run(args: MergeArgs) -> Result<()> {
    let run_id = run_id("merge");
    let mut db = Database::load(&args.db.db_path)?;
    db.shape()?;

    let source = Database::load(&args.source)?;
    let source_shape = source.shape()?;
    let candidates = into_v2_records(source.root)
        .with_context(|| format!("failed to migrate {}", args.source.display()))?;

    info!(
        run_id = %run_id,
        source = %args.source.display(),
        source_shape = source_shape.as_str(),
        candidates = candidates.len(),
        "merging auxiliary database"
    );

    let collection = v2_collection_mut(&mut db.root)?;
    let report = merge_by_identity(collection, candidates, module_identity);
    info!(
        added = report.added,
        skipped_duplicates = report.skipped_duplicates,
        skipped_without_identity = report.skipped_without_identity,
        total = collection.len(),
        "merge completed"
    );

    if !report.changed() {
        return Ok(());
    }
    db.save()?;
    Ok(())
}
