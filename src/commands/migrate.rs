use anyhow::Result;
use tracing::info;

use crate::cli::MigrateArgs;
use crate::schema;
use crate::store::Database;
use crate::util::run_id;

pub fn run(args: MigrateArgs) -> Result<()> {
    let run_id = run_id("migrate");
    let mut db = Database::load(&args.db.db_path)?;
    let target = args.to.shape();

    info!(
        run_id = %run_id,
        path = %db.path.display(),
        to = target.as_str(),
        "migration requested"
    );

    let root = std::mem::take(&mut db.root);
    let (root, outcome) = schema::migrate(root, target)?;
    db.root = root;

    if !outcome.changed() {
        info!(
            shape = outcome.from.as_str(),
            records = outcome.records,
            "database already at or past target; nothing to do"
        );
        return Ok(());
    }

    info!(
        from = outcome.from.as_str(),
        to = outcome.to.as_str(),
        steps = outcome.steps.len(),
        records = outcome.records,
        added = outcome.merge.added,
        skipped_duplicates = outcome.merge.skipped_duplicates,
        "migration completed"
    );

    db.save()?;
    Ok(())
}
