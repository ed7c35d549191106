use anyhow::Result;
use tracing::info;

use crate::cli::DbArgs;
use crate::residual::strip_document;
use crate::store::Database;

pub fn run(args: DbArgs) -> Result<()> {
    let mut db = Database::load(&args.db_path)?;
    let shape = db.shape()?;

    let report = strip_document(&mut db.root);
    info!(
        shape = shape.as_str(),
        strings_changed = report.strings_changed,
        chars_discarded = report.chars_discarded,
        "residual strip completed"
    );

    if report.strings_changed == 0 {
        return Ok(());
    }
    db.save()?;
    Ok(())
}
