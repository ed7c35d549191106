use anyhow::Result;
use tracing::info;

use crate::cli::DbArgs;
use crate::dictionaries::EN_KO_KEYWORDS;
use crate::localize::{KeywordMap, localize_elaborations};
use crate::schema::active_records_mut;
use crate::store::Database;

pub fn run(args: DbArgs) -> Result<()> {
    let mut db = Database::load(&args.db_path)?;
    let shape = db.shape()?;

    let map = KeywordMap::new(EN_KO_KEYWORDS);
    let records = active_records_mut(&mut db.root)?;
    let changed = localize_elaborations(records, &map);

    info!(
        shape = shape.as_str(),
        records = records.len(),
        changed,
        "elaboration localization completed"
    );

    if changed == 0 {
        return Ok(());
    }
    db.save()?;
    Ok(())
}
