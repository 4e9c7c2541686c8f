use super::{confirm, validate_id};
use crate::db::BannerStore;
use crate::error::Result;

/// Delete one banner after interactive confirmation. Declining is a
/// successful no-op.
pub fn run(store: &BannerStore, id: i64) -> Result<()> {
    let id = validate_id(id)?;

    // Surface a missing id before prompting.
    store.get(id)?;

    if !confirm(&format!("Delete banner #{id}? This cannot be undone."))? {
        println!("Aborted.");
        return Ok(());
    }

    store.delete(id)?;
    println!("Banner #{id} deleted.");
    Ok(())
}
