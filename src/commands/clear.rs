use super::confirm;
use crate::db::BannerStore;
use crate::error::Result;

/// Delete every banner after interactive confirmation. Irreversible.
pub fn run(store: &BannerStore) -> Result<()> {
    if store.count()? == 0 {
        println!("No banners to clear.");
        return Ok(());
    }

    if !confirm("Delete ALL banners? This cannot be undone.")? {
        println!("Aborted.");
        return Ok(());
    }

    let removed = store.clear_all()?;
    println!("Cleared {removed} banners.");
    Ok(())
}
