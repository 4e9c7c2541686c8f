use super::validate_id;
use crate::db::BannerStore;
use crate::error::Result;

/// Clear a banner's markup override so display reverts to the original
/// content. The content itself is never touched.
pub fn run(store: &BannerStore, id: i64) -> Result<()> {
    let id = validate_id(id)?;
    store.update_markup(id, None)?;
    println!("Markup of banner #{id} has been reset to its original content.");
    Ok(())
}
