use crate::db::BannerStore;
use crate::error::Result;

/// Print every banner whose content contains the keyword.
pub fn run(store: &BannerStore, keyword: &str) -> Result<()> {
    let matches = store.search(keyword)?;

    if matches.is_empty() {
        println!("No banners match '{keyword}'.");
        return Ok(());
    }

    for banner in &matches {
        println!("ID: {}\nContent:\n{}\n---\n", banner.id, banner.content);
    }
    Ok(())
}
