use crate::db::BannerStore;
use crate::error::Result;

/// Print one page of banners, id-ascending, using the effective text.
pub fn run(store: &BannerStore, page: u32, page_size: u32) -> Result<()> {
    let banners = store.list(page, page_size)?;

    if banners.is_empty() {
        println!("No banners on page {page}.");
        return Ok(());
    }

    for banner in &banners {
        println!(
            "ID: {}\nContent:\n{}\n---\n",
            banner.id,
            banner.effective_text()
        );
    }
    Ok(())
}
