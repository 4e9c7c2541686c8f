use super::validate_id;
use crate::db::BannerStore;
use crate::error::{Error, Result};

/// Print one banner: a specific id, or a uniformly random pick. The effective
/// text is shown unless `--content-only` asks for the raw original.
pub fn run(store: &BannerStore, target: &str, content_only: bool) -> Result<()> {
    let banner = if target.eq_ignore_ascii_case("random") {
        store.get_random()?
    } else {
        let id = target.parse::<i64>().map_err(|_| {
            Error::Validation(format!(
                "invalid target '{target}': expected a banner ID or 'random'"
            ))
        })?;
        store.get(validate_id(id)?)?
    };

    let text = if content_only {
        banner.content.as_str()
    } else {
        banner.effective_text()
    };
    println!("{text}");
    Ok(())
}
