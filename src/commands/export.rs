use std::fs;

use tracing::warn;

use crate::db::BannerStore;
use crate::error::{Error, Result};
use crate::models::Banner;

/// Separator written after each banner in single-file mode.
const DEFAULT_SEPARATOR: &str = "\n---\n";
/// Base name for per-banner files.
const DEFAULT_BASE_NAME: &str = "banner";
/// Extension for per-banner files.
const DEFAULT_EXTENSION: &str = "txt";

/// Export every banner: either concatenated into one file, or one numbered
/// file per banner. Both modes write the effective text, so markup overrides
/// survive the round trip.
pub fn run(
    store: &BannerStore,
    single_file: bool,
    separator: Option<&str>,
    base_name: Option<&str>,
    extension: Option<&str>,
    file_path: Option<&str>,
) -> Result<()> {
    let banners = store.list_all()?;

    if single_file {
        let path = file_path.ok_or_else(|| {
            Error::Validation("an output file path is required with --single-file".to_string())
        })?;
        let separator = separator.unwrap_or(DEFAULT_SEPARATOR);

        fs::write(path, render_single_file(&banners, separator))?;
        println!("Exported {} banners to {path}.", banners.len());
        return Ok(());
    }

    let base_name = base_name.unwrap_or(DEFAULT_BASE_NAME);
    let extension = extension.unwrap_or(DEFAULT_EXTENSION);

    let mut failed = 0usize;
    for (i, banner) in banners.iter().enumerate() {
        let name = file_name(base_name, i + 1, extension);
        match fs::write(&name, banner.effective_text()) {
            Ok(()) => println!("Banner {} exported to {name}.", i + 1),
            Err(err) => {
                warn!(file = name.as_str(), %err, "failed to write export file");
                eprintln!("Failed to write {name}: {err}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        println!(
            "Exported {} banners, {failed} failed.",
            banners.len() - failed
        );
    }
    Ok(())
}

/// Concatenate every banner's effective text, writing the separator after
/// each record, the last one included.
fn render_single_file(banners: &[Banner], separator: &str) -> String {
    let mut out = String::new();
    for banner in banners {
        out.push_str(banner.effective_text());
        out.push_str(separator);
    }
    out
}

/// Per-banner file name, numbered from 1.
fn file_name(base_name: &str, index: usize, extension: &str) -> String {
    format!("{base_name}_{index}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner(id: i64, content: &str, markup: Option<&str>) -> Banner {
        Banner {
            id,
            content: content.to_string(),
            markup: markup.map(String::from),
        }
    }

    #[test]
    fn single_file_writes_separator_after_every_record() {
        let banners = vec![banner(1, "A", None), banner(2, "B", None)];
        assert_eq!(render_single_file(&banners, "-"), "A-B-");
    }

    #[test]
    fn single_file_respects_markup_overrides() {
        let banners = vec![banner(1, "plain", Some("fancy")), banner(2, "B", None)];
        assert_eq!(render_single_file(&banners, "\n"), "fancy\nB\n");
    }

    #[test]
    fn per_banner_files_number_from_one() {
        assert_eq!(file_name("banner", 1, "txt"), "banner_1.txt");
        assert_eq!(file_name("my_banner", 12, "md"), "my_banner_12.md");
    }

    #[test]
    fn multi_file_export_writes_each_banner() {
        let store = BannerStore::open_in_memory().unwrap();
        store.create("first").unwrap();
        store.create("second").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("banner");
        run(
            &store,
            false,
            None,
            Some(base.to_str().unwrap()),
            None,
            None,
        )
        .unwrap();

        let first = fs::read_to_string(dir.path().join("banner_1.txt")).unwrap();
        let second = fs::read_to_string(dir.path().join("banner_2.txt")).unwrap();
        assert_eq!(first, "first");
        assert_eq!(second, "second");
    }
}
