use tracing::warn;

use crate::ascii::FontCatalog;
use crate::db::BannerStore;
use crate::error::{Error, Result};
use crate::source::{self, Origin, Resolved};

/// Add one banner per source. A failure on one source is reported and the
/// batch continues; the command only fails when nothing resolved at all.
pub fn run(
    store: &BannerStore,
    sources: &[String],
    ascii: bool,
    font: &str,
    dry_run: bool,
) -> Result<()> {
    let client = source::http_client()?;
    let catalog = ascii.then(FontCatalog::load);

    let mut added = 0usize;
    let mut failed = 0usize;

    for raw in sources {
        match prepare(&client, catalog.as_ref(), raw, font) {
            Ok(resolved) => {
                if dry_run {
                    println!("{}", resolved.text);
                    added += 1;
                    continue;
                }

                match store.create(&resolved.text) {
                    Ok(banner) => {
                        match resolved.origin {
                            Origin::File => {
                                println!("Added banner #{} from file {raw}.", banner.id)
                            }
                            Origin::Url => println!("Added banner #{} from URL {raw}.", banner.id),
                            Origin::Literal => println!("Added banner #{}.", banner.id),
                        }
                        added += 1;
                    }
                    Err(err) => {
                        warn!(source = raw.as_str(), %err, "failed to store banner");
                        eprintln!("Failed to store banner from '{raw}': {err}");
                        failed += 1;
                    }
                }
            }
            Err(err) => {
                warn!(source = raw.as_str(), %err, "failed to resolve source");
                eprintln!("Skipping '{raw}': {err}");
                failed += 1;
            }
        }
    }

    println!("{added} added, {failed} failed.");

    if added == 0 {
        Err(Error::Source("no sources resolved".to_string()))
    } else {
        Ok(())
    }
}

/// Resolve one source and optionally run it through the FIGlet renderer.
fn prepare(
    client: &reqwest::blocking::Client,
    catalog: Option<&FontCatalog>,
    raw: &str,
    font: &str,
) -> Result<Resolved> {
    let resolved = source::resolve(client, raw)?;

    match catalog {
        Some(catalog) => {
            let text = catalog.render(font, &resolved.text)?;
            Ok(Resolved {
                text,
                origin: resolved.origin,
            })
        }
        None => Ok(resolved),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_continues_past_a_failing_source() {
        let store = BannerStore::open_in_memory().unwrap();

        // The middle source names a font that does not exist, so rendering
        // fails for it while the other two persist.
        let sources = vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string(),
        ];

        let client = source::http_client().unwrap();
        let catalog = FontCatalog::load();
        let mut added = 0;
        let mut failed = 0;
        for (idx, raw) in sources.iter().enumerate() {
            let font = if idx == 1 { "no-such-font" } else { "standard" };
            match prepare(&client, Some(&catalog), raw, font) {
                Ok(resolved) => {
                    store.create(&resolved.text).unwrap();
                    added += 1;
                }
                Err(_) => failed += 1,
            }
        }

        assert_eq!(added, 2);
        assert_eq!(failed, 1);
        assert_eq!(store.count().unwrap(), 2);
    }
}
