//! FIGlet rendering for the `add --ascii` flow. The bundled standard font is
//! always available; extra `.flf` fonts dropped into the application data
//! directory are picked up by name.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use figlet_rs::FIGfont;

use crate::db::data_dir;
use crate::error::{Error, Result};

/// Font name that selects a random catalog entry per rendering.
pub const RANDOM_FONT: &str = "random";

/// Directory beneath the application data dir scanned for `.flf` files.
const FONTS_DIR_NAME: &str = "fonts";

struct FontEntry {
    name: String,
    source: FontSource,
}

enum FontSource {
    Standard,
    File(PathBuf),
}

impl FontEntry {
    fn load(&self) -> Result<FIGfont> {
        match &self.source {
            FontSource::Standard => FIGfont::standard().map_err(Error::Font),
            FontSource::File(path) => {
                let path = path
                    .to_str()
                    .ok_or_else(|| Error::Font(format!("non-UTF-8 font path: {path:?}")))?;
                FIGfont::from_file(path).map_err(Error::Font)
            }
        }
    }
}

/// The set of fonts available for rendering. Loaded once per add batch;
/// the underlying font files are parsed lazily per use.
pub struct FontCatalog {
    entries: Vec<FontEntry>,
}

impl FontCatalog {
    /// Build the catalog: the bundled standard font plus any `.flf` files in
    /// the fonts directory. A missing or unreadable directory just means the
    /// standard font is the whole catalog.
    pub fn load() -> Self {
        let mut entries = vec![FontEntry {
            name: "standard".to_string(),
            source: FontSource::Standard,
        }];

        if let Ok(dir) = data_dir() {
            let fonts_dir = dir.join(FONTS_DIR_NAME);
            if let Ok(listing) = fs::read_dir(&fonts_dir) {
                for entry in listing.flatten() {
                    let path = entry.path();
                    if path.extension().is_none_or(|ext| ext != "flf") {
                        continue;
                    }
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        entries.push(FontEntry {
                            name: stem.to_string(),
                            source: FontSource::File(path.clone()),
                        });
                    }
                }
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { entries }
    }

    /// Names of every available font, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Render `text` with the named font, or with a randomly chosen catalog
    /// entry when the name is `random`.
    pub fn render(&self, font_name: &str, text: &str) -> Result<String> {
        let entry = if font_name == RANDOM_FONT {
            &self.entries[random_index(self.entries.len())]
        } else {
            self.entries
                .iter()
                .find(|e| e.name == font_name)
                .ok_or_else(|| Error::Font(format!("unknown font '{font_name}'")))?
        };

        let font = entry.load()?;
        let figure = font.convert(text).ok_or_else(|| {
            Error::Font(format!("could not render text with font '{}'", entry.name))
        })?;
        Ok(figure.to_string())
    }
}

/// Clock-seeded index for random font selection. Good enough for picking a
/// decoration; record selection randomness lives in SQL.
fn random_index(len: usize) -> usize {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    nanos as usize % len.max(1)
}
