use std::env;
use std::fs;
use std::io::Write;
use std::process;

use tempfile::NamedTempFile;

use super::validate_id;
use crate::db::BannerStore;
use crate::error::{Error, Result};
use crate::models::WorkingCopy;

/// Editor used when neither `--editor` nor `$EDITOR` is set.
const FALLBACK_EDITOR: &str = "vim";

/// Open the banner's effective text in an external editor and save the result
/// as the markup override. Blocks until the editor exits.
pub fn run(store: &BannerStore, id: i64, editor: Option<&str>) -> Result<()> {
    let id = validate_id(id)?;
    let mut copy = WorkingCopy::new(store.get(id)?);

    let editor = editor
        .map(String::from)
        .or_else(|| env::var("EDITOR").ok())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string());

    let mut file = NamedTempFile::new()?;
    file.write_all(copy.effective_text().as_bytes())?;
    file.flush()?;

    let status = process::Command::new(&editor).arg(file.path()).status()?;
    if !status.success() {
        return Err(Error::Editor(editor));
    }

    let edited = fs::read_to_string(file.path())?;
    copy.set_markup(edited);

    if copy.save(store)? {
        println!("Banner #{id} updated.");
    } else {
        println!("Banner #{id} unchanged.");
    }
    Ok(())
}
