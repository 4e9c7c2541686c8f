//! One handler per CLI subcommand. Handlers are thin orchestration over the
//! store and models; every error is converted into a user-facing message at
//! this boundary, and batch operations keep going past per-item failures.

mod add;
mod clear;
mod delete;
mod edit;
mod export;
mod list;
mod reset;
mod search;
mod show;

use std::io::{self, BufRead, Write};

use crate::cli::Command;
use crate::db::BannerStore;
use crate::error::{Error, Result};

/// Dispatch a parsed subcommand to its handler.
pub fn run(command: Command, store: &BannerStore) -> Result<()> {
    match command {
        Command::Add {
            source,
            ascii,
            font,
            dry_run,
        } => add::run(store, &source, ascii, &font, dry_run),
        Command::Delete { id } => delete::run(store, id),
        Command::Show {
            target,
            content_only,
        } => show::run(store, &target, content_only),
        Command::Update { id, editor } => edit::run(store, id, editor.as_deref()),
        Command::Reset { id } => reset::run(store, id),
        Command::Search { keyword } => search::run(store, &keyword),
        Command::List { page, page_size } => list::run(store, page, page_size),
        Command::Export {
            single_file,
            separator,
            base_name,
            extension,
            file_path,
        } => export::run(
            store,
            single_file,
            separator.as_deref(),
            base_name.as_deref(),
            extension.as_deref(),
            file_path.as_deref(),
        ),
        Command::Clear => clear::run(store),
    }
}

/// Reject non-positive ids before any store access.
pub(crate) fn validate_id(id: i64) -> Result<i64> {
    if id <= 0 {
        Err(Error::Validation(format!(
            "invalid ID {id}: please provide a positive integer"
        )))
    } else {
        Ok(id)
    }
}

/// Ask a y/N question on the terminal. Anything other than an explicit yes
/// counts as a no.
pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_id_rejects_non_positive() {
        assert!(validate_id(0).is_err());
        assert!(validate_id(-3).is_err());
        assert_eq!(validate_id(7).unwrap(), 7);
    }
}
