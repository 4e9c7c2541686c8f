//! Error types shared across the store, command handlers, and UI.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("banner {id} not found")]
    NotFound { id: i64 },

    #[error("no banners stored yet")]
    EmptyStore,

    #[error("{0}")]
    Validation(String),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("could not resolve source: {0}")]
    Source(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("font error: {0}")]
    Font(String),

    #[error("editor '{0}' exited with an error")]
    Editor(String),

    #[error("configuration error: {0}")]
    Config(String),
}
