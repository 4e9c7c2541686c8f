use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use rusqlite::Connection;

use crate::error::{Error, Result};

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".banner-manager";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "banners.sqlite";
/// Environment override for the full database path, used by tests and
/// scripting.
const DB_PATH_ENV: &str = "BANNER_DB";

/// Resolve the application data directory inside the user's home. Extra
/// FIGlet fonts live here next to the database.
pub(crate) fn data_dir() -> Result<PathBuf> {
    let base_dirs =
        BaseDirs::new().ok_or_else(|| Error::Config("could not locate home directory".into()))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}

/// Resolve the absolute path to the SQLite database, honoring the `BANNER_DB`
/// override.
pub fn db_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(data_dir()?.join(DB_FILE_NAME))
}

/// Open the database file, creating its parent directory and schema when
/// missing, and return a live connection.
pub(crate) fn open_at(path: &std::path::Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Run lazy migrations. The single `banners` table keeps the original text in
/// `content` and the nullable display override in `markup`.
pub(crate) fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS banners (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content TEXT NOT NULL,
            markup TEXT
        )",
        [],
    )?;

    Ok(())
}
