//! The banner store. Every query lives here so the rest of the codebase can
//! stay focused on orchestration and UI state; callers receive hydrated
//! `Banner` values and typed errors rather than raw rows.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::db::connection;
use crate::error::{Error, Result};
use crate::models::Banner;

/// Wraps the single SQLite connection. The store is constructed once at
/// startup and passed by reference into every command handler and the UI;
/// there is no global connection. Dropping the store closes the connection.
pub struct BannerStore {
    conn: Connection,
}

impl BannerStore {
    /// Open the store at its default home-directory location, creating the
    /// file and schema on first run.
    pub fn open() -> Result<Self> {
        let path = connection::db_path()?;
        Self::open_at(&path)
    }

    /// Open the store at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = connection::open_at(path)?;
        Ok(Self { conn })
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        connection::ensure_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Insert a new banner with no markup override, returning the hydrated
    /// record so the caller can use the assigned id immediately.
    pub fn create(&self, content: &str) -> Result<Banner> {
        self.conn.execute(
            "INSERT INTO banners (content, markup) VALUES (?1, NULL)",
            params![content],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!(id, "created banner");
        Ok(Banner {
            id,
            content: content.to_string(),
            markup: None,
        })
    }

    /// Fetch one banner by id.
    pub fn get(&self, id: i64) -> Result<Banner> {
        self.conn
            .query_row(
                "SELECT id, content, markup FROM banners WHERE id = ?1",
                params![id],
                row_to_banner,
            )
            .optional()?
            .ok_or(Error::NotFound { id })
    }

    /// Pick one banner uniformly at random.
    pub fn get_random(&self) -> Result<Banner> {
        self.conn
            .query_row(
                "SELECT id, content, markup FROM banners ORDER BY RANDOM() LIMIT 1",
                [],
                row_to_banner,
            )
            .optional()?
            .ok_or(Error::EmptyStore)
    }

    /// One page of banners ordered by ascending id. Pages past the end come
    /// back empty rather than erroring.
    pub fn list(&self, page: u32, page_size: u32) -> Result<Vec<Banner>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, content, markup FROM banners ORDER BY id LIMIT ?1 OFFSET ?2",
        )?;

        let offset = i64::from(page) * i64::from(page_size);
        let banners = stmt
            .query_map(params![page_size, offset], row_to_banner)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(banners)
    }

    /// Every banner ordered by ascending id. Used by export and the search
    /// display; collections are human-scale.
    pub fn list_all(&self) -> Result<Vec<Banner>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, content, markup FROM banners ORDER BY id")?;

        let banners = stmt
            .query_map([], row_to_banner)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(banners)
    }

    /// Case-sensitive substring search against the original content only.
    /// `instr` keeps the match case-sensitive (SQLite `LIKE` folds ASCII
    /// case) and avoids wildcard escaping.
    pub fn search(&self, keyword: &str) -> Result<Vec<Banner>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, content, markup FROM banners
             WHERE instr(content, ?1) > 0
             ORDER BY id",
        )?;

        let banners = stmt
            .query_map(params![keyword], row_to_banner)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(banners)
    }

    /// Set or clear the markup override. We surface an explicit error when
    /// nothing was updated so callers can report a missing id instead of
    /// silently continuing.
    pub fn update_markup(&self, id: i64, markup: Option<&str>) -> Result<()> {
        let updated = self.conn.execute(
            "UPDATE banners SET markup = ?1 WHERE id = ?2",
            params![markup, id],
        )?;

        if updated == 0 {
            Err(Error::NotFound { id })
        } else {
            debug!(id, cleared = markup.is_none(), "updated banner markup");
            Ok(())
        }
    }

    /// Remove a banner row. Callers holding navigation state must refresh
    /// their cached count afterwards.
    pub fn delete(&self, id: i64) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM banners WHERE id = ?1", params![id])?;

        if deleted == 0 {
            Err(Error::NotFound { id })
        } else {
            info!(id, "deleted banner");
            Ok(())
        }
    }

    pub fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM banners", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Remove every banner, returning how many rows went away. Irreversible;
    /// the clear command confirms before calling this.
    pub fn clear_all(&self) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM banners", [])?;
        info!(removed, "cleared all banners");
        Ok(removed)
    }
}

fn row_to_banner(row: &rusqlite::Row<'_>) -> std::result::Result<Banner, rusqlite::Error> {
    Ok(Banner {
        id: row.get(0)?,
        content: row.get(1)?,
        markup: row.get(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(contents: &[&str]) -> BannerStore {
        let store = BannerStore::open_in_memory().unwrap();
        for content in contents {
            store.create(content).unwrap();
        }
        store
    }

    #[test]
    fn create_assigns_ascending_ids() {
        let store = store_with(&[]);
        let first = store.create("one").unwrap();
        let second = store.create("two").unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.markup, None);
    }

    #[test]
    fn get_missing_id_is_not_found() {
        let store = store_with(&["one"]);
        assert!(matches!(store.get(99), Err(Error::NotFound { id: 99 })));
    }

    #[test]
    fn get_random_on_empty_store_errors() {
        let store = store_with(&[]);
        assert!(matches!(store.get_random(), Err(Error::EmptyStore)));
    }

    #[test]
    fn get_random_returns_a_stored_banner() {
        let store = store_with(&["only"]);
        assert_eq!(store.get_random().unwrap().content, "only");
    }

    #[test]
    fn list_pages_by_ascending_id() {
        let store = store_with(&["a", "b", "c", "d", "e"]);

        let first = store.list(0, 2).unwrap();
        assert_eq!(
            first.iter().map(|b| b.content.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );

        let second = store.list(1, 2).unwrap();
        assert_eq!(
            second.iter().map(|b| b.content.as_str()).collect::<Vec<_>>(),
            vec!["c", "d"]
        );
    }

    #[test]
    fn list_past_the_end_is_empty() {
        let store = store_with(&["a", "b"]);
        assert!(store.list(5, 10).unwrap().is_empty());
    }

    #[test]
    fn search_is_case_sensitive_substring() {
        let store = store_with(&["foo bar", "FOO bar", "barfoobaz", "nothing"]);

        let matches = store.search("foo").unwrap();
        let contents: Vec<_> = matches.iter().map(|b| b.content.as_str()).collect();
        assert_eq!(contents, vec!["foo bar", "barfoobaz"]);
    }

    #[test]
    fn search_ignores_markup() {
        let store = store_with(&["plain"]);
        store.update_markup(1, Some("needle")).unwrap();

        assert!(store.search("needle").unwrap().is_empty());
    }

    #[test]
    fn update_markup_roundtrip_and_reset() {
        let store = store_with(&["original"]);

        store.update_markup(1, Some("override")).unwrap();
        assert_eq!(store.get(1).unwrap().effective_text(), "override");

        store.update_markup(1, None).unwrap();
        let banner = store.get(1).unwrap();
        assert_eq!(banner.markup, None);
        assert_eq!(banner.effective_text(), "original");
        assert_eq!(banner.content, "original");
    }

    #[test]
    fn update_markup_missing_id_is_not_found() {
        let store = store_with(&[]);
        assert!(matches!(
            store.update_markup(7, Some("x")),
            Err(Error::NotFound { id: 7 })
        ));
    }

    #[test]
    fn delete_removes_the_record() {
        let store = store_with(&["one", "two"]);

        store.delete(1).unwrap();
        assert!(matches!(store.get(1), Err(Error::NotFound { .. })));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn delete_missing_id_mutates_nothing() {
        let store = store_with(&["one"]);

        assert!(matches!(store.delete(42), Err(Error::NotFound { id: 42 })));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn clear_all_empties_the_store() {
        let store = store_with(&["one", "two", "three"]);

        assert_eq!(store.clear_all().unwrap(), 3);
        assert_eq!(store.count().unwrap(), 0);
    }
}
