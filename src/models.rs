//! Domain models that mirror the SQLite schema and get passed throughout the
//! application. `Banner` is the single stored entity; `WorkingCopy` wraps a
//! loaded banner for edit flows so changes only reach the database through an
//! explicit save.

use crate::db::BannerStore;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One stored banner. `content` is the original text and never changes after
/// creation; `markup` is an optional user-edited override of what gets
/// displayed.
pub struct Banner {
    /// Primary key from the database. Edit/delete flows bubble this id back
    /// to the persistence layer.
    pub id: i64,
    /// Original text as it was added.
    pub content: String,
    /// Optional display override. `None` and `Some("")` both mean "no
    /// override".
    pub markup: Option<String>,
}

impl Banner {
    /// The text actually shown or exported: the markup override when one is
    /// present and non-empty, otherwise the original content. Every display
    /// and export site goes through this method rather than re-deriving the
    /// rule.
    pub fn effective_text(&self) -> &str {
        match self.markup.as_deref() {
            Some(markup) if !markup.is_empty() => markup,
            _ => &self.content,
        }
    }

    /// Whether a non-empty markup override is set.
    pub fn has_markup(&self) -> bool {
        self.markup.as_deref().is_some_and(|m| !m.is_empty())
    }
}

/// A transient in-memory copy of a banner being edited. The store keeps the
/// durable record; nothing here takes effect until `save` runs.
pub struct WorkingCopy {
    staged: Banner,
    persisted: Banner,
}

impl WorkingCopy {
    pub fn new(banner: Banner) -> Self {
        Self {
            staged: banner.clone(),
            persisted: banner,
        }
    }

    pub fn id(&self) -> i64 {
        self.staged.id
    }

    pub fn effective_text(&self) -> &str {
        self.staged.effective_text()
    }

    /// Stage a markup override. Empty text clears the override instead of
    /// storing an empty string.
    pub fn set_markup<S: Into<String>>(&mut self, text: S) {
        let text = text.into();
        self.staged.markup = if text.is_empty() { None } else { Some(text) };
    }

    /// True when the staged copy differs from what was last persisted.
    pub fn is_dirty(&self) -> bool {
        self.staged != self.persisted
    }

    /// Persist the staged markup when dirty. A clean save is a successful
    /// no-op; the returned flag reports whether a write happened.
    pub fn save(&mut self, store: &BannerStore) -> Result<bool> {
        if !self.is_dirty() {
            return Ok(false);
        }

        store.update_markup(self.staged.id, self.staged.markup.as_deref())?;
        self.persisted = self.staged.clone();
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner(content: &str, markup: Option<&str>) -> Banner {
        Banner {
            id: 1,
            content: content.to_string(),
            markup: markup.map(String::from),
        }
    }

    #[test]
    fn effective_text_falls_back_to_content() {
        assert_eq!(banner("hello", None).effective_text(), "hello");
        assert_eq!(banner("hello", Some("")).effective_text(), "hello");
    }

    #[test]
    fn effective_text_prefers_markup() {
        assert_eq!(banner("hello", Some("HELLO")).effective_text(), "HELLO");
    }

    #[test]
    fn working_copy_tracks_dirtiness() {
        let mut copy = WorkingCopy::new(banner("hello", None));
        assert!(!copy.is_dirty());

        copy.set_markup("HELLO");
        assert!(copy.is_dirty());
        assert_eq!(copy.effective_text(), "HELLO");
    }

    #[test]
    fn empty_markup_clears_the_override() {
        let mut copy = WorkingCopy::new(banner("hello", Some("HELLO")));
        copy.set_markup("");
        assert!(copy.is_dirty());
        assert_eq!(copy.effective_text(), "hello");
    }

    #[test]
    fn clean_save_is_a_no_op() {
        let store = BannerStore::open_in_memory().unwrap();
        let stored = store.create("hello").unwrap();

        let mut copy = WorkingCopy::new(stored);
        assert!(!copy.save(&store).unwrap());

        copy.set_markup("HELLO");
        assert!(copy.save(&store).unwrap());
        assert!(!copy.is_dirty());
        assert_eq!(store.get(copy.id()).unwrap().effective_text(), "HELLO");
    }
}
