use crate::db::BannerStore;
use crate::error::Result;
use crate::models::Banner;

/// Navigation state for the single-banner-at-a-time view. The cursor indexes
/// the id-ascending ordering of all records and always wraps at both ends.
pub struct Carousel {
    index: usize,
    total: usize,
}

impl Carousel {
    pub fn new() -> Self {
        Self { index: 0, total: 0 }
    }

    /// Move to the next banner, wrapping from the last back to the first.
    pub fn advance(&mut self) {
        if self.total == 0 {
            return;
        }
        self.index = if self.index + 1 >= self.total {
            0
        } else {
            self.index + 1
        };
    }

    /// Move to the previous banner, wrapping from the first to the last.
    pub fn retreat(&mut self) {
        if self.total == 0 {
            return;
        }
        self.index = if self.index == 0 {
            self.total - 1
        } else {
            self.index - 1
        };
    }

    /// Jump to the last banner. Used after an add so the new banner shows.
    pub fn focus_last(&mut self) {
        self.index = self.total.saturating_sub(1);
    }

    /// Re-fetch the count and the banner under the cursor. The index is
    /// clamped back into range when the previously shown record was deleted;
    /// an empty store yields `None`.
    pub fn refresh(&mut self, store: &BannerStore) -> Result<Option<Banner>> {
        self.total = store.count()? as usize;

        if self.total == 0 {
            self.index = 0;
            return Ok(None);
        }

        if self.index >= self.total {
            self.index = self.total - 1;
        }

        // The cursor is a page of size one.
        let mut page = store.list(self.index as u32, 1)?;
        Ok(page.pop())
    }

    /// One-based position and total for the title bar.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.total)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
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
    fn advance_wraps_to_the_first_banner() {
        let store = store_with(&["a", "b", "c"]);
        let mut carousel = Carousel::new();
        carousel.refresh(&store).unwrap();

        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.position(), (3, 3));

        carousel.advance();
        assert_eq!(carousel.position(), (1, 3));
    }

    #[test]
    fn retreat_wraps_to_the_last_banner() {
        let store = store_with(&["a", "b", "c"]);
        let mut carousel = Carousel::new();
        carousel.refresh(&store).unwrap();

        carousel.retreat();
        assert_eq!(carousel.position(), (3, 3));
    }

    #[test]
    fn refresh_fetches_the_banner_under_the_cursor() {
        let store = store_with(&["a", "b", "c"]);
        let mut carousel = Carousel::new();

        carousel.refresh(&store).unwrap();
        carousel.advance();
        let banner = carousel.refresh(&store).unwrap().unwrap();
        assert_eq!(banner.content, "b");
    }

    #[test]
    fn refresh_clamps_after_tail_delete() {
        let store = store_with(&["a", "b", "c"]);
        let mut carousel = Carousel::new();
        carousel.refresh(&store).unwrap();
        carousel.focus_last();

        store.delete(3).unwrap();
        let banner = carousel.refresh(&store).unwrap().unwrap();
        assert_eq!(banner.content, "b");
        assert_eq!(carousel.position(), (2, 2));
    }

    #[test]
    fn empty_store_shows_nothing() {
        let store = store_with(&[]);
        let mut carousel = Carousel::new();

        assert!(carousel.refresh(&store).unwrap().is_none());
        assert!(carousel.is_empty());

        // Navigation on an empty carousel is a no-op.
        carousel.advance();
        carousel.retreat();
        assert_eq!(carousel.position(), (1, 0));
    }
}
