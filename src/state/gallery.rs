//! Gallery filtering and lightbox state
//!
//! The filter partitions items into visible and hidden; the animation is the
//! UI layer's business, here it is just a visibility predicate. The lightbox
//! navigates the full item list with wraparound and ignores input while
//! closed.

/// Filter value that shows every item
pub const FILTER_ALL: &str = "all";

/// One gallery entry
#[derive(Debug, Clone)]
pub struct GalleryItem {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl GalleryItem {
    pub fn new(title: &str, description: &str, category: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct GalleryState {
    items: Vec<GalleryItem>,
    filter: String,
    /// Cursor position within the visible items
    cursor: usize,
    /// Open lightbox item index into the full item list
    lightbox: Option<usize>,
}

impl GalleryState {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items,
            filter: FILTER_ALL.to_string(),
            cursor: 0,
            lightbox: None,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Distinct categories in item order, used for the filter bar.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(item.category.as_str());
            }
        }
        seen
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.items
            .get(index)
            .is_some_and(|item| self.filter == FILTER_ALL || self.filter == item.category)
    }

    /// Indices of items visible under the current filter.
    pub fn visible_indices(&self) -> Vec<usize> {
        (0..self.items.len())
            .filter(|&i| self.is_visible(i))
            .collect()
    }

    /// Select a filter and reset the cursor to the first visible item.
    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
        self.cursor = 0;
    }

    /// Cycle the filter bar: all → each category → all.
    pub fn cycle_filter(&mut self) {
        let categories = self
            .categories()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        let next = if self.filter == FILTER_ALL {
            categories.first().cloned()
        } else {
            let position = categories.iter().position(|c| *c == self.filter);
            position.and_then(|p| categories.get(p + 1).cloned())
        };
        self.set_filter(next.as_deref().unwrap_or(FILTER_ALL));
    }

    pub fn cursor_next(&mut self) {
        let visible = self.visible_indices();
        if !visible.is_empty() {
            self.cursor = (self.cursor + 1) % visible.len();
        }
    }

    pub fn cursor_prev(&mut self) {
        let visible = self.visible_indices();
        if !visible.is_empty() {
            self.cursor = if self.cursor == 0 {
                visible.len() - 1
            } else {
                self.cursor - 1
            };
        }
    }

    /// Open the lightbox on the item under the cursor.
    pub fn open_lightbox(&mut self) {
        if let Some(&index) = self.visible_indices().get(self.cursor) {
            self.lightbox = Some(index);
        }
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }

    pub fn lightbox_item(&self) -> Option<&GalleryItem> {
        self.lightbox.and_then(|i| self.items.get(i))
    }

    /// Step to the next item. No effect while the lightbox is closed. The
    /// lightbox walks the full item list, not the filtered subset.
    pub fn lightbox_next(&mut self) {
        if let Some(index) = self.lightbox {
            self.lightbox = Some(if index + 1 >= self.items.len() {
                0
            } else {
                index + 1
            });
        }
    }

    /// Step to the previous item. No effect while the lightbox is closed.
    pub fn lightbox_prev(&mut self) {
        if let Some(index) = self.lightbox {
            self.lightbox = Some(if index == 0 {
                self.items.len() - 1
            } else {
                index - 1
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> GalleryState {
        GalleryState::new(vec![
            GalleryItem::new("Classroom", "New school wing", "education"),
            GalleryItem::new("Clinic day", "Free checkups", "health"),
            GalleryItem::new("Book drive", "Community library", "education"),
            GalleryItem::new("Fun run", "Annual 5k", "events"),
        ])
    }

    mod filtering {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn default_filter_shows_everything() {
            let g = gallery();
            assert_eq!(g.filter(), FILTER_ALL);
            assert_eq!(g.visible_indices(), vec![0, 1, 2, 3]);
        }

        #[test]
        fn category_filter_partitions_items() {
            let mut g = gallery();
            g.set_filter("education");
            assert_eq!(g.visible_indices(), vec![0, 2]);
            assert!(!g.is_visible(1));
            assert!(!g.is_visible(3));
        }

        #[test]
        fn unknown_category_hides_everything() {
            let mut g = gallery();
            g.set_filter("nope");
            assert!(g.visible_indices().is_empty());
        }

        #[test]
        fn set_filter_resets_the_cursor() {
            let mut g = gallery();
            g.cursor_next();
            g.cursor_next();
            g.set_filter("health");
            assert_eq!(g.cursor(), 0);
        }

        #[test]
        fn categories_are_distinct_and_ordered() {
            let g = gallery();
            assert_eq!(g.categories(), vec!["education", "health", "events"]);
        }

        #[test]
        fn cycle_filter_walks_all_then_categories_then_all() {
            let mut g = gallery();
            g.cycle_filter();
            assert_eq!(g.filter(), "education");
            g.cycle_filter();
            assert_eq!(g.filter(), "health");
            g.cycle_filter();
            assert_eq!(g.filter(), "events");
            g.cycle_filter();
            assert_eq!(g.filter(), FILTER_ALL);
        }
    }

    mod lightbox {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn opens_on_the_item_under_the_cursor() {
            let mut g = gallery();
            g.set_filter("education");
            g.cursor_next(); // second visible item = index 2
            g.open_lightbox();
            assert_eq!(g.lightbox_item().unwrap().title, "Book drive");
        }

        #[test]
        fn navigation_wraps_over_the_full_item_list() {
            let mut g = gallery();
            g.set_filter("education");
            g.open_lightbox(); // index 0
            g.lightbox_prev();
            assert_eq!(g.lightbox_item().unwrap().title, "Fun run");
            g.lightbox_next();
            assert_eq!(g.lightbox_item().unwrap().title, "Classroom");
        }

        #[test]
        fn navigation_is_ignored_while_closed() {
            let mut g = gallery();
            g.lightbox_next();
            g.lightbox_prev();
            assert!(!g.is_lightbox_open());
            assert!(g.lightbox_item().is_none());
        }

        #[test]
        fn close_is_idempotent() {
            let mut g = gallery();
            g.open_lightbox();
            g.close_lightbox();
            g.close_lightbox();
            assert!(!g.is_lightbox_open());
        }

        #[test]
        fn open_with_empty_visible_set_is_a_no_op() {
            let mut g = gallery();
            g.set_filter("nope");
            g.open_lightbox();
            assert!(!g.is_lightbox_open());
        }
    }

    mod cursor {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn cursor_wraps_over_visible_items() {
            let mut g = gallery();
            g.set_filter("education");
            g.cursor_next();
            g.cursor_next();
            assert_eq!(g.cursor(), 0);
            g.cursor_prev();
            assert_eq!(g.cursor(), 1);
        }
    }
}
