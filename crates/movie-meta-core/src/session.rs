use movie_meta_models::{FavoriteItem, HistoryItem, MovieRecord};

use crate::collections::BoundedCollection;

pub const HISTORY_CAPACITY: usize = 10;
pub const FAVORITES_CAPACITY: usize = 20;

/// Per-session user state: recent searches and favorites.
///
/// Owned solely by one session, never shared, and discarded with it;
/// nothing here persists. The bounded collections are the only mutable
/// structures in the system.
pub struct Session {
    history: BoundedCollection<HistoryItem>,
    favorites: BoundedCollection<FavoriteItem>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            history: BoundedCollection::new(HISTORY_CAPACITY),
            favorites: BoundedCollection::new(FAVORITES_CAPACITY),
        }
    }

    /// Record a successful lookup in the recent-searches list.
    pub fn record_search(&mut self, record: &MovieRecord) {
        self.history.upsert_front(HistoryItem::from_record(record));
    }

    pub fn remove_from_history(&mut self, title: &str) {
        self.history.remove(title);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn history(&self) -> &[HistoryItem] {
        self.history.items()
    }

    /// Add (or refresh) a favorite. Returns true when the title was not
    /// already a favorite.
    pub fn add_favorite(&mut self, record: &MovieRecord) -> bool {
        let newly_added = !self.favorites.contains(&record.title);
        self.favorites.upsert_front(FavoriteItem::from_record(record));
        newly_added
    }

    pub fn remove_favorite(&mut self, title: &str) {
        self.favorites.remove(title);
    }

    pub fn is_favorite(&self, title: &str) -> bool {
        self.favorites.contains(title)
    }

    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
    }

    pub fn favorites(&self) -> &[FavoriteItem] {
        self.favorites.items()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(title: &str) -> MovieRecord {
        serde_json::from_value(json!({
            "Title": title,
            "Year": "2010",
            "Poster": "https://example.com/p.jpg",
            "imdbRating": "8.8",
            "imdbID": "tt1375666"
        }))
        .unwrap()
    }

    #[test]
    fn test_history_keeps_most_recent_first_and_caps_at_ten() {
        let mut session = Session::new();
        for i in 0..=HISTORY_CAPACITY {
            session.record_search(&record(&format!("Movie {}", i)));
        }

        assert_eq!(session.history().len(), HISTORY_CAPACITY);
        assert_eq!(session.history()[0].title, "Movie 10");
        // The first search fell off the back.
        assert!(session.history().iter().all(|h| h.title != "Movie 0"));
    }

    #[test]
    fn test_repeat_search_moves_to_front() {
        let mut session = Session::new();
        session.record_search(&record("Inception"));
        session.record_search(&record("Arrival"));
        session.record_search(&record("inception"));

        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].title, "inception");
    }

    #[test]
    fn test_favorite_round_trip() {
        let mut session = Session::new();
        let inception = record("Inception");

        assert!(session.add_favorite(&inception));
        assert!(session.is_favorite("inception"));
        // Re-adding is idempotent on membership.
        assert!(!session.add_favorite(&inception));
        assert_eq!(session.favorites().len(), 1);
        assert_eq!(session.favorites()[0].rating, "8.8");

        session.remove_favorite("INCEPTION");
        assert!(!session.is_favorite("Inception"));
        // Removing again is a no-op, not an error.
        session.remove_favorite("Inception");
    }

    #[test]
    fn test_clear_operations() {
        let mut session = Session::new();
        session.record_search(&record("Inception"));
        session.add_favorite(&record("Arrival"));

        session.clear_history();
        session.clear_favorites();

        assert!(session.history().is_empty());
        assert!(session.favorites().is_empty());
    }
}
