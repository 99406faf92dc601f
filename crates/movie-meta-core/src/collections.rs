use movie_meta_models::{FavoriteItem, HistoryItem};

/// Normalize a uniqueness key (trim, lowercase).
pub(crate) fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Items that carry a collection uniqueness key.
pub trait Keyed {
    fn key(&self) -> String;
}

impl Keyed for HistoryItem {
    fn key(&self) -> String {
        normalize_key(&self.title)
    }
}

impl Keyed for FavoriteItem {
    fn key(&self) -> String {
        normalize_key(&self.title)
    }
}

/// Fixed-capacity, insertion-ordered list that de-duplicates by key.
///
/// Re-adding an existing key moves the item to the front with fresh
/// attributes (most-recently-used semantics); the oldest items fall off
/// the back when capacity is exceeded.
#[derive(Debug, Clone)]
pub struct BoundedCollection<T: Keyed> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Keyed> BoundedCollection<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Remove any item sharing `item`'s key, insert `item` at the front,
    /// then truncate to capacity.
    pub fn upsert_front(&mut self, item: T) {
        let key = item.key();
        self.items.retain(|existing| existing.key() != key);
        self.items.insert(0, item);
        self.items.truncate(self.capacity);
    }

    /// Remove the item with this key; a no-op when absent.
    pub fn remove(&mut self, key: &str) {
        let key = normalize_key(key);
        self.items.retain(|existing| existing.key() != key);
    }

    pub fn contains(&self, key: &str) -> bool {
        let key = normalize_key(key);
        self.items.iter().any(|existing| existing.key() == key)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        name: String,
        marker: u32,
    }

    impl Keyed for Entry {
        fn key(&self) -> String {
            normalize_key(&self.name)
        }
    }

    fn entry(name: &str, marker: u32) -> Entry {
        Entry {
            name: name.to_string(),
            marker,
        }
    }

    #[test]
    fn test_capacity_evicts_oldest_from_the_back() {
        let mut collection = BoundedCollection::new(10);
        for i in 0..11 {
            collection.upsert_front(entry(&format!("movie-{}", i), i));
        }

        assert_eq!(collection.len(), 10);
        // Newest at the front, first-inserted item evicted.
        assert_eq!(collection.items()[0].name, "movie-10");
        assert!(!collection.contains("movie-0"));
        assert!(collection.contains("movie-1"));
    }

    #[test]
    fn test_duplicate_key_moves_to_front_without_growing() {
        let mut collection = BoundedCollection::new(10);
        collection.upsert_front(entry("Inception", 1));
        collection.upsert_front(entry("Arrival", 2));
        collection.upsert_front(entry("Inception", 3));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.items()[0].name, "Inception");
        // Re-add carries fresh attributes.
        assert_eq!(collection.items()[0].marker, 3);
    }

    #[test]
    fn test_keys_compare_case_insensitively() {
        let mut collection = BoundedCollection::new(10);
        collection.upsert_front(entry("Inception", 1));
        collection.upsert_front(entry("INCEPTION", 2));

        assert_eq!(collection.len(), 1);
        assert!(collection.contains("inception"));

        collection.remove("InCePtIoN");
        assert!(collection.is_empty());
    }

    #[test]
    fn test_remove_missing_key_is_a_noop() {
        let mut collection = BoundedCollection::new(10);
        collection.upsert_front(entry("Inception", 1));
        collection.remove("Arrival");

        assert_eq!(collection.len(), 1);
    }
}
