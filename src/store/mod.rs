//! Owner of the committed diary-entry collection.
//!
//! The store holds entries in save order and is the only component that
//! mutates them. All operations are synchronous and atomic from the caller's
//! perspective; the workflow (and the favorite/delete triggers it exposes)
//! are the store's only writers.

use crate::entry::{DiaryEntry, EntryId};
use crate::errors::StoreError;
use tracing::debug;

/// The ordered collection of committed diary entries.
///
/// Insertion order is save order; derived views (favorites, most recent) are
/// computed from the same sequence so they can never disagree with it.
///
/// # Examples
///
/// ```
/// use wander::store::EntryStore;
///
/// let store = EntryStore::new();
/// assert!(store.is_empty());
/// assert!(store.most_recent().is_none());
/// ```
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<DiaryEntry>,
}

impl EntryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a committed entry to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateIdentifier` if an entry with the same
    /// identifier is already present. Identifier generation should make this
    /// impossible; hitting it means the generation invariant is broken.
    pub fn append(&mut self, entry: DiaryEntry) -> Result<(), StoreError> {
        if self.entries.iter().any(|e| e.id == entry.id) {
            return Err(StoreError::DuplicateIdentifier(entry.id));
        }
        debug!(id = %entry.id, "entry appended");
        self.entries.push(entry);
        Ok(())
    }

    /// Removes the entry with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no entry has that identifier; the
    /// collection is left unchanged.
    pub fn remove(&mut self, id: EntryId) -> Result<(), StoreError> {
        let position = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.entries.remove(position);
        debug!(%id, "entry removed");
        Ok(())
    }

    /// Flips the favorite flag of the entry with the given identifier and
    /// returns the new value.
    ///
    /// Toggling twice restores the original value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no entry has that identifier.
    pub fn toggle_favorite(&mut self, id: EntryId) -> Result<bool, StoreError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;
        entry.is_favorite = !entry.is_favorite;
        debug!(%id, is_favorite = entry.is_favorite, "favorite toggled");
        Ok(entry.is_favorite)
    }

    /// Looks up an entry by identifier.
    pub fn get(&self, id: EntryId) -> Option<&DiaryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The full collection in save order.
    pub fn list(&self) -> &[DiaryEntry] {
        &self.entries
    }

    /// The favorites subset, preserving save order.
    pub fn favorites(&self) -> Vec<&DiaryEntry> {
        self.entries.iter().filter(|e| e.is_favorite).collect()
    }

    /// The most recently saved entry, or `None` if the collection is empty.
    pub fn most_recent(&self) -> Option<&DiaryEntry> {
        self.entries.last()
    }

    /// Number of committed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::ImageRef;
    use chrono::Utc;

    fn entry(caption: &str) -> DiaryEntry {
        DiaryEntry {
            id: EntryId::generate(),
            image: ImageRef::new(format!("file:///photos/{caption}.jpg")),
            address: "Main St, Springfield, State".to_string(),
            caption: caption.to_string(),
            is_favorite: false,
            saved_at: Utc::now(),
        }
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = EntryStore::new();
        let captions = ["first", "second", "third"];
        for caption in captions {
            store.append(entry(caption)).unwrap();
        }

        let listed: Vec<&str> = store.list().iter().map(|e| e.caption.as_str()).collect();
        assert_eq!(listed, captions);
    }

    #[test]
    fn test_append_rejects_duplicate_identifier() {
        let mut store = EntryStore::new();
        let first = entry("first");
        let mut clone = first.clone();
        clone.caption = "imposter".to_string();

        store.append(first).unwrap();
        let result = store.append(clone);

        assert!(matches!(result, Err(StoreError::DuplicateIdentifier(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_missing_id_leaves_collection_unchanged() {
        let mut store = EntryStore::new();
        store.append(entry("only")).unwrap();

        let result = store.remove(EntryId::generate());

        assert!(matches!(result, Err(StoreError::NotFound(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_then_remove_again_fails_not_found() {
        let mut store = EntryStore::new();
        let e = entry("doomed");
        let id = e.id;
        store.append(e).unwrap();

        store.remove(id).unwrap();
        assert!(store.is_empty());
        assert!(matches!(store.remove(id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_toggle_favorite_round_trip() {
        let mut store = EntryStore::new();
        let e = entry("flip");
        let id = e.id;
        store.append(e).unwrap();

        assert!(store.toggle_favorite(id).unwrap());
        assert!(!store.toggle_favorite(id).unwrap());
        assert!(!store.get(id).unwrap().is_favorite);
    }

    #[test]
    fn test_toggle_favorite_missing_id() {
        let mut store = EntryStore::new();
        assert!(matches!(
            store.toggle_favorite(EntryId::generate()),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_favorites_is_stable_filter() {
        let mut store = EntryStore::new();
        let entries: Vec<DiaryEntry> = ["a", "b", "c", "d"].iter().map(|c| entry(c)).collect();
        let ids: Vec<EntryId> = entries.iter().map(|e| e.id).collect();
        for e in entries {
            store.append(e).unwrap();
        }

        // Favorite d first, then a; the view still reads in save order.
        store.toggle_favorite(ids[3]).unwrap();
        store.toggle_favorite(ids[0]).unwrap();

        let favorites: Vec<&str> = store
            .favorites()
            .iter()
            .map(|e| e.caption.as_str())
            .collect();
        assert_eq!(favorites, ["a", "d"]);
    }

    #[test]
    fn test_most_recent_tracks_last_saved() {
        let mut store = EntryStore::new();
        assert!(store.most_recent().is_none());

        store.append(entry("older")).unwrap();
        store.append(entry("newer")).unwrap();

        assert_eq!(store.most_recent().unwrap().caption, "newer");
    }
}
