//! Core diary-entry types without I/O operations.
//!
//! This module contains the pure data model: committed entries, the private
//! draft an entry passes through before commit, and the identifier and image
//! handle types shared across the crate. Nothing here touches a camera, the
//! filesystem, or a clock other than at commit time.

use crate::constants::{CAPTION_MAX_CHARS, UNKNOWN_LOCATION};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a committed diary entry.
///
/// Identifiers are UUIDv7: derived from the commit timestamp (ordered to
/// millisecond precision), unique, and never reused.
///
/// # Examples
///
/// ```
/// use wander::entry::EntryId;
///
/// let first = EntryId::generate();
/// let second = EntryId::generate();
/// assert_ne!(first, second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generates a fresh time-ordered identifier.
    pub fn generate() -> Self {
        EntryId(Uuid::now_v7())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque handle to a captured image.
///
/// The core never inspects the referenced media; it only carries the handle
/// from the capture gateway into the committed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wraps a camera-provided reference (a URI or path).
    pub fn new(uri: impl Into<String>) -> Self {
        ImageRef(uri.into())
    }

    /// The underlying reference string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A committed diary entry.
///
/// Entries exist only in fully-formed state: the workflow builds them through
/// its private [`Draft`] and appends them to the store in one step, so no
/// partially-saved entry is ever visible outside the workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Identifier assigned at commit time.
    pub id: EntryId,
    /// Handle to the captured photo.
    pub image: ImageRef,
    /// Reverse-geocoded address, or the "Unknown location" sentinel. Never
    /// empty.
    pub address: String,
    /// User caption, at most [`CAPTION_MAX_CHARS`] characters. May be empty.
    pub caption: String,
    /// Whether the entry appears in the favorites view.
    pub is_favorite: bool,
    /// When the entry was committed.
    pub saved_at: DateTime<Utc>,
}

/// An entry under construction, private to one workflow cycle.
///
/// A draft is created when capture succeeds, gains an address when locating
/// completes (or the sentinel when it fails), accepts bounded caption edits
/// at the confirmation step, and is destroyed on commit or discard. At most
/// one draft exists at a time.
#[derive(Debug, Clone)]
pub struct Draft {
    image: ImageRef,
    address: Option<String>,
    caption: String,
}

impl Draft {
    /// Creates a draft around a freshly captured image. The caption starts
    /// empty and the address is unset until locating resolves.
    pub(crate) fn new(image: ImageRef) -> Self {
        Draft {
            image,
            address: None,
            caption: String::new(),
        }
    }

    /// The captured image this draft wraps.
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    /// The resolved address, if locating has completed.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// The caption as currently edited.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub(crate) fn set_address(&mut self, address: String) {
        self.address = Some(address);
    }

    /// Replaces the caption, rejecting edits longer than
    /// [`CAPTION_MAX_CHARS`] characters.
    ///
    /// An over-long edit is rejected in full rather than truncated, so the
    /// caption only ever holds text the user actually typed. Returns whether
    /// the edit was applied.
    pub fn set_caption(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text.chars().count() > CAPTION_MAX_CHARS {
            return false;
        }
        self.caption = text;
        true
    }

    /// Consumes the draft into a committed entry: identifier assigned,
    /// favorite flag off, commit timestamp taken now. A draft whose address
    /// never resolved falls back to the sentinel.
    pub(crate) fn commit(self) -> DiaryEntry {
        DiaryEntry {
            id: EntryId::generate(),
            image: self.image,
            address: self
                .address
                .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
            caption: self.caption,
            is_favorite: false,
            saved_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_ids_are_unique() {
        let ids: Vec<EntryId> = (0..100).map(|_| EntryId::generate()).collect();

        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_new_draft_starts_empty() {
        let draft = Draft::new(ImageRef::new("file:///photos/img1.jpg"));

        assert_eq!(draft.image().as_str(), "file:///photos/img1.jpg");
        assert_eq!(draft.caption(), "");
        assert!(draft.address().is_none());
    }

    #[test]
    fn test_set_caption_within_limit() {
        let mut draft = Draft::new(ImageRef::new("img"));

        assert!(draft.set_caption("Sunset"));
        assert_eq!(draft.caption(), "Sunset");

        // Exactly at the limit is accepted
        let exact = "x".repeat(CAPTION_MAX_CHARS);
        assert!(draft.set_caption(exact.clone()));
        assert_eq!(draft.caption(), exact);
    }

    #[test]
    fn test_set_caption_rejects_overlong_edit() {
        let mut draft = Draft::new(ImageRef::new("img"));
        draft.set_caption("keep me");

        let too_long = "x".repeat(CAPTION_MAX_CHARS + 1);
        assert!(!draft.set_caption(too_long));

        // The previous caption survives untruncated
        assert_eq!(draft.caption(), "keep me");
    }

    #[test]
    fn test_caption_limit_counts_characters_not_bytes() {
        let mut draft = Draft::new(ImageRef::new("img"));

        // 50 multibyte characters are within the limit even though the byte
        // length is far beyond it.
        let multibyte = "é".repeat(CAPTION_MAX_CHARS);
        assert!(multibyte.len() > CAPTION_MAX_CHARS);
        assert!(draft.set_caption(multibyte));
    }

    #[test]
    fn test_commit_assigns_identity_and_defaults() {
        let mut draft = Draft::new(ImageRef::new("file:///photos/img1.jpg"));
        draft.set_address("Main St, Springfield, State".to_string());
        draft.set_caption("Sunset");

        let entry = draft.commit();

        assert_eq!(entry.image.as_str(), "file:///photos/img1.jpg");
        assert_eq!(entry.address, "Main St, Springfield, State");
        assert_eq!(entry.caption, "Sunset");
        assert!(!entry.is_favorite);
    }

    #[test]
    fn test_commit_without_address_uses_sentinel() {
        let entry = Draft::new(ImageRef::new("img")).commit();
        assert_eq!(entry.address, UNKNOWN_LOCATION);
    }

    #[test]
    fn test_entry_serializes_with_expected_shape() {
        let mut draft = Draft::new(ImageRef::new("img1"));
        draft.set_caption("Sunset");
        let entry = draft.commit();

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["image"], "img1");
        assert_eq!(json["caption"], "Sunset");
        assert_eq!(json["is_favorite"], false);
    }
}
