//! Constants used throughout the application.
//!
//! This module contains all constants used in the Wander application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "wander";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A photo travel diary for the terminal";

// Entry Invariants
/// Maximum caption length in characters. Edits that would exceed this are
/// rejected in full, never truncated.
pub const CAPTION_MAX_CHARS: usize = 50;
/// Fallback address substituted when the locator cannot produce one.
pub const UNKNOWN_LOCATION: &str = "Unknown location";
/// Placeholder rendered in the save summary when the caption is empty.
pub const NO_CAPTION_PLACEHOLDER: &str = "No caption";

// Configuration Keys & Environment Variables
/// Environment variable for the display-name preference file path.
pub const ENV_VAR_WANDER_PREFS: &str = "WANDER_PREFS";
/// Environment variable for the address served by the configured locator.
pub const ENV_VAR_WANDER_ADDRESS: &str = "WANDER_ADDRESS";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default preference file path relative to the user's home directory.
pub const DEFAULT_PREFS_SUBPATH: &str = ".wander/name";

// Notification Messages
//
// One (title, body) pair per workflow transition exit. Wording matches what
// the app shows users, so tests assert against these rather than literals.
/// Camera permission was denied; the cycle aborts.
pub const NOTIFY_CAMERA_DENIED: (&str, &str) = (
    "Permission Required",
    "Camera permission is required to take pictures.",
);
/// The camera failed outright; the cycle aborts.
pub const NOTIFY_CAMERA_ERROR: (&str, &str) = ("Camera Error", "Failed to access camera");
/// Capture succeeded and a draft now exists.
pub const NOTIFY_PHOTO_CAPTURED: (&str, &str) = ("Photo Captured", "Photo successfully captured!");
/// The user backed out of the camera; the cycle aborts.
pub const NOTIFY_PHOTO_CANCELLED: (&str, &str) = ("Photo Cancelled", "Photo capture was cancelled");
/// The locator produced an address for the draft.
pub const NOTIFY_LOCATION_FOUND: (&str, &str) = ("Location Found", "Your location has been identified");
/// The locator failed; the draft carries the sentinel address.
pub const NOTIFY_LOCATION_ISSUE: (&str, &str) = ("Location Issue", "Could not determine specific address");
/// The draft was discarded at the confirmation step.
pub const NOTIFY_ENTRY_CANCELLED: (&str, &str) = ("Entry Cancelled", "The entry has been discarded.");
/// Title for the save summary; the body is composed from caption and address.
pub const NOTIFY_SAVED_TITLE: &str = "Photo Saved Successfully";
/// A committed entry was removed after confirmation.
pub const NOTIFY_PHOTO_DELETED: (&str, &str) = (
    "Photo Deleted",
    "The selected photo has been permanently removed.",
);
/// An entry's favorite flag flipped on.
pub const NOTIFY_FAVORITE_ADDED: (&str, &str) = (
    "Added to Favorites",
    "Photo has been added to your favorites!",
);
/// An entry's favorite flag flipped off.
pub const NOTIFY_FAVORITE_REMOVED: (&str, &str) = (
    "Removed from Favorites",
    "Photo has been removed from your favorites.",
);

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "wander";
