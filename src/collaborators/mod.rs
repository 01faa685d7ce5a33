//! Collaborator contracts consumed by the entry workflow.
//!
//! The camera, the locator, the notification sink, and the display-name
//! preference store are external capabilities. The workflow consumes them
//! only through the narrow async traits defined here, so presentation layers
//! decide what actually sits behind each seam (a real device, a console
//! prompt, a test double).

use crate::entry::ImageRef;
use crate::errors::{AppResult, CaptureError, LocateError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod console;

/// A reverse-geocoded street address.
///
/// Rendered as `"<name>, <city>, <region>"`; a missing component is rendered
/// as an empty segment rather than omitted, so the shape of the string is
/// stable.
///
/// # Examples
///
/// ```
/// use wander::collaborators::Address;
///
/// let full = Address::new("Main St", "Springfield", "State");
/// assert_eq!(full.to_string(), "Main St, Springfield, State");
///
/// let partial = Address::new("", "Springfield", "");
/// assert_eq!(partial.to_string(), ", Springfield, ");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Place or street name
    pub name: String,
    /// City
    pub city: String,
    /// Region, state, or province
    pub region: String,
}

impl Address {
    /// Creates an address from its components.
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Address {
            name: name.into(),
            city: city.into(),
            region: region.into(),
        }
    }

    /// Parses a `"name, city, region"` string. Missing segments become
    /// empty; anything after the second comma belongs to the region.
    pub fn parse(raw: &str) -> Self {
        let mut segments = raw.splitn(3, ',').map(|s| s.trim().to_string());
        Address {
            name: segments.next().unwrap_or_default(),
            city: segments.next().unwrap_or_default(),
            region: segments.next().unwrap_or_default(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.city, self.region)
    }
}

/// Camera capture primitive.
///
/// Wraps permission handling and the capture itself into a single call: the
/// workflow sees a usable image reference or one of the [`CaptureError`]
/// outcomes, nothing in between.
#[async_trait]
pub trait CaptureGateway: Send + Sync {
    /// Requests permission if needed and captures one photo.
    async fn capture(&self) -> Result<ImageRef, CaptureError>;
}

/// Positioning and reverse-geocoding primitive.
///
/// Wraps permission, position fetch, and reverse-geocoding into one call.
#[async_trait]
pub trait Locator: Send + Sync {
    /// Resolves the current position to a human-readable address.
    async fn locate(&self) -> Result<Address, LocateError>;
}

/// Outcome of a notification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The message was handed to the delivery mechanism.
    Delivered,
    /// Delivery failed or was declined; the failure was swallowed.
    Suppressed,
}

/// Best-effort user notification sink.
///
/// Implementations must never let a delivery failure escape: anything that
/// goes wrong is reported as [`NotifyOutcome::Suppressed`]. The workflow
/// logs the outcome but never branches on it.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers a short (title, body) message to the user.
    async fn notify(&self, title: &str, body: &str) -> NotifyOutcome;
}

/// Persistent storage for the single display-name preference.
///
/// Unrelated to diary entries; used by the presentation layer to greet the
/// user across sessions.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Persists the display name.
    async fn save(&self, value: &str) -> AppResult<()>;

    /// Loads the display name, or `None` if none is stored.
    async fn load(&self) -> AppResult<Option<String>>;

    /// Removes the stored display name, if any.
    async fn clear(&self) -> AppResult<()>;
}
