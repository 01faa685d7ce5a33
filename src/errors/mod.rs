//! Error handling utilities for the wander application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Collaborator outcomes (`CaptureError`, `LocateError`) are deliberately kept
//! out of `AppError`: the workflow consumes them in full and reports them to the
//! user through the notifier, so they never propagate to callers.

use crate::entry::EntryId;
use std::io;
use thiserror::Error;

/// Outcomes of a capture attempt other than a usable image.
///
/// Every variant aborts the capture cycle back to idle; none of them is
/// surfaced to the caller as an error.
///
/// # Examples
///
/// ```
/// use wander::errors::CaptureError;
///
/// let error = CaptureError::Cancelled;
/// assert!(format!("{}", error).contains("cancelled"));
/// ```
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The user declined camera permission.
    #[error("Camera permission was denied")]
    PermissionDenied,

    /// The user backed out of the camera without taking a photo.
    #[error("Photo capture was cancelled")]
    Cancelled,

    /// The camera primitive failed for any other reason.
    #[error("Camera failed: {reason}")]
    Failed {
        /// Description of what went wrong
        reason: String,
    },
}

/// Outcomes of a locate attempt other than a formatted address.
///
/// The workflow recovers from every variant by substituting the sentinel
/// address; failing to geocode never blocks saving a photo.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The user declined location permission.
    #[error("Location permission was denied")]
    PermissionDenied,

    /// Positioning or reverse-geocoding failed.
    #[error("Location unavailable: {reason}")]
    Unavailable {
        /// Description of what went wrong
        reason: String,
    },
}

/// Errors raised by entry store mutations.
///
/// # Examples
///
/// ```
/// use wander::entry::EntryId;
/// use wander::errors::StoreError;
///
/// let id = EntryId::generate();
/// let error = StoreError::NotFound(id);
/// assert!(format!("{}", error).contains("No entry"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced identifier is not in the collection.
    #[error("No entry with identifier {0}")]
    NotFound(EntryId),

    /// An appended entry reused an existing identifier. This indicates a
    /// broken identifier-generation invariant, not a user mistake.
    #[error("Entry identifier {0} already exists in the collection")]
    DuplicateIdentifier(EntryId),
}

/// Errors raised when a workflow trigger arrives in the wrong state.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// "Start capture" arrived while a cycle was already running. The
    /// workflow is not reentrant; the new request is rejected, not queued.
    #[error("A capture cycle is already in progress")]
    CaptureInProgress,

    /// Confirm, discard, or a caption edit arrived with no draft awaiting
    /// confirmation.
    #[error("No draft is awaiting confirmation")]
    NoPendingDraft,

    /// Confirm-delete or cancel-delete arrived with no deletion pending.
    #[error("No deletion is awaiting confirmation")]
    NoPendingDeletion,
}

/// Represents all possible errors that can occur in the wander application.
///
/// This enum is the central error type used across the application, with
/// variants for different error categories. It uses `thiserror` for deriving
/// the `Error` trait implementation and formatted error messages.
///
/// # Examples
///
/// ```
/// use wander::errors::AppError;
///
/// let error = AppError::Config("Missing preference path".to_string());
/// assert_eq!(
///     format!("{}", error),
///     "Configuration error: Missing preference path"
/// );
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors from entry store mutations.
    #[error("Entry store error: {0}")]
    Store(#[from] StoreError),

    /// Errors from workflow triggers arriving in the wrong state.
    #[error("Workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    /// Errors when reading or writing the display-name preference.
    #[error("Preference storage error: {0}")]
    Prefs(String),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
