//! The entry capture-and-lifecycle workflow.
//!
//! This is the core of the application: a non-reentrant state machine that
//! drives one photo from capture through locating and confirmation into the
//! entry store, plus the delete-confirmation sub-flow and the favorite
//! toggle. Every transition exit issues exactly one notification, after the
//! state mutation it describes, and no notification outcome ever influences
//! control flow.

use crate::collaborators::{CaptureGateway, Locator, Notifier};
use crate::constants::{
    NOTIFY_CAMERA_DENIED, NOTIFY_CAMERA_ERROR, NOTIFY_ENTRY_CANCELLED, NOTIFY_FAVORITE_ADDED,
    NOTIFY_FAVORITE_REMOVED, NOTIFY_LOCATION_FOUND, NOTIFY_LOCATION_ISSUE, NOTIFY_PHOTO_CANCELLED,
    NOTIFY_PHOTO_CAPTURED, NOTIFY_PHOTO_DELETED, NOTIFY_SAVED_TITLE, NO_CAPTION_PLACEHOLDER,
    UNKNOWN_LOCATION,
};
use crate::entry::{DiaryEntry, Draft, EntryId};
use crate::errors::{AppResult, CaptureError, StoreError, WorkflowError};
use crate::store::EntryStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where the capture cycle currently stands.
///
/// `Capturing`, `Locating`, and `Committing` exist only inside a single
/// workflow call; between calls an observer sees `Idle` or
/// `AwaitingConfirmation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    /// No cycle in progress.
    Idle,
    /// Waiting on the capture gateway.
    Capturing,
    /// Waiting on the locator.
    Locating,
    /// A draft exists and awaits the user's save/discard decision.
    AwaitingConfirmation,
    /// The draft is being converted and appended.
    Committing,
}

/// The entry workflow state machine.
///
/// Owns the entry store and the collaborator handles; all entry mutation
/// goes through here. The exclusive-borrow methods make the non-reentrancy
/// rules of the state machine hold by construction: while a collaborator
/// call is suspended, no other trigger can advance the workflow.
///
/// The delete sub-flow is orthogonal to the capture cycle: it targets only
/// committed entries, never the in-progress draft, so a pending deletion can
/// coexist with any capture state.
pub struct EntryWorkflow {
    camera: Arc<dyn CaptureGateway>,
    locator: Arc<dyn Locator>,
    notifier: Arc<dyn Notifier>,
    store: EntryStore,
    state: WorkflowState,
    draft: Option<Draft>,
    pending_deletion: Option<EntryId>,
}

impl EntryWorkflow {
    /// Creates a workflow over the given store and collaborators.
    pub fn new(
        store: EntryStore,
        camera: Arc<dyn CaptureGateway>,
        locator: Arc<dyn Locator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        EntryWorkflow {
            camera,
            locator,
            notifier,
            store,
            state: WorkflowState::Idle,
            draft: None,
            pending_deletion: None,
        }
    }

    /// The current capture-cycle state.
    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// Read-only view of the committed entries.
    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// The draft awaiting confirmation, if any.
    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// The entry currently awaiting delete confirmation, if any.
    pub fn pending_deletion(&self) -> Option<&DiaryEntry> {
        self.pending_deletion.and_then(|id| self.store.get(id))
    }

    /// Runs one capture cycle up to the confirmation step.
    ///
    /// On a successful capture the locator runs next; any locating failure
    /// is recovered with the sentinel address, so a captured photo always
    /// reaches `AwaitingConfirmation`. Cancellation, permission denial, and
    /// camera failure abort the cycle back to `Idle` and are reported to the
    /// user through the notifier, never to the caller.
    ///
    /// Returns the state the cycle settled in.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::CaptureInProgress` if a cycle is already
    /// running.
    pub async fn start_capture(&mut self) -> AppResult<WorkflowState> {
        if self.state != WorkflowState::Idle {
            return Err(WorkflowError::CaptureInProgress.into());
        }

        self.state = WorkflowState::Capturing;
        info!("capture cycle started");

        let image = match self.camera.capture().await {
            Ok(image) => image,
            Err(CaptureError::Cancelled) => {
                self.state = WorkflowState::Idle;
                self.notify(NOTIFY_PHOTO_CANCELLED).await;
                return Ok(self.state);
            }
            Err(CaptureError::PermissionDenied) => {
                self.state = WorkflowState::Idle;
                self.notify(NOTIFY_CAMERA_DENIED).await;
                return Ok(self.state);
            }
            Err(CaptureError::Failed { reason }) => {
                warn!(%reason, "camera failed");
                self.state = WorkflowState::Idle;
                self.notify(NOTIFY_CAMERA_ERROR).await;
                return Ok(self.state);
            }
        };

        debug!(image = %image, "capture succeeded");
        let mut draft = Draft::new(image);
        self.notify(NOTIFY_PHOTO_CAPTURED).await;

        self.state = WorkflowState::Locating;
        let located = match self.locator.locate().await {
            Ok(address) => {
                draft.set_address(address.to_string());
                true
            }
            Err(e) => {
                // Location failure must not cost the user their photo.
                debug!(error = %e, "locating failed, using sentinel address");
                draft.set_address(UNKNOWN_LOCATION.to_string());
                false
            }
        };

        self.draft = Some(draft);
        self.state = WorkflowState::AwaitingConfirmation;
        if located {
            self.notify(NOTIFY_LOCATION_FOUND).await;
        } else {
            self.notify(NOTIFY_LOCATION_ISSUE).await;
        }

        Ok(self.state)
    }

    /// Replaces the draft caption, rejecting edits longer than the caption
    /// limit. Returns whether the edit was applied.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::NoPendingDraft` outside the confirmation
    /// step.
    pub fn edit_caption(&mut self, text: &str) -> AppResult<bool> {
        let draft = self
            .draft
            .as_mut()
            .ok_or(WorkflowError::NoPendingDraft)?;
        Ok(draft.set_caption(text))
    }

    /// Commits the draft: identifier assigned, entry appended, draft
    /// destroyed, user notified with a summary of caption and address.
    ///
    /// Returns the identifier of the committed entry.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::NoPendingDraft` outside the confirmation
    /// step, or `StoreError::DuplicateIdentifier` if identifier generation
    /// is broken.
    pub async fn confirm_save(&mut self) -> AppResult<EntryId> {
        let draft = self.draft.take().ok_or(WorkflowError::NoPendingDraft)?;
        self.state = WorkflowState::Committing;

        let entry = draft.commit();
        let id = entry.id;
        let address = entry.address.clone();
        let caption = if entry.caption.is_empty() {
            NO_CAPTION_PLACEHOLDER.to_string()
        } else {
            entry.caption.clone()
        };

        if let Err(e) = self.store.append(entry) {
            self.state = WorkflowState::Idle;
            return Err(e.into());
        }
        self.state = WorkflowState::Idle;

        let body = format!("Your photo \"{caption}\" at {address} has been saved!");
        self.notify_raw(NOTIFY_SAVED_TITLE, &body).await;
        info!(%id, "entry committed");
        Ok(id)
    }

    /// Discards the draft without persistence and notifies the user.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::NoPendingDraft` outside the confirmation
    /// step.
    pub async fn discard(&mut self) -> AppResult<()> {
        if self.draft.take().is_none() {
            return Err(WorkflowError::NoPendingDraft.into());
        }
        self.state = WorkflowState::Idle;
        self.notify(NOTIFY_ENTRY_CANCELLED).await;
        info!("draft discarded");
        Ok(())
    }

    /// Marks a committed entry for deletion, pending confirmation.
    ///
    /// A second request while one is pending replaces it; the draft of an
    /// in-progress capture cycle is not addressable here.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no entry has that identifier.
    pub fn request_delete(&mut self, id: EntryId) -> AppResult<()> {
        if self.store.get(id).is_none() {
            return Err(StoreError::NotFound(id).into());
        }
        self.pending_deletion = Some(id);
        debug!(%id, "deletion requested");
        Ok(())
    }

    /// Removes the pending entry from the store and notifies the user.
    ///
    /// The pending reference is cleared whether or not the removal succeeds.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::NoPendingDeletion` if nothing is pending, or
    /// `StoreError::NotFound` if the entry vanished since the request.
    pub async fn confirm_delete(&mut self) -> AppResult<EntryId> {
        let id = self
            .pending_deletion
            .take()
            .ok_or(WorkflowError::NoPendingDeletion)?;
        self.store.remove(id)?;
        self.notify(NOTIFY_PHOTO_DELETED).await;
        info!(%id, "entry deleted");
        Ok(id)
    }

    /// Clears the pending deletion without mutating the store.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::NoPendingDeletion` if nothing is pending.
    pub fn cancel_delete(&mut self) -> AppResult<()> {
        if self.pending_deletion.take().is_none() {
            return Err(WorkflowError::NoPendingDeletion.into());
        }
        debug!("deletion cancelled");
        Ok(())
    }

    /// Flips an entry's favorite flag and notifies the user of the new
    /// status. No confirmation step; toggling twice restores the original
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no entry has that identifier.
    pub async fn toggle_favorite(&mut self, id: EntryId) -> AppResult<bool> {
        let is_favorite = self.store.toggle_favorite(id)?;
        if is_favorite {
            self.notify(NOTIFY_FAVORITE_ADDED).await;
        } else {
            self.notify(NOTIFY_FAVORITE_REMOVED).await;
        }
        Ok(is_favorite)
    }

    async fn notify(&self, message: (&str, &str)) {
        self.notify_raw(message.0, message.1).await;
    }

    async fn notify_raw(&self, title: &str, body: &str) {
        // Fire-and-forget: the outcome is logged, never branched on.
        let outcome = self.notifier.notify(title, body).await;
        debug!(%title, ?outcome, "notification issued");
    }
}
