//! Console-backed collaborator implementations.
//!
//! These power the interactive terminal session: the camera prompts for an
//! image path on stdin, the locator serves a configured address, the notifier
//! prints to stdout, and the preference store keeps the display name in a
//! plain-text file.

use crate::collaborators::{Address, CaptureGateway, Locator, Notifier, NotifyOutcome, PreferenceStore};
use crate::entry::ImageRef;
use crate::errors::{AppError, AppResult, CaptureError, LocateError};
use async_trait::async_trait;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A "camera" that asks the user for the path of an existing image file.
///
/// Blank input means the user backed out, reported as
/// [`CaptureError::Cancelled`]; a path that does not point at a file is a
/// capture failure.
#[derive(Debug, Default)]
pub struct PromptCamera;

impl PromptCamera {
    /// Creates a prompt-driven camera.
    pub fn new() -> Self {
        PromptCamera
    }

    fn read_path(&self) -> io::Result<String> {
        print!("Path to photo (blank to cancel): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }
}

#[async_trait]
impl CaptureGateway for PromptCamera {
    async fn capture(&self) -> Result<ImageRef, CaptureError> {
        let path = self.read_path().map_err(|e| CaptureError::Failed {
            reason: format!("could not read input: {e}"),
        })?;

        if path.is_empty() {
            return Err(CaptureError::Cancelled);
        }
        if !Path::new(&path).is_file() {
            return Err(CaptureError::Failed {
                reason: format!("no such file: {path}"),
            });
        }

        debug!(%path, "photo selected");
        Ok(ImageRef::new(path))
    }
}

/// A locator that serves a fixed, configured address.
///
/// With no address configured it reports [`LocateError::Unavailable`], which
/// the workflow recovers from with the sentinel address.
#[derive(Debug, Default)]
pub struct ConfiguredLocator {
    address: Option<Address>,
}

impl ConfiguredLocator {
    /// Creates a locator serving the given address, or none.
    pub fn new(address: Option<Address>) -> Self {
        ConfiguredLocator { address }
    }
}

#[async_trait]
impl Locator for ConfiguredLocator {
    async fn locate(&self) -> Result<Address, LocateError> {
        match &self.address {
            Some(address) => Ok(address.clone()),
            None => Err(LocateError::Unavailable {
                reason: "no address configured".to_string(),
            }),
        }
    }
}

/// A notifier that prints `[title] body` lines to stdout.
///
/// Any write failure is swallowed into [`NotifyOutcome::Suppressed`]; the
/// session never stumbles over a broken pipe.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Creates a console notifier.
    pub fn new() -> Self {
        ConsoleNotifier
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, title: &str, body: &str) -> NotifyOutcome {
        let mut stdout = io::stdout();
        match writeln!(stdout, "[{title}] {body}").and_then(|_| stdout.flush()) {
            Ok(()) => NotifyOutcome::Delivered,
            Err(e) => {
                debug!(error = %e, "notification suppressed");
                NotifyOutcome::Suppressed
            }
        }
    }
}

/// Display-name preference kept in a plain-text file.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Creates a preference store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FilePreferences { path: path.into() }
    }
}

#[async_trait]
impl PreferenceStore for FilePreferences {
    async fn save(&self, value: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Prefs(format!("Failed to create {}: {e}", parent.display())))?;
        }
        fs::write(&self.path, value)
            .map_err(|e| AppError::Prefs(format!("Failed to save name: {e}")))?;
        debug!(path = %self.path.display(), "display name saved");
        Ok(())
    }

    async fn load(&self) -> AppResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let name = contents.trim().to_string();
                Ok(if name.is_empty() { None } else { Some(name) })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Prefs(format!("Failed to load name: {e}"))),
        }
    }

    async fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Prefs(format!("Failed to clear name: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_configured_locator_serves_address() {
        let locator = ConfiguredLocator::new(Some(Address::new("Main St", "Springfield", "State")));

        let address = locator.locate().await.unwrap();
        assert_eq!(address.to_string(), "Main St, Springfield, State");
    }

    #[tokio::test]
    async fn test_unconfigured_locator_is_unavailable() {
        let locator = ConfiguredLocator::new(None);

        let result = locator.locate().await;
        assert!(matches!(result, Err(LocateError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn test_console_notifier_delivers() {
        let outcome = ConsoleNotifier::new().notify("Photo Saved", "done").await;
        assert_eq!(outcome, NotifyOutcome::Delivered);
    }

    #[tokio::test]
    async fn test_file_preferences_save_load_clear() {
        let dir = tempdir().unwrap();
        let prefs = FilePreferences::new(dir.path().join("nested").join("name"));

        assert_eq!(prefs.load().await.unwrap(), None);

        prefs.save("Aira").await.unwrap();
        assert_eq!(prefs.load().await.unwrap(), Some("Aira".to_string()));

        prefs.clear().await.unwrap();
        assert_eq!(prefs.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_preferences_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let prefs = FilePreferences::new(dir.path().join("name"));

        prefs.clear().await.unwrap();
        prefs.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_file_preferences_blank_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("name");
        fs::write(&path, "  \n").unwrap();

        let prefs = FilePreferences::new(path);
        assert_eq!(prefs.load().await.unwrap(), None);
    }
}
