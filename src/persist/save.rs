//! Save and load of an in-progress session.

use super::PersistError;
use crate::session::SessionState;
use std::path::PathBuf;
use tracing::{debug, instrument, warn};

/// The save file: one JSON-serialized [`SessionState`].
///
/// Loading never fails loudly: missing or corrupt data yields `None` and
/// the caller falls back to a fresh default session.
#[derive(Debug, Clone)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    /// Creates a save file handle over the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Writes the session state, replacing any previous save.
    #[instrument(skip(self, state), fields(path = %self.path.display()))]
    pub fn store(&self, state: &SessionState) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, json)?;
        debug!("session saved");
        Ok(())
    }

    /// Loads a previously saved session.
    ///
    /// `None` on a missing file or undecodable contents; corruption is
    /// logged and degraded, never propagated.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Option<SessionState> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("no save file");
                return None;
            }
            Err(err) => {
                warn!(error = %err, "save file unreadable, starting fresh");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!(error = %err, "save file corrupt, starting fresh");
                None
            }
        }
    }

    /// Removes the save file. Missing file is fine.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn clear(&self) -> Result<(), PersistError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
