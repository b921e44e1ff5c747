//! Persistence collaborators: the save file and the history log.

mod history;
mod save;

pub use history::{DRAW_LABEL, HistoryLog, HistoryRecord};
pub use save::SaveFile;

use derive_more::{Display, Error, From};

/// Failure writing or reading a persistence file.
///
/// Only surfaces from writes and from history reporting; loading a save
/// degrades silently instead (see [`SaveFile::load`]).
#[derive(Debug, Display, Error, From)]
pub enum PersistError {
    /// Underlying file I/O failed.
    #[display("I/O error: {_0}")]
    Io(std::io::Error),
    /// The session state could not be encoded.
    #[display("serialization error: {_0}")]
    Encode(serde_json::Error),
}
