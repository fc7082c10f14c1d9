use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Page {} does not exist (there are {len} pages)", .index + 1)]
    OutOfRange { index: usize, len: usize },

    #[error("The last page cannot be deleted")]
    LastPageUndeletable,

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Storage unavailable: {0}")]
    PersistenceUnavailable(String),

    #[error("Clipboard access denied: {0}")]
    ClipboardDenied(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),

    #[error("Invalid key chord: {0}")]
    InvalidKeyChord(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// How loudly an error should be surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl NoteError {
    pub fn severity(&self) -> Severity {
        match self {
            NoteError::NothingToUndo => Severity::Info,
            NoteError::OutOfRange { .. }
            | NoteError::LastPageUndeletable
            | NoteError::InvalidKeyChord(_) => Severity::Warning,
            NoteError::PersistenceUnavailable(_)
            | NoteError::ClipboardDenied(_)
            | NoteError::ExportFailed(_)
            | NoteError::Io(_)
            | NoteError::Serialization(_) => Severity::Error,
        }
    }
}

pub type Result<T> = std::result::Result<T, NoteError>;
