/// Single-slot buffer for undoing a clear.
///
/// Only the most recent non-empty clear can be restored, and only once.
/// A second clear before an undo replaces the earlier snapshot.
#[derive(Debug, Default)]
pub struct UndoBuffer {
    pending: Option<String>,
}

impl UndoBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `current_text` before it gets cleared. Empty text is not
    /// worth restoring and leaves the buffer as it was.
    pub fn capture_before_clear(&mut self, current_text: &str) {
        if current_text.is_empty() {
            return;
        }
        if self.pending.is_some() {
            tracing::debug!("replacing pending clear snapshot");
        }
        self.pending = Some(current_text.to_string());
    }

    /// Hand out the pending text and empty the slot.
    pub fn consume_for_restore(&mut self) -> Option<String> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
