use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw slot I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`super::JsonSlot`] handles the "what" (payload format, legacy data).
///
/// A slot is a named, opaque string value, the same shape as a browser
/// local-storage entry.
pub trait SlotBackend {
    /// Read the raw payload stored under `key`.
    /// Returns Ok(None) if nothing was ever written there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Replace the payload stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_slot(&self, key: &str, payload: &str) -> Result<()>;

    /// Where the slot lives. For FsBackend this is the real path,
    /// for MemBackend a virtual one.
    fn slot_location(&self, key: &str) -> PathBuf;
}
