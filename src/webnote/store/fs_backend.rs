use super::backend::SlotBackend;
use crate::error::{NoteError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores every slot as `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NoteError::Io)?;
        }
        Ok(())
    }
}

impl SlotBackend for FsBackend {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_location(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(NoteError::Io(e)),
        }
    }

    fn write_slot(&self, key: &str, payload: &str) -> Result<()> {
        self.ensure_dir()?;

        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, payload).map_err(NoteError::Io)?;
        fs::rename(&tmp_file, self.slot_location(key)).map_err(NoteError::Io)?;

        tracing::debug!(key, bytes = payload.len(), "slot written");
        Ok(())
    }

    fn slot_location(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}
