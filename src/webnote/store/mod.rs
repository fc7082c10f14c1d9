//! # Storage Layer
//!
//! The page collection is persisted as a single opaque slot, the way a
//! browser app keeps one entry in local storage. [`PersistenceAdapter`] is
//! the contract the [`crate::pages::PageStore`] talks to.
//!
//! ## Layers
//!
//! - [`PersistenceAdapter`]: load/save a whole collection.
//! - [`JsonSlot`]: the adapter implementation. Owns the payload format and
//!   the legacy single-text migration, delegates raw I/O to a backend.
//! - [`backend::SlotBackend`]: raw slot I/O.
//!   - [`fs_backend::FsBackend`]: one `<key>.json` file per slot (production)
//!   - [`mem_backend::MemBackend`]: a map in memory (testing)
//!
//! ## Payload Format
//!
//! ```text
//! [
//!   { "name": "Page 1", "text": "..." },
//!   { "name": "Groceries", "text": "..." }
//! ]
//! ```
//!
//! Older versions of the editor kept a single page of plain text under the
//! `text` slot. When the collection slot has never been written, that text
//! is picked up as the first page.

use crate::error::{NoteError, Result};
use crate::model::{default_name, Page};
use std::path::PathBuf;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

use backend::SlotBackend;
use fs_backend::FsBackend;
use mem_backend::MemBackend;

/// Slot the collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "notes";

/// Slot used by the single-page editor.
pub const LEGACY_TEXT_KEY: &str = "text";

/// Load/save contract for the page collection.
pub trait PersistenceAdapter {
    /// Read the persisted collection. `Ok(None)` means nothing was stored.
    fn load(&self) -> Result<Option<Vec<Page>>>;

    /// Persist the whole collection, replacing what was there.
    fn save(&mut self, pages: &[Page]) -> Result<()>;
}

/// JSON payload in a single named slot.
pub struct JsonSlot<B: SlotBackend> {
    backend: B,
    key: String,
}

pub type FileStore = JsonSlot<FsBackend>;
pub type InMemoryStore = JsonSlot<MemBackend>;

impl<B: SlotBackend> JsonSlot<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.slot_location(&self.key)
    }

    fn load_legacy(&self) -> Result<Option<Vec<Page>>> {
        if self.key == LEGACY_TEXT_KEY {
            return Ok(None);
        }
        match self.backend.read_slot(LEGACY_TEXT_KEY)? {
            Some(text) if !text.is_empty() => {
                tracing::info!("migrating single-page text into the page collection");
                Ok(Some(vec![Page::new(default_name(0), text)]))
            }
            _ => Ok(None),
        }
    }
}

impl<B: SlotBackend> PersistenceAdapter for JsonSlot<B> {
    fn load(&self) -> Result<Option<Vec<Page>>> {
        let Some(payload) = self.backend.read_slot(&self.key)? else {
            return self.load_legacy();
        };
        let pages: Vec<Page> =
            serde_json::from_str(&payload).map_err(NoteError::Serialization)?;
        Ok(Some(pages))
    }

    fn save(&mut self, pages: &[Page]) -> Result<()> {
        let payload = serde_json::to_string_pretty(pages).map_err(NoteError::Serialization)?;
        self.backend.write_slot(&self.key, &payload)
    }
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        JsonSlot::with_backend(FsBackend::new(root))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        JsonSlot::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_pages(mut self, count: usize) -> Self {
            let pages: Vec<Page> = (0..count)
                .map(|i| Page::new(default_name(i), format!("Content for page {}", i + 1)))
                .collect();
            self.store.save(&pages).unwrap();
            self
        }

        pub fn with_raw(self, key: &str, payload: &str) -> Self {
            self.store.backend().seed(key, payload);
            self
        }
    }
}
