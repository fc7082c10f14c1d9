use super::backend::SlotBackend;
use crate::error::{NoteError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory slot backend for testing.
///
/// Uses `RefCell` for interior mutability since the editor is single-threaded,
/// which lets `SlotBackend` keep `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a raw payload in place, bypassing the write counter.
    pub fn seed(&self, key: &str, payload: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
    }

    /// Raw payload currently stored under `key`.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl SlotBackend for MemBackend {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(NoteError::PersistenceUnavailable(
                "Simulated read error".to_string(),
            ));
        }
        Ok(self.peek(key))
    }

    fn write_slot(&self, key: &str, payload: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(NoteError::PersistenceUnavailable(
                "Simulated write error".to_string(),
            ));
        }
        self.seed(key, payload);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn slot_location(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", key))
    }
}
