//! # Page Store
//!
//! The in-memory page collection, the active-page cursor and every mutation
//! on them. Two invariants hold after every call:
//!
//! - the collection is never empty
//! - the active index always points at an existing page
//!
//! Every mutating operation ends with an explicit save through the
//! [`PersistenceAdapter`]. A failed save never fails the operation: the
//! in-memory collection stays authoritative and the failure is parked until
//! someone asks for it with [`PageStore::take_save_failure`].

use crate::error::{NoteError, Result};
use crate::model::{default_collection, Page, PageSummary};
use crate::store::PersistenceAdapter;

pub struct PageStore<P: PersistenceAdapter> {
    adapter: P,
    pages: Vec<Page>,
    active: usize,
    save_failure: Option<NoteError>,
}

impl<P: PersistenceAdapter> PageStore<P> {
    /// Open the store from whatever the adapter holds. Absent, unreadable,
    /// malformed or empty data all start from a single blank page.
    pub fn load(adapter: P) -> Self {
        let pages = match adapter.load() {
            Ok(Some(pages)) if !pages.is_empty() => pages,
            Ok(Some(_)) => {
                tracing::warn!("stored page collection is empty, starting fresh");
                default_collection()
            }
            Ok(None) => default_collection(),
            Err(e) => {
                tracing::warn!(error = %e, "could not load pages, starting fresh");
                default_collection()
            }
        };
        tracing::debug!(pages = pages.len(), "page store loaded");

        Self {
            adapter,
            pages,
            active: 0,
            save_failure: None,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Never true once loaded.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_page(&self) -> &Page {
        &self.pages[self.active]
    }

    pub fn page(&self, index: usize) -> Result<&Page> {
        self.check_index(index)?;
        Ok(&self.pages[index])
    }

    pub fn list_pages(&self) -> Vec<PageSummary> {
        self.pages
            .iter()
            .enumerate()
            .map(|(index, page)| PageSummary {
                index,
                name: page.display_name(index),
                is_active: index == self.active,
                is_empty: page.text.is_empty(),
            })
            .collect()
    }

    pub fn adapter(&self) -> &P {
        &self.adapter
    }

    pub fn set_active_text(&mut self, text: impl Into<String>) {
        self.pages[self.active].text = text.into();
        tracing::debug!(index = self.active, "page text replaced");
        self.persist();
    }

    /// Append an empty page and make it active. The name is derived from the
    /// length before the append, so it can repeat a name already in use.
    pub fn create_page(&mut self) -> usize {
        let page = Page::blank(self.pages.len());
        tracing::debug!(name = %page.name, "page created");
        self.pages.push(page);
        self.active = self.pages.len() - 1;
        self.persist();
        self.active
    }

    /// Does not persist: the cursor is session state.
    pub fn select_page(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.active = index;
        Ok(())
    }

    /// A blank `new_name` leaves the current name in place.
    pub fn rename_page(&mut self, index: usize, new_name: &str) -> Result<()> {
        self.check_index(index)?;
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            tracing::debug!(index, "blank rename ignored");
        } else {
            self.pages[index].name = trimmed.to_string();
            tracing::debug!(index, name = trimmed, "page renamed");
        }
        self.persist();
        Ok(())
    }

    /// Remove a page and move the cursor back to the first page.
    /// Returns the removed page's stored name, blank or not.
    pub fn delete_page(&mut self, index: usize) -> Result<String> {
        if self.pages.len() == 1 {
            return Err(NoteError::LastPageUndeletable);
        }
        self.check_index(index)?;

        let removed = self.pages.remove(index);
        self.active = 0;
        tracing::debug!(index, name = %removed.name, "page deleted");
        self.persist();
        Ok(removed.name)
    }

    /// The most recent save failure, if the last save did not go through.
    pub fn take_save_failure(&mut self) -> Option<NoteError> {
        self.save_failure.take()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.pages.len() {
            Ok(())
        } else {
            Err(NoteError::OutOfRange {
                index,
                len: self.pages.len(),
            })
        }
    }

    fn persist(&mut self) {
        match self.adapter.save(&self.pages) {
            Ok(()) => self.save_failure = None,
            Err(e) => {
                tracing::warn!(error = %e, "saving pages failed");
                let failure = match e {
                    NoteError::PersistenceUnavailable(_) => e,
                    other => NoteError::PersistenceUnavailable(other.to_string()),
                };
                self.save_failure = Some(failure);
            }
        }
    }
}
