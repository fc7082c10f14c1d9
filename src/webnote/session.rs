//! # Editor Session
//!
//! The coordinator between a presentation layer and the core. The UI hands
//! over intents (text edited, rename requested, undo pressed, ...) and reads
//! state back afterwards. Every intent returns [`Feedback`], the notices the
//! UI should show, so the UI never needs to inspect core errors itself.
//!
//! ## Modal State Machine
//!
//! ```text
//!            request_rename             request_delete (only with > 1 page)
//!   Idle  ------------------> RenameModalOpen
//!    ^  \                         | confirm_rename / cancel_rename
//!    |   \--------------------> DeleteModalOpen
//!    |                            | confirm_delete / cancel_delete
//!    +----------------------------+
//! ```
//!
//! `clear` and `undo` work in any state and leave it unchanged.
//!
//! ## Lifecycle
//!
//! A session owns its [`PageStore`] and [`UndoBuffer`]. The undo key
//! subscription is attached once with [`EditorSession::attach_keys`] and
//! must be released with [`EditorSession::teardown`] when the UI goes away.

use crate::clipboard::ClipboardWriter;
use crate::error::{NoteError, Severity};
use crate::export::{export_filename, FileExporter, TEXT_MIME};
use crate::keys::{KeyEventSource, KeySignal, ListenerId};
use crate::model::{Page, PageSummary};
use crate::pages::PageStore;
use crate::store::PersistenceAdapter;
use crate::undo::UndoBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Idle,
    RenameModalOpen,
    DeleteModalOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: MessageLevel,
    pub content: String,
}

impl Notice {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }

    pub fn from_error(err: &NoteError) -> Self {
        match err.severity() {
            Severity::Info => Self::info(err.to_string()),
            Severity::Warning => Self::warning(err.to_string()),
            Severity::Error => Self::error(err.to_string()),
        }
    }
}

/// What the UI should tell the user after an intent.
#[derive(Debug, Default)]
pub struct Feedback {
    pub messages: Vec<Notice>,
    /// The typed reason an intent was turned down, if it was.
    pub refusal: Option<NoteError>,
}

impl Feedback {
    fn with(notice: Notice) -> Self {
        Self {
            messages: vec![notice],
            refusal: None,
        }
    }

    fn refused(err: NoteError) -> Self {
        Self {
            messages: vec![Notice::from_error(&err)],
            refusal: Some(err),
        }
    }

    pub fn add_message(&mut self, notice: Notice) {
        self.messages.push(notice);
    }

    pub fn is_refused(&self) -> bool {
        self.refusal.is_some()
    }

    fn merge(&mut self, other: Feedback) {
        self.messages.extend(other.messages);
        if other.refusal.is_some() {
            self.refusal = other.refusal;
        }
    }
}

pub struct EditorSession<P: PersistenceAdapter> {
    store: PageStore<P>,
    undo: UndoBuffer,
    modal: ModalState,
    rename_draft: String,
    undo_listener: Option<ListenerId>,
}

impl<P: PersistenceAdapter> EditorSession<P> {
    pub fn new(store: PageStore<P>) -> Self {
        Self {
            store,
            undo: UndoBuffer::new(),
            modal: ModalState::Idle,
            rename_draft: String::new(),
            undo_listener: None,
        }
    }

    /// Load the collection through `adapter` and start a session on it.
    pub fn open(adapter: P) -> Self {
        Self::new(PageStore::load(adapter))
    }

    pub fn store(&self) -> &PageStore<P> {
        &self.store
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    /// The pending name while the rename modal is open.
    pub fn rename_draft(&self) -> &str {
        &self.rename_draft
    }

    pub fn active_index(&self) -> usize {
        self.store.active_index()
    }

    pub fn active_page(&self) -> &Page {
        self.store.active_page()
    }

    pub fn list_pages(&self) -> Vec<PageSummary> {
        self.store.list_pages()
    }

    /// Whether the UI should offer deletion at all.
    pub fn can_delete(&self) -> bool {
        self.store.len() > 1
    }

    pub fn can_undo(&self) -> bool {
        self.undo.has_pending()
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Feedback {
        self.store.set_active_text(text);
        self.saved(Feedback::default())
    }

    pub fn create_page(&mut self) -> Feedback {
        if let Some(refusal) = self.require(ModalState::Idle, "create a page") {
            return refusal;
        }
        self.store.create_page();
        let name = self.store.active_page().name.clone();
        self.saved(Feedback::with(Notice::success(format!(
            "Page created: {}",
            name
        ))))
    }

    /// Switching pages is refused while a modal is open, so a confirm always
    /// applies to the page the modal was opened on.
    pub fn select_page(&mut self, index: usize) -> Feedback {
        if let Some(refusal) = self.require(ModalState::Idle, "switch pages") {
            return refusal;
        }
        match self.store.select_page(index) {
            Ok(()) => Feedback::default(),
            Err(e) => Feedback::refused(e),
        }
    }

    // --- Rename ---

    pub fn request_rename(&mut self) -> Feedback {
        if let Some(refusal) = self.require(ModalState::Idle, "rename") {
            return refusal;
        }
        self.rename_draft = self.store.active_page().name.clone();
        self.modal = ModalState::RenameModalOpen;
        Feedback::default()
    }

    pub fn update_rename_draft(&mut self, draft: impl Into<String>) -> Feedback {
        if let Some(refusal) = self.require(ModalState::RenameModalOpen, "edit the new name") {
            return refusal;
        }
        self.rename_draft = draft.into();
        Feedback::default()
    }

    /// Apply `name` to the active page. A blank name keeps the old one.
    pub fn confirm_rename(&mut self, name: &str) -> Feedback {
        if let Some(refusal) = self.require(ModalState::RenameModalOpen, "confirm a rename") {
            return refusal;
        }
        self.close_modal();

        let index = self.store.active_index();
        let old_name = self.store.active_page().name.clone();
        if let Err(e) = self.store.rename_page(index, name) {
            return Feedback::refused(e);
        }

        let new_name = &self.store.active_page().name;
        let feedback = if *new_name == old_name {
            Feedback::with(Notice::info(format!("Name unchanged: {}", old_name)))
        } else {
            Feedback::with(Notice::success(format!(
                "Page renamed: {} -> {}",
                old_name, new_name
            )))
        };
        self.saved(feedback)
    }

    /// Confirm with whatever is in the draft buffer.
    pub fn confirm_rename_draft(&mut self) -> Feedback {
        let draft = self.rename_draft.clone();
        self.confirm_rename(&draft)
    }

    pub fn cancel_rename(&mut self) -> Feedback {
        if let Some(refusal) = self.require(ModalState::RenameModalOpen, "cancel a rename") {
            return refusal;
        }
        self.close_modal();
        Feedback::default()
    }

    // --- Delete ---

    pub fn request_delete(&mut self) -> Feedback {
        if let Some(refusal) = self.require(ModalState::Idle, "delete") {
            return refusal;
        }
        if !self.can_delete() {
            return Feedback::refused(NoteError::LastPageUndeletable);
        }
        self.modal = ModalState::DeleteModalOpen;
        Feedback::default()
    }

    pub fn confirm_delete(&mut self) -> Feedback {
        if let Some(refusal) = self.require(ModalState::DeleteModalOpen, "confirm a delete") {
            return refusal;
        }
        self.close_modal();

        let index = self.store.active_index();
        let label = self.store.active_page().display_name(index);
        match self.store.delete_page(index) {
            Ok(_) => self.saved(Feedback::with(Notice::success(format!(
                "Page deleted: {}",
                label
            )))),
            Err(e) => Feedback::refused(e),
        }
    }

    pub fn cancel_delete(&mut self) -> Feedback {
        if let Some(refusal) = self.require(ModalState::DeleteModalOpen, "cancel a delete") {
            return refusal;
        }
        self.close_modal();
        Feedback::default()
    }

    // --- Clear / Undo ---

    pub fn clear(&mut self) -> Feedback {
        let current = self.store.active_page().text.clone();
        self.undo.capture_before_clear(&current);
        self.store.set_active_text("");

        let feedback = if current.is_empty() {
            Feedback::default()
        } else {
            Feedback::with(Notice::info("Text cleared"))
        };
        self.saved(feedback)
    }

    /// Restore the most recently cleared text into the active page.
    pub fn undo(&mut self) -> Feedback {
        match self.undo.consume_for_restore() {
            Some(text) => {
                self.store.set_active_text(text);
                self.saved(Feedback::with(Notice::success("Cleared text restored")))
            }
            None => Feedback::refused(NoteError::NothingToUndo),
        }
    }

    // --- Collaborators ---

    pub fn copy(&self, clipboard: &mut impl ClipboardWriter) -> Feedback {
        match clipboard.write(&self.store.active_page().text) {
            Ok(()) => Feedback::with(Notice::success("Text copied to clipboard")),
            Err(e) => {
                tracing::error!(error = %e, "copy to clipboard failed");
                Feedback::refused(match e {
                    NoteError::ClipboardDenied(_) => e,
                    other => NoteError::ClipboardDenied(other.to_string()),
                })
            }
        }
    }

    pub fn download(&self, exporter: &mut impl FileExporter) -> Feedback {
        let index = self.store.active_index();
        let page = self.store.active_page();
        let filename = export_filename(page, index);

        match exporter.export(&filename, &page.text, TEXT_MIME) {
            Ok(()) => Feedback::with(Notice::success(format!("Exported {}", filename))),
            Err(e) => {
                tracing::error!(error = %e, filename = %filename, "export failed");
                Feedback::refused(match e {
                    NoteError::ExportFailed(_) => e,
                    other => NoteError::ExportFailed(other.to_string()),
                })
            }
        }
    }

    // --- Key events ---

    /// Subscribe to undo key signals. Calling this again while attached
    /// does nothing.
    pub fn attach_keys(&mut self, source: &mut impl KeyEventSource) {
        if self.undo_listener.is_none() {
            self.undo_listener = Some(source.subscribe());
        }
    }

    pub fn detach_keys(&mut self, source: &mut impl KeyEventSource) {
        if let Some(id) = self.undo_listener.take() {
            source.unsubscribe(id);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.undo_listener.is_some()
    }

    /// Handle every signal the source queued for this session.
    pub fn pump_keys(&mut self, source: &mut impl KeyEventSource) -> Feedback {
        let mut feedback = Feedback::default();
        let Some(id) = self.undo_listener else {
            return feedback;
        };
        for signal in source.drain(id) {
            match signal {
                KeySignal::UndoRequested => feedback.merge(self.undo()),
            }
        }
        feedback
    }

    /// End the session: release the key subscription and hand back the store.
    pub fn teardown(mut self, source: &mut impl KeyEventSource) -> PageStore<P> {
        self.detach_keys(source);
        self.store
    }

    fn require(&self, expected: ModalState, action: &str) -> Option<Feedback> {
        if self.modal == expected {
            None
        } else {
            Some(Feedback::with(Notice::warning(format!(
                "Cannot {} right now",
                action
            ))))
        }
    }

    fn close_modal(&mut self) {
        self.modal = ModalState::Idle;
        self.rename_draft.clear();
    }

    fn saved(&mut self, mut feedback: Feedback) -> Feedback {
        if let Some(err) = self.store.take_save_failure() {
            feedback.add_message(Notice::from_error(&err));
        }
        feedback
    }
}
