use serde::{Deserialize, Serialize};

/// A named unit of text. This is also the on-disk shape of one entry in the
/// persisted collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub name: String,
    #[serde(default)]
    pub text: String,
}

impl Page {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// An empty page named after its 0-based position.
    pub fn blank(position: usize) -> Self {
        Self::new(default_name(position), "")
    }

    /// The name to show for this page, falling back to `Page N` when the
    /// stored name is blank.
    pub fn display_name(&self, position: usize) -> String {
        if self.name.trim().is_empty() {
            default_name(position)
        } else {
            self.name.clone()
        }
    }
}

/// `Page N` for the 0-based position `N - 1`.
pub fn default_name(position: usize) -> String {
    format!("Page {}", position + 1)
}

/// The collection every session falls back to.
pub fn default_collection() -> Vec<Page> {
    vec![Page::blank(0)]
}

/// Read-only row for page lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub index: usize,
    pub name: String,
    pub is_active: bool,
    pub is_empty: bool,
}
