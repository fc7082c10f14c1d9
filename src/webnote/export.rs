use crate::error::{NoteError, Result};
use crate::model::Page;
use std::fs;
use std::path::{Path, PathBuf};

pub const TEXT_MIME: &str = "text/plain";

/// Receives a finished download. Mirrors what a browser does with a blob:
/// a suggested file name, the bytes, and their type.
pub trait FileExporter {
    fn export(&mut self, filename: &str, content: &str, mime_type: &str) -> Result<()>;
}

/// File name for exporting `page` found at `index`: the sanitized page name,
/// or `note_{index+1}` when nothing usable is left of it.
pub fn export_filename(page: &Page, index: usize) -> String {
    let stem = sanitize_filename(&page.name);
    if stem.is_empty() {
        format!("note_{}.txt", index + 1)
    } else {
        format!("{}.txt", stem)
    }
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Writes exports as files into a directory.
pub struct DirExporter {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, oldest first.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FileExporter for DirExporter {
    fn export(&mut self, filename: &str, content: &str, mime_type: &str) -> Result<()> {
        if mime_type != TEXT_MIME {
            return Err(NoteError::ExportFailed(format!(
                "unsupported type {}",
                mime_type
            )));
        }

        let path = self.dir.join(filename);
        fs::create_dir_all(&self.dir)
            .and_then(|_| fs::write(&path, content))
            .map_err(|e| NoteError::ExportFailed(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "page exported");
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_uses_page_name() {
        let page = Page::new("Groceries", "");
        assert_eq!(export_filename(&page, 0), "Groceries.txt");
    }

    #[test]
    fn filename_falls_back_to_position() {
        assert_eq!(export_filename(&Page::new("", "x"), 2), "note_3.txt");
        assert_eq!(export_filename(&Page::new("   ", "x"), 0), "note_1.txt");
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize_filename("Hello World"), "Hello World");
        assert_eq!(sanitize_filename("foo/bar"), "foo_bar");
        assert_eq!(sanitize_filename("baz\\qux"), "baz_qux");
    }

    #[test]
    fn dir_exporter_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = DirExporter::new(dir.path().join("out"));

        exporter.export("Page 1.txt", "hello", TEXT_MIME).unwrap();

        let path = dir.path().join("out").join("Page 1.txt");
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert_eq!(exporter.written(), &[path]);
    }

    #[test]
    fn dir_exporter_rejects_other_types() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = DirExporter::new(dir.path());
        assert!(matches!(
            exporter.export("a.html", "<p>", "text/html"),
            Err(NoteError::ExportFailed(_))
        ));
        assert!(exporter.written().is_empty());
    }
}
