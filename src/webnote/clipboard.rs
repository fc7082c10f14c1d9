use crate::error::{NoteError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Something that can take text for the user's clipboard.
pub trait ClipboardWriter {
    fn write(&mut self, text: &str) -> Result<()>;
}

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses wl-copy, xclip or xsel, whichever spawns first
/// - Windows: uses clip.exe
#[derive(Debug, Default)]
pub struct SystemClipboard;

const NO_ARGS: &[&str] = &[];
const XCLIP_ARGS: &[&str] = &["-selection", "clipboard"];
const XSEL_ARGS: &[&str] = &["--clipboard", "--input"];

/// Clipboard helpers for this platform, tried in order.
fn helpers() -> &'static [(&'static str, &'static [&'static str])] {
    if cfg!(target_os = "macos") {
        return &[("pbcopy", NO_ARGS)];
    }
    if cfg!(target_os = "windows") {
        return &[("clip", NO_ARGS)];
    }
    if cfg!(target_os = "linux") {
        return &[
            ("wl-copy", NO_ARGS),
            ("xclip", XCLIP_ARGS),
            ("xsel", XSEL_ARGS),
        ];
    }
    &[]
}

impl ClipboardWriter for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        let mut last_error = "Clipboard not supported on this platform".to_string();
        for (program, args) in helpers() {
            match pipe_into(program, args, text) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::debug!(program, error = %e, "clipboard helper failed");
                    last_error = format!("{}: {}", program, e);
                }
            }
        }
        Err(NoteError::ClipboardDenied(last_error))
    }
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!(
            "{} exited with {}",
            program, status
        )))
    }
}
