use crate::error::{Result, RosterError};
use std::io::Write;
use std::process::{Command, Stdio};

/// Anything that can put text on a clipboard.
pub trait ClipboardAdapter {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Copies through the platform clipboard helper.
/// - macOS: pbcopy
/// - Linux: xclip, falling back to xsel
/// - Windows: clip.exe
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardAdapter for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// What happened to a copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// The clipboard was unavailable; the text must be shown for manual copy.
    Manual(String),
}

/// Best-effort delivery: a clipboard failure is never an error, it turns into
/// [`CopyOutcome::Manual`] carrying the same text.
pub fn deliver<C: ClipboardAdapter + ?Sized>(clipboard: &mut C, text: &str) -> CopyOutcome {
    match clipboard.copy(text) {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            log::warn!("Clipboard unavailable, falling back to manual copy: {}", e);
            CopyOutcome::Manual(text.to_string())
        }
    }
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        pipe_to("xclip", &["-selection", "clipboard"], text)
            .or_else(|_| pipe_to("xsel", &["--clipboard", "--input"], text))
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(RosterError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| RosterError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| RosterError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| RosterError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(RosterError::Clipboard(format!("{} exited with error", program)))
    }
}
