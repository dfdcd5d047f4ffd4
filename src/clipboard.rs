//! Clipboard copy of the primary table as tab-separated text

use crate::error::{HelperError, HelperResult};
use crate::types::UploadEntry;
use tracing::info;

/// Somewhere copied text can be placed
pub trait ClipboardSink {
    fn set_text(&mut self, text: String) -> HelperResult<()>;
}

/// The operating system clipboard
///
/// The connection is opened on the first copy and kept for as long as this
/// value lives. On X11 and Wayland the copied text is served by that
/// connection, so it disappears once the value is dropped unless a clipboard
/// manager has taken it over. Keep one `SystemClipboard` for the whole session,
/// or use [`SystemClipboard::wait_for_takeover`] when the process exits right
/// after copying.
#[derive(Default)]
pub struct SystemClipboard {
    #[cfg(not(coverage))]
    connection: Option<arboard::Clipboard>,
    wait_for_takeover: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make each copy block until another program owns the clipboard
    /// (X11/Wayland only; elsewhere the system keeps the text anyway)
    pub fn wait_for_takeover(mut self) -> Self {
        self.wait_for_takeover = true;
        self
    }

    pub fn waits_for_takeover(&self) -> bool {
        self.wait_for_takeover
    }

    /// Whether a clipboard connection has been opened yet
    #[cfg(not(coverage))]
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    #[cfg(coverage)]
    pub fn is_connected(&self) -> bool {
        false
    }
}

#[cfg(not(coverage))]
fn clipboard_error(e: arboard::Error) -> HelperError {
    HelperError::Clipboard(e.to_string())
}

#[cfg(all(
    not(coverage),
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_text_and_wait(connection: &mut arboard::Clipboard, text: String) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;
    connection.set().wait().text(text)
}

#[cfg(all(
    not(coverage),
    not(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))
))]
fn set_text_and_wait(connection: &mut arboard::Clipboard, text: String) -> Result<(), arboard::Error> {
    connection.set_text(text)
}

impl ClipboardSink for SystemClipboard {
    #[cfg(not(coverage))]
    fn set_text(&mut self, text: String) -> HelperResult<()> {
        let connection = match self.connection.as_mut() {
            Some(connection) => connection,
            None => {
                let opened = arboard::Clipboard::new().map_err(clipboard_error)?;
                tracing::debug!("opened system clipboard");
                self.connection.insert(opened)
            }
        };

        if self.wait_for_takeover {
            set_text_and_wait(connection, text).map_err(clipboard_error)
        } else {
            connection.set_text(text).map_err(clipboard_error)
        }
    }

    #[cfg(coverage)]
    fn set_text(&mut self, _text: String) -> HelperResult<()> {
        Err(HelperError::Clipboard("clipboard disabled in coverage builds".to_string()))
    }
}

/// Keeps the last copied text in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: String) -> HelperResult<()> {
        self.contents = Some(text);
        Ok(())
    }
}

/// One line per entry, fields joined by tabs, no header
pub fn to_tsv(entries: &[UploadEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry.fields().join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Copy the entries to `sink`; returns the number of rows copied
pub fn copy_entries<S: ClipboardSink + ?Sized>(entries: &[UploadEntry], sink: &mut S) -> HelperResult<usize> {
    sink.set_text(to_tsv(entries))?;
    info!(rows = entries.len(), "copied upload entries to clipboard");
    Ok(entries.len())
}
