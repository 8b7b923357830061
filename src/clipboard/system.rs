use arboard::Clipboard;
use log::debug;

use crate::clipboard::{DocumentSink, DocumentSource};
use crate::utils::error::CliptocResult;

/// The desktop clipboard, text content only
pub struct SystemClipboard {
    clipboard: Clipboard,
    wait_for_paste: bool,
}

impl SystemClipboard {
    /// Connect to the platform clipboard.
    ///
    /// With `wait_for_paste`, a write on Linux blocks until another program
    /// takes over the clipboard, so the text survives without a clipboard
    /// manager. Other platforms keep the text after exit and ignore it.
    pub fn open(wait_for_paste: bool) -> CliptocResult<Self> {
        let clipboard = Clipboard::new()?;
        debug!("Connected to system clipboard");
        Ok(Self {
            clipboard,
            wait_for_paste,
        })
    }
}

#[cfg(target_os = "linux")]
fn store_text(clipboard: &mut Clipboard, text: &str, wait_for_paste: bool) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if wait_for_paste {
        debug!("Serving clipboard until another program takes it over");
        clipboard.set().wait().text(text)
    } else {
        debug!("Clipboard text is handed to the clipboard manager on exit; without one it is lost (see --wait)");
        clipboard.set_text(text)
    }
}

#[cfg(not(target_os = "linux"))]
fn store_text(clipboard: &mut Clipboard, text: &str, _wait_for_paste: bool) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

impl DocumentSource for SystemClipboard {
    fn read(&mut self) -> CliptocResult<String> {
        let text = self.clipboard.get_text()?;
        debug!("Read {} bytes from clipboard", text.len());
        Ok(text)
    }

    fn describe(&self) -> String {
        "clipboard".to_string()
    }
}

impl DocumentSink for SystemClipboard {
    fn write(&mut self, text: &str) -> CliptocResult<()> {
        store_text(&mut self.clipboard, text, self.wait_for_paste)?;
        debug!("Wrote {} bytes to clipboard", text.len());
        Ok(())
    }

    fn describe(&self) -> String {
        "clipboard".to_string()
    }
}
