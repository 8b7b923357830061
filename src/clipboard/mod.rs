mod file;
mod system;

pub use file::FileDocument;
pub use system::SystemClipboard;

use crate::utils::error::CliptocResult;

/// Where the markdown is read from
pub trait DocumentSource {
    /// Read the whole document as text
    fn read(&mut self) -> CliptocResult<String>;

    /// Human readable name used in status messages
    fn describe(&self) -> String;
}

/// Where the processed markdown is written to
pub trait DocumentSink {
    /// Replace the target's content with `text`
    fn write(&mut self, text: &str) -> CliptocResult<()>;

    /// Human readable name used in status messages
    fn describe(&self) -> String;
}
