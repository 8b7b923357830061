use std::path::{Path, PathBuf};

use log::debug;

use crate::clipboard::{DocumentSink, DocumentSource};
use crate::utils::error::CliptocResult;
use crate::utils::fs;

/// A markdown file used instead of the clipboard
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
}

impl FileDocument {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DocumentSource for FileDocument {
    fn read(&mut self) -> CliptocResult<String> {
        let text = fs::read_text(&self.path)?;
        debug!("Read {} bytes from {}", text.len(), self.path.display());
        Ok(text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

impl DocumentSink for FileDocument {
    fn write(&mut self, text: &str) -> CliptocResult<()> {
        fs::write_text(&self.path, text)?;
        debug!("Wrote {} bytes to {}", text.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = FileDocument::new(dir.path().join("doc.md"));

        DocumentSink::write(&mut doc, "## Hello\n").unwrap();
        assert_eq!(DocumentSource::read(&mut doc).unwrap(), "## Hello\n");
        assert!(DocumentSource::describe(&doc).ends_with("doc.md"));
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = FileDocument::new(dir.path().join("missing.md"));

        let err = DocumentSource::read(&mut doc).unwrap_err();
        assert!(matches!(err, crate::utils::error::CliptocError::Io(_)));
    }
}
