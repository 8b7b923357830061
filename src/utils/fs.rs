use std::fs;
use std::path::Path;

use crate::utils::error::CliptocResult;

/// Read a UTF-8 text file to string
pub fn read_text<P: AsRef<Path>>(path: P) -> CliptocResult<String> {
    Ok(fs::read_to_string(path.as_ref())?)
}

/// Write a string to a file, creating parent directories and the file if needed
pub fn write_text<P: AsRef<Path>>(path: P, contents: &str) -> CliptocResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path.as_ref(), contents)?;
    Ok(())
}
