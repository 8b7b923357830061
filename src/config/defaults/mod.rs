pub mod values;

// Export the default values
pub use values::*;

/// Configuration files looked up in the working directory, merged in this order
pub const CONFIG_FILES: [&str; 4] = [
    ".cliptoc.yml",
    ".cliptoc.yaml",
    ".cliptoc.toml",
    ".cliptoc.json",
];
