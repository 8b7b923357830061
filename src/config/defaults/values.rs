/// Deepest heading level listed in the TOC
pub fn default_max_level() -> u8 {
    6
}

/// Class of the `<nav>` element wrapping the TOC
pub fn default_nav_class() -> String {
    "toc".to_string()
}

/// Shallowest listed level when top-level headings are excluded
pub const SECTION_LEVEL: u8 = 2;

/// Shallowest listed level when top-level headings are included
pub const TITLE_LEVEL: u8 = 1;
