mod anchors;
mod generator;
mod parser;

pub use anchors::insert_anchors;
pub use generator::{build_toc, filter_headings};
pub use parser::extract_headings;

use crate::config::Config;

/// Options for table of contents generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocOptions {
    /// Minimum level to include (h1 = 1, h2 = 2, etc.)
    pub min_level: u8,
    /// Maximum level to include
    pub max_level: u8,
    /// CSS class of the wrapping `<nav>` element
    pub nav_class: String,
    /// Suffix repeated slugs with `-1`, `-2`, ...
    pub unique_slugs: bool,
    /// Ignore heading-like lines inside fenced code blocks
    pub skip_code_blocks: bool,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            min_level: 2,
            max_level: 6,
            nav_class: "toc".to_string(),
            unique_slugs: false,
            skip_code_blocks: false,
        }
    }
}

impl From<&Config> for TocOptions {
    fn from(config: &Config) -> Self {
        Self {
            min_level: config.min_level(),
            max_level: config.max_level,
            nav_class: config.nav_class.clone(),
            unique_slugs: config.unique_slugs,
            skip_code_blocks: config.skip_code_blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_config() {
        let config = Config {
            include_h1: true,
            max_level: 3,
            unique_slugs: true,
            ..Config::default()
        };
        let options = TocOptions::from(&config);

        assert_eq!(options.min_level, 1);
        assert_eq!(options.max_level, 3);
        assert!(options.unique_slugs);
        assert!(!options.skip_code_blocks);
        assert_eq!(options.nav_class, "toc");
    }

    #[test]
    fn test_default_config_matches_default_options() {
        assert_eq!(TocOptions::from(&Config::default()), TocOptions::default());
    }
}
