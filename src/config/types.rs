use serde::Deserialize;

use crate::config::defaults;

/// Effective configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// List level-1 headings in the TOC
    pub include_h1: bool,

    /// Deepest heading level listed in the TOC
    pub max_level: u8,

    /// Suffix colliding slugs with `-1`, `-2`, ...
    pub unique_slugs: bool,

    /// Ignore heading-like lines inside fenced code blocks
    pub skip_code_blocks: bool,

    /// Class of the `<nav>` wrapper
    pub nav_class: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_h1: false,
            max_level: defaults::default_max_level(),
            unique_slugs: false,
            skip_code_blocks: false,
            nav_class: defaults::default_nav_class(),
        }
    }
}

impl Config {
    /// Shallowest heading level listed in the TOC
    pub fn min_level(&self) -> u8 {
        if self.include_h1 {
            defaults::TITLE_LEVEL
        } else {
            defaults::SECTION_LEVEL
        }
    }

    /// Overwrite every setting present in `layer`
    pub fn apply(&mut self, layer: &ConfigLayer) {
        if let Some(include_h1) = layer.include_h1 {
            self.include_h1 = include_h1;
        }
        if let Some(max_level) = layer.max_level {
            self.max_level = max_level;
        }
        if let Some(unique_slugs) = layer.unique_slugs {
            self.unique_slugs = unique_slugs;
        }
        if let Some(skip_code_blocks) = layer.skip_code_blocks {
            self.skip_code_blocks = skip_code_blocks;
        }
        if let Some(nav_class) = &layer.nav_class {
            self.nav_class = nav_class.clone();
        }
    }
}

/// Partial configuration from one file or from the command line.
/// Only the keys that are set override earlier layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub include_h1: Option<bool>,
    pub max_level: Option<u8>,
    pub unique_slugs: Option<bool>,
    pub skip_code_blocks: Option<bool>,
    pub nav_class: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.include_h1);
        assert_eq!(config.min_level(), 2);
        assert_eq!(config.max_level, 6);
        assert_eq!(config.nav_class, "toc");
    }

    #[test]
    fn test_apply_only_overrides_set_keys() {
        let mut config = Config::default();
        config.apply(&ConfigLayer {
            max_level: Some(4),
            ..ConfigLayer::default()
        });
        config.apply(&ConfigLayer {
            include_h1: Some(true),
            nav_class: Some("contents".to_string()),
            ..ConfigLayer::default()
        });

        assert!(config.include_h1);
        assert_eq!(config.min_level(), 1);
        assert_eq!(config.max_level, 4);
        assert_eq!(config.nav_class, "contents");
        assert!(!config.unique_slugs);
    }

    #[test]
    fn test_parsed_layer_keeps_remaining_defaults() {
        let layer: ConfigLayer = serde_yaml::from_str("unique_slugs: true\n").unwrap();
        let mut config = Config::default();
        config.apply(&layer);

        assert_eq!(
            config,
            Config {
                unique_slugs: true,
                ..Config::default()
            }
        );
    }
}
