use log::warn;

use crate::config::Config;
use crate::utils::error::{CliptocError, CliptocResult};

/// Characters that would break out of the `class` attribute
const FORBIDDEN_CLASS_CHARS: [char; 4] = ['"', '<', '>', '&'];

/// Validate the configuration
pub fn validate_config(config: &Config) -> CliptocResult<()> {
    validate_levels(config)?;
    validate_nav_class(config)?;
    Ok(())
}

/// Validate the heading level range
fn validate_levels(config: &Config) -> CliptocResult<()> {
    if !(1..=6).contains(&config.max_level) {
        return Err(CliptocError::config(format!(
            "max_level must be between 1 and 6, got {}",
            config.max_level
        )));
    }

    if config.max_level < config.min_level() {
        return Err(CliptocError::config(format!(
            "max_level {} is below the shallowest listed level {} (set include_h1 to list level 1)",
            config.max_level,
            config.min_level()
        )));
    }

    if config.max_level == config.min_level() {
        warn!("TOC lists only level {} headings", config.max_level);
    }

    Ok(())
}

/// Validate the class of the `<nav>` wrapper
fn validate_nav_class(config: &Config) -> CliptocResult<()> {
    if config.nav_class.trim().is_empty() {
        return Err(CliptocError::config("nav_class must not be empty"));
    }

    if let Some(c) = config.nav_class.chars().find(|c| FORBIDDEN_CLASS_CHARS.contains(c)) {
        return Err(CliptocError::config(format!(
            "nav_class contains forbidden character '{}'",
            c
        )));
    }

    Ok(())
}
