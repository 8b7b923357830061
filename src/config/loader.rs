use std::path::{Path, PathBuf};

use log::debug;

use crate::config::defaults::CONFIG_FILES;
use crate::config::types::{Config, ConfigLayer};
use crate::config::validation;
use crate::utils::error::{CliptocError, CliptocResult};
use crate::utils::fs;

/// Load configuration from config files, then apply `overrides` on top.
///
/// With `config_files` set, exactly those files are read (each must exist);
/// otherwise the default file names are looked up in `base_dir`.
pub fn load_config<P: AsRef<Path>>(
    base_dir: P,
    config_files: Option<Vec<PathBuf>>,
    overrides: &ConfigLayer,
) -> CliptocResult<Config> {
    // Start with default configuration
    let mut config = Config::default();

    let config_paths = match config_files {
        Some(paths) => paths,
        None => find_default_config_files(&base_dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            let layer = read_config_file(&path)?;
            config.apply(&layer);
        }
    }

    config.apply(overrides);

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(base_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| base_dir.as_ref().join(name))
        .filter(|path| path.is_file())
        .collect()
}

/// Read one configuration file, picking the format from its extension
fn read_config_file(config_path: &Path) -> CliptocResult<ConfigLayer> {
    if !config_path.exists() {
        return Err(CliptocError::config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_text(config_path).map_err(|e| {
        CliptocError::config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    if content.trim().is_empty() {
        debug!("Configuration file {} is empty", config_path.display());
        return Ok(ConfigLayer::default());
    }

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    match ext.as_deref() {
        // Assume YAML if no extension
        Some("yml") | Some("yaml") | None => parse_yaml_config(&content, config_path),
        Some("toml") => parse_toml_config(&content, config_path),
        Some("json") => parse_json_config(&content, config_path),
        Some(other) => Err(CliptocError::config(format!(
            "Unsupported configuration file format: {}",
            other
        ))),
    }
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> CliptocResult<ConfigLayer> {
    serde_yaml::from_str(content).map_err(|e| {
        CliptocError::config(format!(
            "Failed to parse YAML configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> CliptocResult<ConfigLayer> {
    toml::from_str(content).map_err(|e| {
        CliptocError::config(format!(
            "Failed to parse TOML configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> CliptocResult<ConfigLayer> {
    serde_json::from_str(content).map_err(|e| {
        CliptocError::config(format!(
            "Failed to parse JSON configuration ({}): {}",
            path.display(),
            e
        ))
    })
}
