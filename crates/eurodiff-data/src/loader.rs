//! File loading: format detection, deserialization, and validation of
//! scenarios and configuration files.

use std::path::{Path, PathBuf};

use eurodiff_core::config::DiffusionConfig;
use eurodiff_core::error::ConfigError;
use eurodiff_core::territory::Territory;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::input::{InputError, parse_cases};
use crate::schema::ScenarioData;

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while loading an input or configuration file.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// The file was read but its cases break the input rules.
    #[error("invalid input in {file}: {source}")]
    Input {
        file: PathBuf,
        #[source]
        source: InputError,
    },

    /// A configuration file holds an unusable value.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The line-oriented country list.
    Text,
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("txt") => Ok(Format::Text),
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// Deserialization
// ===========================================================================

fn deserialize_str<T: DeserializeOwned>(
    content: &str,
    format: Format,
    path: &Path,
) -> Result<T, DataLoadError> {
    let parse_err = |detail: String| DataLoadError::Parse {
        file: path.to_path_buf(),
        detail,
    };
    match format {
        Format::Ron => ron::from_str(content).map_err(|e| parse_err(e.to_string())),
        Format::Json => serde_json::from_str(content).map_err(|e| parse_err(e.to_string())),
        Format::Toml => toml::from_str(content).map_err(|e| parse_err(e.to_string())),
        Format::Text => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

/// Read a structured file and deserialize it according to its format
/// (detected from extension).
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    deserialize_str(&content, format, path)
}

// ===========================================================================
// Loading
// ===========================================================================

/// Load and validate a [`DiffusionConfig`]. Missing fields take their
/// defaults.
pub fn load_config(path: &Path) -> Result<DiffusionConfig, DataLoadError> {
    let config: DiffusionConfig = deserialize_file(path)?;
    config.validate()?;
    info!(file = %path.display(), ?config, "loaded configuration");
    Ok(config)
}

/// Parse scenario content that has already been read.
pub fn parse_scenario(
    content: &str,
    format: Format,
    path: &Path,
    config: &DiffusionConfig,
) -> Result<Vec<Vec<Territory>>, DataLoadError> {
    let cases = match format {
        Format::Text => parse_cases(content, config),
        _ => deserialize_str::<ScenarioData>(content, format, path)?.into_cases(config),
    };
    cases.map_err(|source| DataLoadError::Input {
        file: path.to_path_buf(),
        source,
    })
}

/// Load every case from a text or structured scenario file.
pub fn load_scenario(
    path: &Path,
    config: &DiffusionConfig,
) -> Result<Vec<Vec<Territory>>, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    let cases = parse_scenario(&content, format, path, config)?;
    info!(file = %path.display(), ?format, cases = cases.len(), "loaded scenario");
    Ok(cases)
}

// ===========================================================================
// Tests
// ===========================================================================
