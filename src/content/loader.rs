//! Loader for the locomotion RON file at startup.

use ron::Options;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::data::LocomotionConfigDef;

/// Error type for content loading failures.
#[derive(Debug, Error)]
#[error("Failed to load {file}: {message}")]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse locomotion config text; `file_name` is only used for errors.
pub fn parse_locomotion_config(
    contents: &str,
    file_name: &str,
) -> Result<LocomotionConfigDef, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

pub fn load_locomotion_config(path: &Path) -> Result<LocomotionConfigDef, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_locomotion_config(&contents, &file_name)
}
