//! Validation of loaded locomotion content.

use thiserror::Error;

use super::data::{LOCOMOTION_SCHEMA_VERSION, LocomotionConfigDef};
use super::keys::keycode_from_str;
use crate::movement::{KeyBindings, LocomotionTuning, TuningError};

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("unsupported schema_version {found} (expected {})", LOCOMOTION_SCHEMA_VERSION)]
    UnsupportedSchema { found: u32 },
    #[error(transparent)]
    Tuning(#[from] TuningError),
    #[error("binding '{action}' names unknown key '{key}'")]
    UnknownKey { action: &'static str, key: String },
}

/// Validate a config and turn it into resources.
/// Returns every problem found, not just the first.
pub fn resolve_config(
    def: &LocomotionConfigDef,
) -> Result<(LocomotionTuning, KeyBindings), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if def.schema_version != LOCOMOTION_SCHEMA_VERSION {
        errors.push(ValidationError::UnsupportedSchema {
            found: def.schema_version,
        });
    }

    errors.extend(def.tuning.problems().into_iter().map(ValidationError::from));

    let mut keys = Vec::with_capacity(9);
    for (action, name) in def.bindings.entries() {
        match keycode_from_str(name) {
            Some(key) => keys.push(key),
            None => errors.push(ValidationError::UnknownKey {
                action,
                key: name.to_string(),
            }),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let bindings = KeyBindings {
        forward: keys[0],
        back: keys[1],
        left: keys[2],
        right: keys[3],
        jump: keys[4],
        boost: keys[5],
        debug_toggle: keys[6],
        orbit_left: keys[7],
        orbit_right: keys[8],
    };
    Ok((def.tuning.clone(), bindings))
}
