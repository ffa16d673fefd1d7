//! Data-driven locomotion config loaded from assets/data/locomotion.ron.

mod data;
mod keys;
mod loader;
mod validation;


use std::path::Path;

use bevy::prelude::*;

pub use data::{KeyBindingsDef, LOCOMOTION_SCHEMA_VERSION, LocomotionConfigDef};
pub use keys::keycode_from_str;
pub use loader::{ContentLoadError, load_locomotion_config, parse_locomotion_config};
pub use validation::{ValidationError, resolve_config};

pub const LOCOMOTION_CONFIG_PATH: &str = "assets/data/locomotion.ron";

/// Loads tuning and key bindings before the movement plugin reads them.
/// Any failure falls back to the built-in defaults.
pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let def = match load_locomotion_config(Path::new(LOCOMOTION_CONFIG_PATH)) {
            Ok(def) => def,
            Err(e) => {
                warn!("{e}; using default locomotion tuning");
                return;
            }
        };

        match resolve_config(&def) {
            Ok((tuning, bindings)) => {
                info!("Loaded locomotion config from {LOCOMOTION_CONFIG_PATH}");
                app.insert_resource(tuning).insert_resource(bindings);
            }
            Err(errors) => {
                for error in &errors {
                    warn!("Locomotion config: {error}");
                }
                warn!(
                    "{} problem(s) in {LOCOMOTION_CONFIG_PATH}; using default locomotion tuning",
                    errors.len()
                );
            }
        }
    }
}
