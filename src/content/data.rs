//! Data definitions for the locomotion RON file.
//!
//! These structs mirror the structure in assets/data/locomotion.ron and are
//! used for deserialization only; validated values become resources.

use serde::{Deserialize, Serialize};

use crate::movement::LocomotionTuning;

/// Schema version this build understands.
pub const LOCOMOTION_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocomotionConfigDef {
    pub schema_version: u32,
    #[serde(default)]
    pub tuning: LocomotionTuning,
    #[serde(default)]
    pub bindings: KeyBindingsDef,
}

/// Key names as written in the file, e.g. "W", "Space", "ShiftLeft".
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindingsDef {
    pub forward: String,
    pub back: String,
    pub left: String,
    pub right: String,
    pub jump: String,
    pub boost: String,
    pub debug_toggle: String,
    pub orbit_left: String,
    pub orbit_right: String,
}

impl Default for KeyBindingsDef {
    fn default() -> Self {
        Self {
            forward: "W".to_string(),
            back: "S".to_string(),
            left: "A".to_string(),
            right: "D".to_string(),
            jump: "Space".to_string(),
            boost: "M".to_string(),
            debug_toggle: "T".to_string(),
            orbit_left: "Q".to_string(),
            orbit_right: "E".to_string(),
        }
    }
}

impl KeyBindingsDef {
    /// (action, key name) pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("forward", &self.forward),
            ("back", &self.back),
            ("left", &self.left),
            ("right", &self.right),
            ("jump", &self.jump),
            ("boost", &self.boost),
            ("debug_toggle", &self.debug_toggle),
            ("orbit_left", &self.orbit_left),
            ("orbit_right", &self.orbit_right),
        ]
    }
}
