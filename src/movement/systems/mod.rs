//! Movement domain: system modules for locomotion updates.

pub(crate) mod adapters;
pub(crate) mod input;
pub(crate) mod liquid;
pub(crate) mod locomotion;

pub(crate) use input::{read_input, toggle_debug_mode};
pub(crate) use liquid::sync_liquid_contact;
pub(crate) use locomotion::drive_locomotion;
