//! Audio domain: fire-and-forget sound cues for locomotion.

mod cues;

pub use cues::{CueBuffer, CueCategory, CueLibrary, CueRng, CueThrottle, PlayCue};

use bevy::prelude::*;

use crate::audio::cues::{load_cue_library, play_cues};

pub struct AudioCuesPlugin;

impl Plugin for AudioCuesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CueRng>()
            .init_resource::<CueThrottle>()
            .add_message::<PlayCue>()
            .add_systems(Startup, load_cue_library)
            .add_systems(Update, play_cues.after(crate::movement::LocomotionSet));
    }
}
