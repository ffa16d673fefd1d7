//! Audio domain: cue categories, clip library, and playback systems.

use std::collections::HashMap;

use bevy::audio::Volume;
use bevy::ecs::message::Message;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::movement::AudioCues;

/// Randomized sound sets, split by surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueCategory {
    LandStep,
    WaterStep,
    LandJump,
    WaterJump,
}

impl CueCategory {
    pub const ALL: [CueCategory; 4] = [
        CueCategory::LandStep,
        CueCategory::WaterStep,
        CueCategory::LandJump,
        CueCategory::WaterJump,
    ];

    pub fn step(in_liquid: bool) -> Self {
        if in_liquid {
            CueCategory::WaterStep
        } else {
            CueCategory::LandStep
        }
    }

    /// Jump and landing share one set.
    pub fn jump(in_liquid: bool) -> Self {
        if in_liquid {
            CueCategory::WaterJump
        } else {
            CueCategory::LandJump
        }
    }

    fn clip_paths(self) -> &'static [&'static str] {
        match self {
            CueCategory::LandStep => &[
                "audio/steps/land_1.ogg",
                "audio/steps/land_2.ogg",
                "audio/steps/land_3.ogg",
            ],
            CueCategory::WaterStep => &["audio/steps/water_1.ogg", "audio/steps/water_2.ogg"],
            CueCategory::LandJump => &["audio/jumps/land_1.ogg", "audio/jumps/land_2.ogg"],
            CueCategory::WaterJump => &["audio/jumps/water_1.ogg", "audio/jumps/water_2.ogg"],
        }
    }

    /// Minimum seconds between two clips of this category.
    fn min_interval(self) -> f32 {
        match self {
            CueCategory::LandStep | CueCategory::WaterStep => 0.3,
            CueCategory::LandJump | CueCategory::WaterJump => 0.0,
        }
    }
}

/// Message requesting a one-shot cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCue {
    Random(CueCategory),
    Dash,
}

impl Message for PlayCue {}

/// Collects cues requested during one locomotion tick.
#[derive(Debug, Default)]
pub struct CueBuffer(pub Vec<PlayCue>);

impl AudioCues for CueBuffer {
    fn play_random(&mut self, category: CueCategory) {
        self.0.push(PlayCue::Random(category));
    }

    fn play_dash(&mut self) {
        self.0.push(PlayCue::Dash);
    }
}

#[derive(Resource, Debug, Default)]
pub struct CueLibrary {
    pub clips: HashMap<CueCategory, Vec<Handle<AudioSource>>>,
    pub dash: Option<Handle<AudioSource>>,
}

impl CueLibrary {
    pub fn clips(&self, category: CueCategory) -> &[Handle<AudioSource>] {
        self.clips.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Randomized clips, not counting the dash clip.
    pub fn clip_count(&self) -> usize {
        self.clips.values().map(Vec::len).sum()
    }
}

/// Seeded generator for clip selection.
#[derive(Resource, Debug)]
pub struct CueRng(pub ChaCha8Rng);

impl CueRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Pick an index uniformly from `len` clips.
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.0.random_range(0..len))
    }
}

impl Default for CueRng {
    fn default() -> Self {
        Self::from_seed(rand::random::<u64>())
    }
}

/// Tracks when each category last played.
#[derive(Resource, Debug, Default)]
pub struct CueThrottle {
    last_played: HashMap<CueCategory, f32>,
}

impl CueThrottle {
    /// Returns true and records `now` if the category may play at `now`.
    pub fn allow(&mut self, category: CueCategory, now: f32) -> bool {
        if let Some(last) = self.last_played.get(&category) {
            if now - last < category.min_interval() {
                return false;
            }
        }
        self.last_played.insert(category, now);
        true
    }
}

pub(crate) fn load_cue_library(mut commands: Commands, asset_server: Res<AssetServer>) {
    let mut library = CueLibrary::default();
    for category in CueCategory::ALL {
        let handles = category
            .clip_paths()
            .iter()
            .map(|path| asset_server.load(*path))
            .collect();
        library.clips.insert(category, handles);
    }
    library.dash = Some(asset_server.load("audio/dash.ogg"));

    info!(
        "Cue library: {} clips across {} categories plus dash",
        library.clip_count(),
        library.clips.len()
    );
    commands.insert_resource(library);
}

pub(crate) fn play_cues(
    mut commands: Commands,
    time: Res<Time>,
    library: Option<Res<CueLibrary>>,
    mut rng: ResMut<CueRng>,
    mut throttle: ResMut<CueThrottle>,
    mut requests: MessageReader<PlayCue>,
) {
    let Some(library) = library else {
        requests.clear();
        return;
    };
    let now = time.elapsed_secs();

    for request in requests.read() {
        let clip = match *request {
            PlayCue::Random(category) => {
                if !throttle.allow(category, now) {
                    continue;
                }
                let clips = library.clips(category);
                rng.pick(clips.len()).map(|index| clips[index].clone())
            }
            PlayCue::Dash => library.dash.clone(),
        };

        if let Some(clip) = clip {
            commands.spawn((
                AudioPlayer::new(clip),
                PlaybackSettings::DESPAWN.with_volume(Volume::Linear(0.8)),
            ));
        }
    }
}
