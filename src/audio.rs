//! Sound cues and the sinks that play them.
//!
//! The game never depends on audio working. Every cue goes through a [`SoundSink`],
//! which reports per cue whether it can be played at all; cues it cannot play are
//! skipped quietly.

use strum_macros::{AsRefStr, EnumIter};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
pub enum Sound {
    /// Pickup chomp. Generated and loadable, but the game does not trigger it.
    Chomp,
    EatGhost,
    Death,
    LevelComplete,
    Powerup,
}

impl Sound {
    /// The file name, without extension, this cue is stored under.
    pub const fn file_stem(self) -> &'static str {
        match self {
            Sound::Chomp => "chomp",
            Sound::EatGhost => "eat_ghost",
            Sound::Death => "death",
            Sound::LevelComplete => "win",
            Sound::Powerup => "powerup",
        }
    }
}

/// Something that can play sound cues.
pub trait SoundSink {
    /// Whether `sound` was loaded and can be played right now.
    fn is_available(&self, sound: Sound) -> bool;

    /// Plays `sound` once. Only called for available cues.
    fn play(&mut self, sound: Sound);
}

/// Plays `sound` on `sink` if the sink has it, otherwise does nothing.
pub fn cue(sink: &mut dyn SoundSink, sound: Sound) {
    if sink.is_available(sound) {
        sink.play(sound);
    } else {
        trace!(sound = sound.as_ref(), "Sound unavailable, skipping");
    }
}

/// A sink with no sounds at all, for headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl SoundSink for NullSink {
    fn is_available(&self, _sound: Sound) -> bool {
        false
    }

    fn play(&mut self, _sound: Sound) {}
}

#[cfg(feature = "sdl")]
pub use mixer_sink::MixerSink;

#[cfg(feature = "sdl")]
mod mixer_sink {
    use std::collections::HashMap;
    use std::path::Path;

    use anyhow::{anyhow, Result};
    use sdl2::mixer::{self, Chunk, AUDIO_S16LSB, MAX_VOLUME};
    use strum::IntoEnumIterator;
    use tracing::{debug, warn};

    use super::{Sound, SoundSink};
    use crate::config::Settings;

    const AUDIO_FREQUENCY: i32 = 44_100;
    const AUDIO_CHANNELS: i32 = 4;
    const CHUNK_SIZE: i32 = 512;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum MixerState {
        Enabled,
        Muted,
        Disabled,
    }

    impl MixerState {
        /// A device that failed to open stays disabled.
        fn with_muted(self, muted: bool) -> Self {
            match (self, muted) {
                (MixerState::Disabled, _) => MixerState::Disabled,
                (_, true) => MixerState::Muted,
                (_, false) => MixerState::Enabled,
            }
        }
    }

    /// Plays cues through SDL2_mixer from `<sound_dir>/<stem>.wav`.
    ///
    /// A cue whose file is missing or unreadable is simply unavailable. If the audio
    /// device cannot be opened the whole sink is disabled.
    pub struct MixerSink {
        sounds: HashMap<Sound, Chunk>,
        state: MixerState,
    }

    impl MixerSink {
        pub fn new(settings: &Settings) -> Self {
            match Self::try_new(&settings.sound_dir, settings.volume) {
                Ok(mut sink) => {
                    if settings.muted {
                        sink.state = MixerState::Muted;
                    }
                    sink
                }
                Err(e) => {
                    warn!("Failed to initialize audio: {}. Audio will be disabled.", e);
                    Self {
                        sounds: HashMap::new(),
                        state: MixerState::Disabled,
                    }
                }
            }
        }

        fn try_new(sound_dir: &Path, volume: f32) -> Result<Self> {
            mixer::open_audio(AUDIO_FREQUENCY, AUDIO_S16LSB, 1, CHUNK_SIZE)
                .map_err(|e| anyhow!("Failed to open audio: {}", e))?;
            mixer::allocate_channels(AUDIO_CHANNELS);

            let chunk_volume = (volume * MAX_VOLUME as f32).round() as i32;
            let sounds: HashMap<Sound, Chunk> = Sound::iter()
                .filter_map(|sound| {
                    let path = sound_dir.join(format!("{}.wav", sound.file_stem()));
                    match Chunk::from_file(&path) {
                        Ok(mut chunk) => {
                            chunk.set_volume(chunk_volume);
                            Some((sound, chunk))
                        }
                        Err(e) => {
                            warn!(path = %path.display(), "Failed to load sound {:?}: {}", sound, e);
                            None
                        }
                    }
                })
                .collect();

            debug!(loaded = sounds.len(), dir = %sound_dir.display(), "Sounds loaded");
            Ok(Self {
                sounds,
                state: MixerState::Enabled,
            })
        }

        pub fn is_muted(&self) -> bool {
            self.state == MixerState::Muted
        }

        pub fn set_muted(&mut self, muted: bool) {
            self.state = self.state.with_muted(muted);
        }
    }

    impl SoundSink for MixerSink {
        fn is_available(&self, sound: Sound) -> bool {
            self.state == MixerState::Enabled && self.sounds.contains_key(&sound)
        }

        fn play(&mut self, sound: Sound) {
            if let Some(chunk) = self.sounds.get(&sound) {
                if let Err(e) = mixer::Channel::all().play(chunk, 0) {
                    warn!("Could not play sound {:?}: {}", sound, e);
                }
            }
        }
    }

    impl Drop for MixerSink {
        fn drop(&mut self) {
            self.sounds.clear();
            if self.state != MixerState::Disabled {
                mixer::close_audio();
            }
        }
    }

}
