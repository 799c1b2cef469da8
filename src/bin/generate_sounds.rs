//! Writes the game's sound cues as WAV files.
//!
//! Usage: `generate-sounds [OUTPUT_DIR]`. Without an argument the files go to the
//! configured sound directory (`PACMAN_SOUND_DIR`, default `assets/sound`).

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use pacman_3002::audio::Sound;
use pacman_3002::config::Settings;
use pacman_3002::logging;
use pacman_3002::synth;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use strum::IntoEnumIterator;
use tracing::info;

fn main() -> Result<()> {
    let settings = Settings::load()?;
    logging::setup_logging(settings.log_filter.as_deref());

    let dir = env::args_os().nth(1).map(PathBuf::from).unwrap_or(settings.sound_dir);
    fs::create_dir_all(&dir).with_context(|| format!("Could not create {}", dir.display()))?;

    let mut rng = match settings.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    info!(dir = %dir.display(), "Generating sounds");
    for sound in Sound::iter() {
        let path = synth::write_sound(&dir, sound, &mut rng)
            .with_context(|| format!("Could not write the {} cue", sound.file_stem()))?;
        info!(path = %path.display(), "Wrote {:?}", sound);
    }
    info!("Sounds generated successfully");
    Ok(())
}
