//! Runtime settings, read from `PACMAN_*` environment variables.

use std::path::PathBuf;

use figment::{providers::Env, Figment};
use serde::Deserialize;

use crate::constants::DEFAULT_FPS;
use crate::error::{GameError, GameResult};

/// Validated settings for a run of the game.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Simulation and presentation rate.
    pub fps: u32,
    /// Window size multiplier over the playfield's pixel size.
    pub scale: f32,
    pub fullscreen: bool,
    pub muted: bool,
    /// Sound volume between 0 and 1.
    pub volume: f32,
    /// Directory holding `<cue>.wav` files.
    pub sound_dir: PathBuf,
    /// Seed for ghost steering. Unset means a fresh seed every run.
    pub seed: Option<u64>,
    /// Overrides `RUST_LOG` when set.
    pub log_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            scale: default_scale(),
            fullscreen: false,
            muted: false,
            volume: default_volume(),
            sound_dir: default_sound_dir(),
            seed: None,
            log_filter: None,
        }
    }
}

/// Settings as they come out of the environment, before validation.
#[derive(Debug, Deserialize)]
struct RawSettings {
    #[serde(default = "default_fps")]
    fps: u32,
    #[serde(default = "default_scale")]
    scale: f32,
    #[serde(default)]
    fullscreen: bool,
    #[serde(default)]
    muted: bool,
    #[serde(default = "default_volume")]
    volume: f32,
    #[serde(default = "default_sound_dir")]
    sound_dir: PathBuf,
    seed: Option<u64>,
    log_filter: Option<String>,
}

impl TryFrom<RawSettings> for Settings {
    type Error = GameError;

    fn try_from(raw: RawSettings) -> GameResult<Self> {
        if raw.fps == 0 {
            return Err(GameError::Config("fps must be at least 1".to_string()));
        }
        if !(raw.scale > 0.0 && raw.scale.is_finite()) {
            return Err(GameError::Config(format!("scale must be positive, got {}", raw.scale)));
        }
        if !(0.0..=1.0).contains(&raw.volume) {
            return Err(GameError::Config(format!("volume must be within 0..=1, got {}", raw.volume)));
        }

        Ok(Settings {
            fps: raw.fps,
            scale: raw.scale,
            fullscreen: raw.fullscreen,
            muted: raw.muted,
            volume: raw.volume,
            sound_dir: raw.sound_dir,
            seed: raw.seed,
            log_filter: raw.log_filter.filter(|filter| !filter.trim().is_empty()),
        })
    }
}

impl Settings {
    /// The provider chain settings are read from.
    pub fn figment() -> Figment {
        Figment::new().merge(Env::prefixed("PACMAN_"))
    }

    /// Extracts and validates settings from `figment`.
    pub fn from_figment(figment: &Figment) -> GameResult<Self> {
        let raw: RawSettings = figment.extract()?;
        Settings::try_from(raw)
    }

    /// Loads settings from the environment.
    pub fn load() -> GameResult<Self> {
        Self::from_figment(&Self::figment())
    }
}

fn default_fps() -> u32 {
    DEFAULT_FPS
}

fn default_scale() -> f32 {
    1.0
}

fn default_volume() -> f32 {
    0.3
}

fn default_sound_dir() -> PathBuf {
    PathBuf::from("assets/sound")
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let settings = Settings::load().unwrap();
            assert_eq!(settings, Settings::default());
            assert_eq!(settings.fps, 60);
            assert_eq!(settings.volume, 0.3);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("PACMAN_FPS", "30");
            jail.set_env("PACMAN_SEED", "1234");
            jail.set_env("PACMAN_MUTED", "true");
            jail.set_env("PACMAN_SOUND_DIR", "/tmp/sounds");

            let settings = Settings::load().unwrap();
            assert_eq!(settings.fps, 30);
            assert_eq!(settings.seed, Some(1234));
            assert!(settings.muted);
            assert_eq!(settings.sound_dir, PathBuf::from("/tmp/sounds"));
            Ok(())
        });
    }

    #[test]
    fn test_rejects_zero_fps() {
        Jail::expect_with(|jail| {
            jail.set_env("PACMAN_FPS", "0");
            assert!(matches!(Settings::load(), Err(GameError::Config(_))));
            Ok(())
        });
    }

    #[test]
    fn test_rejects_loud_volume() {
        Jail::expect_with(|jail| {
            jail.set_env("PACMAN_VOLUME", "1.5");
            assert!(matches!(Settings::load(), Err(GameError::Config(_))));
            Ok(())
        });
    }

    #[test]
    fn test_blank_log_filter_is_unset() {
        Jail::expect_with(|jail| {
            jail.set_env("PACMAN_LOG_FILTER", "  ");
            assert_eq!(Settings::load().unwrap().log_filter, None);
            Ok(())
        });
    }
}
