//! Offline synthesis of the game's sound cues as 16-bit mono WAV files.

use std::f32::consts::TAU;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::audio::Sound;

pub const SAMPLE_RATE: u32 = 44_100;
const BITS_PER_SAMPLE: u16 = 16;
const CHANNELS: u16 = 1;
const HEADER_LEN: usize = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    /// Uniform white noise. Frequency is ignored.
    Noise,
}

/// A single constant-pitch tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    pub frequency: f32,
    pub seconds: f32,
    /// Peak amplitude as a fraction of full scale.
    pub volume: f32,
}

impl Tone {
    /// The tone each cue is generated from.
    pub const fn for_sound(sound: Sound) -> Tone {
        let (waveform, frequency, seconds, volume) = match sound {
            Sound::Chomp => (Waveform::Square, 300.0, 0.1, 0.3),
            Sound::EatGhost => (Waveform::Sawtooth, 800.0, 0.2, 0.4),
            Sound::Death => (Waveform::Noise, 100.0, 0.5, 0.5),
            Sound::LevelComplete => (Waveform::Sine, 600.0, 1.0, 0.4),
            Sound::Powerup => (Waveform::Sine, 1000.0, 0.3, 0.3),
        };
        Tone {
            waveform,
            frequency,
            seconds,
            volume,
        }
    }

    pub fn sample_count(&self) -> usize {
        (SAMPLE_RATE as f32 * self.seconds) as usize
    }

    /// Renders the tone. `rng` is only drawn from for noise.
    pub fn render(&self, rng: &mut impl Rng) -> Vec<i16> {
        let amplitude = self.volume * i16::MAX as f32;
        (0..self.sample_count())
            .map(|i| {
                let t = i as f32 / SAMPLE_RATE as f32;
                let phase = self.frequency * t;
                let value = match self.waveform {
                    Waveform::Sine => (TAU * phase).sin(),
                    Waveform::Square => {
                        if (TAU * phase).sin() > 0.0 {
                            1.0
                        } else {
                            -1.0
                        }
                    }
                    Waveform::Sawtooth => 2.0 * (phase - (phase + 0.5).floor()),
                    Waveform::Noise => rng.random_range(-1.0..1.0),
                };
                (amplitude * value) as i16
            })
            .collect()
    }
}

/// Encodes samples as a complete PCM WAV file.
pub fn encode_wav(samples: &[i16]) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
    let byte_rate = SAMPLE_RATE * block_align as u32;

    let mut bytes = Vec::with_capacity(HEADER_LEN + samples.len() * 2);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&CHANNELS.to_le_bytes());
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&byte_rate.to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    bytes
}

/// Renders `sound` and writes it to `<dir>/<stem>.wav`, returning the path written.
pub fn write_sound(dir: &Path, sound: Sound, rng: &mut impl Rng) -> io::Result<PathBuf> {
    let path = dir.join(format!("{}.wav", sound.file_stem()));
    let samples = Tone::for_sound(sound).render(rng);
    fs::write(&path, encode_wav(&samples))?;
    Ok(path)
}
