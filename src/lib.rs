//! Pac-Man 3002 game library crate.

#[cfg(feature = "sdl")]
pub mod app;
pub mod audio;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod logging;
pub mod map;
#[cfg(feature = "sdl")]
pub mod platform;
pub mod render;
pub mod synth;
