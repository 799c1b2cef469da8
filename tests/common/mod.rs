#![allow(dead_code)]

use std::collections::HashSet;
use std::time::Duration;

use pacman_3002::audio::{Sound, SoundSink};
use pacman_3002::entity::direction::Direction;
use pacman_3002::entity::steering::ScriptedSteering;
use pacman_3002::events::GameCommand;
use pacman_3002::game::Session;
use pacman_3002::map::level::Levels;
use strum::IntoEnumIterator;

/// Simulated time between frames.
pub const FRAME: Duration = Duration::from_millis(16);

/// A sink that records every cue it is asked to play.
pub struct RecordingSink {
    available: HashSet<Sound>,
    pub played: Vec<Sound>,
}

impl RecordingSink {
    pub fn all() -> Self {
        Self {
            available: Sound::iter().collect(),
            played: Vec::new(),
        }
    }

    pub fn only(sounds: &[Sound]) -> Self {
        Self {
            available: sounds.iter().copied().collect(),
            played: Vec::new(),
        }
    }

    pub fn count(&self, sound: Sound) -> usize {
        self.played.iter().filter(|s| **s == sound).count()
    }
}

impl SoundSink for RecordingSink {
    fn is_available(&self, sound: Sound) -> bool {
        self.available.contains(&sound)
    }

    fn play(&mut self, sound: Sound) {
        self.played.push(sound);
    }
}

/// A monotonic clock that only moves when told to.
#[derive(Debug, Default)]
pub struct Clock {
    now: Duration,
}

impl Clock {
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn advance(&mut self, by: Duration) -> Duration {
        self.now += by;
        self.now
    }
}

/// Drives a session frame by frame against a simulated clock.
pub struct Harness {
    pub session: Session,
    pub clock: Clock,
    pub audio: RecordingSink,
}

impl Harness {
    /// A session in the menu, with ghosts steered by `script`.
    pub fn new(layouts: &[&[&str]], script: &[Direction]) -> Self {
        let levels = Levels::new(layouts).unwrap();
        let steering = ScriptedSteering::new(script.iter().copied());
        Self {
            session: Session::new(levels, Box::new(steering)).unwrap(),
            clock: Clock::default(),
            audio: RecordingSink::all(),
        }
    }

    /// A session that has already left the menu.
    pub fn playing(layouts: &[&[&str]], script: &[Direction]) -> Self {
        let mut harness = Self::new(layouts, script);
        assert!(harness.session.handle_command(GameCommand::Start));
        harness
    }

    pub fn command(&mut self, command: GameCommand) -> bool {
        self.session.handle_command(command)
    }

    pub fn frame(&mut self) {
        let now = self.clock.advance(FRAME);
        self.session.tick(now, &mut self.audio);
    }

    pub fn frames(&mut self, count: usize) {
        for _ in 0..count {
            self.frame();
        }
    }
}
