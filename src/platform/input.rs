use std::collections::HashMap;

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

use crate::entity::direction::Direction;
use crate::events::GameCommand;

/// What a frame's worth of window events boiled down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(GameCommand),
    FocusChanged(bool),
    /// Escape or the window being closed. Always ends the game.
    Exit,
}

#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        for (keys, direction) in [
            ([Keycode::Up, Keycode::W], Direction::Up),
            ([Keycode::Down, Keycode::S], Direction::Down),
            ([Keycode::Left, Keycode::A], Direction::Left),
            ([Keycode::Right, Keycode::D], Direction::Right),
        ] {
            for key in keys {
                key_bindings.insert(key, GameCommand::Move(direction));
            }
        }

        key_bindings.insert(Keycode::Space, GameCommand::Start);
        key_bindings.insert(Keycode::Q, GameCommand::Quit);
        key_bindings.insert(Keycode::R, GameCommand::Restart);
        key_bindings.insert(Keycode::M, GameCommand::ReturnToMenu);
        key_bindings.insert(Keycode::F11, GameCommand::ToggleFullscreen);
        key_bindings.insert(Keycode::N, GameCommand::ToggleMute);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn command(&self, key: Keycode) -> Option<GameCommand> {
        self.key_bindings.get(&key).copied()
    }

    /// Drains pending window events. Held-key repeats are dropped.
    pub fn poll(&self, pump: &mut EventPump) -> Vec<Input> {
        pump.poll_iter()
            .filter_map(|event| match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => Some(Input::Exit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => self.command(key).map(Input::Command),
                Event::Window {
                    win_event: WindowEvent::FocusGained,
                    ..
                } => Some(Input::FocusChanged(true)),
                Event::Window {
                    win_event: WindowEvent::FocusLost,
                    ..
                } => Some(Input::FocusChanged(false)),
                _ => None,
            })
            .collect()
    }
}
