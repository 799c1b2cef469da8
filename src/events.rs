use crate::entity::direction::Direction;

/// An abstract player input, already decoupled from whatever key produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    /// Buffer a turn for the player.
    Move(Direction),
    /// Leave the menu and begin at level one.
    Start,
    /// Close the game from the menu.
    Quit,
    /// Replay the current level after a game over or a win.
    Restart,
    ReturnToMenu,
    /// Handled by the window, never by the session.
    ToggleFullscreen,
    /// Handled by the audio sink, never by the session.
    ToggleMute,
}
