//! Desktop front-end: SDL2 input, drawing and frame pacing.

mod input;
mod canvas;

pub use canvas::present;
pub use input::{Bindings, Input};

use std::time::Duration;

/// Sleeps precisely while the window has focus, and coarsely otherwise.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}
