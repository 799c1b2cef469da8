#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use anyhow::Result;
use pacman_3002::app::App;
use pacman_3002::config::Settings;
use pacman_3002::logging;
use tracing::info;

/// Loads settings, opens the window, and runs frames until the player quits.
pub fn main() -> Result<()> {
    let settings = Settings::load()?;
    logging::setup_logging(settings.log_filter.as_deref());

    let mut app = App::new(&settings)?;

    info!(fps = settings.fps, "Starting game loop");
    while app.run() {}
    info!("Exiting");
    Ok(())
}
