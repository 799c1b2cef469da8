use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use glam::UVec2;
use sdl2::render::Canvas;
use sdl2::video::{FullscreenType, Window};
use sdl2::{AudioSubsystem, EventPump, Sdl};
use tracing::{debug, info, warn};

use crate::audio::MixerSink;
use crate::config::Settings;
use crate::entity::steering::RandomSteering;
use crate::events::GameCommand;
use crate::game::Session;
use crate::logging;
use crate::map::level::Levels;
use crate::platform::{self, Bindings, Input};
use crate::render::draw_list;

/// Owns the window, the audio device and the session, and runs frames.
pub struct App {
    session: Session,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    bindings: Bindings,
    audio: MixerSink,
    playfield: UVec2,
    frame_time: Duration,
    started: Instant,
    focused: bool,
    // Keep SDL alive for the app lifetime so subsystems (audio) are not shut down
    _sdl_context: Sdl,
    _audio_subsystem: AudioSubsystem,
}

impl App {
    pub fn new(settings: &Settings) -> Result<Self> {
        let levels = Levels::authored().context("Authored levels are malformed")?;
        let playfield = levels.pixel_size();

        let steering = match settings.seed {
            Some(seed) => {
                info!(seed, "Using seeded ghost steering");
                RandomSteering::seeded(seed)
            }
            None => RandomSteering::from_entropy(),
        };
        let session = Session::new(levels, Box::new(steering))?;

        debug!("Initializing SDL2 subsystems");
        let sdl_context = sdl2::init().map_err(|e| anyhow!("SDL init failed: {e}"))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!("SDL video init failed: {e}"))?;
        let audio_subsystem = sdl_context.audio().map_err(|e| anyhow!("SDL audio init failed: {e}"))?;
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!("SDL event pump failed: {e}"))?;

        let width = (playfield.x as f32 * settings.scale).round() as u32;
        let height = (playfield.y as f32 * settings.scale).round() as u32;
        debug!(width, height, scale = settings.scale, "Creating game window");
        let mut window = video_subsystem
            .window("Pac-Man 3002", width, height)
            .position_centered()
            .build()
            .context("Could not create the window")?;
        if settings.fullscreen {
            window.set_fullscreen(FullscreenType::Desktop).map_err(|e| anyhow!(e))?;
        }

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .context("Could not create the canvas")?;

        let audio = MixerSink::new(settings);

        info!(fps = settings.fps, "Application initialization completed successfully");
        Ok(Self {
            session,
            canvas,
            event_pump,
            bindings: Bindings::default(),
            audio,
            playfield,
            frame_time: Duration::from_secs_f64(1.0 / settings.fps as f64),
            started: Instant::now(),
            focused: true,
            _sdl_context: sdl_context,
            _audio_subsystem: audio_subsystem,
        })
    }

    fn toggle_fullscreen(&mut self) {
        let window = self.canvas.window_mut();
        let next = match window.fullscreen_state() {
            FullscreenType::Off => FullscreenType::Desktop,
            FullscreenType::True | FullscreenType::Desktop => FullscreenType::Off,
        };
        match window.set_fullscreen(next) {
            Ok(()) => debug!(mode = ?next, "Fullscreen toggled"),
            Err(e) => warn!("Could not toggle fullscreen: {}", e),
        }
    }

    /// Largest uniform scale that fits the playfield in the window.
    fn view_scale(&self) -> f32 {
        match self.canvas.output_size() {
            Ok((w, h)) => (w as f32 / self.playfield.x as f32).min(h as f32 / self.playfield.y as f32),
            Err(_) => 1.0,
        }
    }

    /// Runs one frame: input, simulation, drawing, then sleeps off the rest of the frame.
    ///
    /// Returns `false` once the game should exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();
        logging::advance_frame();

        for input in self.bindings.poll(&mut self.event_pump) {
            match input {
                Input::Exit => return false,
                Input::FocusChanged(focused) => self.focused = focused,
                Input::Command(GameCommand::ToggleFullscreen) => self.toggle_fullscreen(),
                Input::Command(GameCommand::ToggleMute) => {
                    let muted = !self.audio.is_muted();
                    self.audio.set_muted(muted);
                    info!(muted, "Audio mute toggled");
                }
                Input::Command(command) => {
                    if !self.session.handle_command(command) {
                        return false;
                    }
                }
            }
        }

        self.session.tick(self.started.elapsed(), &mut self.audio);

        let commands = draw_list(&self.session);
        let scale = self.view_scale();
        if let Err(e) = platform::present(&mut self.canvas, &commands, scale) {
            warn!("Frame could not be drawn: {}", e);
        }

        let elapsed = start.elapsed();
        if elapsed < self.frame_time {
            platform::sleep(self.frame_time - elapsed, self.focused);
        } else {
            warn!(
                elapsed = ?elapsed,
                budget = ?self.frame_time,
                "Frame took longer than its budget"
            );
        }
        true
    }
}
