//! Tracing setup and the frame-stamped log line format.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Once;

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{Event, Level, Subscriber};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

static SUBSCRIBER_INIT: Once = Once::new();

/// Frames simulated so far, stamped onto every log line.
static FRAME_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Only the low 16 bits are shown.
const FRAME_DISPLAY_MASK: u64 = 0xFFFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:4]");

/// Installs the global subscriber once. Later calls are ignored.
///
/// `filter` takes precedence over `RUST_LOG`; without either, the game logs at
/// `debug`, the sound generator at `info` and everything else at `warn`.
pub fn setup_logging(filter: Option<&str>) {
    SUBSCRIBER_INIT.call_once(|| {
        let filter = match filter {
            Some(directives) => EnvFilter::new(directives),
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("warn,{}=debug,generate_sounds=info", env!("CARGO_CRATE_NAME")))),
        };

        let subscriber = tracing_subscriber::fmt()
            .event_format(FrameFormatter)
            .with_env_filter(filter)
            .finish()
            .with(ErrorLayer::default());

        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Could not install the log subscriber: {e}");
        }
    });
}

/// Call once per simulated frame.
pub fn advance_frame() {
    FRAME_COUNTER.fetch_add(1, Ordering::Relaxed);
}

pub fn frame_count() -> u64 {
    FRAME_COUNTER.load(Ordering::Relaxed)
}

/// `HH:MM:SS.ffff 0xFRAM LEVEL target: fields`, dimmed and colored when the writer
/// supports ANSI.
pub struct FrameFormatter;

impl<S, N> FormatEvent<S, N> for FrameFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        let timestamp = OffsetDateTime::now_utc()
            .format(&TIMESTAMP_FORMAT)
            .map_err(|_| fmt::Error)?;
        let frame = frame_count() & FRAME_DISPLAY_MASK;
        if ansi {
            write!(writer, "\x1b[2m{timestamp} 0x{frame:04X}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} 0x{frame:04X} ")?;
        }

        let (color, label) = level_style(meta.level());
        if ansi {
            write!(writer, "{color}{label}\x1b[0m \x1b[2m{}:\x1b[0m ", meta.target())?;
        } else {
            write!(writer, "{label} {}: ", meta.target())?;
        }

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_style(level: &Level) -> (&'static str, &'static str) {
    match *level {
        Level::TRACE => ("\x1b[35m", "TRACE"),
        Level::DEBUG => ("\x1b[34m", "DEBUG"),
        Level::INFO => ("\x1b[32m", " INFO"),
        Level::WARN => ("\x1b[33m", " WARN"),
        Level::ERROR => ("\x1b[31m", "ERROR"),
    }
}
