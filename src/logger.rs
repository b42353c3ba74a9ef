//! Logging support.

use flexi_logger::{style, DeferredNow, Logger, Record};
use libc::{isatty, STDOUT_FILENO};
use std::{io::Write, sync::OnceLock, thread};

const DEFAULT_LOG_LEVEL: &str = "info";

/// Initializes the global logger. The level spec is taken from the
/// `RUST_LOG` environment variable when set.
///
/// # Panics
///
/// If logger fails to initialize
pub fn init() {
    static LOGGER: OnceLock<flexi_logger::LoggerHandle> = OnceLock::new();
    // The logger handle is kept in a static to prevent double initialization
    // and to keep the writer alive for the rest of the program.
    LOGGER.get_or_init(|| {
        Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)
            .expect("failed to initialize logger")
            .format(format)
            .set_palette("124;3;4;146;7".into())
            .start()
            .expect("failed to initialize the logger")
    });
}

fn format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record<'_>,
) -> Result<(), std::io::Error> {
    let tty = unsafe { isatty(STDOUT_FILENO) } != 0;
    let level = record.level();
    let log = format!(
        "[{}] T[{:?}] {: <5} [{}:{}] {}",
        now.now().format("%y-%m-%d %H:%M:%S%.3f %:z"),
        thread::current().name().unwrap_or("<unnamed>"),
        level,
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        &record.args()
    );
    if tty {
        write!(w, "{}", style(level).paint(log))
    } else {
        write!(w, "{log}")
    }
}
