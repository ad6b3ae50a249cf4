use std::env;

use log::{LevelFilter, Metadata, Record};

struct SimpleLogger;

static LOGGER: SimpleLogger = SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args())
        }
    }

    fn flush(&self) {}
}

/// Installs the logger. `STEGELF_LOG` (e.g. `debug`) overrides the level
/// picked from the number of `-v` flags.
pub fn init_logger(verbose: u8) {
    let level = env::var("STEGELF_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        });

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
