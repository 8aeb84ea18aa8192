use log::{LevelFilter, Metadata, Record};
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

static LOGGER: StderrLogger = StderrLogger;
static START: OnceLock<Instant> = OnceLock::new();

pub fn init(level: LevelFilter) {
    START.get_or_init(Instant::now);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let elapsed = START.get_or_init(Instant::now).elapsed();
            let _ = writeln!(
                std::io::stderr().lock(),
                "{:.3} {} - {}",
                elapsed.as_secs_f32() * 1000.0,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
