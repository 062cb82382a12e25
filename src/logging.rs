use std::{
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, RwLock},
    time::{Duration, Instant},
};

use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

const DEFAULT_DECAY: Duration = Duration::from_secs(30);
const DEFAULT_MAX_VISIBLE: usize = 5;

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(log::Level::Warn, DEFAULT_DECAY, DEFAULT_MAX_VISIBLE))
}

/// Installs the in-app logger. Safe to call more than once; only the level changes after the
/// first call.
pub fn init(level: log::LevelFilter) {
    let logger = get_logger();
    logger.set_level(level);
    let _ = log::set_logger(logger);
    log::set_max_level(level);
}

#[derive(Debug, Clone)]
pub struct Message {
    pub level: log::Level,
    pub pushed: Instant,
    pub message: String,
    pub source: String,
}

struct Logs {
    logs: [Vec<Message>; 5], // one per level
}

impl Logs {
    fn push(&mut self, message: Message) {
        self.logs[message.level as usize - 1].insert(0, message);
    }

    fn clear_old(&mut self, decay: Duration) {
        let now = Instant::now();
        for level in self.logs.iter_mut() {
            level.retain(|msg| now.duration_since(msg.pushed) < decay);
        }
    }
}

/// Keeps recent log records in memory, most severe first, so they can be drawn next to the
/// maze instead of being written over it.
pub struct AppLogger {
    min_level: Arc<RwLock<Option<log::Level>>>,
    pub decay: Duration,
    pub max_visible: usize,
    logs: Arc<Mutex<Logs>>,
}

impl AppLogger {
    pub fn new(min_level: log::Level, decay: Duration, max_visible: usize) -> Self {
        Self {
            min_level: Arc::new(RwLock::new(Some(min_level))),
            decay,
            max_visible,
            logs: Arc::new(Mutex::new(Logs {
                logs: Default::default(),
            })),
        }
    }

    pub fn min_level(&self) -> Option<log::Level> {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_level(&self, level: log::LevelFilter) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level.to_level();
    }

    fn borrow_mut_logs(&self) -> MutexGuard<Logs> {
        // a panicking writer can only leave a partially pushed message behind
        self.logs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Messages younger than the decay window, errors first, newest first within a level.
    pub fn get_logs(&self) -> Vec<Message> {
        let mut logs = self.borrow_mut_logs();
        logs.clear_old(self.decay);
        logs.logs.iter().flatten().cloned().collect()
    }

    pub fn visible(&self) -> Vec<Message> {
        let mut logs = self.get_logs();
        logs.truncate(self.max_visible);
        logs
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.min_level()
            .is_some_and(|min_level| metadata.level() <= min_level)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.borrow_mut_logs().push(Message {
                level: record.level(),
                pushed: Instant::now(),
                message: record.args().to_string(),
                source: record.module_path().unwrap_or("unknown").to_string(),
            });
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(logger: &AppLogger, level: log::Level, text: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .args(format_args!("{text}"))
                .module_path(Some("mazerace::tests"))
                .build(),
        );
    }

    #[test]
    fn orders_by_severity_then_age() {
        let logger = AppLogger::new(log::Level::Info, Duration::from_secs(60), 10);
        record(&logger, log::Level::Info, "first");
        record(&logger, log::Level::Warn, "warning");
        record(&logger, log::Level::Info, "second");
        record(&logger, log::Level::Debug, "hidden");

        let messages: Vec<_> = logger.get_logs().into_iter().map(|m| m.message).collect();
        assert_eq!(messages, ["warning", "second", "first"]);
    }

    #[test]
    fn old_messages_decay() {
        let logger = AppLogger::new(log::Level::Trace, Duration::ZERO, 10);
        record(&logger, log::Level::Error, "gone");
        assert!(logger.get_logs().is_empty());
    }

    #[test]
    fn visible_is_capped_and_level_switchable() {
        let logger = AppLogger::new(log::Level::Warn, Duration::from_secs(60), 2);
        for i in 0..4 {
            record(&logger, log::Level::Error, &i.to_string());
        }
        assert_eq!(logger.visible().len(), 2);
        assert_eq!(logger.visible()[0].source, "mazerace::tests");

        logger.set_level(log::LevelFilter::Off);
        assert_eq!(logger.min_level(), None);
        record(&logger, log::Level::Error, "muted");
        assert_eq!(logger.get_logs().len(), 4);
    }
}
