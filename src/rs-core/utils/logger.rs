use std::sync::atomic::{AtomicU8, Ordering};

static MAX_LOG_LEVEL: AtomicU8 = AtomicU8::new(LoggerLevel::Warn as u8);

/// Maximum level of logs that will be emitted by the `Logger`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd)]
pub enum LoggerLevel {
    None = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

impl From<u8> for LoggerLevel {
    fn from(val: u8) -> Self {
        match val {
            0 => LoggerLevel::None,
            1 => LoggerLevel::Error,
            2 => LoggerLevel::Warn,
            3 => LoggerLevel::Info,
            _ => LoggerLevel::Debug,
        }
    }
}

/// Logging facade used everywhere in this crate.
///
/// In the browser, logs are forwarded to the JavaScript console through `jsLog`.
/// Everywhere else they are emitted as `tracing` events.
pub struct Logger {}

impl Logger {
    pub fn set_logger_level(new_level: LoggerLevel) {
        MAX_LOG_LEVEL.store(new_level as u8, Ordering::Relaxed);
    }

    pub fn logger_level() -> LoggerLevel {
        LoggerLevel::from(MAX_LOG_LEVEL.load(Ordering::Relaxed))
    }

    #[inline]
    fn is_enabled(level: LoggerLevel) -> bool {
        MAX_LOG_LEVEL.load(Ordering::Relaxed) >= level as u8
    }

    pub fn info(text: &str) {
        if Self::is_enabled(LoggerLevel::Info) {
            emit(LoggerLevel::Info, text);
        }
    }

    pub fn error(text: &str) {
        if Self::is_enabled(LoggerLevel::Error) {
            emit(LoggerLevel::Error, text);
        }
    }

    pub fn warn(text: &str) {
        if Self::is_enabled(LoggerLevel::Warn) {
            emit(LoggerLevel::Warn, text);
        }
    }

    pub fn debug(text: &str) {
        if Self::is_enabled(LoggerLevel::Debug) {
            emit(LoggerLevel::Debug, text);
        }
    }

    pub fn lazy_info(func: &dyn Fn() -> String) {
        if Self::is_enabled(LoggerLevel::Info) {
            emit(LoggerLevel::Info, &func());
        }
    }

    pub fn lazy_warn(func: &dyn Fn() -> String) {
        if Self::is_enabled(LoggerLevel::Warn) {
            emit(LoggerLevel::Warn, &func());
        }
    }

    pub fn lazy_debug(func: &dyn Fn() -> String) {
        if Self::is_enabled(LoggerLevel::Debug) {
            emit(LoggerLevel::Debug, &func());
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LoggerLevel, text: &str) {
    use crate::bindings::{jsLog, LogLevel};
    let js_level = match level {
        LoggerLevel::None => return,
        LoggerLevel::Error => LogLevel::Error,
        LoggerLevel::Warn => LogLevel::Warn,
        LoggerLevel::Info => LogLevel::Info,
        LoggerLevel::Debug => LogLevel::Debug,
    };
    jsLog(js_level, text);
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: LoggerLevel, text: &str) {
    match level {
        LoggerLevel::None => {}
        LoggerLevel::Error => tracing::error!(target: "vidshelf_player", "{text}"),
        LoggerLevel::Warn => tracing::warn!(target: "vidshelf_player", "{text}"),
        LoggerLevel::Info => tracing::info!(target: "vidshelf_player", "{text}"),
        LoggerLevel::Debug => tracing::debug!(target: "vidshelf_player", "{text}"),
    }
}
