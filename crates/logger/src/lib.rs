//! Leveled logging for the `coursegen` CLI, with feature-gated levels.
//!
//! - `log-info` enables `info!` output (enabled by default).
//! - `log-debug` enables `debug!` output behind a runtime flag.
//! - `verbose` enables `verbose!`, an untagged printer for progress text.
//! - `file-logging` allows redirecting tagged messages to a log file.
//! - `warn!` and `error!` are always compiled in.
//!
//! Errors and warnings go to stderr, everything else to stdout. When a log
//! file has been initialized, tagged messages go to the file instead of the
//! console; `verbose!` output never goes to a file.

use std::fmt::Arguments;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

#[cfg(feature = "file-logging")]
use std::{
    fs::{File, OpenOptions},
    io::Write,
    sync::Mutex,
};

/// Logging levels, ordered from most to least severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    /// Error-level messages (always enabled).
    Error = 1,
    /// Warning-level messages (always enabled).
    Warn = 2,
    /// Info-level messages (requires the `log-info` feature).
    Info = 3,
    /// Debug-level messages (requires `log-debug` and the runtime flag).
    Debug = 4,
}

/// Default runtime level derived from the enabled features.
const fn default_level() -> u8 {
    if cfg!(feature = "log-debug") {
        Level::Debug as u8
    } else if cfg!(feature = "log-info") {
        Level::Info as u8
    } else {
        Level::Warn as u8
    }
}

/// Current runtime log level.
static LOG_LEVEL: AtomicU8 = AtomicU8::new(default_level());
/// Runtime switch for `debug!` output.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);
/// Runtime switch for `verbose!` output.
static VERBOSE_ENABLED: AtomicBool = AtomicBool::new(false);
/// Open log file handle, when file logging has been initialized.
#[cfg(feature = "file-logging")]
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Set the global log level.
pub fn set_level(level: Level) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Parse and set the level from a string (case-insensitive).
///
/// Returns `true` when the string named a known level.
#[must_use]
pub fn set_level_from_str(level: &str) -> bool {
    let parsed = match level.to_ascii_lowercase().as_str() {
        "error" | "err" => Level::Error,
        "warn" | "warning" => Level::Warn,
        "info" => Level::Info,
        "debug" => Level::Debug,
        _ => return false,
    };
    set_level(parsed);
    true
}

/// Enable `debug!` output at runtime.
pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Disable `debug!` output at runtime.
pub fn disable_debug() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Returns whether `debug!` output is currently enabled.
#[must_use]
pub fn is_debug_enabled() -> bool {
    cfg!(feature = "log-debug") && DEBUG_ENABLED.load(Ordering::SeqCst)
}

/// Enable `verbose!` output at runtime.
pub fn enable_verbose() {
    VERBOSE_ENABLED.store(true, Ordering::SeqCst);
}

/// Disable `verbose!` output at runtime.
pub fn disable_verbose() {
    VERBOSE_ENABLED.store(false, Ordering::SeqCst);
}

/// Returns whether `verbose!` output is currently enabled.
#[must_use]
pub fn is_verbose_enabled() -> bool {
    cfg!(feature = "verbose") && VERBOSE_ENABLED.load(Ordering::SeqCst)
}

/// Initialize file logging to the given path, appending to an existing file.
///
/// Returns `true` on success. When the `file-logging` feature is disabled
/// this always returns `false`.
#[cfg(feature = "file-logging")]
#[must_use]
pub fn init_file_logging(path: &std::path::Path) -> bool {
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };
    match LOG_FILE.lock() {
        Ok(mut slot) => {
            *slot = Some(file);
            true
        }
        Err(_) => false,
    }
}

/// Initialize file logging to the given path, appending to an existing file.
///
/// Returns `true` on success. When the `file-logging` feature is disabled
/// this always returns `false`.
#[cfg(not(feature = "file-logging"))]
pub fn init_file_logging(_path: &std::path::Path) -> bool {
    false
}

/// Write a tagged message to the log file, if one is open.
///
/// Returns `true` when the message was consumed by the file sink.
#[cfg(feature = "file-logging")]
fn write_to_file(message: &str) -> bool {
    if let Ok(mut slot) = LOG_FILE.lock() {
        if let Some(file) = slot.as_mut() {
            let _ = writeln!(file, "{message}");
            let _ = file.flush();
            return true;
        }
    }
    false
}

#[cfg(not(feature = "file-logging"))]
fn write_to_file(_message: &str) -> bool {
    false
}

/// Decide whether a message at `level` should be emitted.
///
/// Feature gates apply first (`log-info`, `log-debug`), then the runtime
/// level; debug additionally requires the runtime debug switch.
fn should_log(level: Level) -> bool {
    match level {
        Level::Info if !cfg!(feature = "log-info") => return false,
        Level::Debug if !is_debug_enabled() => return false,
        _ => {}
    }
    (level as u8) <= LOG_LEVEL.load(Ordering::SeqCst)
}

/// Internal dispatch used by the public macros. Not part of the stable API.
pub fn log_impl(level: Level, args: Arguments) {
    if !should_log(level) {
        return;
    }
    let (tag, to_stderr) = match level {
        Level::Error => ("[ERROR]", true),
        Level::Warn => ("[WARN]", true),
        Level::Info => ("[INFO]", false),
        Level::Debug => ("[DEBUG]", false),
    };
    let line = format!("{tag} {args}");
    if write_to_file(&line) {
        return;
    }
    if to_stderr {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

/// Logs an error-level message (always enabled). Emits to stderr.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Error, format_args!($($arg)*)) };
}

/// Logs a warning-level message (always enabled). Emits to stderr.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Warn, format_args!($($arg)*)) };
}

/// Logs an info-level message (requires the `log-info` feature).
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Info, format_args!($($arg)*)) };
}

/// Logs a debug-level message (requires `log-debug` and runtime enablement).
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Debug, format_args!($($arg)*)) };
}

/// Prints an untagged verbose message (requires the `verbose` feature and
/// runtime enablement). Never written to the log file.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::is_verbose_enabled() {
            println!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::{disable_debug, enable_debug, set_level, set_level_from_str, Level};

    #[test]
    fn error_and_warn_never_panic() {
        crate::error!("error {}", 1);
        crate::warn!("warn {}", 2);
    }

    #[test]
    fn info_never_panics() {
        crate::info!("info {}", 3);
    }

    #[test]
    fn level_parsing_accepts_known_names() {
        assert!(set_level_from_str("ERROR"));
        assert!(set_level_from_str("warning"));
        assert!(set_level_from_str("info"));
        assert!(set_level_from_str("debug"));
        assert!(!set_level_from_str("chatty"));
    }

    #[cfg(feature = "log-debug")]
    #[test]
    fn debug_respects_runtime_flag() {
        set_level(Level::Debug);
        disable_debug();
        crate::debug!("should be silent");
        enable_debug();
        crate::debug!("should emit");
        disable_debug();
    }
}
