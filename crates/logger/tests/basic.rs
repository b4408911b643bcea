//! Integration tests for the logger crate.

use logger::{set_level, set_level_from_str, Level};

#[test]
fn macros_compile_and_run() {
    set_level(Level::Debug);
    logger::error!("integration error {}", 42);
    logger::warn!("integration warn");
    logger::info!("integration info");
    logger::debug!("integration debug");
    logger::verbose!("integration verbose");
}

#[test]
fn unknown_level_string_is_rejected() {
    assert!(!set_level_from_str(""));
    assert!(!set_level_from_str("loud"));
    assert!(set_level_from_str("warn"));
}

#[cfg(feature = "verbose")]
#[test]
fn verbose_runtime_switch() {
    logger::enable_verbose();
    assert!(logger::is_verbose_enabled());
    logger::verbose!("visible");
    logger::disable_verbose();
    assert!(!logger::is_verbose_enabled());
}
