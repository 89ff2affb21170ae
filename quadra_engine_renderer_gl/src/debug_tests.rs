//! Unit tests for the OpenGL error reporter
//!
//! Exercises the reporting core without a GL context: configuration
//! lifecycle, statistics, duplicate grouping, file output and the strict
//! panic mode. All tests are serialized because the reporter state is
//! process-global.

use super::*;
use quadra_engine::quadra::log::{LogEntry, Logger};
use serial_test::serial;
use std::path::PathBuf;
use std::sync::Arc;

// ============================================================================
// REPORTING TESTS
// ============================================================================

#[test]
#[serial]
fn test_report_errors_empty_returns_ok() {
    install_console_config(true);

    assert!(report_errors(&[], "gl.noop()", file!(), line!()).is_ok());
    assert_eq!(get_error_check_stats().total(), 0);

    cleanup_error_check_config();
}

#[test]
#[serial]
fn test_report_errors_returns_first_code() {
    install_console_config(true);

    let result = report_errors(
        &[glow::INVALID_OPERATION, glow::INVALID_ENUM],
        "gl.draw_elements(mode, count, element_type, 0)",
        "renderer.rs",
        42,
    );

    match result {
        Err(Error::GraphicsCallFailed {
            code,
            call,
            file,
            line,
        }) => {
            assert_eq!(code, glow::INVALID_OPERATION);
            assert!(call.contains("draw_elements"));
            assert_eq!(file, "renderer.rs");
            assert_eq!(line, 42);
        }
        other => panic!("expected GraphicsCallFailed, got {:?}", other),
    }

    cleanup_error_check_config();
}

#[test]
#[serial]
fn test_report_errors_without_config_still_errors() {
    // Zero the counters, then drop the config entirely
    install_console_config(true);
    cleanup_error_check_config();

    let result = report_errors(&[glow::INVALID_VALUE], "gl.viewport(x, y, w, h)", file!(), line!());
    assert!(
        matches!(result, Err(Error::GraphicsCallFailed { code, .. }) if code == glow::INVALID_VALUE)
    );

    // No config installed: nothing was counted
    assert_eq!(get_error_check_stats().total(), 0);
}

#[test]
#[serial]
fn test_logged_entry_carries_caller_location() {
    struct CaptureLogger {
        entries: Arc<Mutex<Vec<LogEntry>>>,
    }

    impl Logger for CaptureLogger {
        fn log(&self, entry: &LogEntry) {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }

    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger {
        entries: Arc::clone(&entries),
    });

    install_console_config(false);
    let _ = report_errors(
        &[glow::INVALID_VALUE],
        "gl.viewport(0, 0, w, h)",
        "caller_file.rs",
        99,
    );

    Engine::reset_logger();
    cleanup_error_check_config();

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);

    let entry = &captured[0];
    assert_eq!(entry.severity, LogSeverity::Error);
    assert_eq!(entry.source, "quadra::gl");
    assert!(entry.message.contains("GL_INVALID_VALUE"));
    assert!(entry.message.contains("gl.viewport(0, 0, w, h)"));
    assert_eq!(entry.file, Some("caller_file.rs"));
    assert_eq!(entry.line, Some(99));
}

// ============================================================================
// STATISTICS TESTS
// ============================================================================

#[test]
#[serial]
fn test_stats_count_by_class() {
    install_console_config(true);

    let _ = report_errors(
        &[glow::INVALID_ENUM, glow::INVALID_VALUE],
        "gl.a()",
        file!(),
        line!(),
    );
    let _ = report_errors(&[glow::INVALID_ENUM], "gl.b()", file!(), line!());
    let _ = report_errors(&[0x9999], "gl.c()", file!(), line!());

    let stats = get_error_check_stats();
    assert_eq!(stats.invalid_enums, 2);
    assert_eq!(stats.invalid_values, 1);
    assert_eq!(stats.other, 1);
    assert_eq!(stats.invalid_operations, 0);
    assert_eq!(stats.total(), 4);

    cleanup_error_check_config();
}

#[test]
#[serial]
fn test_init_resets_stats() {
    install_console_config(true);
    let _ = report_errors(
        &[glow::OUT_OF_MEMORY],
        "gl.buffer_data_size(target, size, usage)",
        file!(),
        line!(),
    );
    assert_eq!(get_error_check_stats().out_of_memory, 1);

    // Re-initializing wipes the previous run's counters
    install_console_config(true);
    assert_eq!(get_error_check_stats().total(), 0);

    cleanup_error_check_config();
}

#[test]
#[serial]
fn test_stats_disabled_by_config() {
    install_console_config(false);

    let result = report_errors(
        &[glow::INVALID_OPERATION],
        "gl.use_program(Some(program))",
        file!(),
        line!(),
    );
    assert!(result.is_err());
    assert_eq!(get_error_check_stats().total(), 0);

    cleanup_error_check_config();
}

#[test]
#[serial]
fn test_cleanup_keeps_stats_for_report() {
    install_console_config(true);
    let _ = report_errors(&[glow::INVALID_ENUM], "gl.enable(cap)", file!(), line!());

    cleanup_error_check_config();

    // Stats survive cleanup so the final report can still be printed
    assert_eq!(get_error_check_stats().invalid_enums, 1);
}

#[test]
#[serial]
fn test_duplicate_messages_grouped() {
    install_console_config(true);

    // Same call text and location three times -> one message counted thrice
    for _ in 0..3 {
        let _ = report_errors(&[glow::INVALID_ENUM], "gl.enable(cap)", "same_file.rs", 7);
    }

    let tracker_guard = MESSAGE_TRACKER.lock().unwrap();
    let tracker = tracker_guard.as_ref().unwrap();
    assert_eq!(tracker.messages.len(), 1);
    assert_eq!(tracker.messages.values().copied().max(), Some(3));
    drop(tracker_guard);

    cleanup_error_check_config();
}

// ============================================================================
// OUTPUT TESTS
// ============================================================================

#[test]
#[serial]
fn test_file_output_written() {
    let path = temp_log_path("file_output");
    let _ = std::fs::remove_file(&path);

    init_error_check_config(Config {
        output: DebugOutput::File(path.to_string_lossy().into_owned()),
        break_on_error: false,
        panic_on_error: false,
        enable_stats: true,
    });

    let _ = report_errors(
        &[glow::INVALID_OPERATION],
        "gl.link_program(program)",
        file!(),
        line!(),
    );
    cleanup_error_check_config();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[OPENGL GL_INVALID_OPERATION]"));
    assert!(contents.contains("gl.link_program(program)"));

    let _ = std::fs::remove_file(&path);
}

// ============================================================================
// STRICT MODE TESTS
// ============================================================================

#[test]
#[serial]
#[should_panic(expected = "PANIC ON ERROR")]
fn test_panic_on_error_strict_mode() {
    init_error_check_config(Config {
        output: DebugOutput::Console,
        break_on_error: false,
        panic_on_error: true,
        enable_stats: false,
    });

    let _ = report_errors(&[glow::INVALID_OPERATION], "gl.clear(mask)", file!(), line!());
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Install a console-output config with strict modes off
fn install_console_config(enable_stats: bool) {
    init_error_check_config(Config {
        output: DebugOutput::Console,
        break_on_error: false,
        panic_on_error: false,
        enable_stats,
    });
}

/// Unique per-process scratch path for file-output tests
fn temp_log_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("quadra_gl_{}_{}.log", name, std::process::id()))
}
