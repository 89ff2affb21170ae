/// OpenGL Error Reporter - Drains glGetError state with colored output
///
/// This module provides the per-call error checking behind the `gl_call!`
/// macro, with support for colored console output, file logging, error
/// statistics and break-on-error functionality.

use colored::*;
use glow::HasContext;
use quadra_engine::quadra::log::LogSeverity;
use quadra_engine::quadra::render::{DebugOutput, ErrorCheckStats};
use quadra_engine::quadra::{Engine, Error, Result};
use rustc_hash::FxHashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use crate::gl_format::error_code_name;

/// Global error reporter configuration (shared across call sites)
static ERROR_CHECK_CONFIG: Mutex<Option<Config>> = Mutex::new(None);

/// Global error statistics (thread-safe atomic counters)
static ERROR_CHECK_STATS: ErrorCheckStatsTracker = ErrorCheckStatsTracker::new();

/// Global message tracker for grouping identical messages
static MESSAGE_TRACKER: Mutex<Option<MessageTracker>> = Mutex::new(None);

/// Error reporter configuration
#[derive(Clone)]
pub struct Config {
    pub output: DebugOutput,
    pub break_on_error: bool,
    pub panic_on_error: bool,
    pub enable_stats: bool,
}

/// Thread-safe error statistics tracker
struct ErrorCheckStatsTracker {
    invalid_enums: AtomicU32,
    invalid_values: AtomicU32,
    invalid_operations: AtomicU32,
    invalid_framebuffer_operations: AtomicU32,
    out_of_memory: AtomicU32,
    other: AtomicU32,
}

impl ErrorCheckStatsTracker {
    const fn new() -> Self {
        Self {
            invalid_enums: AtomicU32::new(0),
            invalid_values: AtomicU32::new(0),
            invalid_operations: AtomicU32::new(0),
            invalid_framebuffer_operations: AtomicU32::new(0),
            out_of_memory: AtomicU32::new(0),
            other: AtomicU32::new(0),
        }
    }

    fn increment(&self, code: u32) {
        let counter = match code {
            glow::INVALID_ENUM => &self.invalid_enums,
            glow::INVALID_VALUE => &self.invalid_values,
            glow::INVALID_OPERATION => &self.invalid_operations,
            glow::INVALID_FRAMEBUFFER_OPERATION => &self.invalid_framebuffer_operations,
            glow::OUT_OF_MEMORY => &self.out_of_memory,
            _ => &self.other,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn get_stats(&self) -> ErrorCheckStats {
        ErrorCheckStats {
            invalid_enums: self.invalid_enums.load(Ordering::Relaxed),
            invalid_values: self.invalid_values.load(Ordering::Relaxed),
            invalid_operations: self.invalid_operations.load(Ordering::Relaxed),
            invalid_framebuffer_operations: self
                .invalid_framebuffer_operations
                .load(Ordering::Relaxed),
            out_of_memory: self.out_of_memory.load(Ordering::Relaxed),
            other: self.other.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        self.invalid_enums.store(0, Ordering::Relaxed);
        self.invalid_values.store(0, Ordering::Relaxed);
        self.invalid_operations.store(0, Ordering::Relaxed);
        self.invalid_framebuffer_operations.store(0, Ordering::Relaxed);
        self.out_of_memory.store(0, Ordering::Relaxed);
        self.other.store(0, Ordering::Relaxed);
    }
}

/// Message tracker for grouping identical messages
struct MessageTracker {
    messages: FxHashMap<String, u32>,
}

impl MessageTracker {
    fn track_message(&mut self, message: &str) -> u32 {
        let count = self.messages.entry(message.to_string()).or_insert(0);
        *count += 1;
        *count
    }
}

/// Initialize the error reporter configuration
pub fn init_error_check_config(config: Config) {
    // Reset statistics when initializing
    ERROR_CHECK_STATS.reset();

    // Reset message tracker
    *MESSAGE_TRACKER.lock().unwrap() = Some(MessageTracker {
        messages: FxHashMap::default(),
    });

    *ERROR_CHECK_CONFIG.lock().unwrap() = Some(config);
}

/// Clear the error reporter configuration
///
/// Statistics and the message tracker are left in place so the final report
/// can still be printed after renderer teardown.
pub fn cleanup_error_check_config() {
    *ERROR_CHECK_CONFIG.lock().unwrap() = None;
}

/// Get current error statistics
pub fn get_error_check_stats() -> ErrorCheckStats {
    ERROR_CHECK_STATS.get_stats()
}

/// Print error statistics report
pub fn print_error_check_stats_report() {
    let stats = get_error_check_stats();

    if stats.total() == 0 {
        println!("\n{}", "✓ No OpenGL errors".green().bold());
        return;
    }

    println!("\n{}", "=== OpenGL Error Report ===".bright_blue().bold());

    if stats.invalid_enums > 0 {
        println!("  {} {}", "Invalid enums:".red().bold(), stats.invalid_enums);
    }
    if stats.invalid_values > 0 {
        println!(
            "  {} {}",
            "Invalid values:".red().bold(),
            stats.invalid_values
        );
    }
    if stats.invalid_operations > 0 {
        println!(
            "  {} {}",
            "Invalid operations:".red().bold(),
            stats.invalid_operations
        );
    }
    if stats.invalid_framebuffer_operations > 0 {
        println!(
            "  {} {}",
            "Invalid framebuffer operations:".red().bold(),
            stats.invalid_framebuffer_operations
        );
    }
    if stats.out_of_memory > 0 {
        println!("  {} {}", "Out of memory:".red().bold(), stats.out_of_memory);
    }
    if stats.other > 0 {
        println!("  {} {}", "Other:".yellow().bold(), stats.other);
    }

    println!("  {} {}", "Total:".white().bold(), stats.total());

    // Print message grouping info
    let tracker_guard = MESSAGE_TRACKER.lock().unwrap();
    if let Some(tracker) = tracker_guard.as_ref() {
        let duplicate_count: u32 =
            tracker.messages.values().filter(|&&count| count > 1).count() as u32;

        if duplicate_count > 0 {
            println!(
                "\n  {} {} message(s) appeared multiple times",
                "ℹ".cyan(),
                duplicate_count
            );
        }
    }

    println!("{}\n", "===========================".bright_blue().bold());
}

/// Drain and discard all pending GL error codes
///
/// Called before a checked call so the codes reported afterwards belong to
/// that call alone.
pub fn clear_errors(gl: &glow::Context) {
    unsafe {
        while gl.get_error() != glow::NO_ERROR {}
    }
}

/// Drain pending GL error codes left behind by a call and report them
///
/// # Arguments
///
/// * `gl` - GL function table
/// * `call` - Literal text of the call that just ran
/// * `file` - Source file of the call site
/// * `line` - Source line of the call site
///
/// # Returns
///
/// `Ok(())` when no error state was pending, otherwise the first drained
/// code as [`Error::GraphicsCallFailed`].
pub fn check(gl: &glow::Context, call: &str, file: &'static str, line: u32) -> Result<()> {
    let mut codes = Vec::new();
    unsafe {
        loop {
            let code = gl.get_error();
            if code == glow::NO_ERROR {
                break;
            }
            codes.push(code);
        }
    }

    report_errors(&codes, call, file, line)
}

/// Report drained error codes for one call site
///
/// Logs one entry per code (the entry's location fields carry the caller's
/// file and line), updates statistics and duplicate grouping, writes to the
/// configured output, and returns the first code as
/// [`Error::GraphicsCallFailed`]. An empty slice returns `Ok(())`.
pub fn report_errors(codes: &[u32], call: &str, file: &'static str, line: u32) -> Result<()> {
    let first = match codes.first() {
        Some(&code) => code,
        None => return Ok(()),
    };

    // Reporting config; absent means log-only (validation disabled)
    let config = ERROR_CHECK_CONFIG.lock().unwrap().clone();

    for &code in codes {
        let message = format!(
            "{} (0x{:04X}) from {} at {}:{}",
            error_code_name(code),
            code,
            call,
            file,
            line
        );

        // Logged with the caller's location, not this function's
        Engine::log_detailed(LogSeverity::Error, "quadra::gl", message.clone(), file, line);

        let config = match &config {
            Some(cfg) => cfg,
            None => continue,
        };

        if config.enable_stats {
            ERROR_CHECK_STATS.increment(code);
        }

        // Track message for grouping
        let occurrence_count = if config.enable_stats {
            let mut tracker_guard = MESSAGE_TRACKER.lock().unwrap();
            match tracker_guard.as_mut() {
                Some(tracker) => tracker.track_message(&message),
                None => {
                    // Initialize tracker if not done yet
                    *tracker_guard = Some(MessageTracker {
                        messages: FxHashMap::default(),
                    });
                    tracker_guard.as_mut().unwrap().track_message(&message)
                }
            }
        } else {
            1
        };

        // Add repetition indicator if message appeared before
        let repeat_indicator = if occurrence_count > 1 {
            format!(" [×{}]", occurrence_count)
        } else {
            String::new()
        };

        // Format output (console version with colors)
        let console_output = format!(
            "{} {} [{}]{}\n  ├─ {}: {}\n  └─ {}\n",
            "[OPENGL".bright_blue().bold(),
            format!("{}]", error_code_name(code).red().bold())
                .bright_blue()
                .bold(),
            format!("0x{:04X}", code).bright_black(),
            repeat_indicator.yellow(),
            "Call".bright_black(),
            call.white(),
            format!("{}:{}", file, line).white()
        );

        // Format output (file version without colors)
        let file_output = format!(
            "[OPENGL {}] [0x{:04X}]{}\n  ├─ Call: {}\n  └─ {}:{}\n",
            error_code_name(code),
            code,
            repeat_indicator,
            call,
            file,
            line
        );

        // Output to console and/or file
        match &config.output {
            DebugOutput::Console => {
                eprint!("{}", console_output);
            }
            DebugOutput::File(path) => {
                write_to_file(path, &file_output);
            }
            DebugOutput::Both(path) => {
                eprint!("{}", console_output);
                write_to_file(path, &file_output);
            }
        }
    }

    if let Some(config) = &config {
        // Panic on any error if strict mode enabled
        if config.panic_on_error {
            panic!(
                "\n⚠️  PANIC ON ERROR (Strict Mode)\n\
                Error: {} (0x{:04X})\n\
                Call: {}\n\
                Location: {}:{}\n",
                error_code_name(first),
                first,
                call,
                file,
                line
            );
        }

        // Break on error if configured (for debugger attachment)
        if config.break_on_error {
            eprintln!(
                "\n{}\n  Call: {} [{}]\n  Location: {}:{}\n",
                "⚠️  BREAK ON GL ERROR - Aborting execution".red().bold(),
                call.yellow(),
                error_code_name(first).cyan(),
                file,
                line
            );
            std::process::abort();
        }
    }

    Err(Error::GraphicsCallFailed {
        code: first,
        call: call.to_string(),
        file,
        line,
    })
}

/// Write message to log file
fn write_to_file(path: &str, message: &str) {
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{}", message);
    }
}

/// Wrap one GL call with error draining and checking
///
/// Clears pending error state, evaluates the call, then drains and reports
/// any codes the call left behind. Yields the call's value on success.
///
/// # Example
///
/// ```no_run
/// # use glow::HasContext;
/// # use quadra_engine_renderer_gl::gl_call;
/// # fn bind_nothing(gl: &glow::Context) -> quadra_engine::quadra::Result<()> {
/// unsafe {
///     gl_call!(gl, gl.bind_vertex_array(None))?;
/// }
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! gl_call {
    ($gl:expr, $call:expr) => {{
        $crate::clear_errors(&$gl);
        let __value = $call;
        match $crate::check(&$gl, stringify!($call), file!(), line!()) {
            Ok(()) => Ok(__value),
            Err(err) => Err(err),
        }
    }};
}

#[cfg(test)]
#[path = "debug_tests.rs"]
mod tests;
