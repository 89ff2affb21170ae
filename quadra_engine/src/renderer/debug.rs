/// Debug output types - configuration and statistics for backend error checking

/// Where backend debug messages are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugOutput {
    /// Write to stderr only
    Console,
    /// Append to the given log file only
    File(String),
    /// Write to stderr and append to the given log file
    Both(String),
}

/// Counters for graphics API errors observed during a run
///
/// Populated by the backend error checker, grouped by error class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorCheckStats {
    pub invalid_enums: u32,
    pub invalid_values: u32,
    pub invalid_operations: u32,
    pub invalid_framebuffer_operations: u32,
    pub out_of_memory: u32,
    pub other: u32,
}

impl ErrorCheckStats {
    /// Total number of errors across all classes
    pub fn total(&self) -> u32 {
        self.invalid_enums
            + self.invalid_values
            + self.invalid_operations
            + self.invalid_framebuffer_operations
            + self.out_of_memory
            + self.other
    }
}
