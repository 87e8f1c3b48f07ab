//! Serial diagnostic logger
//!
//! One line per event, written to a best-effort sink (sink errors are
//! swallowed - the stream is write-only with no delivery guarantee). Each
//! line carries up to five prefix fields, individually togglable at
//! runtime, always printed in the fixed order:
//!
//! ```text
//! time level free-memory [file:line] module > message
//! ```
//!
//! Progress markers during ramps and waits bypass the prefix entirely via
//! [`Logger::append`], so a phase line reads like
//! `0000:00:07:005 260 > Accelerate for 2s....................`.

use core::fmt::{self, Write};

use heapless::String;

use crate::traits::Telemetry;

/// Scratch buffer size for one formatted message
///
/// Messages longer than this are truncated at the buffer boundary.
pub const LOG_BUFFER_SIZE: usize = 128;

/// Log severity, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Verbose,
    Debug,
    Info,
    Warning,
    Error,
}

impl Level {
    /// Bracketed tag printed in the level field
    pub fn tag(self) -> &'static str {
        match self {
            Level::Verbose => "[VERBOSE]",
            Level::Debug => "[DEBUG]",
            Level::Info => "[INFO]",
            Level::Warning => "[WARNING]",
            Level::Error => "[ERROR]",
        }
    }
}

/// Runtime logger configuration
///
/// Toggles one prefix field each; defaults enable everything at the
/// lowest threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LogConfig {
    /// Drop records below this severity
    pub threshold: Level,
    /// Print the uptime field
    pub show_time: bool,
    /// Format uptime as `HHHH:MM:SS:mmm` instead of raw milliseconds
    pub human_readable_time: bool,
    /// Print the severity tag
    pub show_level: bool,
    /// Print the free-memory figure
    pub show_free_memory: bool,
    /// Print the `[file:line]` location
    pub show_file_name: bool,
    /// Print the module path after the location (only with the file name)
    pub show_function_name: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            threshold: Level::Verbose,
            show_time: true,
            human_readable_time: true,
            show_level: true,
            show_free_memory: true,
            show_file_name: true,
            show_function_name: true,
        }
    }
}

impl LogConfig {
    /// Check if any prefix field is enabled
    ///
    /// The `> ` separator before the message only appears when one is.
    pub fn has_prefix(&self) -> bool {
        self.show_time
            || self.show_level
            || self.show_free_memory
            || self.show_file_name
            || self.show_function_name
    }
}

/// Call-site location, captured by the [`log!`](crate::log) macros
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub module: &'static str,
}

impl Location {
    /// File name with any leading path stripped
    pub fn file_name(&self) -> &'static str {
        self.file.rsplit('/').next().unwrap_or(self.file)
    }
}

/// The rig's diagnostic logger
///
/// Constructed once at startup and owned by the cycle task; the system is
/// single-threaded, so no sharing ever happens.
#[derive(Debug)]
pub struct Logger<W, T> {
    sink: W,
    telemetry: T,
    config: LogConfig,
    buf: String<LOG_BUFFER_SIZE>,
}

impl<W: Write, T: Telemetry> Logger<W, T> {
    /// Create a logger over a sink and telemetry source
    pub fn new(sink: W, telemetry: T, config: LogConfig) -> Self {
        Self {
            sink,
            telemetry,
            config,
            buf: String::new(),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Borrow the sink (used by host tests to inspect output)
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Write a record without a line terminator
    ///
    /// The line stays open so progress markers can be appended to it.
    pub fn log(&mut self, level: Level, location: Location, args: fmt::Arguments<'_>) {
        if level < self.config.threshold {
            return;
        }
        self.write_prefix(level, location);
        self.write_message(args);
    }

    /// Write a record and terminate the line
    pub fn logln(&mut self, level: Level, location: Location, args: fmt::Arguments<'_>) {
        if level < self.config.threshold {
            return;
        }
        self.write_prefix(level, location);
        self.write_message(args);
        let _ = self.sink.write_str("\r\n");
    }

    /// Append to the currently open line, no prefix
    pub fn append(&mut self, args: fmt::Arguments<'_>) {
        self.write_message(args);
    }

    /// Append to the currently open line and terminate it
    pub fn appendln(&mut self, args: fmt::Arguments<'_>) {
        self.write_message(args);
        let _ = self.sink.write_str("\r\n");
    }

    fn write_prefix(&mut self, level: Level, location: Location) {
        if self.config.show_time {
            let now = self.telemetry.uptime_ms();
            if self.config.human_readable_time {
                let hour = now / 3_600_000;
                let min = (now / 60_000) % 60;
                let sec = (now / 1000) % 60;
                let ms = now % 1000;
                let _ = write!(self.sink, "{hour:04}:{min:02}:{sec:02}:{ms:03} ");
            } else {
                let _ = write!(self.sink, "{now} ");
            }
        }

        if self.config.show_level {
            let _ = write!(self.sink, "{} ", level.tag());
        }

        if self.config.show_free_memory {
            let _ = write!(self.sink, "{} ", self.telemetry.free_bytes());
        }

        if self.config.show_file_name {
            let _ = write!(self.sink, "[{}:{}] ", location.file_name(), location.line);
            if self.config.show_function_name {
                let _ = write!(self.sink, "{} ", location.module);
            }
        }

        if self.config.has_prefix() {
            let _ = self.sink.write_str("> ");
        }
    }

    fn write_message(&mut self, args: fmt::Arguments<'_>) {
        self.buf.clear();
        // Overflow truncates at the buffer boundary, keeping what fits
        let _ = self.buf.write_fmt(args);
        let _ = self.sink.write_str(self.buf.as_str());
    }
}

/// Log a record, leaving the line open for progress markers
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.log(
            $level,
            $crate::logging::Location {
                file: file!(),
                line: line!(),
                module: module_path!(),
            },
            format_args!($($arg)*),
        )
    };
}

/// Log a record and terminate the line
#[macro_export]
macro_rules! logln {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.logln(
            $level,
            $crate::logging::Location {
                file: file!(),
                line: line!(),
                module: module_path!(),
            },
            format_args!($($arg)*),
        )
    };
}

/// Append to the open line, no prefix
#[macro_export]
macro_rules! log_append {
    ($logger:expr, $($arg:tt)*) => {
        $logger.append(format_args!($($arg)*))
    };
}

/// Append to the open line and terminate it
#[macro_export]
macro_rules! logln_append {
    ($logger:expr, $($arg:tt)*) => {
        $logger.appendln(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubTelemetry {
        uptime_ms: u64,
        free_bytes: usize,
    }

    impl Telemetry for StubTelemetry {
        fn uptime_ms(&self) -> u64 {
            self.uptime_ms
        }

        fn free_bytes(&self) -> usize {
            self.free_bytes
        }
    }

    const HERE: Location = Location {
        file: "src/tasks/cycle.rs",
        line: 42,
        module: "trundle_firmware::tasks::cycle",
    };

    fn logger(config: LogConfig) -> Logger<String<512>, StubTelemetry> {
        let telemetry = StubTelemetry {
            uptime_ms: 3_723_456, // 1h 2m 3.456s
            free_bytes: 1024,
        };
        Logger::new(String::new(), telemetry, config)
    }

    #[test]
    fn test_full_prefix_order() {
        let mut logger = logger(LogConfig::default());
        logger.logln(Level::Info, HERE, format_args!("hello {}", 7));

        assert_eq!(
            logger.sink().as_str(),
            "0001:02:03:456 [INFO] 1024 [cycle.rs:42] \
             trundle_firmware::tasks::cycle > hello 7\r\n"
        );
    }

    #[test]
    fn test_raw_time() {
        let mut config = LogConfig::default();
        config.human_readable_time = false;
        config.show_level = false;
        config.show_free_memory = false;
        config.show_file_name = false;
        config.show_function_name = false;

        let mut logger = logger(config);
        logger.logln(Level::Info, HERE, format_args!("tick"));

        assert_eq!(logger.sink().as_str(), "3723456 > tick\r\n");
    }

    #[test]
    fn test_bare_message_without_prefix_fields() {
        let config = LogConfig {
            threshold: Level::Verbose,
            show_time: false,
            human_readable_time: false,
            show_level: false,
            show_free_memory: false,
            show_file_name: false,
            show_function_name: false,
        };

        let mut logger = logger(config);
        logger.logln(Level::Info, HERE, format_args!("plain"));

        // No fields, no "> " separator
        assert_eq!(logger.sink().as_str(), "plain\r\n");
    }

    #[test]
    fn test_function_name_needs_file_name() {
        let mut config = LogConfig::default();
        config.show_time = false;
        config.show_level = false;
        config.show_free_memory = false;
        config.show_file_name = false;
        config.show_function_name = true;

        let mut logger = logger(config);
        logger.logln(Level::Info, HERE, format_args!("m"));

        // Module path is nested under the file-name toggle
        assert_eq!(logger.sink().as_str(), "> m\r\n");
    }

    #[test]
    fn test_threshold_filters() {
        let mut config = LogConfig::default();
        config.threshold = Level::Info;

        let mut logger = logger(config);
        logger.logln(Level::Debug, HERE, format_args!("dropped"));
        assert_eq!(logger.sink().as_str(), "");

        logger.logln(Level::Warning, HERE, format_args!("kept"));
        assert!(logger.sink().as_str().ends_with("> kept\r\n"));
    }

    #[test]
    fn test_append_markers() {
        let mut config = LogConfig::default();
        config.show_time = false;
        config.show_level = false;
        config.show_free_memory = false;
        config.show_file_name = false;
        config.show_function_name = false;

        let mut logger = logger(config);
        logger.log(Level::Info, HERE, format_args!("Accelerate for 2s"));
        logger.append(format_args!("."));
        logger.append(format_args!("."));
        logger.appendln(format_args!("."));

        assert_eq!(logger.sink().as_str(), "Accelerate for 2s...\r\n");
    }

    #[test]
    fn test_macros_capture_location() {
        let mut config = LogConfig::default();
        config.show_time = false;
        config.show_level = false;
        config.show_free_memory = false;

        let mut lg = logger(config);
        logln!(lg, Level::Info, "cycle {:04}", 12);

        let line = lg.sink().as_str();
        assert!(line.contains("[logging.rs:"));
        assert!(line.contains("trundle_core::logging::tests "));
        assert!(line.ends_with("> cycle 0012\r\n"));
    }

    #[test]
    fn test_overlong_message_truncates() {
        let config = LogConfig {
            threshold: Level::Verbose,
            show_time: false,
            human_readable_time: false,
            show_level: false,
            show_free_memory: false,
            show_file_name: false,
            show_function_name: false,
        };

        let mut logger = logger(config);
        logger.log(Level::Info, HERE, format_args!("{:>200}", "x"));

        let written = logger.sink().as_str().len();
        assert!(written > 0);
        assert!(written <= LOG_BUFFER_SIZE);
    }
}
