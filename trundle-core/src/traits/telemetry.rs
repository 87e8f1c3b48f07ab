//! Telemetry sources for the diagnostic logger
//!
//! The logger prefixes each line with a free-running timestamp and a
//! free-memory figure; this trait supplies both. The firmware implements
//! it over the embassy monotonic clock and the allocator, host tests use
//! fixed stubs.

/// Runtime figures consumed by the logger
pub trait Telemetry {
    /// Milliseconds since power-on
    ///
    /// Monotonic; no wraparound handling (sessions are far below the
    /// rollover period of a 64-bit millisecond clock).
    fn uptime_ms(&self) -> u64;

    /// Free memory in bytes
    fn free_bytes(&self) -> usize;
}
