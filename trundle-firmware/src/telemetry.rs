//! Telemetry sources for the logger prefix fields

use embassy_time::Instant;

use trundle_core::traits::Telemetry;

/// Uptime from the embassy monotonic clock, free memory from the heap
pub struct RigTelemetry;

impl Telemetry for RigTelemetry {
    fn uptime_ms(&self) -> u64 {
        Instant::now().as_millis()
    }

    fn free_bytes(&self) -> usize {
        crate::HEAP.free()
    }
}
