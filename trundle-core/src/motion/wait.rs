//! Stepped wait plan
//!
//! Holds the current motor state for a fixed duration, broken into 500ms
//! increments so the firmware can emit one progress marker per increment.
//! The wait is unconditional: once started it runs to completion.

/// Increment between progress markers during a wait
pub const WAIT_STEP_MS: u32 = 500;

/// Plan for one timed hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WaitPlan {
    duration_ms: u32,
}

impl WaitPlan {
    /// Plan a wait of `duration_ms` total
    pub fn new(duration_ms: u32) -> Self {
        Self { duration_ms }
    }

    /// Number of full [`WAIT_STEP_MS`] increments
    pub fn full_steps(&self) -> u32 {
        self.duration_ms / WAIT_STEP_MS
    }

    /// Sub-increment remainder, held after the last full increment
    pub fn remainder_ms(&self) -> u32 {
        self.duration_ms % WAIT_STEP_MS
    }
}
