//! Motion plans for the endurance cycle
//!
//! Both plans are pure arithmetic over durations; the firmware task walks
//! them with real timer delays and motor writes.

pub mod ramp;
pub mod wait;

pub use ramp::Ramp;
pub use wait::{WaitPlan, WAIT_STEP_MS};
