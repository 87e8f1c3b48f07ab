//! Cycle state machine
//!
//! The endurance test is a fixed traversal of phases with no branching on
//! sensor input; every transition is time-driven by the firmware task.

pub mod phase;

pub use phase::{CycleTracker, Phase};
