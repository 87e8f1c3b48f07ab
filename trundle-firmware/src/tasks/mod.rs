//! Embassy async tasks
//!
//! The rig is single-threaded by contract: one task owns the drive, the
//! logger, and the whole thread of control.

pub mod cycle;

pub use cycle::cycle_task;
