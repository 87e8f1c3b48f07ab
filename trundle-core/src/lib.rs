//! Board-agnostic core logic for the Trundle motor endurance rig
//!
//! This crate contains all test-harness logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (motor, telemetry)
//! - Differential drive pairing of the two wheel motors
//! - Motion plans (acceleration ramp, stepped wait)
//! - Cycle state machine for the endurance test
//! - Serial diagnostic logger
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod drive;
pub mod logging;
pub mod motion;
pub mod state;
pub mod traits;
