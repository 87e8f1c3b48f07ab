//! Hardware abstraction traits
//!
//! These traits define the interface between the test-harness logic
//! and hardware-specific implementations.

pub mod motor;
pub mod telemetry;

pub use motor::{Motor, Rotation, MAX_SPEED};
pub use telemetry::Telemetry;
