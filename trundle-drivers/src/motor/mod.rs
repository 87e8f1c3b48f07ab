//! Motor driver implementations

pub mod brushed;

pub use brushed::BrushedMotor;
