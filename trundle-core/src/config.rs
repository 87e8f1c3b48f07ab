//! Configuration type definitions
//!
//! The rig runs one fixed test plan; `Default` carries the stock bench
//! values. There is no runtime parsing - edit and rebuild.

use crate::traits::motor::MAX_SPEED;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cruise speed as a percentage of full scale
pub const DEFAULT_CRUISE_PERCENT: u16 = 90;

/// Timing and speed parameters for the endurance cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CycleConfig {
    /// Total acceleration ramp duration
    pub accel_duration_ms: u32,
    /// Time between ramp speed steps
    pub accel_step_ms: u32,
    /// Cruise and rest duration (each Move and StopHold phase)
    pub movement_duration_ms: u32,
    /// Speed held during the Move phases
    pub cruise_speed: u8,
    /// Settling delay before the first cycle
    pub startup_delay_ms: u32,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            accel_duration_ms: 2000,
            accel_step_ms: 100,
            movement_duration_ms: 30_000,
            cruise_speed: (MAX_SPEED as u16 * DEFAULT_CRUISE_PERCENT / 100) as u8,
            startup_delay_ms: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_cruise_speed() {
        // 90% of 255, truncated
        assert_eq!(CycleConfig::default().cruise_speed, 229);
    }

    #[test]
    fn test_stock_timings() {
        let config = CycleConfig::default();
        assert_eq!(config.accel_duration_ms, 2000);
        assert_eq!(config.accel_step_ms, 100);
        assert_eq!(config.movement_duration_ms, 30_000);
        assert_eq!(config.startup_delay_ms, 5000);
    }
}
