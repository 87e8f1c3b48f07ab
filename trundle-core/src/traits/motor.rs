//! Motor driver trait
//!
//! A motor channel is two hardware outputs: a binary direction signal and
//! a pulse-width speed signal. The trait is infallible on purpose - the
//! writes are fire-and-forget with no readback, so there is no failure
//! path to surface.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full-scale pulse width for the speed output
pub const MAX_SPEED: u8 = 255;

/// Rotation sense of a single motor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    /// Direction output driven low (0)
    #[default]
    Clockwise,
    /// Direction output driven high (1)
    CounterClockwise,
}

impl Rotation {
    /// Level to put on the direction output for this rotation
    pub fn is_high(self) -> bool {
        matches!(self, Rotation::CounterClockwise)
    }
}

/// Trait for a single motor channel
pub trait Motor {
    /// Spin in the given direction at the given speed
    ///
    /// Sets the direction output from `rotation` and the speed output to
    /// `speed` (0 = stopped, [`MAX_SPEED`] = full power).
    fn spin(&mut self, rotation: Rotation, speed: u8);

    /// Stop the motor immediately
    ///
    /// This is a convenience, not a distinct hardware state: zero speed
    /// with the direction output parked at clockwise.
    fn stop(&mut self) {
        self.spin(Rotation::Clockwise, 0);
    }
}
