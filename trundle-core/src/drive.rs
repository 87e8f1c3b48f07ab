//! Differential drive pairing of the two wheel motors
//!
//! The motors face each other across the chassis, so driving the base
//! forward means spinning the right motor clockwise and the left motor
//! counter-clockwise. [`Drive`] owns both channels and dispatches on a
//! [`Heading`] instead of exposing per-motor move callbacks.

use crate::traits::{Motor, Rotation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction of travel for the whole base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Heading {
    #[default]
    Forward,
    Backward,
}

/// The two wheel motors, driven as a pair
#[derive(Debug)]
pub struct Drive<L, R> {
    left: L,
    right: R,
}

impl<L: Motor, R: Motor> Drive<L, R> {
    /// Pair the left and right motor channels
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Drive the base in the given heading at the given speed
    pub fn travel(&mut self, heading: Heading, speed: u8) {
        match heading {
            Heading::Forward => {
                self.right.spin(Rotation::Clockwise, speed);
                self.left.spin(Rotation::CounterClockwise, speed);
            }
            Heading::Backward => {
                self.right.spin(Rotation::CounterClockwise, speed);
                self.left.spin(Rotation::Clockwise, speed);
            }
        }
    }

    /// Stop both motors
    pub fn stop(&mut self) {
        self.left.stop();
        self.right.stop();
    }
}
