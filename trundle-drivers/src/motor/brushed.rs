//! Brushed DC motor over a direction pin and a PWM channel
//!
//! One motor channel of the drive base: a binary direction output into
//! the H-bridge and a pulse-width speed output. Writes are
//! fire-and-forget - there is no readback and no failure path in the
//! motor contract, so hardware errors are discarded at the write site.

use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::pwm::SetDutyCycle;

use trundle_core::traits::{Motor, Rotation, MAX_SPEED};

/// Brushed DC motor channel
#[derive(Debug)]
pub struct BrushedMotor<D, P> {
    direction: D,
    speed: P,
}

impl<D: OutputPin, P: SetDutyCycle> BrushedMotor<D, P> {
    /// Create a motor from its direction pin and PWM speed channel
    pub fn new(direction: D, speed: P) -> Self {
        Self { direction, speed }
    }
}

impl<D: OutputPin, P: SetDutyCycle> Motor for BrushedMotor<D, P> {
    fn spin(&mut self, rotation: Rotation, speed: u8) {
        let _ = self.direction.set_state(PinState::from(rotation.is_high()));
        // speed/MAX_SPEED of the PWM range; a channel whose max duty is
        // MAX_SPEED sees the raw speed value unchanged
        let _ = self
            .speed
            .set_duty_cycle_fraction(u16::from(speed), u16::from(MAX_SPEED));
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::pwm::ErrorType as PwmErrorType;

    use super::*;

    /// Mock direction pin
    struct MockPin {
        high: bool,
    }

    impl PinErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    /// Mock PWM channel with the motor's full-scale duty range
    struct MockPwm {
        duty: u16,
    }

    impl PwmErrorType for MockPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            u16::from(MAX_SPEED)
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
            self.duty = duty;
            Ok(())
        }
    }

    fn motor() -> BrushedMotor<MockPin, MockPwm> {
        BrushedMotor::new(MockPin { high: false }, MockPwm { duty: 0 })
    }

    #[test]
    fn test_spin_sets_direction_and_speed() {
        let mut motor = motor();

        motor.spin(Rotation::Clockwise, 100);
        assert!(!motor.direction.high);
        assert_eq!(motor.speed.duty, 100);

        motor.spin(Rotation::CounterClockwise, 229);
        assert!(motor.direction.high);
        assert_eq!(motor.speed.duty, 229);
    }

    #[test]
    fn test_speed_passes_through_full_range() {
        let mut motor = motor();

        for speed in 0..=u8::MAX {
            motor.spin(Rotation::Clockwise, speed);
            assert_eq!(motor.speed.duty, u16::from(speed));
        }
    }

    #[test]
    fn test_stop_equals_spin_clockwise_zero() {
        let mut motor = motor();

        motor.spin(Rotation::CounterClockwise, 255);
        motor.stop();

        assert!(!motor.direction.high);
        assert_eq!(motor.speed.duty, 0);
    }
}
