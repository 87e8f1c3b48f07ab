//! Test cycle phases
//!
//! One cycle drives the base forward (ramp, cruise, stop, rest) and then
//! backward the same way. The machine has no terminal state - it loops
//! until power-off.

use crate::drive::Heading;

/// Phases of one endurance cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Cycle boundary, logging only
    Start,
    /// Ramp up to cruise speed, heading forward
    ForwardAccelerate,
    /// Hold cruise speed forward
    ForwardMove,
    /// Cut both motors
    ForwardStop,
    /// Rest at standstill before reversing
    ForwardStopHold,
    /// Ramp up to cruise speed, heading backward
    BackwardAccelerate,
    /// Hold cruise speed backward
    BackwardMove,
    /// Cut both motors
    BackwardStop,
    /// Rest at standstill before the next cycle
    BackwardStopHold,
}

impl Phase {
    /// The phase entered after this one
    ///
    /// Unconditional: there is no branching anywhere in the cycle.
    pub fn next(self) -> Phase {
        use Phase::*;

        match self {
            Start => ForwardAccelerate,
            ForwardAccelerate => ForwardMove,
            ForwardMove => ForwardStop,
            ForwardStop => ForwardStopHold,
            ForwardStopHold => BackwardAccelerate,
            BackwardAccelerate => BackwardMove,
            BackwardMove => BackwardStop,
            BackwardStop => BackwardStopHold,
            BackwardStopHold => Start,
        }
    }

    /// Heading driven during this phase, if any
    pub fn heading(self) -> Option<Heading> {
        use Phase::*;

        match self {
            ForwardAccelerate | ForwardMove => Some(Heading::Forward),
            BackwardAccelerate | BackwardMove => Some(Heading::Backward),
            _ => None,
        }
    }

    /// Check if this phase cuts the motors
    pub fn stops_motors(self) -> bool {
        matches!(self, Phase::ForwardStop | Phase::BackwardStop)
    }
}

/// Current phase plus the free-running cycle counter
///
/// The counter starts at 1, increments once per full forward/backward
/// traversal, and never resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleTracker {
    phase: Phase,
    cycle: u32,
}

impl Default for CycleTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleTracker {
    /// Start a fresh tracker at the top of cycle 1
    pub fn new() -> Self {
        Self {
            phase: Phase::Start,
            cycle: 1,
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current cycle number
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Move to the next phase, bumping the counter on cycle wrap
    pub fn advance(&mut self) {
        self.phase = self.phase.next();
        if self.phase == Phase::Start {
            self.cycle += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_traversal_order() {
        let mut tracker = CycleTracker::new();
        let expected = [
            Phase::Start,
            Phase::ForwardAccelerate,
            Phase::ForwardMove,
            Phase::ForwardStop,
            Phase::ForwardStopHold,
            Phase::BackwardAccelerate,
            Phase::BackwardMove,
            Phase::BackwardStop,
            Phase::BackwardStopHold,
        ];

        for phase in expected {
            assert_eq!(tracker.phase(), phase);
            tracker.advance();
        }
        assert_eq!(tracker.phase(), Phase::Start);
    }

    #[test]
    fn test_counter_increments_once_per_cycle() {
        let mut tracker = CycleTracker::new();
        assert_eq!(tracker.cycle(), 1);

        // Two full traversals, nine phases each
        for _ in 0..9 {
            tracker.advance();
        }
        assert_eq!(tracker.cycle(), 2);

        for _ in 0..9 {
            tracker.advance();
        }
        assert_eq!(tracker.cycle(), 3);
        assert_eq!(tracker.phase(), Phase::Start);
    }

    #[test]
    fn test_counter_never_resets_mid_cycle() {
        let mut tracker = CycleTracker::new();
        for _ in 0..8 {
            tracker.advance();
            assert_eq!(tracker.cycle(), 1);
        }
    }

    #[test]
    fn test_headings() {
        assert_eq!(Phase::ForwardAccelerate.heading(), Some(Heading::Forward));
        assert_eq!(Phase::ForwardMove.heading(), Some(Heading::Forward));
        assert_eq!(Phase::BackwardAccelerate.heading(), Some(Heading::Backward));
        assert_eq!(Phase::BackwardMove.heading(), Some(Heading::Backward));
        assert_eq!(Phase::Start.heading(), None);
        assert_eq!(Phase::ForwardStop.heading(), None);
        assert_eq!(Phase::BackwardStopHold.heading(), None);
    }

    #[test]
    fn test_stop_phases() {
        assert!(Phase::ForwardStop.stops_motors());
        assert!(Phase::BackwardStop.stops_motors());
        assert!(!Phase::ForwardStopHold.stops_motors());
        assert!(!Phase::ForwardMove.stops_motors());
    }
}
