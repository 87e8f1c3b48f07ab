//! Acceleration ramp plan
//!
//! A ramp takes the base from standstill to a target speed in equal time
//! steps: `steps = duration / step` speed updates, one per step, then a
//! final snap to the target, then any sub-step remainder of the duration.
//!
//! The per-step speed is `(target / steps) * i` - the division happens
//! before the multiplication, so intermediate rounding makes the ramp
//! coarser than `target * i / steps` would be. The rig's reference traces
//! were recorded with the coarse formula, so it is kept bit-exact here.

/// Plan for one timed acceleration ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ramp {
    duration_ms: u32,
    step_ms: u32,
    target: u8,
}

impl Ramp {
    /// Plan a ramp of `duration_ms` total, stepping every `step_ms`,
    /// ending at `target` speed
    pub fn new(duration_ms: u32, step_ms: u32, target: u8) -> Self {
        Self {
            duration_ms,
            step_ms,
            target,
        }
    }

    /// Number of intermediate speed steps
    ///
    /// Zero when the duration is shorter than one step (or the step is
    /// zero); the ramp then degenerates to a jump straight to the target.
    pub fn steps(&self) -> u32 {
        if self.step_ms == 0 {
            0
        } else {
            self.duration_ms / self.step_ms
        }
    }

    /// Duration of one step in milliseconds
    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }

    /// Sub-step remainder of the duration, held after the final snap
    pub fn remainder_ms(&self) -> u32 {
        if self.step_ms == 0 {
            0
        } else {
            self.duration_ms % self.step_ms
        }
    }

    /// Target speed the ramp snaps to after the last step
    pub fn target(&self) -> u8 {
        self.target
    }

    /// Speed commanded at step `i`
    pub fn speed_at(&self, i: u32) -> u8 {
        let steps = self.steps();
        if steps == 0 {
            return self.target;
        }
        // Truncating divide-then-multiply, matching the reference rig
        (u32::from(self.target) / steps * i) as u8
    }

    /// Per-step speeds, in order
    pub fn step_speeds(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.steps()).map(move |i| self.speed_at(i))
    }
}
