//! The endurance test cycle task
//!
//! Walks the cycle state machine forever: ramp up, cruise, stop, rest,
//! then the same backward. Each phase opens one log line and the ramp and
//! wait executors append one `.` per step to it, so the serial trace
//! shows progress in real time.

use defmt::info;
use embassy_time::Timer;

use trundle_core::config::CycleConfig;
use trundle_core::drive::Heading;
use trundle_core::logging::Level;
use trundle_core::motion::{Ramp, WaitPlan, WAIT_STEP_MS};
use trundle_core::state::{CycleTracker, Phase};
use trundle_core::{log, log_append, logln, logln_append};

use crate::{RigDrive, RigLogger};

#[embassy_executor::task]
pub async fn cycle_task(mut drive: RigDrive, mut logger: RigLogger, config: CycleConfig) {
    info!("Cycle task started");

    // Let the serial line settle before the banner
    Timer::after_millis(1000).await;

    log!(logger, Level::Info, "Starting motor endurance test");
    wait_for(&mut logger, config.startup_delay_ms).await;
    logln_append!(logger, "");

    let ramp = Ramp::new(
        config.accel_duration_ms,
        config.accel_step_ms,
        config.cruise_speed,
    );
    let mut tracker = CycleTracker::new();

    loop {
        run_phase(&mut drive, &mut logger, &tracker, &ramp, &config).await;
        tracker.advance();
    }
}

/// Execute the action of one phase, blocking for its full duration
async fn run_phase(
    drive: &mut RigDrive,
    logger: &mut RigLogger,
    tracker: &CycleTracker,
    ramp: &Ramp,
    config: &CycleConfig,
) {
    let cycle = tracker.cycle();
    let accel_s = config.accel_duration_ms / 1000;
    let move_s = config.movement_duration_ms / 1000;

    match tracker.phase() {
        Phase::Start => {
            logln!(logger, Level::Info, "[Motors] - Cycle {cycle:04} - Start");
        }
        Phase::ForwardAccelerate => {
            log!(
                logger,
                Level::Info,
                "[Motors] - Cycle {cycle:04} - Forward  - Accelerate for {accel_s}s"
            );
            accelerate(drive, logger, Heading::Forward, ramp).await;
        }
        Phase::ForwardMove => {
            log!(
                logger,
                Level::Info,
                "[Motors] - Cycle {cycle:04} - Forward  - Move for {move_s}s"
            );
            wait_for(logger, config.movement_duration_ms).await;
        }
        Phase::ForwardStop => {
            log!(
                logger,
                Level::Info,
                "[Motors] - Cycle {cycle:04} - Forward  - Stop for {move_s}s"
            );
            drive.stop();
        }
        Phase::ForwardStopHold => {
            wait_for(logger, config.movement_duration_ms).await;
        }
        Phase::BackwardAccelerate => {
            log!(
                logger,
                Level::Info,
                "[Motors] - Cycle {cycle:04} - Backward - Accelerate for {accel_s}s"
            );
            accelerate(drive, logger, Heading::Backward, ramp).await;
        }
        Phase::BackwardMove => {
            log!(
                logger,
                Level::Info,
                "[Motors] - Cycle {cycle:04} - Backward - Move for {move_s}s"
            );
            wait_for(logger, config.movement_duration_ms).await;
        }
        Phase::BackwardStop => {
            log!(
                logger,
                Level::Info,
                "[Motors] - Cycle {cycle:04} - Backward - Stop for {move_s}s"
            );
            drive.stop();
        }
        Phase::BackwardStopHold => {
            wait_for(logger, config.movement_duration_ms).await;
            logln!(logger, Level::Info, "[Motors] - Cycle {cycle:04} - End");
            logln_append!(logger, "");
        }
    }
}

/// Ramp the drive up to the plan's target speed in the given heading
///
/// One speed step per plan step with a progress marker each, then a snap
/// to the target, then the sub-step remainder of the duration. A plan
/// shorter than one step has no loop iterations and jumps straight to
/// the target.
async fn accelerate(drive: &mut RigDrive, logger: &mut RigLogger, heading: Heading, ramp: &Ramp) {
    for speed in ramp.step_speeds() {
        drive.travel(heading, speed);
        Timer::after_millis(u64::from(ramp.step_ms())).await;
        log_append!(logger, ".");
    }

    drive.travel(heading, ramp.target());

    let remainder = ramp.remainder_ms();
    if remainder != 0 {
        Timer::after_millis(u64::from(remainder)).await;
        logln_append!(logger, ".");
    } else {
        logln_append!(logger, "");
    }
}

/// Hold the current motor state for the given duration
///
/// One progress marker per 500ms increment, then the remainder. Holds
/// the single thread of control for the full duration - there is no
/// cancellation.
async fn wait_for(logger: &mut RigLogger, duration_ms: u32) {
    let plan = WaitPlan::new(duration_ms);

    for _ in 0..plan.full_steps() {
        Timer::after_millis(u64::from(WAIT_STEP_MS)).await;
        log_append!(logger, ".");
    }

    let remainder = plan.remainder_ms();
    if remainder != 0 {
        Timer::after_millis(u64::from(remainder)).await;
        logln_append!(logger, ".");
    } else {
        logln_append!(logger, "");
    }
}
