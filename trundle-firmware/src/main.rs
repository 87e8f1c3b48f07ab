//! Trundle - Motor Endurance Test Firmware
//!
//! Main firmware binary for RP2040-based differential-drive bases.
//! Drives both wheel motors through accelerate / move / stop cycles
//! forever, logging progress over the rig's serial line.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::pwm::{Config as PwmConfig, Pwm, PwmOutput};
use embassy_rp::uart::{Config as UartConfig, UartTx};
use embedded_alloc::LlffHeap as Heap;
use {defmt_rtt as _, panic_probe as _};

use trundle_core::config::CycleConfig;
use trundle_core::drive::Drive;
use trundle_core::logging::{Level as LogLevel, LogConfig, Logger};
use trundle_drivers::motor::BrushedMotor;

use crate::serial::SerialSink;
use crate::telemetry::RigTelemetry;

mod serial;
mod tasks;
mod telemetry;

// Heap allocator - only consulted for the logger's free-memory figure
#[global_allocator]
static HEAP: Heap = Heap::empty();

const HEAP_SIZE: usize = 8 * 1024;

/// Baud rate of the diagnostic serial stream
const DIAGNOSTIC_BAUD: u32 = 115_200;

/// One wheel motor: H-bridge direction pin plus PWM speed channel
pub type WheelMotor = BrushedMotor<Output<'static>, PwmOutput<'static>>;

/// Both wheel motors, paired
pub type RigDrive = Drive<WheelMotor, WheelMotor>;

/// The rig's diagnostic logger over the UART sink
pub type RigLogger = Logger<SerialSink, RigTelemetry>;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Trundle firmware starting...");

    init_heap();

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Diagnostic UART, TX only, on GPIO0
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = DIAGNOSTIC_BAUD;
    let uart = UartTx::new_blocking(p.UART0, p.PIN_0, uart_config);

    // Same choices the bench rig ships with: debug threshold, time and
    // free memory on, level tag and call-site location off
    let log_config = LogConfig {
        threshold: LogLevel::Debug,
        show_time: true,
        human_readable_time: true,
        show_level: false,
        show_free_memory: true,
        show_file_name: false,
        show_function_name: false,
    };
    let logger = Logger::new(SerialSink::new(uart), RigTelemetry, log_config);

    let pwm_config = PwmConfig::default();

    // Left motor: direction GPIO4, speed GPIO5 (PWM slice 2, output B)
    let left_dir = Output::new(p.PIN_4, Level::Low);
    let (_, left_pwm) = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_5, pwm_config.clone()).split();
    let left = BrushedMotor::new(left_dir, unwrap!(left_pwm));

    // Right motor: direction GPIO7, speed GPIO6 (PWM slice 3, output A)
    let right_dir = Output::new(p.PIN_7, Level::Low);
    let (right_pwm, _) = Pwm::new_output_a(p.PWM_SLICE3, p.PIN_6, pwm_config).split();
    let right = BrushedMotor::new(right_dir, unwrap!(right_pwm));

    let drive = Drive::new(left, right);

    info!("Motors wired, starting test cycle");
    spawner
        .spawn(tasks::cycle_task(drive, logger, CycleConfig::default()))
        .unwrap();
}

fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    #[allow(static_mut_refs)]
    unsafe {
        HEAP.init(HEAP_MEM.as_ptr() as usize, HEAP_SIZE)
    }
}
