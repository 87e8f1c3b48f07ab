//! UART sink for the diagnostic logger
//!
//! Adapts the blocking UART transmitter to `core::fmt::Write` so the
//! core logger can print through it. The stream is best-effort: write
//! errors are dropped, never surfaced.

use core::fmt;

use embassy_rp::uart::{Blocking, UartTx};

/// Write-only serial sink on UART0
pub struct SerialSink {
    uart: UartTx<'static, Blocking>,
}

impl SerialSink {
    pub fn new(uart: UartTx<'static, Blocking>) -> Self {
        Self { uart }
    }
}

impl fmt::Write for SerialSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let _ = self.uart.blocking_write(s.as_bytes());
        Ok(())
    }
}
