//! Ready-made terminal handlers
//!
//! Suitable for [`set_handler`](crate::set_handler) when the firmware has no
//! handler of its own. Neither returns.

use crate::FaultReport;

/// Stop execution
///
/// Interrupts are masked first on Cortex-M targets (`cortex-m` feature).
pub fn halt(report: FaultReport) {
    #[cfg(feature = "defmt")]
    defmt::error!("halted: {}", report);
    let _ = report;

    #[cfg(all(feature = "cortex-m", target_arch = "arm"))]
    cortex_m::interrupt::disable();

    loop {
        core::hint::spin_loop();
    }
}

/// Request a system reset through the SCB
#[cfg(all(feature = "cortex-m", target_arch = "arm"))]
pub fn system_reset(report: FaultReport) {
    #[cfg(feature = "defmt")]
    defmt::error!("resetting: {}", report);
    let _ = report;

    cortex_m::peripheral::SCB::sys_reset();
}
