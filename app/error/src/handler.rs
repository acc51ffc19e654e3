//! Fault handler contract and the global handler slot

use crate::FaultReport;
use core::cell::Cell;
use critical_section::Mutex;

/// Receiver of fault reports
///
/// A handler is the point of no return for a fault: it is expected to halt,
/// reset or otherwise deal with the condition. The facade does not enforce
/// that, so handlers that return are allowed (and useful on the host).
pub trait FaultHandler {
    /// Handle one fault
    fn on_fault(&mut self, report: FaultReport);
}

impl<F> FaultHandler for F
where
    F: FnMut(FaultReport),
{
    fn on_fault(&mut self, report: FaultReport) {
        self(report)
    }
}

/// Signature of a globally installed fault handler
pub type FaultHandlerFn = fn(FaultReport);

/// Handler used by [`report_fault`] and the non-`_with` helpers
static HANDLER: Mutex<Cell<Option<FaultHandlerFn>>> = Mutex::new(Cell::new(None));

/// Install the global fault handler
///
/// Returns the previously installed handler, if any.
pub fn set_handler(handler: FaultHandlerFn) -> Option<FaultHandlerFn> {
    critical_section::with(|cs| HANDLER.borrow(cs).replace(Some(handler)))
}

/// Remove the global fault handler
pub fn take_handler() -> Option<FaultHandlerFn> {
    critical_section::with(|cs| HANDLER.borrow(cs).take())
}

/// Get the installed global fault handler
pub fn installed_handler() -> Option<FaultHandlerFn> {
    critical_section::with(|cs| HANDLER.borrow(cs).get())
}

/// Report a fault to the global handler
///
/// `line` is 0 and `file` is `None` when the location is unavailable.
/// Panics with the report text if no handler is installed.
pub fn report_fault(error_code: u32, line: u32, file: Option<&'static str>) {
    dispatch(FaultReport::new(error_code, line, file));
}

/// Hand a finished report to the global handler
///
/// The handler runs outside the critical section so it may report again.
pub(crate) fn dispatch(report: FaultReport) {
    #[cfg(feature = "defmt")]
    defmt::error!("{}", report);

    match installed_handler() {
        Some(handler) => handler(report),
        None => panic!("unhandled {}", report),
    }
}
