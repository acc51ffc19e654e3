//! Call-site helpers
//!
//! With the `diagnostic` feature every helper is `#[track_caller]`, so the
//! location it embeds is the line that called it (or the line that invoked
//! the wrapping macro). Without it no caller location is materialized, so no
//! source path reaches the image at any optimization level. Arguments are
//! taken by value and therefore evaluated exactly once.

use crate::handler::dispatch;
use crate::{FaultHandler, FaultReport, BOOL_CHECK_FAILED, SUCCESS};

/// Build the report for a fault raised by the caller
#[cfg(feature = "diagnostic")]
#[track_caller]
#[inline]
fn fault(error_code: u32) -> FaultReport {
    FaultReport::at(error_code, core::panic::Location::caller())
}

#[cfg(not(feature = "diagnostic"))]
#[inline]
fn fault(error_code: u32) -> FaultReport {
    FaultReport::anonymous(error_code)
}

/// Report `error_code` to the global handler
#[cfg_attr(feature = "diagnostic", track_caller)]
#[inline]
pub fn handle(error_code: u32) {
    dispatch(fault(error_code));
}

/// Report `error_code` to the global handler unless it is [`SUCCESS`]
#[cfg_attr(feature = "diagnostic", track_caller)]
#[inline]
pub fn check(error_code: u32) {
    if error_code != SUCCESS {
        handle(error_code);
    }
}

/// Report [`BOOL_CHECK_FAILED`] to the global handler if `value` is false
#[cfg_attr(feature = "diagnostic", track_caller)]
#[inline]
pub fn check_bool(value: bool) {
    if !value {
        handle(BOOL_CHECK_FAILED);
    }
}

/// Unwrap `result`, reporting its error code to the global handler on `Err`
#[cfg_attr(feature = "diagnostic", track_caller)]
#[inline]
pub fn check_result<T, E>(result: Result<T, E>) -> Option<T>
where
    E: Into<u32>,
{
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            handle(err.into());
            None
        }
    }
}

/// Report `error_code` to `handler`
#[cfg_attr(feature = "diagnostic", track_caller)]
#[inline]
pub fn handle_with<H>(handler: &mut H, error_code: u32)
where
    H: FaultHandler + ?Sized,
{
    handler.on_fault(fault(error_code));
}

/// Report `error_code` to `handler` unless it is [`SUCCESS`]
#[cfg_attr(feature = "diagnostic", track_caller)]
#[inline]
pub fn check_with<H>(handler: &mut H, error_code: u32)
where
    H: FaultHandler + ?Sized,
{
    if error_code != SUCCESS {
        handle_with(handler, error_code);
    }
}

/// Report [`BOOL_CHECK_FAILED`] to `handler` if `value` is false
#[cfg_attr(feature = "diagnostic", track_caller)]
#[inline]
pub fn check_bool_with<H>(handler: &mut H, value: bool)
where
    H: FaultHandler + ?Sized,
{
    if !value {
        handle_with(handler, BOOL_CHECK_FAILED);
    }
}

/// Unwrap `result`, reporting its error code to `handler` on `Err`
#[cfg_attr(feature = "diagnostic", track_caller)]
#[inline]
pub fn check_result_with<H, T, E>(handler: &mut H, result: Result<T, E>) -> Option<T>
where
    H: FaultHandler + ?Sized,
    E: Into<u32>,
{
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            handle_with(handler, err.into());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FaultLog;

    #[test]
    fn check_with_skips_success() {
        let mut log: FaultLog<4> = FaultLog::new();
        check_with(&mut log, SUCCESS);
        assert!(log.is_empty());
    }

    #[test]
    fn nested_callers_report_outer_line() {
        #[track_caller]
        fn wrapper(log: &mut FaultLog<4>) {
            check_with(log, 2);
        }

        let mut log: FaultLog<4> = FaultLog::new();
        let line = line!() + 1;
        wrapper(&mut log);
        let report = log.last().copied().unwrap();
        assert_eq!(report.error_code, 2);
        if crate::BUILD_MODE.embeds_location() {
            assert_eq!(report.line, line);
        } else {
            assert_eq!(report, FaultReport::anonymous(2));
        }
    }

    #[test]
    fn location_only_in_diagnostic_builds() {
        let mut log: FaultLog<4> = FaultLog::new();
        handle_with(&mut log, 1);
        check_with(&mut log, 2);
        check_bool_with(&mut log, false);
        for report in log.reports() {
            assert_eq!(report.has_location(), cfg!(feature = "diagnostic"));
            if !cfg!(feature = "diagnostic") {
                assert_eq!(report.line, 0);
            }
        }
        assert_eq!(log.len(), 3);
    }
}
