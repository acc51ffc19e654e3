#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]

//! # App Error
//!
//! Common application fault handler and the checking helpers built on it.
//!
//! Firmware reports fatal conditions through one entry point,
//! [`report_fault`], either directly or through three helpers:
//!
//! - [`handle`] / [`app_error_handler!`]: report unconditionally
//! - [`check`] / [`app_error_check!`]: report when a code is not [`SUCCESS`]
//! - [`check_bool`] / [`app_error_check_bool!`]: report code `0` when a
//!   condition is false
//!
//! With the `diagnostic` feature every report carries the line and file of
//! the call site. Without it the report carries `0` and no file, which keeps
//! source paths out of the image.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use app_error::{app_error_check, app_error_check_bool, set_handler, FaultReport};
//!
//! fn on_fault(report: FaultReport) {
//!     // log, blink, reset...
//!     let _ = report;
//! }
//!
//! set_handler(on_fault);
//!
//! let status: u32 = 0;
//! app_error_check!(status);
//! app_error_check_bool!(status < 0x10);
//! ```

mod check;
mod fault_log;
mod handler;
mod macros;
mod report;
mod terminal;

pub use check::*;
pub use fault_log::FaultLog;
pub use handler::*;
pub use report::{BuildMode, FaultReport, BUILD_MODE};
pub use terminal::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error code meaning "no error" (`NRF_SUCCESS`)
pub const SUCCESS: u32 = 0;

/// Error code reported by the boolean checks
pub const BOOL_CHECK_FAILED: u32 = 0;
