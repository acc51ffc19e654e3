//! Host walk-through of the checking helpers
//!
//! Run with `cargo run -p app-error --example host_check --features std,diagnostic`
//! to see locations, or without `diagnostic` to see release-style reports.

use app_error::{
    app_error_check, app_error_check_bool, check_result, set_handler, FaultReport, BUILD_MODE,
    SUCCESS,
};

/// Error codes of a pretend radio driver
#[derive(Debug, Clone, Copy)]
enum RadioError {
    InvalidState = 0x08,
    Timeout = 0x0D,
}

impl From<RadioError> for u32 {
    fn from(err: RadioError) -> Self {
        err as u32
    }
}

fn radio_init() -> u32 {
    SUCCESS
}

fn radio_start() -> u32 {
    RadioError::InvalidState.into()
}

fn radio_rssi() -> Result<i8, RadioError> {
    Err(RadioError::Timeout)
}

fn print_fault(report: FaultReport) {
    println!("  handler: {report}");
}

fn main() {
    println!("build mode: {:?}", BUILD_MODE);
    set_handler(print_fault);

    println!("radio_init");
    app_error_check!(radio_init());

    println!("radio_start");
    app_error_check!(radio_start());

    println!("queue depth check");
    let depth = 3;
    app_error_check_bool!(depth < 2);

    println!("radio_rssi");
    match check_result(radio_rssi()) {
        Some(rssi) => println!("  rssi: {rssi}"),
        None => println!("  rssi unavailable"),
    }
}
