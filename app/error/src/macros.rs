//! Checking macros
//!
//! Thin wrappers over the helpers in `check`, kept for call sites that read
//! like the rest of the firmware's error checks. Each argument is bound to a
//! local exactly once. A leading `&mut handler` argument routes the report to
//! that handler instead of the global one.

/// Report an error code unconditionally
#[macro_export]
macro_rules! app_error_handler {
    ($handler:expr, $code:expr $(,)?) => {{
        let handler = $handler;
        let code: u32 = $code;
        $crate::handle_with(handler, code);
    }};
    ($code:expr $(,)?) => {{
        let code: u32 = $code;
        $crate::handle(code);
    }};
}

/// Report an error code if it is not `SUCCESS`
#[macro_export]
macro_rules! app_error_check {
    ($handler:expr, $code:expr $(,)?) => {{
        let handler = $handler;
        let code: u32 = $code;
        $crate::check_with(handler, code);
    }};
    ($code:expr $(,)?) => {{
        let code: u32 = $code;
        $crate::check(code);
    }};
}

/// Report error code 0 if a condition is false
#[macro_export]
macro_rules! app_error_check_bool {
    ($handler:expr, $value:expr $(,)?) => {{
        let handler = $handler;
        let value: bool = $value;
        $crate::check_bool_with(handler, value);
    }};
    ($value:expr $(,)?) => {{
        let value: bool = $value;
        $crate::check_bool(value);
    }};
}
