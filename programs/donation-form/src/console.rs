//! Browser console logging.
//!
//! `console_log!` and `console_error!` format like `format!` and write to the
//! devtools console. Off wasm32 the arguments are still type-checked but
//! nothing is emitted.

#[cfg(target_arch = "wasm32")]
pub fn log(line: &str) {
    web_sys::console::log_1(&line.into());
}

#[cfg(target_arch = "wasm32")]
pub fn error(line: &str) {
    web_sys::console::error_1(&line.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_line: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(_line: &str) {}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::console::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::console::error(&format!($($arg)*))
    };
}
