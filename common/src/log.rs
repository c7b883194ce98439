//! Logging macros shared by every crate in the workspace.
//!
//! They forward to [`tracing`] so the binary decides how events are rendered.
//! `success!` uses its own target so the formatter can tell it apart from a
//! plain `info!`.

pub const SUCCESS_TARGET: &str = "bugscan::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "bugscan::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!($($arg)*)
    };
}
