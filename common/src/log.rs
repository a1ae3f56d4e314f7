//! Logging targets shared by the libraries and the terminal formatter.

/// Events rendered as success lines.
pub const SUCCESS_TARGET: &str = "leash::success";
/// Events rendered verbatim, without a level symbol.
pub const PRINT_TARGET: &str = "leash::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "leash::success", $($arg)*)
    };
}
