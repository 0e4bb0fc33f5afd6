//! Error macros for wikiroute

/// Macro for returning an invariant violation
#[macro_export]
macro_rules! bail_invariant {
    ($($arg:tt)*) => {
        return Err($crate::error::RouteError::invariant(format!($($arg)*)))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::RouteError::UsageError($msg.to_string()))
    };
}
