//! Hierarchical loggers. Every logger has a dot-separated path (e.g. `ResizeSensor.mount`) that
//! prefixes its messages. On `wasm32` messages go to the browser console, elsewhere to stdout.

#![warn(unsafe_code)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

pub mod disabled;
pub mod enabled;



// ==============
// === LogMsg ===
// ==============

/// A message that can be rendered lazily. Closures are only evaluated when the message is
/// actually emitted.
pub trait LogMsg {
    /// Render the message and pass it to `f`.
    fn with_log_msg<F:FnOnce(&str) -> T, T>(&self, f:F) -> T;
}

impl LogMsg for &str {
    fn with_log_msg<F:FnOnce(&str) -> T, T>(&self, f:F) -> T {
        f(self)
    }
}

impl<F:Fn() -> S, S:AsRef<str>> LogMsg for F {
    fn with_log_msg<G:FnOnce(&str) -> T, T>(&self, f:G) -> T {
        f(self().as_ref())
    }
}



// =================
// === LoggerApi ===
// =================

/// Common interface of all loggers.
pub trait LoggerApi {
    /// Creates a new logger. Path should be a unique identifier of this logger.
    fn new<T:AsRef<str>>(path:T) -> Self;
    /// Creates a new logger with this logger as a parent.
    fn sub<T:AsRef<str>>(&self, path:T) -> Self;
    /// Evaluates function `f` and visually groups all logs which occur during its execution.
    fn group<M:LogMsg,T,F:FnOnce() -> T>(&self, msg:M, f:F) -> T;
    /// Log with stacktrace.
    fn trace<M:LogMsg>(&self, msg:M);
    /// Log with level:debug.
    fn debug<M:LogMsg>(&self, msg:M);
    /// Log with level:info.
    fn info<M:LogMsg>(&self, msg:M);
    /// Log with level:warning.
    fn warning<M:LogMsg>(&self, msg:M);
    /// Log with level:error.
    fn error<M:LogMsg>(&self, msg:M);
    /// Visually groups all logs between group_begin and group_end.
    fn group_begin<M:LogMsg>(&self, msg:M);
    /// Visually groups all logs between group_begin and group_end.
    fn group_end(&self);
}

/// Logger used throughout the workspace. Switched to the discarding one by the `no-logs` feature.
#[cfg(not(feature = "no-logs"))]
pub type DefaultLogger = enabled::Logger;

/// Logger used throughout the workspace. Switched to the discarding one by the `no-logs` feature.
#[cfg(feature = "no-logs")]
pub type DefaultLogger = disabled::Logger;



// ==============
// === Macros ===
// ==============

/// Evaluate the body inside a named log group.
#[macro_export]
macro_rules! group {
    ($logger:expr, $($arg:tt)*) => {
        $crate::group_impl! {$logger, $($arg)*}
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! group_impl {
    ($logger:expr, $message:literal, $body:block) => {{
        let __logger = &$logger;
        $crate::LoggerApi::group(__logger, || format!($message), || $body)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! log_template {
    ($method:ident $logger:expr, $($arg:tt)*) => {{
        $crate::LoggerApi::$method(&$logger, || format!($($arg)*));
    }};
}

/// Log a formatted message with a stacktrace.
#[macro_export]
macro_rules! trace {
    ($($toks:tt)*) => {
        $crate::log_template! {trace $($toks)*}
    };
}

/// Log a formatted message at the debug level.
#[macro_export]
macro_rules! debug {
    ($($toks:tt)*) => {
        $crate::log_template! {debug $($toks)*}
    };
}

/// Log a formatted message at the info level.
#[macro_export]
macro_rules! info {
    ($($toks:tt)*) => {
        $crate::log_template! {info $($toks)*}
    };
}

/// Log a formatted message at the warning level.
#[macro_export]
macro_rules! warning {
    ($($toks:tt)*) => {
        $crate::log_template! {warning $($toks)*}
    };
}

/// Log a formatted message at the error level.
#[macro_export]
macro_rules! error {
    ($($toks:tt)*) => {
        $crate::log_template! {error $($toks)*}
    };
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_logger_paths() {
        let root  = enabled::Logger::new("ResizeSensor");
        let mount = root.sub("mount");
        assert_eq!(mount.path(), "ResizeSensor.mount");
        let orphan = enabled::Logger::new("").sub("frame");
        assert_eq!(orphan.path(), "frame");
    }

    #[test]
    fn messages_are_lazy() {
        use std::cell::Cell;
        let evaluated = Cell::new(false);
        let logger    = disabled::Logger::new("quiet");
        logger.debug(|| { evaluated.set(true); "never" });
        assert!(!evaluated.get());
    }

    #[test]
    fn macros_accept_format_arguments() {
        let logger = enabled::Logger::new("macros");
        let width  = 10;
        debug!(logger, "width is {}", width);
        warning!(logger, "height is {}.", 20);
        let out = group!(logger, "grouped", { 1 + 1 });
        assert_eq!(out, 2);
    }
}
