/// Logging macros that prefix every message with `[file:module:line]`.
///
/// `log_*` go through the `log` facade, which `main` bridges into tracing with
/// `tracing_log::LogTracer`. Use them for user-visible actions worth finding in the
/// log file. `trace_*` go straight to tracing and suit state transitions and
/// other debugging detail.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        tracing::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! trace_info {
    ($($arg:tt)*) => {
        tracing::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! trace_warn {
    ($($arg:tt)*) => {
        tracing::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*))
    };
}

/*
Log level guidelines:

DEBUG: filter transitions, history pushes, tag additions/removals
INFO:  startup, dataset loading, opened addresses, copy actions
WARN:  fallbacks (settings file ignored, clipboard write failed)
ERROR: a dataset override that could not be loaded

Nothing is logged from the per-frame render path; log only in response to
an action.
*/
