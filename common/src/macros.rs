//! Logging shorthands shared by every crate in the workspace.
//!
//! All of them forward to `tracing`; the target is what the CLI formatter keys on
//! to pick a prefix symbol.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "sacristan::info", $($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "sacristan::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!(target: "sacristan::warn", $($arg)*)
    };
}
