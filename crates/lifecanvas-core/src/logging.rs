#![forbid(unsafe_code)]

//! Logging support.
//!
//! Re-exports of tracing macros when the `tracing` feature is enabled.
//! When the feature is disabled, no-op macros are provided so call sites
//! compile away to nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, error, warn};

// When tracing is not enabled, provide no-op macros
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// No-op error macro when tracing is disabled.
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }
}
