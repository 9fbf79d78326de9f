#![forbid(unsafe_code)]

//! Mount-time configuration errors.
//!
//! All of these are surfaced exactly once, when the app is wired up;
//! after a failed mount nothing is attached and nothing runs. Per-frame
//! work never produces one of these — a degraded cell read inside the
//! render loop is handled where it happens and never aborts the frame.

use std::fmt;

/// Errors raised while wiring the viewer to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// No element matched the configured selector.
    MissingElement { selector: String },
    /// The configured canvas selector matched a non-canvas element.
    NotACanvas { selector: String },
    /// The canvas exists but refused to hand out a 2d context.
    MissingContext,
    /// No `window`/`document` available (not running in a browser?).
    NoDocument,
    /// Rejected configuration value.
    InvalidConfig(String),
    /// A DOM call failed while attaching listeners.
    Dom(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement { selector } => {
                write!(f, "no element matches selector {selector:?}")
            }
            Self::NotACanvas { selector } => {
                write!(f, "element {selector:?} is not a <canvas>")
            }
            Self::MissingContext => write!(f, "canvas returned no 2d context"),
            Self::NoDocument => write!(f, "no window/document available"),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(target_arch = "wasm32")]
impl From<AppError> for wasm_bindgen::JsValue {
    fn from(err: AppError) -> Self {
        Self::from_str(&err.to_string())
    }
}
