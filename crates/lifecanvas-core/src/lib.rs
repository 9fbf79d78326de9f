#![forbid(unsafe_code)]

//! Platform-agnostic core for the LifeCanvas viewer.
//!
//! This crate holds everything about the viewer that does not touch the
//! DOM: decoding the engine's bit-packed cell buffer, grid pixel
//! geometry, held-modifier tracking, the play/pause state machine with
//! its cancellation tokens, rolling frame-rate statistics, and the
//! session that composes all of it around an opaque [`SimulationEngine`].
//!
//! The browser half (canvas drawing, DOM controls, the actual
//! requestAnimationFrame loop) lives in `lifecanvas-web` and drives this
//! crate through the types re-exported below.

pub mod fps;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod logging;
pub mod playback;
pub mod session;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

// With the `tracing` feature on, the real macros take the place of the
// no-op ones that `logging` exports at the crate root.
#[cfg(feature = "tracing")]
pub use tracing::{debug, error, warn};

pub use fps::{FpsMeter, FpsSummary, SAMPLE_WINDOW};
pub use geometry::{GridGeometry, SurfaceRect};
pub use grid::GridView;
pub use input::{ModifierTracker, Modifiers};
pub use playback::{FrameToken, Playback};
pub use session::{ClickAction, Session, SimulationEngine};
