#![forbid(unsafe_code)]

//! Browser frontend for the LifeCanvas viewer.
//!
//! This crate is intentionally host-specific (web/WASM). It provides:
//! - a Canvas2D renderer for the grid (lines + per-cell fills),
//! - DOM control bindings (play/pause, reset, kill, rate slider, FPS
//!   readout),
//! - the requestAnimationFrame loop with token-checked cancellation,
//! - [`mount`], the composition root that wires all of the above to an
//!   opaque [`lifecanvas_core::SimulationEngine`].
//!
//! Everything that can be compiled and tested natively (configuration,
//! error types, rate parsing, the theme) is; only the DOM-touching
//! pieces are gated on `target_arch = "wasm32"`, so a native
//! `cargo check --workspace` stays green.

pub mod config;
pub mod controls;
pub mod error;
pub mod renderer;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod frame_loop;

#[cfg(target_arch = "wasm32")]
pub use app::{App, mount, mount_or_log};

pub use config::AppConfig;
pub use error::AppError;
pub use renderer::Theme;
