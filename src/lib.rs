//! parabola-rs: interactive plotting core for `y = ax² + bx + c`.
//!
//! The crate owns the viewport math, tick planning, curve sampling and the
//! pan/zoom state machine, and emits backend-agnostic draw commands. Hosts
//! supply canvas size, input events and a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{FrameStatus, PlotEngine, PlotEngineConfig, ViewportChange};
pub use error::{PlotError, PlotResult};
