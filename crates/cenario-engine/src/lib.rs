//! Cenário engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the stage layer:
//! geometry, paint model, the recorded draw stream, text measurement, and
//! the CPU rasterizer that turns a draw stream into pixels.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod scene;
pub mod text;
