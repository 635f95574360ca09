//! Text measurement and font ownership.
//!
//! `FontSystem` owns the parsed fonts; `TextMeasure` abstracts line-width
//! measurement so text layout can be tested without real font data.

mod font_system;
mod measure;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use measure::{FontMeasure, TextMeasure};
