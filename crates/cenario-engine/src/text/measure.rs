use crate::text::{FontId, FontSystem};

/// Line-width measurement used by text layout.
///
/// Word wrap only needs widths of candidate lines, so layout code takes this
/// trait instead of a `FontSystem`. Production code uses [`FontMeasure`];
/// tests can supply a deterministic fixed-advance measurer.
pub trait TextMeasure {
    /// Width of `text` laid out as a single line at `size`, in logical units.
    fn line_width(&self, text: &str, size: f32) -> f32;
}

/// [`TextMeasure`] backed by a loaded font.
#[derive(Copy, Clone)]
pub struct FontMeasure<'a> {
    pub fonts: &'a FontSystem,
    pub font: FontId,
}

impl<'a> FontMeasure<'a> {
    #[inline]
    pub fn new(fonts: &'a FontSystem, font: FontId) -> Self {
        Self { fonts, font }
    }
}

impl TextMeasure for FontMeasure<'_> {
    fn line_width(&self, text: &str, size: f32) -> f32 {
        self.fonts.measure_text(text, self.font, size).x
    }
}
