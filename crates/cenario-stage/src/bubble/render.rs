use cenario_engine::raster::{rasterize, RasterError};
use cenario_engine::text::{FontId, FontLoadError, FontMeasure, FontSystem};

use super::layout::layout;
use super::shape::build;
use super::style::BubbleStyle;

/// Finished bubble artifact: PNG-encoded pixels plus dimensions.
///
/// Opaque to consumers; the item list stores it as the image of a
/// bubble-kind scene item and never looks inside.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleRaster {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// Renders [`BubbleStyle`] values to [`BubbleRaster`]s.
///
/// Owns the font used for both measurement and glyph painting; sharing one
/// `FontSystem` between the two is what keeps word wrap correct on screen.
pub struct BubbleRenderer {
    fonts: FontSystem,
    font: FontId,
}

impl BubbleRenderer {
    /// Creates a renderer from raw TTF/OTF bytes.
    pub fn new(font_bytes: &[u8]) -> Result<Self, FontLoadError> {
        let mut fonts = FontSystem::new();
        let font = fonts.load_font(font_bytes)?;
        Ok(Self { fonts, font })
    }

    /// Renders `style` to an encoded raster.
    ///
    /// Deterministic and side-effect free; degenerate inputs (empty text,
    /// blank name) degrade to a minimum-size bubble rather than failing.
    /// The only error source is surface allocation / encoding, which cannot
    /// trigger for dimensions this layout produces.
    pub fn render(&self, style: &BubbleStyle) -> Result<BubbleRaster, RasterError> {
        let measure = FontMeasure::new(&self.fonts, self.font);
        let layout = layout(style, &measure);
        let mut list = build(style, &layout, self.font);

        let surface = rasterize(&mut list, &self.fonts, layout.width, layout.height)?;
        let png = surface.encode_png()?;

        log::debug!(
            "rendered {:?} bubble: {} lines, {}x{}, {} bytes",
            style.shape,
            layout.lines.len(),
            layout.width,
            layout.height,
            png.len()
        );

        Ok(BubbleRaster {
            width: layout.width,
            height: layout.height,
            png,
        })
    }
}
