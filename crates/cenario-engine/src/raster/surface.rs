use std::io::Cursor;

use tiny_skia::Pixmap;

use crate::paint::Color;

use super::RasterError;

/// An owned RGBA pixel buffer (premultiplied alpha), initially transparent.
#[derive(Debug, Clone)]
pub struct Surface {
    pub(crate) pixmap: Pixmap,
}

impl Surface {
    /// Allocates a transparent surface. Dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RasterError::SurfaceSize { width, height })?;
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha color of the pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = (y * self.width() + x) as usize;
        let c = self.pixmap.pixels()[idx].demultiply();
        Some(Color::from_srgb_u8(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Encodes the surface as a PNG (lossless).
    pub fn encode_png(&self) -> Result<Vec<u8>, RasterError> {
        let mut rgba = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }

        let mut out = Vec::new();
        image::write_buffer_with_format(
            &mut Cursor::new(&mut out),
            &rgba,
            self.width(),
            self.height(),
            image::ExtendedColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| RasterError::Encode(e.to_string()))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_surface_is_rejected() {
        assert!(Surface::new(0, 10).is_err());
        assert!(Surface::new(10, 0).is_err());
    }

    #[test]
    fn new_surface_is_transparent() {
        let s = Surface::new(4, 4).unwrap();
        let c = s.pixel(1, 1).unwrap();
        assert_eq!(c.a, 0.0);
    }

    #[test]
    fn encode_png_produces_signature() {
        let s = Surface::new(3, 3).unwrap();
        let png = s.encode_png().unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
