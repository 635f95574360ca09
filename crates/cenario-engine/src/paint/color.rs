/// Linear premultiplied RGBA color.
///
/// Invariant: `rgb` components are multiplied by `a` (premultiplied alpha),
/// which blends correctly under linear filtering and matches the raster
/// backend's pixel format.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_premul(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Creates a premultiplied color from straight sRGB bytes.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Parses a `#RRGGBB` hex string into an opaque color.
    ///
    /// Malformed input falls back to opaque black: color strings come from a
    /// fixed palette and validating them is the caller's responsibility, but
    /// drawing must never fail because of one.
    pub fn from_hex(hex: &str) -> Self {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Color::BLACK;
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        match (byte(0), byte(2), byte(4)) {
            (Ok(r), Ok(g), Ok(b)) => Color::from_srgb_u8(r, g, b, 255),
            _ => Color::BLACK,
        }
    }

    /// Returns straight-alpha components. For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_palette_entry() {
        let c = Color::from_hex("#FF8FAB");
        let (r, g, b, a) = c.to_straight();
        assert!((r - 255.0 / 255.0).abs() < 1e-6);
        assert!((g - 143.0 / 255.0).abs() < 1e-6);
        assert!((b - 171.0 / 255.0).abs() < 1e-6);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn from_hex_without_hash() {
        assert_eq!(Color::from_hex("FFFFFF"), Color::from_hex("#FFFFFF"));
    }

    #[test]
    fn from_hex_malformed_is_black() {
        assert_eq!(Color::from_hex("#12"), Color::BLACK);
        assert_eq!(Color::from_hex("#GGGGGG"), Color::BLACK);
        assert_eq!(Color::from_hex(""), Color::BLACK);
    }

    #[test]
    fn straight_round_trip() {
        let c = Color::from_straight(0.5, 0.25, 1.0, 0.5);
        let (r, g, b, a) = c.to_straight();
        assert!((r - 0.5).abs() < 1e-6);
        assert!((g - 0.25).abs() < 1e-6);
        assert!((b - 1.0).abs() < 1e-6);
        assert_eq!(a, 0.5);
    }
}
