//! Background layer transform.

/// Output framing of the composed scene.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum AspectRatio {
    /// 9:16, the phone-story default.
    #[default]
    Portrait,
    /// 16:9.
    Landscape,
    /// 1:1.
    Square,
}

/// Pan/zoom of the background image, independent of any item.
///
/// No rotation: the background only pans and scales, and its pinch scale
/// floor is higher than the one items use.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BackgroundTransform {
    pub x: f32,
    pub y: f32,
    /// Uniform scale, always > 0.
    pub scale: f32,
}

impl Default for BackgroundTransform {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, scale: 1.0 }
    }
}

impl BackgroundTransform {
    /// Back to identity. Called whenever the background image reference or
    /// the output aspect ratio changes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
