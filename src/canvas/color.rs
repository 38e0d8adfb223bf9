//! Color types with alpha support

/// RGBA color with f32 components (0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values (0-255)
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0)
    }

    /// Same color with a different alpha
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Convert to 8-bit RGBA array
    #[inline]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Blend this color over another (alpha compositing)
    #[inline]
    pub fn blend_over(&self, bg: &Color) -> Color {
        let a = self.a + bg.a * (1.0 - self.a);
        if a < 0.0001 {
            return Color::TRANSPARENT;
        }
        Color {
            r: (self.r * self.a + bg.r * bg.a * (1.0 - self.a)) / a,
            g: (self.g * self.a + bg.g * bg.a * (1.0 - self.a)) / a,
            b: (self.b * self.a + bg.b * bg.a * (1.0 - self.a)) / a,
            a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Theme colors always land on the canvas at full opacity.
impl From<syntect::highlighting::Color> for Color {
    fn from(c: syntect::highlighting::Color) -> Self {
        Self::from_rgb8(c.r, c.g, c.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb8() {
        let red = Color::from_rgb8(0xFF, 0, 0);
        assert!((red.r - 1.0).abs() < 0.01);
        assert!(red.g.abs() < 0.01);
        assert!(red.b.abs() < 0.01);
    }

    #[test]
    fn test_blend() {
        let fg = Color::rgba(1.0, 0.0, 0.0, 0.5); // 50% red
        let bg = Color::rgb(0.0, 0.0, 1.0); // solid blue
        let blended = fg.blend_over(&bg);

        // Should be purplish
        assert!(blended.r > 0.4);
        assert!(blended.b > 0.4);
        assert!((blended.a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_syntect_color_is_opaque() {
        let c = Color::from(syntect::highlighting::Color {
            r: 0x2b,
            g: 0x30,
            b: 0x3b,
            a: 0x10,
        });
        assert_eq!(c.to_rgba8(), [0x2b, 0x30, 0x3b, 0xff]);
    }
}
