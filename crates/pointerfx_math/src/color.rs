//! Color types
//!
//! [`Rgb`] is the 8-bit base color a particle is born with. [`Rgba`] is the
//! float color handed to a canvas once opacity has been applied. Both are in
//! sRGB space, matching how the palette is authored.

use serde::{Serialize, Deserialize};

/// Opaque 8-bit sRGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color from 8-bit channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an opacity, producing a float color
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha.clamp(0.0, 1.0),
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Float sRGB color with straight (non-premultiplied) alpha, each component 0.0-1.0
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// Create a new color
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to an array (for GPU upload)
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert the color channels from sRGB to linear, alpha unchanged
    ///
    /// sRGB render targets expect linear values from the fragment shader.
    pub fn to_linear(self) -> Self {
        Self::new(
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            self.a,
        )
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha() {
        let c = Rgb::new(255, 0, 51).with_alpha(0.5);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Rgb::new(0, 0, 0).with_alpha(-0.3).a, 0.0);
        assert_eq!(Rgb::new(0, 0, 0).with_alpha(1.7).a, 1.0);
    }

    #[test]
    fn test_to_linear_endpoints() {
        let black = Rgba::new(0.0, 0.0, 0.0, 0.4).to_linear();
        assert_eq!(black, Rgba::new(0.0, 0.0, 0.0, 0.4));

        let white = Rgba::new(1.0, 1.0, 1.0, 1.0).to_linear();
        assert!((white.r - 1.0).abs() < 1e-5);

        // Mid-gray gets darker in linear space
        let gray = Rgba::new(0.5, 0.5, 0.5, 1.0).to_linear();
        assert!(gray.r < 0.5 && gray.r > 0.2);
    }

    #[test]
    fn test_rgb_array_conversion() {
        let c: Rgb = [79, 70, 229].into();
        assert_eq!(c, Rgb::new(79, 70, 229));
        let arr: [u8; 3] = c.into();
        assert_eq!(arr, [79, 70, 229]);
    }
}
