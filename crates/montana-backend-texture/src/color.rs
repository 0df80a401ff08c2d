//! 8-bit RGBA color.

/// RGBA color with 8-bit channels. Alpha 0 is fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba8 = Rgba8::rgba(0, 0, 0, 0);

    /// Opaque black.
    pub const BLACK: Rgba8 = Rgba8::rgb(0, 0, 0);

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create from `[r, g, b, a]`.
    pub const fn from_bytes(rgba: [u8; 4]) -> Self {
        Self::rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Convert to `[r, g, b, a]`.
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Whether the pixel is fully transparent.
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_is_opaque() {
        assert_eq!(Rgba8::rgb(1, 2, 3).a, 255);
        assert!(!Rgba8::BLACK.is_transparent());
        assert!(Rgba8::TRANSPARENT.is_transparent());
    }

    #[test]
    fn test_bytes_order() {
        let c = Rgba8::rgba(10, 20, 30, 40);
        assert_eq!(c.to_bytes(), [10, 20, 30, 40]);
        assert_eq!(Rgba8::from_bytes([10, 20, 30, 40]), c);
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(Rgba8::rgb(200, 200, 200).with_alpha(80), Rgba8::rgba(200, 200, 200, 80));
    }
}
