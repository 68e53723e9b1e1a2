use std::ops::{Mul, MulAssign};

/// Color with channels in `[0, 255]`, kept unnormalized as floats until packed.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct RGBColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGBColor {
    pub const fn new(r: f32, g: f32, b: f32) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const ZERO: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(255.0, 255.0, 255.0);

    /// Packs into `R << 24 | G << 16 | B << 8 | 0xFF`.
    ///
    /// Each channel is truncated and saturated into `0..=255`, so overflowing
    /// or negative channels clamp instead of bleeding into their neighbours.
    pub fn pack(&self) -> u32 {
        // float to int casts saturate, NaN becomes 0
        let [r, g, b] = [self.r as u8, self.g as u8, self.b as u8];
        (r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | 0xFF
    }
}

impl Mul<f32> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f32) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl MulAssign<f32> for RGBColor {
    fn mul_assign(&mut self, other: f32) {
        self.r *= other;
        self.g *= other;
        self.b *= other;
    }
}

/// Splits a packed pixel back into `[r, g, b, a]` bytes.
pub fn unpack(pixel: u32) -> [u8; 4] {
    pixel.to_be_bytes()
}

/// Packed RGBA to the `0RGB` layout expected by framebuffer windows.
pub fn rgba_to_0rgb(pixel: u32) -> u32 {
    pixel >> 8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_layout() {
        let color = RGBColor::new(255.0, 128.0, 1.0);
        assert_eq!(color.pack(), 0xFF_80_01_FF);
        assert_eq!(RGBColor::ZERO.pack(), 0x00_00_00_FF);
    }

    #[test]
    fn test_pack_unpack_recovers_scaled_channels() {
        let base = RGBColor::new(200.0, 100.0, 50.0);
        for &scale in &[1.0f32, 0.75, 0.5, 0.1, 0.0] {
            let scaled = base * scale;
            let [r, g, b, a] = unpack(scaled.pack());
            assert_eq!(r, scaled.r as u8);
            assert_eq!(g, scaled.g as u8);
            assert_eq!(b, scaled.b as u8);
            assert_eq!(a, 0xFF);
        }
    }

    #[test]
    fn test_pack_saturates() {
        let color = RGBColor::new(300.0, -20.0, f32::NAN);
        assert_eq!(unpack(color.pack()), [255, 0, 0, 255]);
    }

    #[test]
    fn test_rgba_to_0rgb() {
        assert_eq!(rgba_to_0rgb(0x11_22_33_FF), 0x00_11_22_33);
        assert_eq!(rgba_to_0rgb(0), 0);
    }
}
