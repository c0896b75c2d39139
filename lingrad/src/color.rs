// Copyright 2024 the Lingrad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple representation of color

/// A datatype representing color.
///
/// Colors are opaque to the geometry: they are carried from the input
/// through to the [`GradientPlan`] untouched and only interpreted by a
/// renderer. Internally this is a 32 bit RGBA value, alpha in the least
/// significant byte.
///
/// [`GradientPlan`]: crate::GradientPlan
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Rgba32(u32),
}

impl Color {
    /// Create a color from a 32-bit rgba value (alpha as least significant byte).
    pub const fn rgba32(rgba: u32) -> Color {
        Color::Rgba32(rgba)
    }

    /// Create a color from a 24-bit rgb value (red most significant, blue least).
    pub const fn rgb24(rgb: u32) -> Color {
        Color::rgba32((rgb << 8) | 0xff)
    }

    /// Create a color from a 32-bit argb value (alpha as most significant byte).
    ///
    /// This is the packing used by hosts that hand colors over as signed or
    /// unsigned integers, such as Android's `@ColorInt`.
    pub const fn from_argb32(argb: u32) -> Color {
        Color::rgba32(argb.rotate_left(8))
    }

    /// Create a color from 8 bit per channel values.
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color::rgba32(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// Create an opaque color from 8 bit per channel values.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::rgba8(r, g, b, 0xff)
    }

    /// Create a color from four floating point values, each in the range 0.0 to 1.0.
    ///
    /// The interpretation is the same as rgba32, and no greater precision is
    /// (currently) assumed.
    pub fn rgba<F: Into<f64>>(r: F, g: F, b: F, a: F) -> Color {
        let r = unit_to_u8(r.into()) as u32;
        let g = unit_to_u8(g.into()) as u32;
        let b = unit_to_u8(b.into()) as u32;
        let a = unit_to_u8(a.into()) as u32;
        Color::rgba32((r << 24) | (g << 16) | (b << 8) | a)
    }

    /// Create a color from three floating point values, each in the range 0.0 to 1.0.
    pub fn rgb<F: Into<f64>>(r: F, g: F, b: F) -> Color {
        Color::rgba(r.into(), g.into(), b.into(), 1.0)
    }

    /// Change just the alpha value of a color.
    ///
    /// The `a` value represents alpha in the range 0.0 to 1.0.
    pub fn with_alpha(self, a: impl Into<f64>) -> Color {
        let a = unit_to_u8(a.into()) as u32;
        Color::rgba32((self.as_rgba32() & !0xff) | a)
    }

    /// Convert a color value to a 32-bit rgba value.
    pub const fn as_rgba32(self) -> u32 {
        match self {
            Color::Rgba32(rgba) => rgba,
        }
    }

    /// Convert a color value to a 32-bit argb value.
    pub const fn as_argb32(self) -> u32 {
        self.as_rgba32().rotate_right(8)
    }

    /// Convert a color value to four 8-bit rgba values.
    pub const fn as_rgba8(self) -> (u8, u8, u8, u8) {
        let rgba = self.as_rgba32();
        (
            (rgba >> 24) as u8,
            ((rgba >> 16) & 0xff) as u8,
            ((rgba >> 8) & 0xff) as u8,
            (rgba & 0xff) as u8,
        )
    }

    /// Convert a color value to four f64 values, each in the range 0.0 to 1.0.
    pub fn as_rgba(self) -> (f64, f64, f64, f64) {
        let (r, g, b, a) = self.as_rgba8();
        let scale = 1.0 / 255.0;
        (
            r as f64 * scale,
            g as f64 * scale,
            b as f64 * scale,
            a as f64 * scale,
        )
    }

    /// Opaque white.
    pub const WHITE: Color = Color::rgba32(0xff_ff_ff_ff);

    /// Opaque black.
    pub const BLACK: Color = Color::rgba32(0x00_00_00_ff);

    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba32(0);
}

fn unit_to_u8(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_packing() {
        let c = Color::from_argb32(0x80_11_22_33);
        assert_eq!(c.as_rgba32(), 0x11_22_33_80);
        assert_eq!(c.as_argb32(), 0x80_11_22_33);
        assert_eq!(c.as_rgba8(), (0x11, 0x22, 0x33, 0x80));
    }

    #[test]
    fn float_channels_clamp() {
        assert_eq!(Color::rgb(2.0, -1.0, 1.0), Color::rgb8(255, 0, 255));
        assert_eq!(Color::WHITE.with_alpha(0.0), Color::rgba32(0xff_ff_ff_00));
    }
}
