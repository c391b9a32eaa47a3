//! 16-anchor cyclic color palettes
//!
//! A palette spans the full 8-bit index domain: the upper nibble of an
//! index selects an anchor and the lower nibble blends towards the next
//! one. The last anchor blends back into the first, so the gradient is
//! cyclic and phase arithmetic can simply wrap.

use crate::color::{BLACK, Rgb, rgb_from_u32};
use crate::math8::{scale8, scale8_video};

/// Number of anchor colors in a palette
pub const PALETTE_SIZE: usize = 16;

/// How colors between two anchors are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Linear interpolation towards the next anchor
    #[default]
    Linear,
    /// Every index inside a segment returns the segment's anchor
    NoBlend,
}

/// Rainbow gradient, red through green and blue back to red
pub const RAINBOW: Palette16 = Palette16::from_hex([
    0xFF0000, 0xD52A00, 0xAB5500, 0xAB7F00, 0xABAB00, 0x56D500, 0x00FF00, 0x00D52A,
    0x00AB55, 0x0056AA, 0x0000FF, 0x2A00D5, 0x5500AB, 0x7F0081, 0xAB0055, 0xD5002B,
]);

/// A cyclic gradient defined by 16 anchor colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette16 {
    anchors: [Rgb; PALETTE_SIZE],
    blend: BlendMode,
}

impl Palette16 {
    /// Create a linearly blended palette from anchor colors
    pub const fn new(anchors: [Rgb; PALETTE_SIZE]) -> Self {
        Self {
            anchors,
            blend: BlendMode::Linear,
        }
    }

    /// Create a linearly blended palette from `0xRRGGBB` anchors
    pub const fn from_hex(anchors: [u32; PALETTE_SIZE]) -> Self {
        let mut colors = [BLACK; PALETTE_SIZE];
        let mut i = 0;
        while i < PALETTE_SIZE {
            colors[i] = rgb_from_u32(anchors[i]);
            i += 1;
        }
        Self::new(colors)
    }

    /// Change the blend mode
    #[must_use]
    pub const fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    pub const fn blend(&self) -> BlendMode {
        self.blend
    }

    pub const fn anchors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.anchors
    }

    /// Sample the gradient at `index`, scaled by `brightness`
    ///
    /// Pure: the same palette, index and brightness always give the same
    /// color.
    pub fn sample(&self, index: u8, brightness: u8) -> Rgb {
        let segment = usize::from(index >> 4);
        let offset = index & 0x0F;

        let mut color = self.anchors[segment];
        if self.blend == BlendMode::Linear && offset != 0 {
            let next = self.anchors[(segment + 1) % PALETTE_SIZE];
            let amount_of_next = offset << 4;
            let amount_of_current = 255 - amount_of_next;
            color = Rgb {
                r: mix(color.r, amount_of_current, next.r, amount_of_next),
                g: mix(color.g, amount_of_current, next.g, amount_of_next),
                b: mix(color.b, amount_of_current, next.b, amount_of_next),
            };
        }

        match brightness {
            255 => color,
            0 => BLACK,
            _ => Rgb {
                r: scale8_video(color.r, brightness),
                g: scale8_video(color.g, brightness),
                b: scale8_video(color.b, brightness),
            },
        }
    }
}

impl Default for Palette16 {
    fn default() -> Self {
        RAINBOW
    }
}

/// Weighted sum of two channels whose weights add up to 255
#[inline]
const fn mix(a: u8, weight_a: u8, b: u8, weight_b: u8) -> u8 {
    scale8(a, weight_a).saturating_add(scale8(b, weight_b))
}
