use crate::color::Rgb;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Clamp an arbitrary integer into a single color channel
///
/// Out-of-range values saturate at the nearest bound, they never wrap.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn clamp_channel(value: i64) -> u8 {
    if value <= 0 {
        0
    } else if value >= 255 {
        255
    } else {
        value as u8
    }
}
