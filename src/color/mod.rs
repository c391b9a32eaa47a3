mod palette;
mod utils;

pub use palette::{BlendMode, PALETTE_SIZE, Palette16, RAINBOW};
pub use utils::{clamp_channel, rgb_from_u32};

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
