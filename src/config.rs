use crate::color::{BlendMode, Palette16, RAINBOW};

/// Number of LEDs on the reference strip
pub const DEFAULT_LED_COUNT: usize = 75;

/// Global brightness applied to palette frames (0-255)
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Animation frame rate cap
pub const DEFAULT_UPDATES_PER_SECOND: u16 = 100;

/// Configuration for the render scheduler
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Brightness applied to palette frames
    pub brightness: u8,
    /// Animation frame rate cap, frames per second
    pub updates_per_second: u16,
    /// Gradient used while animating
    pub palette: Palette16,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            updates_per_second: DEFAULT_UPDATES_PER_SECOND,
            palette: RAINBOW,
        }
    }
}

impl ControllerConfig {
    #[must_use]
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set the animation frame rate cap
    ///
    /// Zero is raised to one frame per second.
    #[must_use]
    pub fn with_updates_per_second(mut self, updates_per_second: u16) -> Self {
        self.updates_per_second = updates_per_second.max(1);
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette16) -> Self {
        self.palette = palette;
        self
    }

    /// Switch the palette between smooth and stepped sampling
    #[must_use]
    pub fn with_blend(mut self, blend: BlendMode) -> Self {
        self.palette = self.palette.with_blend(blend);
        self
    }
}
