//! In-memory mirror of the physical strip.

use log::warn;
use smart_leds::SmartLedsWrite;

use crate::color::{BLACK, Palette16, Rgb};

/// Palette steps between two neighbouring pixels
pub const PALETTE_STRIDE: u8 = 3;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The scheduler flushes the frame buffer through it once per fill.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// Fixed-size frame of `N` pixels
///
/// Written by fills, read only by the flush step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const N: usize> {
    pixels: [Rgb; N],
}

impl<const N: usize> FrameBuffer<N> {
    /// Create a frame with every pixel off
    pub const fn new() -> Self {
        Self { pixels: [BLACK; N] }
    }

    /// Overwrite every pixel with one color
    pub fn set_all(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Fill the frame from a palette, starting at `phase`
    ///
    /// Pixel `i` samples `phase + i * PALETTE_STRIDE`, wrapping at 256.
    pub fn set_from_palette(&mut self, palette: &Palette16, phase: u8, brightness: u8) {
        let mut index = phase;
        for pixel in &mut self.pixels {
            *pixel = palette.sample(index, brightness);
            index = index.wrapping_add(PALETTE_STRIDE);
        }
    }

    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    /// Push the current frame to the strip
    pub fn flush<O: OutputDriver>(&self, output: &mut O) {
        output.write(&self.pixels);
    }
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// [`OutputDriver`] over any `smart-leds` transport
///
/// Transport errors are logged and the frame is dropped; the next fill
/// retries with fresh data.
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Release the underlying transport
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: core::fmt::Debug,
{
    fn write(&mut self, colors: &[Rgb]) {
        if let Err(err) = self.writer.write(colors.iter().copied()) {
            warn!("led transport write failed: {:?}", err);
        }
    }
}
