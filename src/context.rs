//! Visual state and the render context that owns it.

use log::debug;

use crate::color::{BLACK, Palette16, Rgb};
use crate::config::ControllerConfig;
use crate::frame_buffer::{FrameBuffer, OutputDriver};

/// Running animation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    /// Offset into the palette, advanced once per rendered frame
    pub phase: u8,
    /// Frame rate cap, frames per second
    pub speed: u16,
}

/// What the strip should currently display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    /// A fixed color; no per-tick work
    Solid(Rgb),
    /// Palette animation advancing on every render tick
    Animating(Animation),
}

impl VisualState {
    pub const fn is_animating(&self) -> bool {
        matches!(self, Self::Animating(_))
    }

    /// Human readable mode name
    pub const fn mode_name(&self) -> &'static str {
        match self {
            Self::Solid(_) => "solid",
            Self::Animating(_) => "palette",
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::Solid(BLACK)
    }
}

/// Render context shared by the scheduler and the dispatcher
///
/// Owns the only copy of the visual state and the frame buffer. Every
/// mutation goes through the methods below, so a state change is either
/// applied completely or not at all.
#[derive(Debug, Clone)]
pub struct RenderContext<const N: usize> {
    state: VisualState,
    frame: FrameBuffer<N>,
    palette: Palette16,
    brightness: u8,
    speed: u16,
    last_color: Rgb,
    parked_phase: u8,
}

impl<const N: usize> RenderContext<N> {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            state: VisualState::default(),
            frame: FrameBuffer::new(),
            palette: config.palette,
            brightness: config.brightness,
            speed: config.updates_per_second.max(1),
            last_color: BLACK,
            parked_phase: 0,
        }
    }

    pub const fn state(&self) -> VisualState {
        self.state
    }

    pub const fn frame(&self) -> &FrameBuffer<N> {
        &self.frame
    }

    pub const fn palette(&self) -> &Palette16 {
        &self.palette
    }

    /// Replace the animation palette
    ///
    /// Takes effect with the next rendered frame.
    pub fn set_palette(&mut self, palette: Palette16) {
        self.palette = palette;
    }

    /// Switch to a solid color and push it to the strip immediately
    pub fn show_color<O: OutputDriver>(&mut self, color: Rgb, output: &mut O) {
        self.park();
        self.last_color = color;
        self.state = VisualState::Solid(color);
        self.frame.set_all(color);
        self.frame.flush(output);
        debug!("solid color {},{},{}", color.r, color.g, color.b);
    }

    /// Start palette animation
    ///
    /// Resumes from the phase where the previous animation stopped. Does
    /// nothing if the animation is already running.
    pub fn start_animation(&mut self) {
        if self.state.is_animating() {
            return;
        }
        self.state = VisualState::Animating(Animation {
            phase: self.parked_phase,
            speed: self.speed,
        });
        debug!("animation started at phase {}", self.parked_phase);
    }

    /// Stop palette animation, leaving the last frame on the strip
    ///
    /// The frame buffer is not touched. The state returns to the last
    /// solid color so no per-tick work remains.
    pub fn stop_animation(&mut self) {
        if !self.state.is_animating() {
            return;
        }
        self.park();
        self.state = VisualState::Solid(self.last_color);
        debug!("animation stopped at phase {}", self.parked_phase);
    }

    /// Advance the animation by one step and refill the frame
    ///
    /// Returns `false` without touching the frame when not animating.
    pub fn advance_animation(&mut self) -> bool {
        let VisualState::Animating(animation) = &mut self.state else {
            return false;
        };
        animation.phase = animation.phase.wrapping_add(1);
        self.frame
            .set_from_palette(&self.palette, animation.phase, self.brightness);
        true
    }

    /// Remember the running phase so a later start resumes from it
    fn park(&mut self) {
        if let VisualState::Animating(animation) = self.state {
            self.parked_phase = animation.phase;
        }
    }
}
