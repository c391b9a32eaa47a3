//! Cooperative render scheduler.
//!
//! Every tick services at most one request and then, if an animation is
//! running and its frame deadline has passed, renders one frame. Nothing
//! here blocks; the caller decides how long to idle between ticks using
//! [`TickResult::next_deadline`].

use embassy_time::{Duration, Instant};
use log::info;

use crate::color::BLACK;
use crate::config::ControllerConfig;
use crate::context::{RenderContext, VisualState};
use crate::dispatcher::dispatch;
use crate::frame_buffer::OutputDriver;
use crate::request_queue::RequestSource;

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// A request was dispatched during this tick
    pub serviced: bool,
    /// An animation frame was rendered and flushed
    pub rendered: bool,
    /// When the next animation frame is due; `None` while not animating
    pub next_deadline: Option<Instant>,
}

/// Drives the render context from a request source and an output driver.
///
/// The scheduler owns the context, so the dispatcher and the render step
/// are its only writers and they never run at the same time.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = RenderScheduler::<_, _, 75>::new(queue, driver, &config);
/// scheduler.begin(Instant::now());
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     if let Some(deadline) = result.next_deadline {
///         // Platform-specific wait, bounded by the deadline
///         wait_until_or_request(deadline);
///     }
/// }
/// ```
pub struct RenderScheduler<S: RequestSource, O: OutputDriver, const N: usize> {
    source: S,
    output: O,
    context: RenderContext<N>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<S: RequestSource, O: OutputDriver, const N: usize> RenderScheduler<S, O, N> {
    pub fn new(source: S, output: O, config: &ControllerConfig) -> Self {
        let updates_per_second = u64::from(config.updates_per_second.max(1));
        Self {
            source,
            output,
            context: RenderContext::new(config),
            next_frame: Instant::from_millis(0),
            frame_duration: Duration::from_micros(1_000_000 / updates_per_second),
        }
    }

    /// Clear the strip and align the frame clock
    ///
    /// Call once before the first tick.
    pub fn begin(&mut self, now: Instant) {
        self.context.show_color(BLACK, &mut self.output);
        self.next_frame = now;
        info!("render loop started, {} leds", N);
    }

    /// Run one scheduler iteration.
    ///
    /// 1. Dispatches at most one ready request
    /// 2. Renders and flushes one frame if animating and the frame is due
    /// 3. Returns the deadline for the next frame
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let serviced = self.poll_requests();
        let rendered = self.render_if_due(now);

        let next_deadline = self
            .context
            .state()
            .is_animating()
            .then_some(self.next_frame);

        TickResult {
            serviced,
            rendered,
            next_deadline,
        }
    }

    fn poll_requests(&mut self) -> bool {
        let context = &mut self.context;
        let output = &mut self.output;
        self.source
            .poll(|request| dispatch(context, output, request))
    }

    fn render_if_due(&mut self, now: Instant) -> bool {
        if !self.context.state().is_animating() {
            return false;
        }

        // Drift correction: after a stall longer than two frames, restart
        // the clock from now instead of bursting through the backlog.
        let max_drift = self.frame_duration + self.frame_duration;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }
        if now < self.next_frame {
            return false;
        }

        if !self.context.advance_animation() {
            return false;
        }
        self.context.frame().flush(&mut self.output);
        self.next_frame += self.frame_duration;
        true
    }

    /// Period between animation frames
    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub const fn state(&self) -> VisualState {
        self.context.state()
    }

    pub const fn context(&self) -> &RenderContext<N> {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut RenderContext<N> {
        &mut self.context
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
