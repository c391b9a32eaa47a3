#![no_std]

pub mod channel;
pub mod color;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod frame_buffer;
pub mod http;
pub mod math8;
pub mod request_queue;
pub mod scheduler;

pub use color::{BlendMode, Palette16, RAINBOW, Rgb};
pub use config::{
    ControllerConfig, DEFAULT_BRIGHTNESS, DEFAULT_LED_COUNT, DEFAULT_UPDATES_PER_SECOND,
};
pub use context::{Animation, RenderContext, VisualState};
pub use dispatcher::{Command, CommandError, dispatch};
pub use embassy_time::{Duration, Instant};
pub use frame_buffer::{FrameBuffer, OutputDriver, PALETTE_STRIDE, SmartLedsOutput};
pub use http::{ContentType, Request, Response, StatusCode};
pub use request_queue::{
    RequestChannel, RequestClient, RequestQueue, RequestSource, ResponseChannel, SubmitError,
};
pub use scheduler::{RenderScheduler, TickResult};

/// Route `log` output to the ESP serial console
#[cfg(feature = "esp32-log")]
pub fn init_logger(level: log::LevelFilter) {
    esp_println::logger::init_logger(level);
}
