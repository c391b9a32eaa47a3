//! Command dispatching
//!
//! Turns inbound requests into render context mutations and answers
//! each one synchronously.

use core::fmt;

use log::{info, warn};

use crate::color::{Rgb, clamp_channel};
use crate::context::RenderContext;
use crate::frame_buffer::OutputDriver;
use crate::http::{CONTROL_PANEL, Request, Response, parse_int};

pub const PATH_ROOT: &str = "/";
pub const PATH_COLOR: &str = "/color";
pub const PATH_RANDOM: &str = "/random";

const STATE_ON: &str = "on";

const MESSAGE_COLOR_UPDATED: &str = "Color updated";
const MESSAGE_PALETTE_ENABLED: &str = "Random palette enabled";
const MESSAGE_PALETTE_DISABLED: &str = "Random palette disabled";
const MESSAGE_MISSING_COLOR: &str = "Missing color parameters";
const MESSAGE_MISSING_STATE: &str = "Missing state parameter";

/// A validated control request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Serve the control panel document
    ControlPanel,
    /// Show a solid color
    SetColor(Rgb),
    /// Enable or disable palette animation
    SetAnimation(bool),
}

/// Reasons a request is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// `red`, `green` or `blue` is absent
    MissingColor,
    /// `state` is absent
    MissingState,
    /// No route for the path
    UnknownRoute,
}

impl CommandError {
    pub const fn response(self) -> Response {
        match self {
            Self::MissingColor => Response::bad_request(MESSAGE_MISSING_COLOR),
            Self::MissingState => Response::bad_request(MESSAGE_MISSING_STATE),
            Self::UnknownRoute => Response::not_found(),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColor => f.write_str("missing color parameters"),
            Self::MissingState => f.write_str("missing state parameter"),
            Self::UnknownRoute => f.write_str("unknown route"),
        }
    }
}

impl Command {
    /// Validate a request and extract its command
    ///
    /// Channel values are clamped to 0-255. Any `state` other than `on`
    /// disables the animation.
    pub fn from_request(request: &Request<'_>) -> Result<Self, CommandError> {
        match request.path() {
            PATH_ROOT => Ok(Self::ControlPanel),
            PATH_COLOR => {
                let (Some(red), Some(green), Some(blue)) = (
                    request.arg("red"),
                    request.arg("green"),
                    request.arg("blue"),
                ) else {
                    return Err(CommandError::MissingColor);
                };
                Ok(Self::SetColor(Rgb {
                    r: clamp_channel(parse_int(red)),
                    g: clamp_channel(parse_int(green)),
                    b: clamp_channel(parse_int(blue)),
                }))
            }
            PATH_RANDOM => {
                let state = request.arg("state").ok_or(CommandError::MissingState)?;
                Ok(Self::SetAnimation(state == STATE_ON))
            }
            _ => Err(CommandError::UnknownRoute),
        }
    }

    /// Apply the command to the context
    ///
    /// A color change is filled and flushed at once instead of waiting for
    /// the next render tick.
    pub fn apply<O: OutputDriver, const N: usize>(
        self,
        ctx: &mut RenderContext<N>,
        output: &mut O,
    ) -> Response {
        match self {
            Self::ControlPanel => Response::html(CONTROL_PANEL),
            Self::SetColor(color) => {
                ctx.show_color(color, output);
                Response::ok(MESSAGE_COLOR_UPDATED)
            }
            Self::SetAnimation(true) => {
                ctx.start_animation();
                Response::ok(MESSAGE_PALETTE_ENABLED)
            }
            Self::SetAnimation(false) => {
                ctx.stop_animation();
                Response::ok(MESSAGE_PALETTE_DISABLED)
            }
        }
    }
}

/// Handle a single request against the render context
pub fn dispatch<O: OutputDriver, const N: usize>(
    ctx: &mut RenderContext<N>,
    output: &mut O,
    request: &Request<'_>,
) -> Response {
    match Command::from_request(request) {
        Ok(command) => {
            if command != Command::ControlPanel {
                info!("{} -> {:?}", request.path(), command);
            }
            command.apply(ctx, output)
        }
        Err(err) => {
            warn!("rejected {}: {}", request.path(), err);
            err.response()
        }
    }
}
