//! Network side of the render loop.
//!
//! The scheduler only ever asks a [`RequestSource`] to service at most
//! one ready request. [`RequestQueue`] is the queue-backed source used
//! when the HTTP server runs in its own task: the server submits request
//! targets through a [`RequestClient`] and picks the responses up again.

use core::fmt;

use heapless::String;
use log::warn;

use crate::channel::{Channel, Receiver, Sender};
use crate::http::{Request, Response};

/// Longest request target a [`RequestClient`] accepts
pub const MAX_TARGET_LEN: usize = 128;

/// Source of inbound control requests
pub trait RequestSource {
    /// Service at most one ready request without blocking
    ///
    /// `handler` runs synchronously for the request and its response is
    /// delivered back to the client. Returns `true` if a request was
    /// serviced.
    fn poll<H>(&mut self, handler: H) -> bool
    where
        H: FnOnce(&Request<'_>) -> Response;
}

/// A request waiting to be serviced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    target: String<MAX_TARGET_LEN>,
}

impl PendingRequest {
    pub fn new(target: &str) -> Result<Self, SubmitError> {
        let mut buffer = String::new();
        buffer
            .push_str(target)
            .map_err(|()| SubmitError::TargetTooLong)?;
        Ok(Self { target: buffer })
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Reasons a request cannot be queued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Target does not fit into [`MAX_TARGET_LEN`] bytes
    TargetTooLong,
    /// Too many requests are waiting
    QueueFull,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetTooLong => write!(f, "request target longer than {MAX_TARGET_LEN} bytes"),
            Self::QueueFull => f.write_str("request queue is full"),
        }
    }
}

/// Type alias for the request channel
pub type RequestChannel<const SIZE: usize> = Channel<PendingRequest, SIZE>;

/// Type alias for the response channel
pub type ResponseChannel<const SIZE: usize> = Channel<Response, SIZE>;

/// Render loop side: a [`RequestSource`] fed through channels
pub struct RequestQueue<'a, const SIZE: usize> {
    requests: Receiver<'a, PendingRequest, SIZE>,
    responses: Sender<'a, Response, SIZE>,
}

impl<'a, const SIZE: usize> RequestQueue<'a, SIZE> {
    pub const fn new(
        requests: &'a RequestChannel<SIZE>,
        responses: &'a ResponseChannel<SIZE>,
    ) -> Self {
        Self {
            requests: requests.receiver(),
            responses: responses.sender(),
        }
    }
}

impl<const SIZE: usize> RequestSource for RequestQueue<'_, SIZE> {
    fn poll<H>(&mut self, handler: H) -> bool
    where
        H: FnOnce(&Request<'_>) -> Response,
    {
        let Ok(pending) = self.requests.try_receive() else {
            return false;
        };

        let response = handler(&Request::parse(pending.target()));
        if self.responses.try_send(response).is_err() {
            warn!("response dropped for {}: queue full", pending.target());
        }
        true
    }
}

/// Network task side: submits targets and collects responses
pub struct RequestClient<'a, const SIZE: usize> {
    requests: Sender<'a, PendingRequest, SIZE>,
    responses: Receiver<'a, Response, SIZE>,
}

impl<'a, const SIZE: usize> RequestClient<'a, SIZE> {
    pub const fn new(
        requests: &'a RequestChannel<SIZE>,
        responses: &'a ResponseChannel<SIZE>,
    ) -> Self {
        Self {
            requests: requests.sender(),
            responses: responses.receiver(),
        }
    }

    /// Queue a request target such as `/color?red=255&green=0&blue=0`
    pub fn submit(&self, target: &str) -> Result<(), SubmitError> {
        let pending = PendingRequest::new(target)?;
        self.requests
            .try_send(pending)
            .map_err(|_| SubmitError::QueueFull)
    }

    /// Oldest response not yet collected
    pub fn try_response(&self) -> Option<Response> {
        self.responses.try_receive().ok()
    }
}
