//! Request and response model of the control surface.
//!
//! The transport (TCP, header parsing, response framing) lives outside
//! this crate; it hands over the request target and writes back the
//! [`Response`] it receives.

use core::fmt;

/// Built-in control panel served at `/`
pub const CONTROL_PANEL: &str = include_str!("control_panel.html");

/// Response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
    NotFound = 404,
}

impl StatusCode {
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    pub const fn reason(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BadRequest => "Bad Request",
            Self::NotFound => "Not Found",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    PlainText,
    Html,
}

impl ContentType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlainText => "text/plain",
            Self::Html => "text/html",
        }
    }
}

/// Response to a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: ContentType,
    pub body: &'static str,
}

impl Response {
    /// 200 with a plain text body
    pub const fn ok(body: &'static str) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: ContentType::PlainText,
            body,
        }
    }

    /// 400 with a plain text body
    pub const fn bad_request(body: &'static str) -> Self {
        Self {
            status: StatusCode::BadRequest,
            content_type: ContentType::PlainText,
            body,
        }
    }

    pub const fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: ContentType::PlainText,
            body: "Not found",
        }
    }

    pub const fn html(body: &'static str) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: ContentType::Html,
            body,
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.status, StatusCode::Ok)
    }
}

/// A request target split into path and query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request<'a> {
    path: &'a str,
    query: &'a str,
}

impl<'a> Request<'a> {
    /// Split a request target such as `/color?red=1&green=2&blue=3`
    pub fn parse(target: &'a str) -> Self {
        let target = target.trim();
        let target = target.split_once('#').map_or(target, |(head, _)| head);
        match target.split_once('?') {
            Some((path, query)) => Self { path, query },
            None => Self {
                path: target,
                query: "",
            },
        }
    }

    pub const fn path(&self) -> &'a str {
        self.path
    }

    pub const fn query(&self) -> &'a str {
        self.query
    }

    /// First value of query parameter `name`
    ///
    /// A key without `=` is present with an empty value.
    pub fn arg(&self, name: &str) -> Option<&'a str> {
        self.query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .find_map(|pair| match pair.split_once('=') {
                Some((key, value)) if key == name => Some(value),
                None if pair == name => Some(""),
                _ => None,
            })
    }

    pub fn has_arg(&self, name: &str) -> bool {
        self.arg(name).is_some()
    }
}

/// Parse the leading integer of `value`
///
/// Accepts optional leading whitespace and a sign, then reads digits up
/// to the first non-digit. Input without digits parses as 0 and very
/// long numbers saturate.
pub fn parse_int(value: &str) -> i64 {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(i64::from(digit - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}
