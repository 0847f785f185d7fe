//! HTTP transport types for the host-does-IO pattern.
//!
//! Requests and responses are plain data: the crate builds `HttpRequest`
//! values and interprets `HttpResponse` values, while the caller (host)
//! performs the actual network I/O in between. All fields are owned so
//! values can be handed across any boundary without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data, produced by `build_*` methods.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data, consumed by `parse_*` and
/// `finish_*` methods after the host has executed the request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
