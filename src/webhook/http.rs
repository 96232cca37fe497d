//! Outbound request/response types and the transport trait.

use super::HttpError;

/// A fully built webhook request.
///
/// Exists only for the duration of one outbound call: the dispatcher builds
/// it, hands it to an [`HttpClient`], and drops it once the call completes.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: http::Method,
    /// Destination URL
    pub url: url::Url,
    /// Headers to send
    pub headers: http::HeaderMap,
    /// Encoded request body
    pub body: String,
}

impl HttpRequest {
    /// Creates a POST request to `url` with no headers and an empty body.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self {
            method: http::Method::POST,
            url,
            headers: http::HeaderMap::new(),
            body: String::new(),
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets a header, replacing any previous value for the same name.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// The part of a webhook response the dispatcher cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
}

impl HttpResponse {
    /// Creates a response with the given status.
    #[must_use]
    pub const fn new(status: http::StatusCode) -> Self {
        Self { status }
    }
}

/// Transport used to deliver webhook requests.
///
/// Implemented by [`ReqwestClient`](super::ReqwestClient) in production and
/// by recording fakes in tests. The returned future must be `Send` because
/// the dispatcher runs it on a spawned task.
pub trait HttpClient: Send + Sync {
    /// Sends a request and returns the response status.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request could not be completed:
    /// connection failure, timeout, or an unusable URL.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
