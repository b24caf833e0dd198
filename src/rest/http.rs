//! HTTP request/response value types and the transport trait.

use super::HttpError;

/// An HTTP request to be sent.
///
/// A plain value built from standard `http` crate types, so it can be handed
/// to any [`HttpClient`] implementation.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: http::Method,
    /// Target URL.
    pub url: url::Url,
    /// Headers to send.
    pub headers: http::HeaderMap,
    /// Optional request body.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a request with the given method and URL, no headers, no body.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Creates a DELETE request to the given URL.
    #[must_use]
    pub fn delete(url: url::Url) -> Self {
        Self::new(http::Method::DELETE, url)
    }

    /// Creates a PATCH request to the given URL.
    #[must_use]
    pub fn patch(url: url::Url) -> Self {
        Self::new(http::Method::PATCH, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header. An existing header with the same name keeps its value
    /// and the new one is appended.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// An HTTP response, fully buffered.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code.
    pub status: http::StatusCode,
    /// Response headers.
    pub headers: http::HeaderMap,
    /// Response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns the body decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Trait for making HTTP requests.
///
/// Abstracts the transport so the executor can be driven by a mock in tests
/// and the real client can be swapped without touching calling code.
/// Implementations must follow redirects; everything else (pooling, TLS
/// configuration, timeouts) is their own business.
pub trait HttpClient: Send + Sync {
    /// Sends one request and returns the buffered response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails below the HTTP layer:
    /// connection problems, timeouts, or an unusable URL. A response with a
    /// non-success status is **not** an error at this level.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
