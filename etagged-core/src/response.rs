//! Responses and call completions.

use http::StatusCode;

use crate::headers::Headers;
use crate::options::Body;

/// A response as reported by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// Status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: Headers,
    /// Body attached to the response object, used when the completion
    /// carries no separate body.
    pub body: Option<Body>,
}

impl Response {
    /// Creates a response with the given status, no headers and no body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: None,
        }
    }

    /// Adds a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Outcome of one request: the `(error, response, body)` triple.
///
/// A transport may report an error together with a response, for instance
/// when it considers a 304 exceptional. Neither field excludes the other.
#[derive(Debug)]
pub struct Completion<E> {
    /// Transport or decorator error.
    pub error: Option<E>,
    /// Response, absent when the request never produced one.
    pub response: Option<Response>,
    /// Body delivered to the caller.
    pub body: Option<Body>,
}

impl<E> Completion<E> {
    /// Successful completion with `response`, body taken from the response.
    pub fn ok(response: Response) -> Self {
        Self {
            error: None,
            body: response.body.clone(),
            response: Some(response),
        }
    }

    /// Failed completion without a response.
    pub fn failed(error: E) -> Self {
        Self {
            error: Some(error),
            response: None,
            body: None,
        }
    }

    /// Status code of the response, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.response.as_ref().map(|response| response.status)
    }

    /// Returns the body, falling back to the response's own body.
    pub fn body_or_response_body(&self) -> Option<&Body> {
        self.body
            .as_ref()
            .or_else(|| self.response.as_ref().and_then(|r| r.body.as_ref()))
    }

    /// Converts the error type, keeping response and body.
    pub fn map_err<F, T>(self, f: F) -> Completion<T>
    where
        F: FnOnce(E) -> T,
    {
        Completion {
            error: self.error.map(f),
            response: self.response,
            body: self.body,
        }
    }
}
