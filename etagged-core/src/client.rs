//! HTTP transport collaborator.

use std::future::Future;
use std::sync::Arc;

use crate::options::RequestOptions;
use crate::response::Completion;

/// Transport that performs the actual network request.
///
/// Connection handling, TLS, redirects, cancellation and timeouts all live
/// behind this trait. Failures are reported through [`Completion::error`],
/// possibly alongside a response.
///
/// # Examples
///
/// ```
/// use std::future::Future;
/// use etagged_core::{Completion, HttpClient, RequestOptions, Response};
/// use http::StatusCode;
///
/// struct AlwaysNotFound;
///
/// impl HttpClient for AlwaysNotFound {
///     type Error = std::io::Error;
///
///     fn execute(&self, _options: RequestOptions) -> impl Future<Output = Completion<Self::Error>> + Send {
///         std::future::ready(Completion::ok(Response::new(StatusCode::NOT_FOUND)))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Transport error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Performs the request described by `options`.
    fn execute(
        &self,
        options: RequestOptions,
    ) -> impl Future<Output = Completion<Self::Error>> + Send;
}

impl<C> HttpClient for Arc<C>
where
    C: HttpClient,
{
    type Error = C::Error;

    fn execute(
        &self,
        options: RequestOptions,
    ) -> impl Future<Output = Completion<Self::Error>> + Send {
        (**self).execute(options)
    }
}
