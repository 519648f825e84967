//! The conditional-request decorator.

use std::sync::Arc;

use etagged_core::{
    Body, COOKIE, CacheEntry, CacheKey, CacheStore, Completion, ETAG, HttpClient, IF_NONE_MATCH,
    Normalized, Params, RequestOptions,
};
use http::StatusCode;
use tracing::{Instrument, debug, debug_span, field, trace, warn};

use crate::builder::{ConditionalClientBuilder, NotSet};
use crate::error::RequestError;
use crate::status::CacheStatus;

/// Completion produced by a [`ConditionalClient`] wrapping transport `C`.
pub type ClientCompletion<C> = Completion<RequestError<<C as HttpClient>::Error>>;

/// HTTP client decorator adding ETag revalidation caching to GET requests.
///
/// For every cacheable GET the decorator looks up the previous response in
/// the store, sends its entity tag as `If-None-Match`, and on
/// `304 Not Modified` substitutes the stored body. A `200` response carrying
/// an `ETag` replaces the stored entry.
///
/// Requests that are not GET, or that carry a `Cookie` header, are passed
/// through to the transport untouched.
///
/// Clones share the same store.
///
/// # Type Parameters
///
/// * `S` - Cache store, e.g. [`MokaStore`](etagged_moka::MokaStore)
/// * `C` - Underlying transport implementing [`HttpClient`]
pub struct ConditionalClient<S, C> {
    store: Arc<S>,
    client: C,
}

impl<S, C> Clone for ConditionalClient<S, C>
where
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            client: self.client.clone(),
        }
    }
}

impl<S, C> std::fmt::Debug for ConditionalClient<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionalClient")
            .field("store", &std::any::type_name::<S>())
            .field("client", &std::any::type_name::<C>())
            .finish()
    }
}

impl ConditionalClient<NotSet, NotSet> {
    /// Creates a new [`ConditionalClientBuilder`].
    pub fn builder() -> ConditionalClientBuilder<NotSet, NotSet> {
        ConditionalClientBuilder::new()
    }
}

impl<S, C> ConditionalClient<S, C>
where
    S: CacheStore,
    C: HttpClient,
{
    /// Wraps `client`, keeping entries in `store`.
    pub fn new(store: S, client: C) -> Self {
        Self {
            store: Arc::new(store),
            client,
        }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The wrapped transport.
    pub fn inner(&self) -> &C {
        &self.client
    }

    /// Removes every cached entry.
    pub fn reset(&self) {
        self.store.reset();
    }

    /// Performs a request.
    ///
    /// Accepts a bare target, a [`RequestOptions`] value, a `(target, options)`
    /// pair, or an explicit [`Params`] carrying a callback. A callback runs
    /// once with the finished completion before it is returned.
    pub async fn call<P>(&self, params: P) -> ClientCompletion<C>
    where
        P: Into<Params<RequestError<C::Error>>>,
    {
        self.call_with_status(params).await.0
    }

    /// Performs a request and reports how the cache took part in it.
    pub async fn call_with_status<P>(&self, params: P) -> (ClientCompletion<C>, CacheStatus)
    where
        P: Into<Params<RequestError<C::Error>>>,
    {
        let params: Params<RequestError<C::Error>> = params.into();
        let Normalized { options, callback } = params.normalize();

        let span = debug_span!(
            "etagged.request",
            target = %options.target,
            method = %options.effective_method(),
            cache.status = field::Empty
        );
        let (completion, status) = self.dispatch(options).instrument(span.clone()).await;
        span.record("cache.status", status.as_str());
        crate::metrics::record_status(status);

        if let Some(callback) = callback {
            callback(&completion);
        }
        (completion, status)
    }

    async fn dispatch(&self, mut options: RequestOptions) -> (ClientCompletion<C>, CacheStatus) {
        if !options.is_get() {
            debug!("non-GET request, bypassing cache");
            return (self.pass_through(options).await, CacheStatus::Bypass);
        }

        // Cookies imply per-identity responses that must not be shared.
        if options.headers.contains_ignore_case(COOKIE) {
            debug!("request carries a cookie, bypassing cache");
            return (self.pass_through(options).await, CacheStatus::Bypass);
        }

        let key = match CacheKey::capture(&options) {
            Ok(key) => key,
            Err(error) => {
                warn!(%error, "cannot derive cache key, bypassing cache");
                return (self.pass_through(options).await, CacheStatus::Bypass);
            }
        };

        let hit = self.store.get(&key);
        match &hit {
            Some(entry) => {
                trace!(etag = %entry.etag, "cache hit, sending conditional request");
                options.headers.insert(IF_NONE_MATCH, entry.etag.as_str());
            }
            None => trace!("cache miss"),
        }

        let target = options.target.clone();
        let completion = self.client.execute(options).await;
        self.complete(key, hit, target, completion)
    }

    async fn pass_through(&self, options: RequestOptions) -> ClientCompletion<C> {
        self.client
            .execute(options)
            .await
            .map_err(RequestError::Transport)
    }

    /// Applies the response to the cache and builds the caller's completion.
    ///
    /// A transport error alongside a 200 or 304 does not stop cache
    /// processing; only a 304 served from cache clears it.
    fn complete(
        &self,
        key: CacheKey,
        hit: Option<CacheEntry>,
        target: String,
        completion: Completion<C::Error>,
    ) -> (ClientCompletion<C>, CacheStatus) {
        let Completion {
            error,
            response,
            mut body,
        } = completion;
        let mut error = error.map(RequestError::Transport);

        let Some(response) = response else {
            return (
                Completion {
                    error,
                    response: None,
                    body,
                },
                CacheStatus::Miss,
            );
        };

        let status = if response.status == StatusCode::OK {
            let etag = response
                .headers
                .get_ignore_case(ETAG)
                .filter(|etag| !etag.is_empty());
            match etag {
                Some(etag) => {
                    let data = body
                        .clone()
                        .or_else(|| response.body.clone())
                        .unwrap_or_else(|| Body::Bytes(Default::default()));
                    trace!(%etag, "storing response");
                    self.store.set(key, CacheEntry::new(data, etag));
                    CacheStatus::Refreshed
                }
                None => CacheStatus::Miss,
            }
        } else if response.status == StatusCode::NOT_MODIFIED {
            match hit {
                Some(entry) => {
                    body = Some(entry.data);
                    error = None;
                    CacheStatus::Revalidated
                }
                None => {
                    warn!(%target, "304 Not Modified without a cached entry");
                    if error.is_none() {
                        error = Some(RequestError::OrphanedNotModified { target });
                    }
                    CacheStatus::Miss
                }
            }
        } else {
            CacheStatus::Miss
        };

        let body = body.or_else(|| response.body.clone());
        (
            Completion {
                error,
                response: Some(response),
                body,
            },
            status,
        )
    }
}
