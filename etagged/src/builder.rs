//! Builder and factory for [`ConditionalClient`].

use etagged_core::{CacheStore, HttpClient};
use etagged_moka::{MokaStore, StoreConfig};

use crate::client::ConditionalClient;
use crate::error::InitError;

/// Marker type for unset builder fields.
///
/// When you see `NotSet` in a compiler error, it means you haven't called
/// the corresponding builder method yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotSet;

/// Builder for [`ConditionalClient`].
///
/// ```
/// # use std::future::Future;
/// # use etagged_core::{Completion, HttpClient, RequestOptions, Response};
/// # struct Transport;
/// # impl HttpClient for Transport {
/// #     type Error = std::io::Error;
/// #     fn execute(&self, _: RequestOptions) -> impl Future<Output = Completion<Self::Error>> + Send {
/// #         std::future::ready(Completion::ok(Response::new(http::StatusCode::OK)))
/// #     }
/// # }
/// use etagged::ConditionalClient;
/// use etagged_moka::MokaStore;
///
/// let client = ConditionalClient::builder()
///     .store(MokaStore::builder().max_entries(1_000).build().unwrap())
///     .client(Transport)
///     .build();
/// ```
#[derive(Debug)]
pub struct ConditionalClientBuilder<S, C> {
    store: S,
    client: C,
}

impl ConditionalClientBuilder<NotSet, NotSet> {
    /// Creates a builder with no fields set.
    pub fn new() -> Self {
        Self {
            store: NotSet,
            client: NotSet,
        }
    }
}

impl Default for ConditionalClientBuilder<NotSet, NotSet> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C> ConditionalClientBuilder<S, C> {
    /// Sets the cache store.
    pub fn store<NewS>(self, store: NewS) -> ConditionalClientBuilder<NewS, C> {
        ConditionalClientBuilder {
            store,
            client: self.client,
        }
    }

    /// Sets the underlying transport.
    pub fn client<NewC>(self, client: NewC) -> ConditionalClientBuilder<S, NewC> {
        ConditionalClientBuilder {
            store: self.store,
            client,
        }
    }
}

impl<C> ConditionalClientBuilder<NotSet, C> {
    /// Uses a [`MokaStore`] built from `config`.
    pub fn config(
        self,
        config: &StoreConfig,
    ) -> Result<ConditionalClientBuilder<MokaStore, C>, InitError> {
        Ok(self.store(MokaStore::from_config(config)?))
    }
}

impl<S, C> ConditionalClientBuilder<S, C>
where
    S: CacheStore,
    C: HttpClient,
{
    /// Builds the decorated client.
    pub fn build(self) -> ConditionalClient<S, C> {
        ConditionalClient::new(self.store, self.client)
    }
}

/// Decorates `client` with a fresh in-memory store built from `config`.
///
/// Each call constructs an independent store; nothing is shared between the
/// returned clients except through explicit cloning.
///
/// # Errors
///
/// [`InitError::MissingClient`] if `client` is `None`, [`InitError::Config`]
/// if the store configuration is invalid.
pub fn create<C>(
    config: &StoreConfig,
    client: Option<C>,
) -> Result<ConditionalClient<MokaStore, C>, InitError>
where
    C: HttpClient,
{
    let client = client.ok_or(InitError::MissingClient)?;
    Ok(ConditionalClientBuilder::new()
        .config(config)?
        .client(client)
        .build())
}
