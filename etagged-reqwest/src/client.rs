//! `HttpClient` implementation over `reqwest::Client`.

use std::future::Future;

use bytes::Bytes;
use etagged_core::{Body, Completion, Headers, HttpClient, RequestOptions, Response};
use http::Method;
use http::header::{CONTENT_TYPE, HeaderValue};

use crate::error::ReqwestError;

/// Transport backed by a [`reqwest::Client`].
///
/// Cloning is cheap: reqwest clients share their connection pool.
#[derive(Clone, Debug, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Wraps an already configured reqwest client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// The wrapped reqwest client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }
}

impl From<reqwest::Client> for ReqwestClient {
    fn from(client: reqwest::Client) -> Self {
        Self::new(client)
    }
}

impl HttpClient for ReqwestClient {
    type Error = ReqwestError;

    fn execute(
        &self,
        options: RequestOptions,
    ) -> impl Future<Output = Completion<Self::Error>> + Send {
        let client = self.client.clone();
        async move {
            match send(&client, options).await {
                Ok(completion) => completion,
                Err(error) => {
                    tracing::debug!(%error, "request failed");
                    Completion::failed(error)
                }
            }
        }
    }
}

async fn send(
    client: &reqwest::Client,
    options: RequestOptions,
) -> Result<Completion<ReqwestError>, ReqwestError> {
    let method_name = options.effective_method().to_ascii_uppercase();
    let method = Method::from_bytes(method_name.as_bytes())
        .map_err(|_| ReqwestError::InvalidMethod(method_name.clone()))?;

    let mut url = reqwest::Url::parse(&options.target).map_err(|e| ReqwestError::InvalidUrl {
        target: options.target.clone(),
        reason: e.to_string(),
    })?;
    if !options.query.is_empty() {
        url.query_pairs_mut().extend_pairs(&options.query);
    }

    let mut request = client.request(method, url);
    for (name, value) in options.headers.iter() {
        request = request.header(name, value);
    }
    if let Some(timeout) = options.timeout {
        request = request.timeout(timeout);
    }
    match options.body {
        Some(Body::Json(value)) => {
            if !options.headers.contains_ignore_case(CONTENT_TYPE.as_str()) {
                request =
                    request.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            request = request.body(serde_json::to_vec(&value)?);
        }
        Some(Body::Bytes(bytes)) => request = request.body(bytes),
        None => {}
    }

    let response = request.send().await?;
    let status = response.status();
    let headers = Headers::from(response.headers());
    let bytes = response.bytes().await?;
    let body = decode_body(bytes, options.json);

    Ok(Completion::ok(Response {
        status,
        headers,
        body: Some(body),
    }))
}

/// Parses JSON bodies when requested, keeping the raw bytes when the payload
/// is empty or not valid JSON.
fn decode_body(bytes: Bytes, json: bool) -> Body {
    if !json || bytes.is_empty() {
        return Body::Bytes(bytes);
    }
    match serde_json::from_slice(&bytes) {
        Ok(value) => Body::Json(value),
        Err(error) => {
            tracing::debug!(%error, "response body is not valid JSON, keeping raw bytes");
            Body::Bytes(bytes)
        }
    }
}
