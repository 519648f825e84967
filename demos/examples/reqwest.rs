//! Revalidating GET requests through a reqwest transport.
//!
//! The first call stores the response under its entity tag, the second one
//! is sent with `If-None-Match` and served from the cache on `304`.

use etagged::{RequestOptions, StoreConfig};
use etagged_reqwest::ReqwestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("etagged=trace")
        .init();

    let config_yaml = r#"
    max_entries: 100
    ttl: 10m
    "#;
    let config: StoreConfig = serde_saphyr::from_str(config_yaml)?;

    let client = etagged::create(&config, Some(ReqwestClient::new(reqwest::Client::new())))?;

    // httpbin answers 304 when If-None-Match carries the tag in the path.
    let options = RequestOptions::new("http://httpbin.org/etag/demo").json(true);

    println!("=== First request (stored) ===");
    let (completion, status) = client.call_with_status(options.clone()).await;
    println!("Status: {:?}, cache: {status}", completion.status());
    println!("Body: {:?}", completion.body);

    println!("\n=== Second request (revalidated) ===");
    let (completion, status) = client.call_with_status(options).await;
    println!("Status: {:?}, cache: {status}", completion.status());
    println!("Body: {:?}", completion.body);

    if let Some(error) = completion.error {
        eprintln!("Request failed: {error}");
    }
    Ok(())
}
