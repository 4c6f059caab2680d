use reqwest::Client;

use crate::{CatalogError, products::Envelope, products::Product};

/// Single GET against the catalog service.
///
/// Timeouts come from the [`Client`] configuration and surface as [`CatalogError::TimedOut`].
/// A failure envelope becomes [`CatalogError::Rejected`] carrying the service message.
pub async fn fetch_catalog(client: &Client, url: &str) -> Result<Vec<Product>, CatalogError> {
    let response = client.get(url).send().await?;
    let status = response.status();

    match response.json::<Envelope<Vec<Product>>>().await {
        Ok(envelope) => envelope.into_result(),
        Err(_) if !status.is_success() => Err(CatalogError::Status(status)),
        Err(e) => Err(e.into()),
    }
}
