//! Thin REST client for the admin API.

use serde::Deserialize;
use vitrina_core::product_message::ParsedProduct;

/// A product row as returned by the listing endpoint (only the fields the
/// bot renders).
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSummary {
    pub name: String,
    pub price: i64,
}

#[derive(Debug, Deserialize)]
struct ProductListResponse {
    products: Vec<ProductSummary>,
}

/// Errors from talking to the admin API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API rejected the product ({status}): {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// REST client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// POST the parsed product to `/products`.
    pub async fn create_product(&self, product: &ParsedProduct) -> Result<(), ApiError> {
        let response = self
            .http
            .post(format!("{}/products", self.base_url))
            .json(product)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Rejected { status, body });
        }
        Ok(())
    }

    /// GET the first page of products from `/products`.
    pub async fn list_products(&self) -> Result<Vec<ProductSummary>, ApiError> {
        let response = self
            .http
            .get(format!("{}/products", self.base_url))
            .send()
            .await?
            .error_for_status()?;

        let list: ProductListResponse = response.json().await?;
        Ok(list.products)
    }
}
