use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::StoreBackend;
use crate::errors::StoreError;
use crate::models::order::OrderLine;
use crate::models::product::Product;

const PRODUCTS_PATH: &str = "/api/products";
const CHECK_STOCK_PATH: &str = "/check-stock";
const ORDER_PATH: &str = "/order";
const CHECKOUT_PATH: &str = "/api/checkout";

/// REST implementation of [`StoreBackend`] against the lab storefront
/// servers.
///
/// - **Catalog**: `GET /api/products`, a JSON array of products. Field
///   casing differs between server variants and is normalized during
///   deserialization.
/// - **Stock verification**: `POST /check-stock` with one order line;
///   a non-2xx response carries a plain-text reason.
/// - **Orders**: `POST /order` per line, or `POST /api/checkout` with
///   the full serialized cart.
///
/// Error responses are plain text (`http.Error` style), not JSON.
pub struct RestBackend {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl RestBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token: None,
        }
    }

    /// Attach a session token, sent verbatim in the `Authorization`
    /// header on every request. Obtaining the token is the caller's
    /// concern.
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, token),
            None => req,
        }
    }

    /// Turn a non-success response into an API error carrying the
    /// server's plain-text reason, falling back to the status line.
    async fn error_from_response(endpoint: &str, resp: Response) -> StoreError {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let message = {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("HTTP {status}")
            } else {
                trimmed.to_string()
            }
        };
        StoreError::Api {
            endpoint: endpoint.to_string(),
            message,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl StoreBackend for RestBackend {
    fn name(&self) -> &str {
        "REST"
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError> {
        let resp = self
            .authorize(self.client.get(self.url(PRODUCTS_PATH)))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::error_from_response(PRODUCTS_PATH, resp).await);
        }

        resp.json().await.map_err(|e| StoreError::Api {
            endpoint: PRODUCTS_PATH.to_string(),
            message: format!("Failed to parse product catalog: {e}"),
        })
    }

    async fn check_stock(&self, line: &OrderLine) -> Result<(), StoreError> {
        let resp = self
            .authorize(self.client.post(self.url(CHECK_STOCK_PATH)))
            .json(line)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::error_from_response(CHECK_STOCK_PATH, resp).await);
        }
        Ok(())
    }

    async fn submit_order(&self, line: &OrderLine) -> Result<(), StoreError> {
        let resp = self
            .authorize(self.client.post(self.url(ORDER_PATH)))
            .json(line)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::error_from_response(ORDER_PATH, resp).await);
        }
        Ok(())
    }

    async fn submit_cart(&self, lines: &[OrderLine]) -> Result<(), StoreError> {
        let resp = self
            .authorize(self.client.post(self.url(CHECKOUT_PATH)))
            .json(&lines)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::error_from_response(CHECKOUT_PATH, resp).await);
        }
        Ok(())
    }
}
