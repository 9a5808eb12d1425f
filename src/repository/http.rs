//! HTTP implementation of the repository seam against the collection
//! resource. Plain JSON over `reqwest`, no authentication and no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::sale::SaleRecord;
use crate::domain::types::SaleId;
use crate::dto::sale::SalePayload;
use crate::models::config::AppConfig;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{SaleReader, SaleWriter};

#[derive(Clone)]
pub struct HttpSaleRepository {
    client: Client,
    base_url: String,
}

impl HttpSaleRepository {
    /// Builds the client from configuration. The request timeout is only
    /// applied when configured; by default calls wait indefinitely.
    pub fn new(config: &AppConfig) -> RepositoryResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| RepositoryError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/vendes", self.base_url)
    }

    fn record_url(&self, id: &SaleId) -> String {
        format!("{}/vendes/{}", self.base_url, id)
    }

    async fn ensure_success(response: reqwest::Response) -> RepositoryResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(RepositoryError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl SaleReader for HttpSaleRepository {
    async fn list_sales(&self) -> RepositoryResult<Vec<SaleRecord>> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| RepositoryError::Network(e.to_string()))?;
        let response = Self::ensure_success(response).await?;

        response
            .json::<Vec<SaleRecord>>()
            .await
            .map_err(|e| RepositoryError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl SaleWriter for HttpSaleRepository {
    async fn create_sale(&self, payload: &SalePayload) -> RepositoryResult<()> {
        let response = self
            .client
            .post(self.collection_url())
            .json(payload)
            .send()
            .await
            .map_err(|e| RepositoryError::Network(e.to_string()))?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn update_sale(&self, id: &SaleId, payload: &SalePayload) -> RepositoryResult<()> {
        let response = self
            .client
            .put(self.record_url(id))
            .json(payload)
            .send()
            .await
            .map_err(|e| RepositoryError::Network(e.to_string()))?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn delete_sale(&self, id: &SaleId) -> RepositoryResult<()> {
        let response = self
            .client
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(|e| RepositoryError::Network(e.to_string()))?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
