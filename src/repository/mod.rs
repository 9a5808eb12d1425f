use async_trait::async_trait;

use crate::domain::sale::SaleRecord;
use crate::domain::types::SaleId;
use crate::dto::sale::SalePayload;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use http::HttpSaleRepository;

/// Read access to the remote collection of sale records.
#[async_trait]
pub trait SaleReader {
    /// Fetches the full collection. There is no pagination or filtering;
    /// the result replaces the local list wholesale.
    async fn list_sales(&self) -> RepositoryResult<Vec<SaleRecord>>;
}

/// Mutations against the remote collection of sale records.
///
/// Response bodies are unused beyond signalling success; every mutation is
/// followed by a fresh [`SaleReader::list_sales`] call.
#[async_trait]
pub trait SaleWriter {
    async fn create_sale(&self, payload: &SalePayload) -> RepositoryResult<()>;
    async fn update_sale(&self, id: &SaleId, payload: &SalePayload) -> RepositoryResult<()>;
    async fn delete_sale(&self, id: &SaleId) -> RepositoryResult<()>;
}
