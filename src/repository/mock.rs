//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::sale::SaleRecord;
use crate::domain::types::SaleId;
use crate::dto::sale::SalePayload;
use crate::repository::errors::RepositoryResult;
use crate::repository::{SaleReader, SaleWriter};

mock! {
    pub Repository {}

    #[async_trait]
    impl SaleReader for Repository {
        async fn list_sales(&self) -> RepositoryResult<Vec<SaleRecord>>;
    }

    #[async_trait]
    impl SaleWriter for Repository {
        async fn create_sale(&self, payload: &SalePayload) -> RepositoryResult<()>;
        async fn update_sale(&self, id: &SaleId, payload: &SalePayload) -> RepositoryResult<()>;
        async fn delete_sale(&self, id: &SaleId) -> RepositoryResult<()>;
    }
}
