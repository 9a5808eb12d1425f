//! In-memory repository used to exercise the service flows end to end and
//! record the remote calls they issue.

use std::sync::Mutex;

use async_trait::async_trait;
use vendes::domain::sale::SaleRecord;
use vendes::domain::types::SaleId;
use vendes::dto::sale::SalePayload;
use vendes::repository::errors::{RepositoryError, RepositoryResult};
use vendes::repository::{SaleReader, SaleWriter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    List,
    Create,
    Update(String),
    Delete(String),
}

pub struct InMemorySaleRepository {
    sales: Mutex<Vec<SaleRecord>>,
    next_id: Mutex<u32>,
    calls: Mutex<Vec<Call>>,
}

impl InMemorySaleRepository {
    pub fn new() -> Self {
        Self::with_sales(Vec::new())
    }

    pub fn with_sales(sales: Vec<SaleRecord>) -> Self {
        let next_id = sales.len() as u32 + 1;
        Self {
            sales: Mutex::new(sales),
            next_id: Mutex::new(next_id),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record_call(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn materialize(id: SaleId, payload: &SalePayload) -> SaleRecord {
        SaleRecord {
            id,
            product: payload.producte.clone(),
            quantity: payload.quantitat,
            price: payload.preu,
            sale_date: payload.data_venda,
        }
    }
}

#[async_trait]
impl SaleReader for InMemorySaleRepository {
    async fn list_sales(&self) -> RepositoryResult<Vec<SaleRecord>> {
        self.record_call(Call::List);
        Ok(self.sales.lock().unwrap().clone())
    }
}

#[async_trait]
impl SaleWriter for InMemorySaleRepository {
    async fn create_sale(&self, payload: &SalePayload) -> RepositoryResult<()> {
        self.record_call(Call::Create);
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            let id = SaleId::new(next_id.to_string()).unwrap();
            *next_id += 1;
            id
        };
        self.sales
            .lock()
            .unwrap()
            .push(Self::materialize(id, payload));
        Ok(())
    }

    async fn update_sale(&self, id: &SaleId, payload: &SalePayload) -> RepositoryResult<()> {
        self.record_call(Call::Update(id.to_string()));
        let mut sales = self.sales.lock().unwrap();
        match sales.iter_mut().find(|sale| &sale.id == id) {
            Some(existing) => {
                *existing = Self::materialize(id.clone(), payload);
                Ok(())
            }
            None => Err(RepositoryError::Status {
                status: 404,
                body: String::new(),
            }),
        }
    }

    async fn delete_sale(&self, id: &SaleId) -> RepositoryResult<()> {
        self.record_call(Call::Delete(id.to_string()));
        let mut sales = self.sales.lock().unwrap();
        let before = sales.len();
        sales.retain(|sale| &sale.id != id);
        if sales.len() == before {
            return Err(RepositoryError::Status {
                status: 404,
                body: String::new(),
            });
        }
        Ok(())
    }
}
