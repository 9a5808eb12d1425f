use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body sent to the collection resource for create and update
/// operations. Field names match the wire contract verbatim.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SalePayload {
    pub producte: String,
    pub quantitat: f64,
    pub preu: f64,
    pub data_venda: NaiveDate,
}
