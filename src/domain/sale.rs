use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::types::{SaleId, parse_calendar_date};

/// A sale record as held by the remote collection resource.
///
/// Field names on the wire are fixed by the collaborator (`producte`,
/// `quantitat`, `preu`, `data_venda`). Decoding is tolerant of the shapes
/// the collaborator actually returns: numeric fields may arrive as numbers
/// or numeric strings, and the sale date may carry a time-of-day component
/// which is discarded.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SaleRecord {
    pub id: SaleId,
    #[serde(rename = "producte")]
    pub product: String,
    #[serde(rename = "quantitat", deserialize_with = "lenient_number")]
    pub quantity: f64,
    #[serde(rename = "preu", deserialize_with = "lenient_number")]
    pub price: f64,
    #[serde(rename = "data_venda", deserialize_with = "calendar_date")]
    pub sale_date: NaiveDate,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(value) => value.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numeric_fields_from_numbers() {
        let record: SaleRecord = serde_json::from_str(
            r#"{"id":1,"producte":"Teclat","quantitat":3,"preu":24.99,"data_venda":"2024-03-15"}"#,
        )
        .unwrap();
        assert_eq!(record.id.as_str(), "1");
        assert_eq!(record.product, "Teclat");
        assert_eq!(record.quantity, 3.0);
        assert_eq!(record.price, 24.99);
        assert_eq!(
            record.sale_date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn deserializes_numeric_fields_from_submitted_text() {
        let record: SaleRecord = serde_json::from_str(
            r#"{"id":"a7","producte":"Ratolí","quantitat":"2","preu":"9.5","data_venda":"2024-03-15"}"#,
        )
        .unwrap();
        assert_eq!(record.id.as_str(), "a7");
        assert_eq!(record.quantity, 2.0);
        assert_eq!(record.price, 9.5);
    }

    #[test]
    fn strips_time_of_day_from_sale_date() {
        let record: SaleRecord = serde_json::from_str(
            r#"{"id":4,"producte":"Monitor","quantitat":1,"preu":180,"data_venda":"2024-03-15T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(
            record.sale_date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn rejects_unparseable_quantities() {
        let result: Result<SaleRecord, _> = serde_json::from_str(
            r#"{"id":4,"producte":"Monitor","quantitat":"molts","preu":180,"data_venda":"2024-03-15"}"#,
        );
        assert!(result.is_err());
    }
}
