use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::sale::SaleRecord;
use crate::domain::types::{TypeConstraintError, parse_calendar_date, parse_positive_number};
use crate::dto::sale::SalePayload;
use crate::forms::required_text;

pub const PRODUCT_REQUIRED: &str = "El producte és obligatori";
pub const QUANTITY_NOT_POSITIVE: &str = "La quantitat ha de ser un número positiu";
pub const PRICE_NOT_POSITIVE: &str = "El preu ha de ser un número positiu";
pub const SALE_DATE_REQUIRED: &str = "La data de venda és obligatòria";

/// Transient draft of the sales form. All fields hold the raw text entered
/// by the user; nothing is parsed until validation passes.
#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct SaleForm {
    #[validate(custom(function = required_text))]
    pub product: String,
    #[validate(custom(function = positive_number))]
    pub quantity: String,
    #[validate(custom(function = positive_number))]
    pub price: String,
    #[validate(custom(function = required_text))]
    pub sale_date: String,
}

fn positive_number(value: &str) -> Result<(), ValidationError> {
    parse_positive_number(value).map_err(|_| ValidationError::new("positive_number"))?;
    Ok(())
}

impl SaleForm {
    /// Recomputes the error state of every field. All four checks run
    /// unconditionally; no short-circuiting on the first failure.
    pub fn check(&self) -> SaleFormErrors {
        SaleFormErrors::from_validation(self.validate())
    }

    /// Copies a record's fields verbatim into the draft, numbers via their
    /// display representation and the date as `YYYY-MM-DD`.
    pub fn from_record(record: &SaleRecord) -> Self {
        Self {
            product: record.product.clone(),
            quantity: record.quantity.to_string(),
            price: record.price.to_string(),
            sale_date: record.sale_date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl TryFrom<&SaleForm> for SalePayload {
    type Error = TypeConstraintError;

    /// Converts a validated draft into the wire payload. Callers are
    /// expected to run [`SaleForm::check`] first; conversion re-parses the
    /// numeric and date fields and fails on anything validation would have
    /// rejected.
    fn try_from(form: &SaleForm) -> Result<Self, Self::Error> {
        let producte = form.product.trim().to_string();
        if producte.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(SalePayload {
            producte,
            quantitat: parse_positive_number(&form.quantity)?,
            preu: parse_positive_number(&form.price)?,
            data_venda: parse_calendar_date(&form.sale_date)?,
        })
    }
}

/// Per-field error messages of the sales form; `None` means the field is
/// currently valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SaleFormErrors {
    pub product: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub sale_date: Option<String>,
}

impl SaleFormErrors {
    /// Every field flagged with its canonical message, regardless of the
    /// current draft values. Used by the explicit reset action.
    pub fn all() -> Self {
        Self {
            product: Some(PRODUCT_REQUIRED.to_string()),
            quantity: Some(QUANTITY_NOT_POSITIVE.to_string()),
            price: Some(PRICE_NOT_POSITIVE.to_string()),
            sale_date: Some(SALE_DATE_REQUIRED.to_string()),
        }
    }

    /// True when no field carries an error message.
    pub fn is_clean(&self) -> bool {
        self.product.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
            && self.sale_date.is_none()
    }

    fn from_validation(outcome: Result<(), ValidationErrors>) -> Self {
        let mut errors = Self::default();
        if let Err(source) = outcome {
            for (field, _) in source.field_errors() {
                let field: &str = field.as_ref();
                match field {
                    "product" => errors.product = Some(PRODUCT_REQUIRED.to_string()),
                    "quantity" => errors.quantity = Some(QUANTITY_NOT_POSITIVE.to_string()),
                    "price" => errors.price = Some(PRICE_NOT_POSITIVE.to_string()),
                    "sale_date" => errors.sale_date = Some(SALE_DATE_REQUIRED.to_string()),
                    _ => {}
                }
            }
        }
        errors
    }
}
