use std::time::Instant;

use crate::domain::sale::SaleRecord;
use crate::domain::types::SaleId;
use crate::forms::sale::{SaleForm, SaleFormErrors};
use crate::state::CONFIRMATION_WINDOW;

/// State of the sales manager component: the last fetched list, the form
/// draft with its error map, the optional editing id and the confirmation
/// deadline.
///
/// An editing id present means the form is in update mode bound to an
/// existing record; absent means create mode.
#[derive(Clone, Debug, Default)]
pub struct SalesManager {
    sales: Vec<SaleRecord>,
    form: SaleForm,
    errors: SaleFormErrors,
    editing: Option<SaleId>,
    confirmation_until: Option<Instant>,
}

impl SalesManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sales(&self) -> &[SaleRecord] {
        &self.sales
    }

    pub fn form(&self) -> &SaleForm {
        &self.form
    }

    pub fn errors(&self) -> &SaleFormErrors {
        &self.errors
    }

    pub fn editing(&self) -> Option<&SaleId> {
        self.editing.as_ref()
    }

    pub fn set_product(&mut self, value: impl Into<String>) {
        self.form.product = value.into();
    }

    pub fn set_quantity(&mut self, value: impl Into<String>) {
        self.form.quantity = value.into();
    }

    pub fn set_price(&mut self, value: impl Into<String>) {
        self.form.price = value.into();
    }

    pub fn set_sale_date(&mut self, value: impl Into<String>) {
        self.form.sale_date = value.into();
    }

    pub fn set_errors(&mut self, errors: SaleFormErrors) {
        self.errors = errors;
    }

    /// Replaces the displayed list with a fresh remote read.
    pub fn replace_sales(&mut self, sales: Vec<SaleRecord>) {
        self.sales = sales;
    }

    /// Copies the record's fields into the draft and switches to update
    /// mode. Overwrites any in-progress draft without a dirty-check; field
    /// errors are left untouched.
    pub fn begin_edit(&mut self, record: &SaleRecord) {
        self.form = SaleForm::from_record(record);
        self.editing = Some(record.id.clone());
    }

    /// Post-submit reset: empties the draft, returns to create mode and
    /// clears all field errors.
    pub fn clear(&mut self) {
        self.form = SaleForm::default();
        self.editing = None;
        self.errors = SaleFormErrors::default();
    }

    /// Explicit reset action: empties the draft and returns to create mode,
    /// but flags every field with its canonical message, unlike
    /// [`SalesManager::clear`].
    pub fn reset(&mut self) {
        self.form = SaleForm::default();
        self.editing = None;
        self.errors = SaleFormErrors::all();
    }

    /// Arms the confirmation indicator for the fixed window starting at
    /// `now`. A later call simply moves the deadline forward.
    pub fn arm_confirmation(&mut self, now: Instant) {
        self.confirmation_until = Some(now + CONFIRMATION_WINDOW);
    }

    pub fn confirmation_visible(&self, now: Instant) -> bool {
        self.confirmation_until.is_some_and(|deadline| now < deadline)
    }
}
