use validator::ValidationError;

pub mod contact;
pub mod sale;

/// Fails when the trimmed value is empty.
pub(crate) fn required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("required"))
    } else {
        Ok(())
    }
}
