use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::types::Gender;
use crate::forms::required_text;

pub const NAME_REQUIRED: &str = "El nom és obligatori";
pub const EMAIL_MISSING_AT: &str = "El correu electrònic ha de tenir un @";

/// Transient draft of the standalone contact form. Gender and consent are
/// presented as controls but never validated.
#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct ContactDraft {
    #[validate(custom(function = required_text))]
    pub name: String,
    #[validate(custom(function = contains_at))]
    pub email: String,
    pub gender: Option<Gender>,
    pub consent_given: bool,
}

/// The only email rule in force: the address must contain an `@`.
fn contains_at(value: &str) -> Result<(), ValidationError> {
    if value.contains('@') {
        Ok(())
    } else {
        Err(ValidationError::new("missing_at"))
    }
}

impl ContactDraft {
    /// Recomputes the error state of both validated fields.
    pub fn check(&self) -> ContactFormErrors {
        ContactFormErrors::from_validation(self.validate())
    }
}

/// Per-field error messages of the contact form; `None` means the field is
/// currently valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ContactFormErrors {
    /// True when no field carries an error message.
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    fn from_validation(outcome: Result<(), ValidationErrors>) -> Self {
        let mut errors = Self::default();
        if let Err(source) = outcome {
            for (field, _) in source.field_errors() {
                let field: &str = field.as_ref();
                match field {
                    "name" => errors.name = Some(NAME_REQUIRED.to_string()),
                    "email" => errors.email = Some(EMAIL_MISSING_AT.to_string()),
                    _ => {}
                }
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_without_at_is_rejected() {
        let draft = ContactDraft {
            name: "Anna".to_string(),
            email: "a.b.com".to_string(),
            ..ContactDraft::default()
        };
        let errors = draft.check();
        assert_eq!(errors.email.as_deref(), Some(EMAIL_MISSING_AT));
        assert!(errors.name.is_none());
    }

    #[test]
    fn any_address_with_an_at_passes() {
        for email in ["a@b.com", "a@b", "@", "x@@y"] {
            let draft = ContactDraft {
                name: "Anna".to_string(),
                email: email.to_string(),
                ..ContactDraft::default()
            };
            assert!(draft.check().is_clean(), "email {email:?}");
        }
    }

    #[test]
    fn blank_name_is_required() {
        let draft = ContactDraft {
            name: "  ".to_string(),
            email: "a@b.com".to_string(),
            ..ContactDraft::default()
        };
        assert_eq!(draft.check().name.as_deref(), Some(NAME_REQUIRED));
    }

    #[test]
    fn gender_and_consent_are_never_validated() {
        let draft = ContactDraft {
            name: "Anna".to_string(),
            email: "a@b.com".to_string(),
            gender: None,
            consent_given: false,
        };
        assert!(draft.check().is_clean());
    }
}
