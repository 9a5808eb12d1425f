use std::time::Instant;

use crate::domain::types::Gender;
use crate::forms::contact::{ContactDraft, ContactFormErrors};
use crate::state::CONFIRMATION_WINDOW;

/// State of the standalone contact form. No remote collaborator backs it;
/// a successful submit only shows the confirmation indicator and the draft
/// stays populated.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    errors: ContactFormErrors,
    confirmation_until: Option<Instant>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ContactFormErrors {
        &self.errors
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.draft.name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.draft.email = value.into();
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.draft.gender = gender;
    }

    pub fn set_consent(&mut self, given: bool) {
        self.draft.consent_given = given;
    }

    pub fn set_errors(&mut self, errors: ContactFormErrors) {
        self.errors = errors;
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
