use std::time::Instant;

use crate::services::SubmitOutcome;
use crate::state::contact::ContactForm;

/// Runs the contact form submit: both checks run unconditionally and the
/// error state is refreshed. On success only the confirmation window is
/// armed; there is no remote call and the draft stays populated.
pub fn submit(form: &mut ContactForm, now: Instant) -> SubmitOutcome {
    let errors = form.draft().check();
    let clean = errors.is_clean();
    form.set_errors(errors);
    if !clean {
        log::error!("Failed to validate contact form");
        return SubmitOutcome::Rejected;
    }

    form.arm_confirmation(now);
    SubmitOutcome::Accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::contact::{EMAIL_MISSING_AT, NAME_REQUIRED};
    use crate::state::CONFIRMATION_WINDOW;

    #[test]
    fn rejected_submit_populates_both_errors() {
        let mut form = ContactForm::new();
        form.set_email("a.b.com");

        let outcome = submit(&mut form, Instant::now());

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(form.errors().name.as_deref(), Some(NAME_REQUIRED));
        assert_eq!(form.errors().email.as_deref(), Some(EMAIL_MISSING_AT));
        assert!(!form.confirmation_visible(Instant::now()));
    }

    #[test]
    fn accepted_submit_keeps_the_draft_populated() {
        let mut form = ContactForm::new();
        form.set_name("Anna");
        form.set_email("a@b.com");
        let now = Instant::now();

        let outcome = submit(&mut form, now);

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(form.draft().name, "Anna");
        assert_eq!(form.draft().email, "a@b.com");
        assert!(form.errors().is_clean());
        assert!(form.confirmation_visible(now));
        assert!(!form.confirmation_visible(now + CONFIRMATION_WINDOW));
    }

    #[test]
    fn resubmit_clears_previous_errors() {
        let mut form = ContactForm::new();
        form.set_email("a.b.com");
        submit(&mut form, Instant::now());
        assert!(!form.errors().is_clean());

        form.set_name("Anna");
        form.set_email("a@b.com");
        let outcome = submit(&mut form, Instant::now());

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert!(form.errors().is_clean());
    }
}
