//! Lead form state for the quote request section.

use std::time::Duration;

use truelogix_core::{LeadErrors, LeadField, LeadForm, LeadSubmission};

/// How long the confirmation toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// A transient confirmation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    /// Confirmation shown after a lead is accepted.
    pub fn lead_sent() -> Self {
        Self {
            title: "Request Sent!".to_string(),
            description: "Thanks for your interest. We'll be in touch soon to discuss your project."
                .to_string(),
        }
    }
}

/// Form values, field errors, and the confirmation toast.
///
/// Fields are validated on submit. After a rejected submit every edit
/// re-validates, so messages clear as soon as the input is fixed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadFormState {
    pub form: LeadForm,
    pub errors: Option<LeadErrors>,
    pub validate_on_change: bool,
    pub toast: Option<Toast>,
}

impl LeadFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit to `field`.
    pub fn update(&mut self, field: LeadField, value: String) {
        self.form.set(field, value);
        if self.validate_on_change {
            self.errors = self.form.validate().err();
        }
    }

    /// Message to show under `field`, if any.
    pub fn error_for(&self, field: LeadField) -> Option<String> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.get(field))
            .map(ToString::to_string)
    }

    /// Validate and, on success, reset the form and raise the toast.
    pub fn submit(&mut self) -> Option<LeadSubmission> {
        match self.form.validate() {
            Ok(submission) => {
                self.form.reset();
                self.errors = None;
                self.validate_on_change = false;
                self.toast = Some(Toast::lead_sent());
                Some(submission)
            }
            Err(errors) => {
                self.errors = Some(errors);
                self.validate_on_change = true;
                None
            }
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }
}
