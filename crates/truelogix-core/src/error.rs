use thiserror::Error;

use crate::lead::LeadField;

/// Why a single lead form field was rejected
///
/// The display text is shown beneath the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadFieldError {
    #[error("Name must be at least 2 characters.")]
    NameTooShort,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidWhatsapp,
    #[error("Please provide at least 10 characters about your project.")]
    DetailsTooShort,
}

/// All field errors of one rejected lead form, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("lead form has {} invalid field(s)", .errors.len())]
pub struct LeadErrors {
    errors: Vec<(LeadField, LeadFieldError)>,
}

impl LeadErrors {
    pub(crate) fn push(&mut self, field: LeadField, error: LeadFieldError) {
        self.errors.push((field, error));
    }

    /// The error for `field`, if it was rejected
    pub fn get(&self, field: LeadField) -> Option<&LeadFieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, error)| error)
    }

    /// Rejected fields with their errors
    pub fn iter(&self) -> impl Iterator<Item = &(LeadField, LeadFieldError)> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
