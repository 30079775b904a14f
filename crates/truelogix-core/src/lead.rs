//! Project-quote lead form
//!
//! Holds the raw field values typed by the visitor and validates them into a
//! [`LeadSubmission`]. Every field is checked so the form can show all
//! messages at once.

use serde::{Deserialize, Serialize};

use crate::error::{LeadErrors, LeadFieldError};

const MIN_NAME_CHARS: usize = 2;
const MIN_DETAILS_CHARS: usize = 10;
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 7..=15;

/// A field of the lead form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadField {
    Name,
    Email,
    Whatsapp,
    ProjectDetails,
}

impl LeadField {
    /// Fields in display order
    pub const ALL: [LeadField; 4] = [
        LeadField::Name,
        LeadField::Email,
        LeadField::Whatsapp,
        LeadField::ProjectDetails,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeadField::Name => "Name",
            LeadField::Email => "Email",
            LeadField::Whatsapp => "WhatsApp Number (Optional)",
            LeadField::ProjectDetails => "Project Details",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            LeadField::Name => "Your Name",
            LeadField::Email => "your.email@example.com",
            LeadField::Whatsapp => "+1 123 456 7890",
            LeadField::ProjectDetails => "Describe your website needs...",
        }
    }
}

/// Raw form values as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub project_details: String,
}

/// A validated lead, trimmed and ready to hand off
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    pub project_details: String,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `field`
    pub fn value(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Whatsapp => &self.whatsapp,
            LeadField::ProjectDetails => &self.project_details,
        }
    }

    /// Replace the value of `field`
    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Whatsapp => self.whatsapp = value,
            LeadField::ProjectDetails => self.project_details = value,
        }
    }

    /// Check a single field
    pub fn check(&self, field: LeadField) -> Result<(), LeadFieldError> {
        let value = self.value(field).trim();
        match field {
            LeadField::Name if value.chars().count() < MIN_NAME_CHARS => {
                Err(LeadFieldError::NameTooShort)
            }
            LeadField::Email if !is_valid_email(value) => Err(LeadFieldError::InvalidEmail),
            LeadField::Whatsapp if !value.is_empty() && !is_valid_phone(value) => {
                Err(LeadFieldError::InvalidWhatsapp)
            }
            LeadField::ProjectDetails if value.chars().count() < MIN_DETAILS_CHARS => {
                Err(LeadFieldError::DetailsTooShort)
            }
            _ => Ok(()),
        }
    }

    /// Validate every field
    pub fn validate(&self) -> Result<LeadSubmission, LeadErrors> {
        let mut errors = LeadErrors::default();
        for field in LeadField::ALL {
            if let Err(e) = self.check(field) {
                errors.push(field, e);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let whatsapp = self.whatsapp.trim();
        Ok(LeadSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            whatsapp: (!whatsapp.is_empty()).then(|| whatsapp.to_string()),
            project_details: self.project_details.trim().to_string(),
        })
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    let labels_ok = labels.clone().all(|label| !label.is_empty());
    labels_ok && labels.nth(1).is_some()
}

fn is_valid_phone(value: &str) -> bool {
    let rest = value.strip_prefix('+').unwrap_or(value);
    let allowed = rest
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'));
    let digits = rest.chars().filter(char::is_ascii_digit).count();
    allowed && PHONE_DIGITS.contains(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadForm {
        LeadForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            whatsapp: String::new(),
            project_details: "A landing page for our analytics product".to_string(),
        }
    }

    #[test]
    fn test_valid_form_without_whatsapp() {
        let submission = filled().validate().unwrap();
        assert_eq!(submission.name, "Ada Lovelace");
        assert!(submission.whatsapp.is_none());
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut form = filled();
        form.name = "  Ada  ".to_string();
        form.whatsapp = " +1 123 456 7890 ".to_string();

        let submission = form.validate().unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.whatsapp.as_deref(), Some("+1 123 456 7890"));
    }

    #[test]
    fn test_empty_form_reports_required_fields() {
        let errors = LeadForm::new().validate().unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(LeadField::Name), Some(&LeadFieldError::NameTooShort));
        assert_eq!(errors.get(LeadField::Email), Some(&LeadFieldError::InvalidEmail));
        assert!(errors.get(LeadField::Whatsapp).is_none());
        assert_eq!(
            errors.get(LeadField::ProjectDetails),
            Some(&LeadFieldError::DetailsTooShort)
        );
        assert_eq!(errors.to_string(), "lead form has 3 invalid field(s)");
    }

    #[test]
    fn test_email_rules() {
        for good in ["a@b.co", "first.last@sub.example.org"] {
            assert!(is_valid_email(good), "{good} should be accepted");
        }
        for bad in ["", "plain", "@example.com", "a@b", "a@b..com", "a@@b.com", "a b@c.com", "a@.com"] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_phone_rules() {
        assert!(is_valid_phone("+1 123 456 7890"));
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("+1 call me"));
        assert!(!is_valid_phone("1234567890123456"));
    }

    #[test]
    fn test_invalid_whatsapp_rejected() {
        let mut form = filled();
        form.whatsapp = "not a number".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(LeadField::Whatsapp), Some(&LeadFieldError::InvalidWhatsapp));
    }

    #[test]
    fn test_set_and_reset() {
        let mut form = LeadForm::new();
        form.set(LeadField::Email, "ada@example.com");
        assert_eq!(form.value(LeadField::Email), "ada@example.com");

        form.reset();
        assert_eq!(form, LeadForm::default());
    }

    #[test]
    fn test_submission_serializes_camel_case() {
        let submission = filled().validate().unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("projectDetails").is_some());
        assert!(json.get("whatsapp").is_none());
    }
}
