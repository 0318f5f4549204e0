use crate::contact::contact_model::{ContactField, FieldKind};
use crate::errors::ValidationError;
use crate::valuation::is_valid_email;

/// A phone number needs at least this many digits, whatever the punctuation.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Checks every required field and reports all failures in field order.
///
/// Optional fields are not checked, even when they hold a malformed value.
pub fn validate_contact_form(fields: &[ContactField]) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = fields
        .iter()
        .filter(|field| field.required)
        .filter_map(validate_field)
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_field(field: &ContactField) -> Option<ValidationError> {
    let value = field.value.trim();
    if value.is_empty() {
        return Some(ValidationError::MissingField(field.name.clone()));
    }

    match field.kind {
        FieldKind::Email if !is_valid_email(value) => {
            Some(ValidationError::InvalidEmail(field.name.clone()))
        }
        FieldKind::Tel if count_digits(value) < MIN_PHONE_DIGITS => {
            Some(ValidationError::InvalidPhone(field.name.clone()))
        }
        _ => None,
    }
}

fn count_digits(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}
