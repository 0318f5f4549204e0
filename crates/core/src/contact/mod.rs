//! Contact module - generic form validation for lead forms.

mod contact_model;
mod contact_validation;

pub use contact_model::{ContactField, FieldKind};
pub use contact_validation::{validate_contact_form, MIN_PHONE_DIGITS};
