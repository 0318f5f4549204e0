//! Valuation module - home value range heuristic and its lead-capture gate.

mod lead_gate;
mod valuation_calculator;
mod valuation_model;

pub use lead_gate::{is_valid_email, validate_lead, LeadSubmission};
pub use valuation_calculator::{age_adjustment, estimate_value, estimate_value_as_of};
pub use valuation_model::{PropertyCondition, ValuationInput, ValuationResult};
