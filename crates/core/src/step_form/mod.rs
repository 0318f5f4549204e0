//! Multi-step form controller shared by the valuation flow.

mod step_form_model;

pub use step_form_model::{StepForm, StepState};
