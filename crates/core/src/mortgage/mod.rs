//! Mortgage module - monthly payment breakdown and amortization schedule.

mod amortization;
mod mortgage_calculator;
mod mortgage_model;

#[cfg(test)]
mod mortgage_calculator_tests;

pub use amortization::build_amortization_schedule;
pub use mortgage_calculator::{estimate_mortgage, monthly_principal_interest};
pub use mortgage_model::{
    AmortizationRow, DownPaymentKind, MortgageInput, MortgageResult, PaymentSegment,
};
