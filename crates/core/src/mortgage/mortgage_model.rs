//! Mortgage domain models.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_TERM_YEARS, MONTHS_PER_YEAR};

/// How the down payment field is interpreted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DownPaymentKind {
    /// Whole-number percent of the home price (`20` for 20%)
    #[default]
    Percent,
    /// Dollar amount
    Amount,
}

impl DownPaymentKind {
    /// Parses the down-payment type select. Anything other than `percent`
    /// is read as a dollar amount.
    pub fn from_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("percent") {
            DownPaymentKind::Percent
        } else {
            DownPaymentKind::Amount
        }
    }
}

/// Loan inputs. `annual_rate_pct` is a whole-number percent (`7` for 7%).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MortgageInput {
    pub home_price: f64,
    pub down_payment: f64,
    pub down_payment_kind: DownPaymentKind,
    pub term_years: u32,
    pub annual_rate_pct: f64,
}

impl MortgageInput {
    pub fn down_payment_is_percent(&self) -> bool {
        self.down_payment_kind == DownPaymentKind::Percent
    }

    /// Number of monthly payments over the loan term, capped at
    /// [`MAX_TERM_YEARS`].
    pub fn total_payments(&self) -> u32 {
        self.term_years.min(MAX_TERM_YEARS) * MONTHS_PER_YEAR
    }
}

impl Default for MortgageInput {
    fn default() -> Self {
        Self {
            home_price: 0.0,
            down_payment: 20.0,
            down_payment_kind: DownPaymentKind::Percent,
            term_years: 30,
            annual_rate_pct: 7.0,
        }
    }
}

/// One month of the amortization schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    /// 1-based payment number
    pub period: u32,
    pub payment: f64,
    pub principal_portion: f64,
    pub interest_portion: f64,
    /// Never negative
    pub remaining_balance: f64,
}

/// Monthly payment breakdown plus the full schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MortgageResult {
    pub loan_amount: f64,
    pub monthly_rate: f64,
    pub monthly_principal_interest: f64,
    pub monthly_tax: f64,
    pub monthly_insurance: f64,
    pub total_monthly: f64,
    pub amortization_schedule: Vec<AmortizationRow>,
}

/// A labelled slice of the monthly payment donut.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSegment {
    pub label: String,
    pub amount: f64,
}

impl MortgageResult {
    /// Principal & interest, taxes and insurance, in display order.
    pub fn payment_segments(&self) -> Vec<PaymentSegment> {
        [
            ("Principal & Interest", self.monthly_principal_interest),
            ("Taxes", self.monthly_tax),
            ("Insurance", self.monthly_insurance),
        ]
        .into_iter()
        .map(|(label, amount)| PaymentSegment {
            label: label.to_string(),
            amount,
        })
        .collect()
    }

    pub fn total_interest(&self) -> f64 {
        self.amortization_schedule
            .iter()
            .map(|row| row.interest_portion)
            .sum()
    }
}
