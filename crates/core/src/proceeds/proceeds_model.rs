//! Net proceeds domain models.

use serde::{Deserialize, Serialize};

/// Seller-side inputs. Percentages are fractions (`0.06` for 6%).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProceedsInput {
    pub sale_price: f64,
    pub mortgage_balance: f64,
    pub commission_pct: f64,
    pub closing_pct: f64,
    pub hoa_payoff: f64,
    pub repairs: f64,
}

impl Default for ProceedsInput {
    fn default() -> Self {
        Self {
            sale_price: 0.0,
            mortgage_balance: 0.0,
            commission_pct: 0.06,
            closing_pct: 0.02,
            hoa_payoff: 0.0,
            repairs: 0.0,
        }
    }
}

/// Deductions, the net figure and the keep/cost split for the bar chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProceedsResult {
    pub commission_amount: f64,
    pub closing_amount: f64,
    pub total_deductions: f64,
    /// May be negative when the seller owes more than the sale brings in
    pub net_proceeds: f64,
    /// Share of the sale price kept, `0..=100`
    pub keep_pct: u8,
    /// Always `100 - keep_pct`
    pub cost_pct: u8,
}

impl ProceedsResult {
    pub fn is_negative(&self) -> bool {
        self.net_proceeds < 0.0
    }
}
