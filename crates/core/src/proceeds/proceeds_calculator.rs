use log::debug;

use crate::formatting::{finite_or_zero, round_half_up};
use crate::proceeds::proceeds_model::{ProceedsInput, ProceedsResult};

/// Deducts seller costs from the sale price.
///
/// Returns `None` when the sale price is not positive; nothing is computed
/// and whatever was shown before stays on screen.
pub fn estimate_proceeds(input: &ProceedsInput) -> Option<ProceedsResult> {
    let sale_price = finite_or_zero(input.sale_price);
    if sale_price <= 0.0 {
        debug!("Skipping proceeds estimate: sale price {} is not positive", sale_price);
        return None;
    }

    let commission_amount = sale_price * finite_or_zero(input.commission_pct);
    let closing_amount = sale_price * finite_or_zero(input.closing_pct);
    let total_deductions = finite_or_zero(input.mortgage_balance)
        + commission_amount
        + closing_amount
        + finite_or_zero(input.hoa_payoff)
        + finite_or_zero(input.repairs);
    let net_proceeds = sale_price - total_deductions;

    let keep_pct = keep_percentage(net_proceeds, sale_price);

    Some(ProceedsResult {
        commission_amount,
        closing_amount,
        total_deductions,
        net_proceeds,
        keep_pct,
        cost_pct: 100 - keep_pct,
    })
}

/// Rounded share kept, floored at 0. Deductions are never negative in
/// practice, but negative inputs could push the share past 100, so it is
/// capped there to keep the complement valid.
fn keep_percentage(net_proceeds: f64, sale_price: f64) -> u8 {
    let pct = round_half_up(net_proceeds / sale_price * 100.0);
    if pct.is_nan() {
        return 0;
    }
    pct.clamp(0.0, 100.0) as u8
}
