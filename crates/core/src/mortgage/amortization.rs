use crate::mortgage::mortgage_model::AmortizationRow;

/// Builds the full schedule eagerly, one row per payment.
///
/// Each period pays interest on the running balance and puts the rest of
/// `payment` toward principal. The balance is clamped at zero so float
/// drift in the last rows never shows a negative balance.
pub fn build_amortization_schedule(
    loan_amount: f64,
    monthly_rate: f64,
    payment: f64,
    total_payments: u32,
) -> Vec<AmortizationRow> {
    let mut schedule = Vec::with_capacity(total_payments as usize);
    let mut balance = loan_amount;

    for period in 1..=total_payments {
        let interest_portion = balance * monthly_rate;
        let principal_portion = payment - interest_portion;
        balance -= principal_portion;
        if balance < 0.0 {
            balance = 0.0;
        }

        schedule.push(AmortizationRow {
            period,
            payment,
            principal_portion,
            interest_portion,
            remaining_balance: balance,
        });
    }

    schedule
}
