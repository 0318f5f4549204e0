use log::{debug, warn};

use crate::constants::{ANNUAL_INSURANCE_RATE, ANNUAL_PROPERTY_TAX_RATE, MONTHS_PER_YEAR};
use crate::formatting::finite_or_zero;
use crate::mortgage::amortization::build_amortization_schedule;
use crate::mortgage::mortgage_model::{MortgageInput, MortgageResult};

/// Computes the monthly payment breakdown and amortization schedule.
///
/// Returns `None` when the home price is not positive. A down payment
/// larger than the price produces a negative loan amount, which is passed
/// through unchanged.
pub fn estimate_mortgage(input: &MortgageInput) -> Option<MortgageResult> {
    let home_price = finite_or_zero(input.home_price);
    if home_price <= 0.0 {
        debug!("Skipping mortgage estimate: home price {} is not positive", home_price);
        return None;
    }

    let down_payment_value = finite_or_zero(input.down_payment);
    let down_payment = if input.down_payment_is_percent() {
        home_price * (down_payment_value / 100.0)
    } else {
        down_payment_value
    };

    let loan_amount = home_price - down_payment;
    if loan_amount < 0.0 {
        warn!(
            "Down payment {} exceeds home price {}; loan amount is negative",
            down_payment, home_price
        );
    }

    let monthly_rate = finite_or_zero(input.annual_rate_pct) / 100.0 / f64::from(MONTHS_PER_YEAR);
    let total_payments = input.total_payments();
    let payment_pi = monthly_principal_interest(loan_amount, monthly_rate, total_payments);

    let monthly_tax = home_price * ANNUAL_PROPERTY_TAX_RATE / f64::from(MONTHS_PER_YEAR);
    let monthly_insurance = home_price * ANNUAL_INSURANCE_RATE / f64::from(MONTHS_PER_YEAR);

    Some(MortgageResult {
        loan_amount,
        monthly_rate,
        monthly_principal_interest: payment_pi,
        monthly_tax,
        monthly_insurance,
        total_monthly: payment_pi + monthly_tax + monthly_insurance,
        amortization_schedule: build_amortization_schedule(
            loan_amount,
            monthly_rate,
            payment_pi,
            total_payments,
        ),
    })
}

/// Standard level-payment amortization formula.
///
/// `P * r * (1+r)^n / ((1+r)^n - 1)`, or `P / n` at a zero rate. A zero
/// term has no payments, so the result is 0.
pub fn monthly_principal_interest(loan_amount: f64, monthly_rate: f64, total_payments: u32) -> f64 {
    if total_payments == 0 {
        return 0.0;
    }
    let n = f64::from(total_payments);
    if monthly_rate == 0.0 {
        return loan_amount / n;
    }

    let growth = (1.0 + monthly_rate).powf(n);
    let payment = loan_amount * (monthly_rate * growth) / (growth - 1.0);
    finite_or_zero(payment)
}
