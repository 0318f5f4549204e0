//! Tests for the mortgage estimator.

#[cfg(test)]
mod tests {
    use crate::mortgage::{
        estimate_mortgage, monthly_principal_interest, DownPaymentKind, MortgageInput,
    };

    fn percent_down(price: f64, down_pct: f64, term_years: u32, rate_pct: f64) -> MortgageInput {
        MortgageInput {
            home_price: price,
            down_payment: down_pct,
            down_payment_kind: DownPaymentKind::Percent,
            term_years,
            annual_rate_pct: rate_pct,
        }
    }

    // ==================== Payment breakdown ====================

    #[test]
    fn test_thirty_year_at_seven_percent() {
        let result = estimate_mortgage(&percent_down(400_000.0, 20.0, 30, 7.0)).unwrap();

        assert!((result.loan_amount - 320_000.0).abs() < 1e-9);
        assert!((result.monthly_rate - 0.07 / 12.0).abs() < 1e-15);
        assert!((result.monthly_principal_interest - 2128.97).abs() < 0.01);
        assert!((result.monthly_tax - 416.67).abs() < 0.01);
        assert!((result.monthly_insurance - 133.33).abs() < 0.01);
        assert!((result.total_monthly - 2678.97).abs() < 0.01);
    }

    #[test]
    fn test_fixed_amount_down_payment() {
        let input = MortgageInput {
            home_price: 300_000.0,
            down_payment: 50_000.0,
            down_payment_kind: DownPaymentKind::Amount,
            term_years: 15,
            annual_rate_pct: 6.5,
        };
        let result = estimate_mortgage(&input).unwrap();
        assert_eq!(result.loan_amount, 250_000.0);
        assert!((result.monthly_principal_interest - 2177.77).abs() < 0.01);
        assert_eq!(result.amortization_schedule.len(), 180);
    }

    #[test]
    fn test_term_beyond_cap_uses_capped_schedule() {
        let capped = estimate_mortgage(&percent_down(400_000.0, 20.0, 50, 7.0)).unwrap();
        let huge = estimate_mortgage(&percent_down(400_000.0, 20.0, 400_000_000, 7.0)).unwrap();
        assert_eq!(huge.amortization_schedule.len(), 600);
        assert_eq!(huge.monthly_principal_interest, capped.monthly_principal_interest);
    }

    #[test]
    fn test_zero_rate_divides_evenly() {
        let result = estimate_mortgage(&percent_down(360_000.0, 0.0, 30, 0.0)).unwrap();
        assert_eq!(result.monthly_principal_interest, 360_000.0 / 360.0);
        assert_eq!(result.monthly_principal_interest, 1_000.0);
        assert!(result.amortization_schedule.last().unwrap().remaining_balance.abs() < 1e-6);
    }

    #[test]
    fn test_tax_and_insurance_use_full_price() {
        let result = estimate_mortgage(&percent_down(240_000.0, 100.0, 30, 5.0)).unwrap();
        assert_eq!(result.loan_amount, 0.0);
        assert_eq!(result.monthly_principal_interest, 0.0);
        assert!((result.monthly_tax - 250.0).abs() < 1e-9);
        assert!((result.monthly_insurance - 80.0).abs() < 1e-9);
    }

    // ==================== Guard conditions ====================

    #[test]
    fn test_non_positive_price_is_not_computed() {
        assert!(estimate_mortgage(&percent_down(0.0, 20.0, 30, 7.0)).is_none());
        assert!(estimate_mortgage(&percent_down(-1.0, 20.0, 30, 7.0)).is_none());
        assert!(estimate_mortgage(&percent_down(f64::INFINITY, 20.0, 30, 7.0)).is_none());
    }

    #[test]
    fn test_zero_term_has_no_payments() {
        let result = estimate_mortgage(&percent_down(200_000.0, 20.0, 0, 7.0)).unwrap();
        assert_eq!(result.monthly_principal_interest, 0.0);
        assert!(result.amortization_schedule.is_empty());
        assert!(result.total_monthly.is_finite());
    }

    #[test]
    fn test_non_finite_rate_treated_as_zero() {
        let result = estimate_mortgage(&percent_down(120_000.0, 0.0, 10, f64::NAN)).unwrap();
        assert_eq!(result.monthly_rate, 0.0);
        assert_eq!(result.monthly_principal_interest, 1_000.0);
    }

    // ==================== Negative loan amount ====================

    #[test]
    fn test_down_payment_above_price_yields_negative_loan() {
        let input = MortgageInput {
            home_price: 100_000.0,
            down_payment: 150_000.0,
            down_payment_kind: DownPaymentKind::Amount,
            term_years: 30,
            annual_rate_pct: 6.0,
        };
        let result = estimate_mortgage(&input).unwrap();

        assert_eq!(result.loan_amount, -50_000.0);
        assert!(result.monthly_principal_interest < 0.0);
        assert_eq!(result.amortization_schedule.len(), 360);
        assert!(result
            .amortization_schedule
            .iter()
            .all(|row| row.remaining_balance >= 0.0));
    }

    // ==================== Schedule ====================

    #[test]
    fn test_schedule_pays_off_loan() {
        let result = estimate_mortgage(&percent_down(400_000.0, 20.0, 30, 7.0)).unwrap();
        let schedule = &result.amortization_schedule;

        assert_eq!(schedule.len(), 360);
        assert_eq!(schedule.first().unwrap().period, 1);
        assert_eq!(schedule.last().unwrap().period, 360);
        assert!(schedule.last().unwrap().remaining_balance.abs() < 1e-6);

        let first = schedule[0];
        assert!((first.interest_portion - 320_000.0 * 0.07 / 12.0).abs() < 1e-9);
        assert!((first.principal_portion + first.interest_portion - first.payment).abs() < 1e-9);

        // interest share shrinks as the balance is paid down
        assert!(schedule[359].interest_portion < schedule[0].interest_portion);
        let principal_paid: f64 = schedule.iter().map(|row| row.principal_portion).sum();
        assert!((principal_paid - 320_000.0).abs() < 1e-4);
    }

    #[test]
    fn test_total_interest_matches_payments_minus_principal() {
        let result = estimate_mortgage(&percent_down(400_000.0, 20.0, 30, 7.0)).unwrap();
        let paid = result.monthly_principal_interest * 360.0;
        assert!((result.total_interest() - (paid - 320_000.0)).abs() < 1e-4);
    }

    #[test]
    fn test_payment_segments_order() {
        let result = estimate_mortgage(&percent_down(400_000.0, 20.0, 30, 7.0)).unwrap();
        let labels: Vec<String> = result
            .payment_segments()
            .into_iter()
            .map(|segment| segment.label)
            .collect();
        assert_eq!(labels, vec!["Principal & Interest", "Taxes", "Insurance"]);
    }

    #[test]
    fn test_monthly_principal_interest_direct() {
        assert_eq!(monthly_principal_interest(1_200.0, 0.0, 12), 100.0);
        assert_eq!(monthly_principal_interest(1_200.0, 0.01, 0), 0.0);
        assert!((monthly_principal_interest(10_000.0, 0.01, 12) - 888.49).abs() < 0.01);
    }

    #[test]
    fn test_input_serializes_camel_case() {
        let json = serde_json::to_value(percent_down(1.0, 2.0, 3, 4.0)).unwrap();
        assert_eq!(json["homePrice"], 1.0);
        assert_eq!(json["downPaymentKind"], "percent");
        assert_eq!(json["termYears"], 3);
        assert_eq!(json["annualRatePct"], 4.0);
    }
}
