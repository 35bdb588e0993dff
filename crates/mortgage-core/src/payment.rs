//! Fixed periodic payment for a fully amortizing loan.
//!
//! M = P·r(1+r)^n / ((1+r)^n − 1), where P is the principal, r the
//! per-period rate and n the total number of payments. Validation is the
//! caller's job; the only guard kept here is the schedule-to-period-count
//! mapping, which cannot be assumed to have been checked.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use crate::error::MortgageError;
use crate::types::{LoanTerms, Money, PaymentSchedule};
use crate::MortgageResult;

/// Number of payments per year for each schedule. Total over all inputs;
/// 0 is the "no mapping" sentinel for unrecognized schedules, turned into
/// an error by [`payment_per_schedule`].
pub fn periods_per_year(schedule: &PaymentSchedule) -> u32 {
    match schedule {
        PaymentSchedule::AcceleratedBiWeekly => 26,
        PaymentSchedule::BiWeekly => 24,
        PaymentSchedule::Monthly => 12,
        PaymentSchedule::Other(_) => 0,
    }
}

/// Compute the fixed per-period payment, rendered as a fixed-point string
/// with exactly two decimals (e.g. "1780.33"), rounded half-up.
///
/// Assumes already-validated terms; range rules are not re-checked. A zero
/// interest rate would zero the denominator, but the validator rejects it
/// before this point.
pub fn payment_per_schedule(terms: &LoanTerms) -> MortgageResult<String> {
    let principal = terms.principal();

    let periods = periods_per_year(&terms.payment_schedule);
    if periods == 0 {
        return Err(MortgageError::InvalidPaymentSchedule);
    }
    let periods = Decimal::from(periods);

    let total_payments = terms.amortization_period * periods;
    let period_rate = terms.annual_interest_rate / periods;

    let exponent = total_payments
        .to_i64()
        .ok_or_else(|| MortgageError::NumericOverflow {
            context: "total payment count".into(),
        })?;
    let growth = (Decimal::ONE + period_rate)
        .checked_powi(exponent)
        .ok_or_else(|| MortgageError::NumericOverflow {
            context: "compound growth factor".into(),
        })?;

    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: "amortized payment denominator".into(),
        });
    }

    let payment = principal * (period_rate * growth) / denominator;
    Ok(format_currency(payment))
}

/// Round half-up to cents and render with exactly two decimal places.
fn format_currency(amount: Money) -> String {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{cents:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn sample_terms(property_price: Decimal, schedule: PaymentSchedule) -> LoanTerms {
        LoanTerms {
            property_price,
            down_payment: dec!(100000),
            amortization_period: dec!(20),
            annual_interest_rate: dec!(0.1),
            payment_schedule: schedule,
        }
    }

    #[test]
    fn periods_per_year_covers_every_schedule() {
        assert_eq!(periods_per_year(&PaymentSchedule::AcceleratedBiWeekly), 26);
        assert_eq!(periods_per_year(&PaymentSchedule::BiWeekly), 24);
        assert_eq!(periods_per_year(&PaymentSchedule::Monthly), 12);
        assert_eq!(periods_per_year(&PaymentSchedule::Other("Weekly".into())), 0);
    }

    #[test]
    fn accelerated_bi_weekly_payment_on_500k() {
        let terms = sample_terms(dec!(500000), PaymentSchedule::AcceleratedBiWeekly);
        assert_eq!(payment_per_schedule(&terms).unwrap(), "1780.33");
    }

    #[test]
    fn accelerated_bi_weekly_payment_on_600k() {
        let terms = sample_terms(dec!(600000), PaymentSchedule::AcceleratedBiWeekly);
        assert_eq!(payment_per_schedule(&terms).unwrap(), "2225.41");
    }

    #[test]
    fn bi_weekly_payment_on_600k() {
        let terms = sample_terms(dec!(600000), PaymentSchedule::BiWeekly);
        assert_eq!(payment_per_schedule(&terms).unwrap(), "2410.98");
    }

    #[test]
    fn monthly_payment_on_600k() {
        let terms = sample_terms(dec!(600000), PaymentSchedule::Monthly);
        assert_eq!(payment_per_schedule(&terms).unwrap(), "4825.11");
    }

    #[test]
    fn unrecognized_schedule_is_rejected() {
        let terms = sample_terms(dec!(500000), PaymentSchedule::Other("abc".into()));
        assert_eq!(
            payment_per_schedule(&terms),
            Err(MortgageError::InvalidPaymentSchedule)
        );
    }

    #[test]
    fn payment_always_has_exactly_two_decimals() {
        for schedule in [
            PaymentSchedule::AcceleratedBiWeekly,
            PaymentSchedule::BiWeekly,
            PaymentSchedule::Monthly,
        ] {
            let payment = payment_per_schedule(&sample_terms(dec!(371111), schedule)).unwrap();
            let (whole, cents) = payment.split_once('.').unwrap();
            assert!(!whole.is_empty() && whole.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(cents.len(), 2);
            assert!(cents.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn rounding_is_half_up_to_cents() {
        assert_eq!(format_currency(dec!(1780.325)), "1780.33");
        assert_eq!(format_currency(dec!(1780.3)), "1780.30");
        assert_eq!(format_currency(dec!(1780)), "1780.00");
    }
}
