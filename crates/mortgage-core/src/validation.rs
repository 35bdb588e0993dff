//! Loan input validation.
//!
//! Each check is a pure predicate over the raw [`LoanApplication`] fields;
//! [`validate`] runs them in a fixed order and stops at the first violation,
//! yielding typed [`LoanTerms`] only when every rule holds.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::MortgageError;
use crate::types::{LoanApplication, LoanTerms, Money, PaymentSchedule, Rate, Years};
use crate::MortgageResult;

/// Minimum down payment as a share of property price.
const MIN_DOWN_PAYMENT_RATIO: Decimal = dec!(0.05);

/// Amortization period policy bounds, in years.
const MIN_AMORTIZATION_YEARS: Decimal = dec!(5);
const MAX_AMORTIZATION_YEARS: Decimal = dec!(30);
const AMORTIZATION_STEP_YEARS: Decimal = dec!(5);

/// Validate a raw application, short-circuiting on the first violated rule.
///
/// Check order is fixed: amortization period, interest rate, property price,
/// down payment, payment schedule, principal sanity. Callers relying on
/// which of several simultaneous violations is reported depend on this
/// order.
pub fn validate(application: &LoanApplication) -> MortgageResult<LoanTerms> {
    let amortization_period = check_amortization_period(application.amortization_period)?;
    let annual_interest_rate = check_annual_interest_rate(application.annual_interest_rate)?;
    let property_price = check_property_price(application.property_price)?;
    let down_payment = check_down_payment(application.down_payment, application.property_price)?;
    let payment_schedule = check_payment_schedule(application.payment_schedule.as_ref())?;
    check_principal(application.property_price, application.down_payment)?;

    Ok(LoanTerms {
        property_price,
        down_payment,
        amortization_period,
        annual_interest_rate,
        payment_schedule,
    })
}

/// Whole years, 5 through 30 inclusive, in increments of 5.
pub fn check_amortization_period(period: Option<Years>) -> MortgageResult<Years> {
    let period = period.ok_or(MortgageError::AmortizationPeriodNotNumeric)?;
    if period > MAX_AMORTIZATION_YEARS {
        Err(MortgageError::AmortizationPeriodTooLong)
    } else if period < MIN_AMORTIZATION_YEARS {
        Err(MortgageError::AmortizationPeriodTooShort)
    } else if period % AMORTIZATION_STEP_YEARS != Decimal::ZERO {
        Err(MortgageError::AmortizationPeriodNotFiveYearStep)
    } else {
        Ok(period)
    }
}

/// Nominal annual rate as a fraction, strictly between 0 and 1.
pub fn check_annual_interest_rate(rate: Option<Rate>) -> MortgageResult<Rate> {
    let rate = rate.ok_or(MortgageError::InterestRateNotNumeric)?;
    if rate > Decimal::ZERO && rate < Decimal::ONE {
        Ok(rate)
    } else {
        Err(MortgageError::InterestRateOutOfRange)
    }
}

pub fn check_property_price(price: Option<Money>) -> MortgageResult<Money> {
    let price = price.ok_or(MortgageError::PropertyPriceNotNumeric)?;
    if price > Decimal::ZERO {
        Ok(price)
    } else {
        Err(MortgageError::PropertyPriceNotPositive)
    }
}

/// Non-negative and at least 5% of the property price. The down payment's
/// numeric-ness is reported before the property price's.
pub fn check_down_payment(
    down_payment: Option<Money>,
    property_price: Option<Money>,
) -> MortgageResult<Money> {
    let down_payment = down_payment.ok_or(MortgageError::DownPaymentNotNumeric)?;
    let property_price = property_price.ok_or(MortgageError::PropertyPriceNotNumeric)?;
    if down_payment < Decimal::ZERO {
        return Err(MortgageError::DownPaymentNegative);
    }
    if down_payment < MIN_DOWN_PAYMENT_RATIO * property_price {
        return Err(MortgageError::DownPaymentBelowMinimum);
    }
    Ok(down_payment)
}

pub fn check_payment_schedule(
    schedule: Option<&PaymentSchedule>,
) -> MortgageResult<PaymentSchedule> {
    match schedule {
        Some(
            schedule @ (PaymentSchedule::AcceleratedBiWeekly
            | PaymentSchedule::BiWeekly
            | PaymentSchedule::Monthly),
        ) => Ok(schedule.clone()),
        _ => Err(MortgageError::InvalidPaymentSchedule),
    }
}

/// The amount financed must be positive. Overlaps with the 5%-minimum rule
/// on purpose; the two rules carry distinct messages. Here the property
/// price's numeric-ness is reported before the down payment's.
pub fn check_principal(
    property_price: Option<Money>,
    down_payment: Option<Money>,
) -> MortgageResult<Money> {
    let property_price = property_price.ok_or(MortgageError::PropertyPriceNotNumeric)?;
    let down_payment = down_payment.ok_or(MortgageError::DownPaymentNotNumeric)?;
    if property_price > down_payment {
        Ok(property_price - down_payment)
    } else {
        Err(MortgageError::NonPositivePrincipal)
    }
}
