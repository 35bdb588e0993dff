use rust_decimal::Decimal;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Year counts
pub type Years = Decimal;

/// Payment frequency for the loan. `Other` is the deliberate catch-all for
/// unrecognized wire values so "invalid payment schedule" stays a domain
/// error rather than a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaymentSchedule {
    AcceleratedBiWeekly,
    BiWeekly,
    Monthly,
    Other(String),
}

impl PaymentSchedule {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentSchedule::AcceleratedBiWeekly => "AcceleratedBiWeekly",
            PaymentSchedule::BiWeekly => "BiWeekly",
            PaymentSchedule::Monthly => "Monthly",
            PaymentSchedule::Other(value) => value,
        }
    }
}

impl Serialize for PaymentSchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PaymentSchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some("AcceleratedBiWeekly") => PaymentSchedule::AcceleratedBiWeekly,
            Some("BiWeekly") => PaymentSchedule::BiWeekly,
            Some("Monthly") => PaymentSchedule::Monthly,
            Some(other) => PaymentSchedule::Other(other.to_string()),
            None => PaymentSchedule::Other(value.to_string()),
        })
    }
}

/// Raw loan inputs as received from the caller, before validation.
///
/// Numeric fields deserialize leniently: a JSON number becomes `Some`,
/// anything else (absent, null, string, bool) becomes `None`, which the
/// validator reports as "must be a number" for that field. This keeps the
/// per-field error ordering intact instead of failing wholesale at the
/// serde layer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoanApplication {
    #[serde(deserialize_with = "lenient_decimal")]
    pub property_price: Option<Money>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub down_payment: Option<Money>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub amortization_period: Option<Years>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub annual_interest_rate: Option<Rate>,
    pub payment_schedule: Option<PaymentSchedule>,
}

/// A fully validated loan. Produced only by [`crate::validation::validate`];
/// the schedule keeps its enum form so the calculator's own unmapped-schedule
/// guard still applies to hand-built terms.
#[derive(Debug, Clone, Serialize)]
pub struct LoanTerms {
    pub property_price: Money,
    pub down_payment: Money,
    pub amortization_period: Years,
    pub annual_interest_rate: Rate,
    pub payment_schedule: PaymentSchedule,
}

impl LoanTerms {
    /// Amount financed: property price minus down payment.
    pub fn principal(&self) -> Money {
        self.property_price - self.down_payment
    }
}

fn lenient_decimal<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Decimal>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(number) => {
            let repr = number.to_string();
            repr.parse::<Decimal>()
                .ok()
                .or_else(|| Decimal::from_scientific(&repr).ok())
        }
        _ => None,
    };
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn application_deserializes_camel_case_numbers() {
        let app: LoanApplication = serde_json::from_value(serde_json::json!({
            "propertyPrice": 500000,
            "downPayment": 100000,
            "amortizationPeriod": 20,
            "annualInterestRate": 0.1,
            "paymentSchedule": "Monthly",
        }))
        .unwrap();

        assert_eq!(app.property_price, Some(dec!(500000)));
        assert_eq!(app.down_payment, Some(dec!(100000)));
        assert_eq!(app.amortization_period, Some(dec!(20)));
        assert_eq!(app.annual_interest_rate, Some(dec!(0.1)));
        assert_eq!(app.payment_schedule, Some(PaymentSchedule::Monthly));
    }

    #[test]
    fn mistyped_or_missing_numbers_become_none() {
        let app: LoanApplication = serde_json::from_value(serde_json::json!({
            "propertyPrice": "500000",
            "downPayment": null,
            "annualInterestRate": true,
            "paymentSchedule": "BiWeekly",
        }))
        .unwrap();

        assert_eq!(app.property_price, None);
        assert_eq!(app.down_payment, None);
        assert_eq!(app.amortization_period, None);
        assert_eq!(app.annual_interest_rate, None);
    }

    #[test]
    fn unknown_schedule_string_lands_in_other() {
        let schedule: PaymentSchedule = serde_json::from_value(serde_json::json!("Weekly")).unwrap();
        assert_eq!(schedule, PaymentSchedule::Other("Weekly".into()));

        let schedule: PaymentSchedule = serde_json::from_value(serde_json::json!(12)).unwrap();
        assert_eq!(schedule, PaymentSchedule::Other("12".into()));
    }

    #[test]
    fn schedule_serializes_as_plain_string() {
        let json = serde_json::to_value(PaymentSchedule::AcceleratedBiWeekly).unwrap();
        assert_eq!(json, serde_json::json!("AcceleratedBiWeekly"));
    }
}
