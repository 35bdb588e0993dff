use thiserror::Error;

/// Which side of the HTTP boundary caused the failure. Client faults map to
/// 400, server faults to 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Client,
    Server,
}

/// One variant per distinct user-facing rejection, so callers can match on
/// the rule that fired rather than on message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MortgageError {
    #[error("Invalid amortization period, must be a number")]
    AmortizationPeriodNotNumeric,

    #[error("Invalid amortization period, amortization period cannot exceed 30 years")]
    AmortizationPeriodTooLong,

    #[error("Invalid amortization period, amortization period must be at least 5 years")]
    AmortizationPeriodTooShort,

    #[error("Invalid amortization period, amortization period must be in increments of 5 years")]
    AmortizationPeriodNotFiveYearStep,

    #[error("Invalid interest rate, must be a number")]
    InterestRateNotNumeric,

    #[error("Invalid interest rate")]
    InterestRateOutOfRange,

    #[error("Invalid property price, must be a number")]
    PropertyPriceNotNumeric,

    #[error("Invalid property price")]
    PropertyPriceNotPositive,

    #[error("Invalid down payment, must be a number")]
    DownPaymentNotNumeric,

    #[error("Invalid down payment")]
    DownPaymentNegative,

    #[error("Invalid down payment, must be at least 5% of property value")]
    DownPaymentBelowMinimum,

    #[error("Invalid payment schedule")]
    InvalidPaymentSchedule,

    #[error("Invalid principal, down payment is greater than property price")]
    NonPositivePrincipal,

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Numeric overflow in {context}")]
    NumericOverflow { context: String },
}

impl MortgageError {
    /// Classify the error for HTTP status mapping. Everything a caller can
    /// fix by changing their inputs is a client fault; the arithmetic guards
    /// are server faults (unreachable for validated inputs).
    pub fn fault(&self) -> Fault {
        match self {
            MortgageError::DivisionByZero { .. } | MortgageError::NumericOverflow { .. } => {
                Fault::Server
            }
            _ => Fault::Client,
        }
    }
}
