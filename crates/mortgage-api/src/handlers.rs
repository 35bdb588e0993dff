use axum::Json;
use serde::Serialize;

use mortgage_core::{payment, validation, LoanApplication};

use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    /// Fixed per-period payment as a two-decimal string.
    pub payment_per_monthly_schedule: String,
}

/// GET /
pub async fn banner() -> &'static str {
    "Mortgage payment calculator. POST loan inputs to /mortgage-calculator."
}

/// POST /mortgage-calculator
///
/// Validates the loan inputs, then computes the fixed per-period payment.
pub async fn calculate_payment(
    Json(application): Json<LoanApplication>,
) -> Result<Json<PaymentResponse>, AppError> {
    let terms = validation::validate(&application)?;
    let payment = payment::payment_per_schedule(&terms)?;
    Ok(Json(PaymentResponse {
        payment_per_monthly_schedule: payment,
    }))
}
