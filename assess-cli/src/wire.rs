//! Wire types for the calculation request/response JSON contract.
//!
//! Field names follow the published API contract (`totalIncome`, `wht`,
//! `allowanceType`, `taxLevel`, `taxRefund`). Conversion into and out of the
//! core types happens here, so the core never sees a JSON field name.
//! Amounts travel as JSON numbers.

use assess_core::{AllowanceClaim, AllowanceType, AssessmentInput, AssessmentOutcome};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One calculation request as received on the wire.
///
/// Absent fields default to zero/empty, matching the source request binder.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationRequest {
    #[serde(rename = "totalIncome", default, with = "rust_decimal::serde::float")]
    pub total_income: Decimal,

    #[serde(default, with = "rust_decimal::serde::float")]
    pub wht: Decimal,

    #[serde(default)]
    pub allowances: Vec<AllowanceEntry>,
}

/// A single allowance claim as received on the wire.
///
/// The type is a free-form string here; unrecognized values map to
/// [`AllowanceType::Other`] and are zeroed by the core rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct AllowanceEntry {
    #[serde(rename = "allowanceType")]
    pub allowance_type: String,

    #[serde(default, with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl From<CalculationRequest> for AssessmentInput {
    fn from(request: CalculationRequest) -> Self {
        Self {
            total_income: request.total_income,
            withholding: request.wht,
            allowances: request
                .allowances
                .into_iter()
                .map(|entry| AllowanceClaim {
                    allowance_type: AllowanceType::parse(&entry.allowance_type)
                        .unwrap_or(AllowanceType::Other),
                    amount: entry.amount,
                })
                .collect(),
        }
    }
}

/// One calculation response as sent on the wire: tax due with the bracket
/// breakdown, or a bare refund.
///
/// Untagged, so exactly one of the two shapes ever serializes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalculationResponse {
    TaxDue {
        #[serde(with = "rust_decimal::serde::float")]
        tax: Decimal,
        #[serde(rename = "taxLevel")]
        tax_level: Vec<TaxLevelEntry>,
    },
    Refund {
        #[serde(rename = "taxRefund", with = "rust_decimal::serde::float")]
        tax_refund: Decimal,
    },
}

/// One line of the per-bracket breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxLevelEntry {
    pub level: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
}

impl From<AssessmentOutcome> for CalculationResponse {
    fn from(outcome: AssessmentOutcome) -> Self {
        match outcome {
            AssessmentOutcome::TaxDue { tax, breakdown } => Self::TaxDue {
                tax,
                tax_level: breakdown
                    .into_iter()
                    .map(|line| TaxLevelEntry {
                        level: line.bracket,
                        tax: line.tax,
                    })
                    .collect(),
            },
            AssessmentOutcome::Refund { refund } => Self::Refund { tax_refund: refund },
        }
    }
}
