//! Personal income tax assessment.
//!
//! Implements the assessment pipeline applied to one calculation request:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Normalize allowance claims against their per-type caps |
//! | 2    | Taxable income = total income − allowances − personal allowance |
//! | 3    | Apportion tax per bracket over the schedule |
//! | 4    | Floor the summed tax at zero |
//! | 5    | Reconcile against withholding: additional tax due, or refund |
//!
//! # Bracket apportionment
//!
//! Each bracket's contribution is evaluated independently against the same
//! taxable income: a bracket the taxable income has not reached contributes
//! nothing, a bracket it falls inside contributes
//! `(taxable − min + 1) × rate`, and a bracket it passes entirely contributes
//! `(max − min + 1) × rate`. This is the system's published behavior,
//! `+1` offset included. It is not conventional marginal accumulation over
//! the excess within each band and must not be "corrected" without a product
//! decision (see DESIGN.md).
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use assess_core::calculations::{AssessmentInput, AssessmentOutcome, TaxCalculator};
//! use assess_core::models::{AllowanceClaim, AllowanceType, TaxSchedule};
//!
//! let calculator = TaxCalculator::new(TaxSchedule::default()).unwrap();
//! let input = AssessmentInput {
//!     total_income: dec!(500000),
//!     withholding: dec!(0),
//!     allowances: vec![AllowanceClaim {
//!         allowance_type: AllowanceType::Donation,
//!         amount: dec!(200000),
//!     }],
//! };
//!
//! // Donation clamped to 100,000; taxable income 340,000.
//! match calculator.calculate(&input) {
//!     AssessmentOutcome::TaxDue { tax, breakdown } => {
//!         assert_eq!(tax, dec!(19000));
//!         assert_eq!(breakdown.len(), 5);
//!     }
//!     AssessmentOutcome::Refund { .. } => unreachable!(),
//! }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common;
use crate::models::{AllowanceClaim, ScheduleError, TaxBracket, TaxSchedule};

/// One calculation request: declared income, withholding already paid, and
/// the claimed allowances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// Total declared income for the year.
    pub total_income: Decimal,

    /// Withholding tax already paid in advance.
    pub withholding: Decimal,

    /// Itemized allowance claims, in declaration order.
    pub allowances: Vec<AllowanceClaim>,
}

/// Tax contributed by a single bracket of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTax {
    /// Income range of the bracket, e.g. `"150,001 - 500,000"`.
    pub bracket: String,

    /// Tax this bracket contributes.
    pub tax: Decimal,
}

/// Outcome of one assessment.
///
/// Tax due and refund are mutually exclusive by construction, and a refund
/// carries no bracket breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentOutcome {
    /// Additional tax owed after withholding, with the full per-bracket
    /// breakdown (zero-tax brackets included), in schedule order.
    TaxDue {
        tax: Decimal,
        breakdown: Vec<BracketTax>,
    },

    /// Withholding exceeded the computed tax; the difference is refunded.
    Refund { refund: Decimal },
}

/// Calculator for personal income tax assessments.
///
/// Owns a validated [`TaxSchedule`]. Stateless across calls: `calculate`
/// performs no I/O, holds no locks, and may run concurrently from any number
/// of threads.
#[derive(Debug, Clone)]
pub struct TaxCalculator {
    schedule: TaxSchedule,
}

impl TaxCalculator {
    /// Creates a calculator over `schedule`.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] when the schedule violates a structural
    /// invariant (gap or overlap between brackets, rate outside `[0, 1]`,
    /// missing open-ended top bracket, negative cap or personal allowance).
    pub fn new(schedule: TaxSchedule) -> Result<Self, ScheduleError> {
        schedule.validate()?;
        Ok(Self { schedule })
    }

    /// The schedule this calculator was built with.
    pub fn schedule(&self) -> &TaxSchedule {
        &self.schedule
    }

    /// Runs one assessment.
    ///
    /// Total over any finite decimal inputs: negative or implausible values
    /// flow through the arithmetic unchanged and the result is still
    /// well-formed (`tax >= 0`, `refund >= 0`).
    pub fn calculate(&self, input: &AssessmentInput) -> AssessmentOutcome {
        let allowance_total = self.allowance_total(&input.allowances);
        let taxable_income =
            input.total_income - allowance_total - self.schedule.personal_allowance;

        let mut breakdown = Vec::with_capacity(self.schedule.brackets.len());
        let mut total_tax = Decimal::ZERO;
        for bracket in &self.schedule.brackets {
            let tax = self.bracket_tax(taxable_income, bracket);
            total_tax += tax;
            breakdown.push(BracketTax {
                bracket: bracket.label(),
                tax,
            });
        }

        let total_tax = common::max(total_tax, Decimal::ZERO);

        if total_tax < input.withholding {
            AssessmentOutcome::Refund {
                refund: input.withholding - total_tax,
            }
        } else {
            AssessmentOutcome::TaxDue {
                tax: total_tax - input.withholding,
                breakdown,
            }
        }
    }

    /// Sum of all claims after per-type normalization.
    fn allowance_total(&self, claims: &[AllowanceClaim]) -> Decimal {
        claims
            .iter()
            .map(|claim| self.normalized_amount(claim))
            .sum()
    }

    /// Claimed amount after applying the type's cap.
    ///
    /// Uncapped types are zeroed rather than rejected; over-cap claims are
    /// clamped to the cap. Clamping is idempotent.
    fn normalized_amount(&self, claim: &AllowanceClaim) -> Decimal {
        match self.schedule.cap(claim.allowance_type) {
            None => {
                debug!(
                    allowance_type = claim.allowance_type.as_str(),
                    amount = %claim.amount,
                    "unrecognized allowance claim zeroed"
                );
                Decimal::ZERO
            }
            Some(cap) if claim.amount > cap => {
                debug!(
                    allowance_type = claim.allowance_type.as_str(),
                    amount = %claim.amount,
                    %cap,
                    "allowance claim clamped to cap"
                );
                cap
            }
            Some(_) => claim.amount,
        }
    }

    /// Tax contributed by one bracket for the given taxable income.
    fn bracket_tax(&self, taxable_income: Decimal, bracket: &TaxBracket) -> Decimal {
        if taxable_income < bracket.min_income {
            return Decimal::ZERO;
        }
        match bracket.max_income {
            Some(max_income) if taxable_income > max_income => {
                (max_income - bracket.min_income + Decimal::ONE) * bracket.rate
            }
            _ => (taxable_income - bracket.min_income + Decimal::ONE) * bracket.rate,
        }
    }
}
