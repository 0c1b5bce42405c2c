//! Assessment calculation modules.

pub mod assessment;
pub mod common;

pub use assessment::{AssessmentInput, AssessmentOutcome, BracketTax, TaxCalculator};
