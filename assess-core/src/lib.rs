pub mod calculations;
pub mod models;

pub use calculations::{AssessmentInput, AssessmentOutcome, BracketTax, TaxCalculator};
pub use models::*;
