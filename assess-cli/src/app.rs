//! Glue between the wire types and the core calculator.

use anyhow::Result;
use assess_core::{TaxCalculator, TaxSchedule};
use tracing::debug;

use crate::wire::{CalculationRequest, CalculationResponse};

/// Runs one calculation request against the built-in tax schedule.
pub fn run_calculation(request: CalculationRequest) -> Result<CalculationResponse> {
    let calculator = TaxCalculator::new(TaxSchedule::default())?;

    debug!(
        total_income = %request.total_income,
        wht = %request.wht,
        claims = request.allowances.len(),
        "running assessment"
    );

    let outcome = calculator.calculate(&request.into());
    Ok(outcome.into())
}
