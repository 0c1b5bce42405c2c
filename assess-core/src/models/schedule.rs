use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{AllowanceType, TaxBracket};

/// Errors raised when a [`TaxSchedule`] violates a structural invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The schedule contains no brackets at all.
    #[error("schedule has no brackets")]
    NoBrackets,

    /// The first bracket must start at income 0.
    #[error("first bracket must start at 0, got {0}")]
    FirstBracketNotZero(Decimal),

    /// A bracket does not start right after the previous one ends.
    #[error("bracket starting at {got} does not follow previous bracket ending at {prev_max}")]
    NonContiguousBrackets { prev_max: Decimal, got: Decimal },

    /// Only the last bracket may be open-ended.
    #[error("only the last bracket may be open-ended")]
    OpenBracketNotLast,

    /// The last bracket must be open-ended so the schedule covers all income.
    #[error("last bracket must be open-ended")]
    MissingOpenBracket,

    /// A tax rate must be between 0 and 1.
    #[error("tax rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    /// An allowance cap must be non-negative.
    #[error("allowance cap must be non-negative, got {0}")]
    NegativeCap(Decimal),

    /// The personal allowance must be non-negative.
    #[error("personal allowance must be non-negative, got {0}")]
    NegativePersonalAllowance(Decimal),
}

/// The immutable configuration a [`TaxCalculator`] is built with: the fixed
/// personal allowance, the per-type allowance caps, and the bracket table.
///
/// [`TaxSchedule::default`] yields the current statutory schedule. The type
/// is a plain value so a future per-year schedule only needs another
/// constructor, not a change to the calculation.
///
/// [`TaxCalculator`]: crate::calculations::TaxCalculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSchedule {
    /// Fixed deduction applied to every assessment.
    pub personal_allowance: Decimal,

    /// Maximum claimable donation allowance.
    pub donation_cap: Decimal,

    /// Maximum claimable k-receipt allowance.
    pub k_receipt_cap: Decimal,

    /// Brackets ordered by `min_income`, contiguous, covering `[0, +inf)`.
    pub brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// Maximum claimable amount for an allowance type.
    ///
    /// `None` means claims of this type carry no cap of their own and are
    /// zeroed during normalization rather than capped.
    pub fn cap(&self, allowance_type: AllowanceType) -> Option<Decimal> {
        match allowance_type {
            AllowanceType::Donation => Some(self.donation_cap),
            AllowanceType::KReceipt => Some(self.k_receipt_cap),
            AllowanceType::Other => None,
        }
    }

    /// Checks the structural invariants listed on the type.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`ScheduleError`].
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.personal_allowance < Decimal::ZERO {
            return Err(ScheduleError::NegativePersonalAllowance(
                self.personal_allowance,
            ));
        }
        for cap in [self.donation_cap, self.k_receipt_cap] {
            if cap < Decimal::ZERO {
                return Err(ScheduleError::NegativeCap(cap));
            }
        }

        let Some(first) = self.brackets.first() else {
            return Err(ScheduleError::NoBrackets);
        };
        if first.min_income != Decimal::ZERO {
            return Err(ScheduleError::FirstBracketNotZero(first.min_income));
        }

        let last = self.brackets.len() - 1;
        let mut prev_max: Option<Decimal> = None;
        for (i, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(ScheduleError::InvalidRate(bracket.rate));
            }
            if let Some(prev_max) = prev_max {
                if bracket.min_income != prev_max + Decimal::ONE {
                    return Err(ScheduleError::NonContiguousBrackets {
                        prev_max,
                        got: bracket.min_income,
                    });
                }
            }
            match bracket.max_income {
                Some(max) => prev_max = Some(max),
                None if i != last => return Err(ScheduleError::OpenBracketNotLast),
                None => {}
            }
        }
        if self.brackets[last].max_income.is_some() {
            return Err(ScheduleError::MissingOpenBracket);
        }

        Ok(())
    }
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self {
            personal_allowance: Decimal::from(60_000),
            donation_cap: Decimal::from(100_000),
            k_receipt_cap: Decimal::from(50_000),
            brackets: vec![
                TaxBracket {
                    min_income: Decimal::ZERO,
                    max_income: Some(Decimal::from(150_000)),
                    rate: Decimal::ZERO,
                },
                TaxBracket {
                    min_income: Decimal::from(150_001),
                    max_income: Some(Decimal::from(500_000)),
                    rate: Decimal::new(10, 2),
                },
                TaxBracket {
                    min_income: Decimal::from(500_001),
                    max_income: Some(Decimal::from(1_000_000)),
                    rate: Decimal::new(15, 2),
                },
                TaxBracket {
                    min_income: Decimal::from(1_000_001),
                    max_income: Some(Decimal::from(2_000_000)),
                    rate: Decimal::new(20, 2),
                },
                TaxBracket {
                    min_income: Decimal::from(2_000_001),
                    max_income: None,
                    rate: Decimal::new(35, 2),
                },
            ],
        }
    }
}
