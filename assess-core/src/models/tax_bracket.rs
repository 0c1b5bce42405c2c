use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::format_thousands;

/// One bracket of a progressive tax schedule. `max_income` is `None` for the
/// open-ended top bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    /// Human-readable income range, e.g. `"150,001 - 500,000"`. The
    /// open-ended top bracket renders as `"2,000,001 or more"`.
    pub fn label(&self) -> String {
        match self.max_income {
            Some(max) => format!(
                "{} - {}",
                format_thousands(self.min_income),
                format_thousands(max)
            ),
            None => format!("{} or more", format_thousands(self.min_income)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn label_for_bounded_bracket() {
        let bracket = TaxBracket {
            min_income: dec!(150001),
            max_income: Some(dec!(500000)),
            rate: dec!(0.10),
        };

        assert_eq!(bracket.label(), "150,001 - 500,000");
    }

    #[test]
    fn label_for_open_ended_bracket() {
        let bracket = TaxBracket {
            min_income: dec!(2000001),
            max_income: None,
            rate: dec!(0.35),
        };

        assert_eq!(bracket.label(), "2,000,001 or more");
    }

    #[test]
    fn label_for_first_bracket_starts_at_zero() {
        let bracket = TaxBracket {
            min_income: dec!(0),
            max_income: Some(dec!(150000)),
            rate: dec!(0),
        };

        assert_eq!(bracket.label(), "0 - 150,000");
    }
}
