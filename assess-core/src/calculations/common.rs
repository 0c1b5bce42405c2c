//! Common utility functions for assessment calculations.

use rust_decimal::Decimal;

/// Formats a decimal with commas as thousands separators.
///
/// Any fractional part is carried through unchanged; only the integer digits
/// are grouped.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use assess_core::calculations::common::format_thousands;
///
/// assert_eq!(format_thousands(dec!(150000)), "150,000");
/// assert_eq!(format_thousands(dec!(2000001)), "2,000,001");
/// assert_eq!(format_thousands(dec!(1234.56)), "1,234.56");
/// ```
pub fn format_thousands(value: Decimal) -> String {
    let text = value.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use assess_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(0)), dec!(0));
/// ```
pub fn max(a: Decimal, b: Decimal) -> Decimal {
    if a > b { a } else { b }
}
