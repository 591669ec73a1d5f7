// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Unit-tagged physical quantities
//!
//! Quantities are written as literals (`"1m"`, `"0.5 cm"`, `"0deg"`),
//! stored normalized to a base unit and displayed in the unit they were
//! constructed with.

mod angle;
mod length;

pub use angle::{Angle, AngleUnit};
pub use length::{Length, LengthUnit};

use thiserror::Error;

/// Failure to parse a quantity literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("empty quantity literal")]
    Empty,
    #[error("invalid number in quantity `{0}`")]
    Number(String),
    #[error("missing unit in quantity `{0}`")]
    MissingUnit(String),
    #[error("unknown unit `{unit}` in quantity `{literal}`")]
    UnknownUnit { literal: String, unit: String },
}

/// Split a literal like `"1.5 cm"` into its number and unit parts.
///
/// The unit starts at the first alphabetic character that is not part of a
/// floating-point exponent.
pub(crate) fn split_literal(literal: &str) -> Result<(f64, &str), QuantityError> {
    let trimmed = literal.trim();
    if trimmed.is_empty() {
        return Err(QuantityError::Empty);
    }

    let bytes = trimmed.as_bytes();
    let mut split = trimmed.len();
    for (i, &b) in bytes.iter().enumerate() {
        let c = b as char;
        if c.is_ascii_alphabetic() {
            let exponent = (c == 'e' || c == 'E')
                && bytes
                    .get(i + 1)
                    .map(|&n| {
                        let n = n as char;
                        n.is_ascii_digit() || n == '+' || n == '-'
                    })
                    .unwrap_or(false);
            if !exponent {
                split = i;
                break;
            }
        }
    }

    let number = trimmed[..split].trim();
    let unit = trimmed[split..].trim();
    if unit.is_empty() {
        return Err(QuantityError::MissingUnit(trimmed.to_string()));
    }
    let value: f64 = number
        .parse()
        .map_err(|_| QuantityError::Number(trimmed.to_string()))?;
    Ok((value, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_literal() {
        assert_eq!(split_literal("1m").unwrap(), (1.0, "m"));
        assert_eq!(split_literal("  0.5 cm ").unwrap(), (0.5, "cm"));
        assert_eq!(split_literal("-2.5mm").unwrap(), (-2.5, "mm"));
        assert_eq!(split_literal("1e-3m").unwrap(), (0.001, "m"));
    }

    #[test]
    fn test_split_literal_errors() {
        assert_eq!(split_literal("   "), Err(QuantityError::Empty));
        assert_eq!(
            split_literal("12"),
            Err(QuantityError::MissingUnit("12".to_string()))
        );
        assert_eq!(
            split_literal("x m"),
            Err(QuantityError::Number("x m".to_string()))
        );
    }
}
