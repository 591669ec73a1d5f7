// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Length quantities normalized to millimeters

use super::{split_literal, QuantityError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Supported length units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Micrometer,
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
}

impl LengthUnit {
    /// Millimeters per one of this unit.
    pub fn millimeters(self) -> f64 {
        match self {
            LengthUnit::Micrometer => 1e-3,
            LengthUnit::Millimeter => 1.0,
            LengthUnit::Centimeter => 10.0,
            LengthUnit::Meter => 1000.0,
            LengthUnit::Kilometer => 1e6,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Micrometer => "um",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "um" => Some(LengthUnit::Micrometer),
            "mm" => Some(LengthUnit::Millimeter),
            "cm" => Some(LengthUnit::Centimeter),
            "m" => Some(LengthUnit::Meter),
            "km" => Some(LengthUnit::Kilometer),
            _ => None,
        }
    }
}

/// A length with a remembered display unit.
///
/// Comparison and arithmetic work on the normalized magnitude, so
/// `Length::centimeters(1.0) == Length::millimeters(10.0)`.
#[derive(Debug, Clone, Copy)]
pub struct Length {
    mm: f64,
    unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self {
            mm: value * unit.millimeters(),
            unit,
        }
    }

    pub fn zero() -> Self {
        Self::new(0.0, LengthUnit::Millimeter)
    }

    pub fn micrometers(value: f64) -> Self {
        Self::new(value, LengthUnit::Micrometer)
    }

    pub fn millimeters(value: f64) -> Self {
        Self::new(value, LengthUnit::Millimeter)
    }

    pub fn centimeters(value: f64) -> Self {
        Self::new(value, LengthUnit::Centimeter)
    }

    pub fn meters(value: f64) -> Self {
        Self::new(value, LengthUnit::Meter)
    }

    /// Parse a literal such as `"1m"` or `"0.5 cm"`.
    pub fn parse(literal: &str) -> Result<Self, QuantityError> {
        literal.parse()
    }

    /// Magnitude in the quantity's own unit.
    pub fn value(self) -> f64 {
        self.mm / self.unit.millimeters()
    }

    pub fn unit(self) -> LengthUnit {
        self.unit
    }

    pub fn in_millimeters(self) -> f64 {
        self.mm
    }

    pub fn in_unit(self, unit: LengthUnit) -> f64 {
        self.mm / unit.millimeters()
    }

    /// The same length displayed in a different unit.
    pub fn with_unit(self, unit: LengthUnit) -> Self {
        Self { mm: self.mm, unit }
    }

    /// The larger of the two lengths, keeping its own display unit.
    pub fn max(self, other: Length) -> Length {
        if other.mm > self.mm {
            other
        } else {
            self
        }
    }
}

impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        self.mm == other.mm
    }
}

impl PartialOrd for Length {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.mm.partial_cmp(&other.mm)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length {
            mm: self.mm + rhs.mm,
            unit: self.unit,
        }
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        self.mm += rhs.mm;
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length {
            mm: self.mm - rhs.mm,
            unit: self.unit,
        }
    }
}

impl SubAssign for Length {
    fn sub_assign(&mut self, rhs: Length) {
        self.mm -= rhs.mm;
    }
}

impl Neg for Length {
    type Output = Length;

    fn neg(self) -> Length {
        Length {
            mm: -self.mm,
            unit: self.unit,
        }
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length {
            mm: self.mm * rhs,
            unit: self.unit,
        }
    }
}

impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length {
            mm: self.mm / rhs,
            unit: self.unit,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value(), self.unit.suffix())
    }
}

impl FromStr for Length {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, suffix) = split_literal(s)?;
        let unit = LengthUnit::from_suffix(suffix).ok_or_else(|| QuantityError::UnknownUnit {
            literal: s.trim().to_string(),
            unit: suffix.to_string(),
        })?;
        Ok(Length::new(value, unit))
    }
}

impl Serialize for Length {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let literal = String::deserialize(deserializer)?;
        literal.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_and_normalize() {
        let m = Length::parse("1m").unwrap();
        assert_relative_eq!(m.in_millimeters(), 1000.0);
        assert_eq!(m.unit(), LengthUnit::Meter);

        let cm = Length::parse("0.5 cm").unwrap();
        assert_relative_eq!(cm.in_millimeters(), 5.0);
        assert_eq!(cm.to_string(), "0.5cm");
    }

    #[test]
    fn test_parse_unknown_unit() {
        assert_eq!(
            Length::parse("12 parsec"),
            Err(QuantityError::UnknownUnit {
                literal: "12 parsec".to_string(),
                unit: "parsec".to_string(),
            })
        );
    }

    #[test]
    fn test_arithmetic_crosses_units() {
        let sum = Length::meters(1.0) + Length::millimeters(1.0);
        assert_relative_eq!(sum.in_millimeters(), 1001.0);
        // Left operand picks the display unit.
        assert_eq!(sum.unit(), LengthUnit::Meter);

        let step = (Length::centimeters(0.5) + Length::millimeters(0.1)) * 2.0;
        assert_relative_eq!(step.in_millimeters(), 10.2, max_relative = 1e-12);
    }

    #[test]
    fn test_comparison_ignores_unit() {
        assert_eq!(Length::centimeters(1.0), Length::millimeters(10.0));
        assert!(Length::meters(1.0) > Length::centimeters(99.0));
        assert!(Length::millimeters(-1.0) < Length::zero());
    }

    #[test]
    fn test_max_keeps_larger_operand() {
        let larger = Length::zero().max(Length::meters(1.0));
        assert_eq!(larger, Length::meters(1.0));
        assert_eq!(larger.unit(), LengthUnit::Meter);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Length::centimeters(1.5)).unwrap();
        assert_eq!(json, "\"1.5cm\"");
        let back: Length = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Length::millimeters(15.0));
    }
}
