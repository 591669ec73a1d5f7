// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Angle quantities normalized to degrees

use super::{split_literal, QuantityError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Supported angle units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleUnit {
    Degree,
    Radian,
}

impl AngleUnit {
    /// Degrees per one of this unit.
    pub fn degrees(self) -> f64 {
        match self {
            AngleUnit::Degree => 1.0,
            AngleUnit::Radian => 180.0 / std::f64::consts::PI,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            AngleUnit::Degree => "deg",
            AngleUnit::Radian => "rad",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "deg" => Some(AngleUnit::Degree),
            "rad" => Some(AngleUnit::Radian),
            _ => None,
        }
    }
}

/// An angle with a remembered display unit.
#[derive(Debug, Clone, Copy)]
pub struct Angle {
    deg: f64,
    unit: AngleUnit,
}

impl Angle {
    pub fn new(value: f64, unit: AngleUnit) -> Self {
        Self {
            deg: value * unit.degrees(),
            unit,
        }
    }

    pub fn zero() -> Self {
        Self::new(0.0, AngleUnit::Degree)
    }

    pub fn degrees(value: f64) -> Self {
        Self::new(value, AngleUnit::Degree)
    }

    pub fn radians(value: f64) -> Self {
        Self::new(value, AngleUnit::Radian)
    }

    /// Parse a literal such as `"90deg"` or `"1.5 rad"`.
    pub fn parse(literal: &str) -> Result<Self, QuantityError> {
        literal.parse()
    }

    /// Magnitude in the quantity's own unit.
    pub fn value(self) -> f64 {
        self.deg / self.unit.degrees()
    }

    pub fn unit(self) -> AngleUnit {
        self.unit
    }

    pub fn in_degrees(self) -> f64 {
        self.deg
    }

    pub fn in_radians(self) -> f64 {
        self.deg / AngleUnit::Radian.degrees()
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.deg == other.deg
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.deg.partial_cmp(&other.deg)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle {
            deg: self.deg + rhs.deg,
            unit: self.unit,
        }
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle {
            deg: self.deg - rhs.deg,
            unit: self.unit,
        }
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle {
            deg: -self.deg,
            unit: self.unit,
        }
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Angle {
        Angle {
            deg: self.deg * rhs,
            unit: self.unit,
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value(), self.unit.suffix())
    }
}

impl FromStr for Angle {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, suffix) = split_literal(s)?;
        let unit = AngleUnit::from_suffix(suffix).ok_or_else(|| QuantityError::UnknownUnit {
            literal: s.trim().to_string(),
            unit: suffix.to_string(),
        })?;
        Ok(Angle::new(value, unit))
    }
}

impl Serialize for Angle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Angle {
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
    fn test_parse_and_display() {
        let zero = Angle::parse("0deg").unwrap();
        assert_eq!(zero, Angle::zero());
        assert_eq!(zero.to_string(), "0deg");

        let rad = Angle::parse("1.5 rad").unwrap();
        assert_relative_eq!(rad.in_degrees(), 85.94366926962348, max_relative = 1e-12);
        assert_eq!(rad.to_string(), "1.5rad");
    }

    #[test]
    fn test_comparison_crosses_units() {
        assert_eq!(Angle::degrees(180.0), Angle::radians(std::f64::consts::PI));
        assert!(Angle::degrees(90.0) < Angle::radians(2.0));
    }
}
