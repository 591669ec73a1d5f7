// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Box solids described by half-extents

use crate::units::Length;
use serde::{Deserialize, Serialize};

/// Half-extents of a box along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalfExtents {
    pub dx: Length,
    pub dy: Length,
    pub dz: Length,
}

impl HalfExtents {
    pub fn new(dx: Length, dy: Length, dz: Length) -> Self {
        Self { dx, dy, dz }
    }

    pub fn cube(half: Length) -> Self {
        Self {
            dx: half,
            dy: half,
            dz: half,
        }
    }
}

/// A named axis-aligned box, dimensioned by half-extents from its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    pub name: String,
    pub dx: Length,
    pub dy: Length,
    pub dz: Length,
}

impl BoxShape {
    pub fn new(name: impl Into<String>, dx: Length, dy: Length, dz: Length) -> Self {
        Self {
            name: name.into(),
            dx,
            dy,
            dz,
        }
    }

    pub fn cube(name: impl Into<String>, half: Length) -> Self {
        Self::new(name, half, half, half)
    }

    pub fn is_cube(&self) -> bool {
        self.dx == self.dy && self.dy == self.dz
    }

    pub fn half_extents(&self) -> HalfExtents {
        HalfExtents::new(self.dx, self.dy, self.dz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_shape() {
        let shape = BoxShape::cube("block_box_shape", Length::centimeters(0.5));
        assert!(shape.is_cube());
        assert_eq!(shape.dx, Length::millimeters(5.0));
    }

    #[test]
    fn test_non_cube_shape() {
        let shape = BoxShape::new(
            "slab_shape",
            Length::centimeters(1.0),
            Length::centimeters(1.0),
            Length::millimeters(2.0),
        );
        assert!(!shape.is_cube());
        assert_eq!(shape.half_extents().dz, Length::millimeters(2.0));
    }
}
