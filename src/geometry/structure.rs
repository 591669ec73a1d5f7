// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Volumes, placements and coordinate records

use crate::units::{Angle, Length};
use serde::{Deserialize, Serialize};

/// A named coordinate triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub name: String,
    pub x: Length,
    pub y: Length,
    pub z: Length,
}

impl Position {
    pub fn new(name: impl Into<String>, x: Length, y: Length, z: Length) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            z,
        }
    }

    pub fn origin(name: impl Into<String>) -> Self {
        Self::new(name, Length::zero(), Length::zero(), Length::zero())
    }
}

/// A named rotation triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub name: String,
    pub x: Angle,
    pub y: Angle,
    pub z: Angle,
}

impl Rotation {
    pub fn new(name: impl Into<String>, x: Angle, y: Angle, z: Angle) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            z,
        }
    }

    pub fn identity(name: impl Into<String>) -> Self {
        Self::new(name, Angle::zero(), Angle::zero(), Angle::zero())
    }
}

/// A write-once reference binding a child volume into a parent volume.
///
/// A placement without a position sits at the parent's origin; one without
/// a rotation is unrotated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub name: String,
    pub volume: String,
    pub position: Option<String>,
    pub rotation: Option<String>,
}

impl Placement {
    pub fn new(name: impl Into<String>, volume: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            volume: volume.into(),
            position: None,
            rotation: None,
        }
    }

    pub fn at(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn rotated(mut self, rotation: impl Into<String>) -> Self {
        self.rotation = Some(rotation.into());
        self
    }
}

/// A named solid region: a shape filled with a material, carrying its
/// child placements in insertion order and auxiliary metadata pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub name: String,
    pub material: String,
    pub shape: String,
    pub placements: Vec<String>,
    pub params: Vec<(String, String)>,
}

impl Volume {
    pub fn new(name: impl Into<String>, material: impl Into<String>, shape: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            material: material.into(),
            shape: shape.into(),
            placements: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Append a placement reference; order is traversal order.
    pub fn place(&mut self, placement: impl Into<String>) {
        self.placements.push(placement.into());
    }

    /// Attach an auxiliary (key, value) metadata pair.
    pub fn annotate(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.push((key.into(), value.into()));
    }
}
