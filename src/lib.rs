// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geoframe geometry description kernel
//!
//! Composable builders describe detector geometry as named shapes,
//! volumes and placements registered in a shared store. A kernel
//! evaluates the builder hierarchy leaves-first over an explicit
//! composition graph; quantities carry their units.

pub mod builder;
pub mod geometry;
pub mod kernel;
pub mod units;

pub use builder::{
    CompositionGraph, EnclosureBuilder, GeometryBuilder, RubikBlockBuilder, RubikBuilder,
    WorldBuilder,
};
pub use geometry::{BoxShape, Geometry, HalfExtents, Placement, Position, Rotation, Volume};
pub use kernel::{Assembly, Kernel};
pub use units::{Angle, Length, QuantityError};
