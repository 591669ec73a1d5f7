// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - named records and the shared store

mod matter;
mod shapes;
mod store;
mod structure;

pub use matter::{Element, Mixture};
pub use shapes::{BoxShape, HalfExtents};
pub use store::{Geometry, Summary};
pub use structure::{Placement, Position, Rotation, Volume};
