// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry builders
//!
//! A builder is configured once, then asked to construct its volume into
//! the shared store. Parents see their sub-builders only through
//! [`Constructed`]: the builder reference plus the name of the volume it
//! registered. The kernel guarantees children are constructed first.

mod enclosure;
mod graph;
mod rubik;
mod world;

pub use enclosure::{EnclosureBuilder, EnclosureConfig};
pub use graph::CompositionGraph;
pub use rubik::{RubikBlockBuilder, RubikBlockConfig, RubikBuilder, RubikConfig};
pub use world::{WorldBuilder, WorldConfig};

use crate::geometry::{Geometry, HalfExtents};
use anyhow::Result;

/// A sub-builder whose volume has already been constructed.
pub struct Constructed<'a> {
    pub builder: &'a dyn GeometryBuilder,
    pub volume: &'a str,
}

/// The builder contract: configured state in, registered volume out.
pub trait GeometryBuilder {
    fn name(&self) -> &str;

    /// Half-extents of the builder's envelope, when they are known from
    /// configuration alone. Builders whose envelope depends on their
    /// children return `None`.
    fn half_extents(&self) -> Option<HalfExtents> {
        None
    }

    /// Create and register this builder's records, returning the name of
    /// its top volume.
    fn construct(&self, geom: &mut Geometry, children: &[Constructed<'_>]) -> Result<String>;
}
