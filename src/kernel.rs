// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Kernel API for assembling builder hierarchies

use crate::builder::{CompositionGraph, Constructed, GeometryBuilder};
use crate::geometry::Geometry;
use ahash::AHashMap;
use anyhow::{anyhow, Result};

/// Main kernel driving leaves-first construction of a builder hierarchy.
pub struct Kernel {
    builders: AHashMap<String, Box<dyn GeometryBuilder>>,
    graph: CompositionGraph,
}

impl Kernel {
    /// Create a new kernel
    pub fn new() -> Self {
        Self {
            builders: AHashMap::new(),
            graph: CompositionGraph::new(),
        }
    }

    /// Register a builder and declare its sub-builders in order.
    /// Sub-builders may be registered later; names are resolved when the
    /// geometry is constructed.
    pub fn add_builder(
        &mut self,
        builder: Box<dyn GeometryBuilder>,
        sub_builders: &[&str],
    ) -> Result<()> {
        let name = builder.name().to_string();
        self.graph.add_node(&name)?;
        self.graph.declare_children(&name, sub_builders)?;
        self.builders.insert(name, builder);
        Ok(())
    }

    pub fn builder(&self, name: &str) -> Option<&dyn GeometryBuilder> {
        self.builders.get(name).map(|builder| builder.as_ref())
    }

    /// Construct every builder, leaves first, into a fresh geometry.
    ///
    /// The kernel is not consumed: constructing again yields an identical
    /// set of named records.
    pub fn construct(&self) -> Result<Assembly> {
        let order = self.graph.construction_order()?;

        let mut geometry = Geometry::new();
        let mut volumes: AHashMap<String, String> = AHashMap::new();

        for name in &order {
            let builder = self
                .builders
                .get(name)
                .ok_or_else(|| anyhow!("unknown builder `{}`", name))?;

            let children: Vec<Constructed<'_>> = self
                .graph
                .children_of(name)
                .iter()
                .map(|child| {
                    let child_builder = self
                        .builders
                        .get(child)
                        .ok_or_else(|| anyhow!("unknown sub-builder `{}`", child))?;
                    let child_volume = volumes
                        .get(child)
                        .ok_or_else(|| anyhow!("sub-builder `{}` has no constructed volume", child))?;
                    Ok(Constructed {
                        builder: child_builder.as_ref(),
                        volume: child_volume,
                    })
                })
                .collect::<Result<_>>()?;

            let volume = builder.construct(&mut geometry, &children)?;
            volumes.insert(name.clone(), volume);
        }

        Ok(Assembly { geometry, volumes })
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a full construction pass: the populated geometry plus each
/// builder's top volume.
#[derive(Debug)]
pub struct Assembly {
    geometry: Geometry,
    volumes: AHashMap<String, String>,
}

impl Assembly {
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn into_geometry(self) -> Geometry {
        self.geometry
    }

    /// Name of the top volume a builder registered.
    pub fn volume_of(&self, builder: &str) -> Option<&str> {
        self.volumes.get(builder).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{RubikBlockBuilder, WorldBuilder};

    fn block_and_world() -> Kernel {
        let mut kernel = Kernel::new();
        kernel
            .add_builder(Box::new(WorldBuilder::new("world")), &["block"])
            .unwrap();
        kernel
            .add_builder(Box::new(RubikBlockBuilder::new("block")), &[])
            .unwrap();
        kernel
    }

    #[test]
    fn test_leaves_constructed_before_parents() {
        let assembly = block_and_world().construct().unwrap();
        assert_eq!(assembly.volume_of("world"), Some("world_volume"));
        assert_eq!(assembly.volume_of("block"), Some("block_volume"));

        let world = assembly.geometry().volume("world_volume").unwrap();
        let place = assembly.geometry().placement(&world.placements[0]).unwrap();
        assert_eq!(place.volume, "block_volume");
    }

    #[test]
    fn test_duplicate_builder_rejected() {
        let mut kernel = Kernel::new();
        kernel
            .add_builder(Box::new(RubikBlockBuilder::new("block")), &[])
            .unwrap();
        let err = kernel
            .add_builder(Box::new(RubikBlockBuilder::new("block")), &[])
            .unwrap_err();
        assert!(err.to_string().contains("duplicate builder name"));
    }

    #[test]
    fn test_missing_sub_builder_fails() {
        let mut kernel = Kernel::new();
        kernel
            .add_builder(Box::new(WorldBuilder::new("world")), &["ghost"])
            .unwrap();
        let err = kernel.construct().unwrap_err();
        assert!(err.to_string().contains("unknown sub-builder `ghost`"));
    }

    #[test]
    fn test_reconstruction_is_deterministic() {
        let kernel = block_and_world();
        let first = kernel.construct().unwrap();
        let second = kernel.construct().unwrap();
        assert_eq!(first.geometry().summary(), second.geometry().summary());

        let first_names: Vec<&str> = first.geometry().volumes().map(|v| v.name.as_str()).collect();
        let second_names: Vec<&str> = second
            .geometry()
            .volumes()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(first_names, second_names);
    }
}
