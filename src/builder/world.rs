// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! World builder - the outermost cube volume

use super::{Constructed, GeometryBuilder};
use crate::geometry::{BoxShape, Element, Geometry, HalfExtents, Mixture, Placement, Volume};
use crate::units::Length;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Configuration for [`WorldBuilder`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub material: String,
    /// Full edge length of the world cube.
    pub size: Length,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            material: "Air".to_string(),
            size: Length::meters(1.0),
        }
    }
}

/// Builds a cube world volume of the configured material and size, and
/// places its single sub-builder's volume at the origin.
///
/// All materials are defined here: the world constructs last, so its
/// element and mixture table is complete by the time the geometry is
/// consumed.
pub struct WorldBuilder {
    name: String,
    config: WorldConfig,
}

impl WorldBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, WorldConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: WorldConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

impl GeometryBuilder for WorldBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn half_extents(&self) -> Option<HalfExtents> {
        Some(HalfExtents::cube(self.config.size * 0.5))
    }

    fn construct(&self, geom: &mut Geometry, children: &[Constructed<'_>]) -> Result<String> {
        let child = match children {
            [child] => child,
            [] => bail!("world builder `{}` has no sub-builder", self.name),
            _ => bail!(
                "world builder `{}` expects exactly one sub-builder, got {}",
                self.name,
                children.len()
            ),
        };

        define_materials(geom)?;

        let shape = BoxShape::cube(format!("{}_box_shape", self.name), self.config.size * 0.5);
        let shape_name = shape.name.clone();
        geom.add_shape(shape)?;

        let mut volume = Volume::new(
            format!("{}_volume", self.name),
            &self.config.material,
            shape_name,
        );

        // No position: the child sits at the world origin.
        let place = Placement::new(format!("{}_place", child.builder.name()), child.volume);
        let place_name = place.name.clone();
        geom.add_placement(place)?;
        volume.place(place_name);

        let volume_name = volume.name.clone();
        geom.add_volume(volume)?;
        Ok(volume_name)
    }
}

fn define_materials(geom: &mut Geometry) -> Result<()> {
    geom.add_element(Element::new("Elem_hydrogen", "H", 1, 1.00791))?;
    geom.add_element(Element::new("Elem_carbon", "C", 6, 12.0107))?;
    geom.add_element(Element::new("Elem_nitrogen", "N", 7, 14.0671))?;
    geom.add_element(Element::new("Elem_oxygen", "O", 8, 15.999))?;

    geom.add_mixture(Mixture::new(
        "Plastic",
        1.05,
        vec![("Elem_carbon", 0.9), ("Elem_hydrogen", 0.1)],
    ))?;
    geom.add_mixture(Mixture::new(
        "Air",
        0.001225,
        vec![("Elem_nitrogen", 0.8), ("Elem_oxygen", 0.2)],
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RubikBlockBuilder;

    #[test]
    fn test_world_wraps_single_child() {
        let mut geom = Geometry::new();
        let block = RubikBlockBuilder::new("block");
        let block_volume = block.construct(&mut geom, &[]).unwrap();

        let world = WorldBuilder::with_config(
            "world",
            WorldConfig {
                material: "Air".to_string(),
                size: Length::meters(2.0),
            },
        );
        let volume_name = world
            .construct(
                &mut geom,
                &[Constructed {
                    builder: &block,
                    volume: &block_volume,
                }],
            )
            .unwrap();

        let volume = geom.volume(&volume_name).unwrap();
        let shape = geom.shape(&volume.shape).unwrap();
        assert!(shape.is_cube());
        assert_eq!(shape.dx, Length::meters(1.0));

        assert_eq!(volume.placements.len(), 1);
        let place = geom.placement(&volume.placements[0]).unwrap();
        assert_eq!(place.volume, block_volume);
        assert_eq!(place.position, None);
        assert_eq!(place.rotation, None);

        // The world defines the material table.
        assert!(geom.mixture("Air").is_ok());
        assert!(geom.mixture("Plastic").is_ok());
        assert_eq!(geom.summary().elements, 4);
    }

    #[test]
    fn test_world_requires_one_child() {
        let mut geom = Geometry::new();
        let world = WorldBuilder::new("world");
        let err = world.construct(&mut geom, &[]).unwrap_err();
        assert!(err.to_string().contains("has no sub-builder"));
    }
}
