// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Rubik's cube assembly - a 3x3x3 grid of blocks, less the center

use super::{Constructed, GeometryBuilder};
use crate::geometry::{BoxShape, Geometry, HalfExtents, Placement, Position, Volume};
use crate::units::Length;
use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

/// Configuration for [`RubikBuilder`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RubikConfig {
    pub material: String,
    /// Clearance between adjacent blocks.
    pub gap: Length,
}

impl Default for RubikConfig {
    fn default() -> Self {
        Self {
            material: "Air".to_string(),
            gap: Length::millimeters(1.0),
        }
    }
}

/// Builds a Rubik's cube, kind of.
///
/// Delegates to three sub-builders providing, in declaration order, the
/// corner, edge and center blocks. All blocks must be identical cubes.
/// The 26 off-origin positions of the 3x3x3 grid are filled by reusing
/// the three block volumes: 8 corner, 12 edge and 6 center placements.
pub struct RubikBuilder {
    name: String,
    config: RubikConfig,
}

impl RubikBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, RubikConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: RubikConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    /// Common block half-extent, validated across the three block volumes.
    fn block_half(&self, geom: &Geometry, children: &[Constructed<'_>]) -> Result<Length> {
        let mut half = None;
        for child in children {
            let volume = geom.volume(child.volume)?;
            let shape = geom.shape(&volume.shape)?;
            if !shape.is_cube() {
                bail!(
                    "rubik builder `{}` requires cube blocks, but `{}` has shape ({}, {}, {})",
                    self.name,
                    child.volume,
                    shape.dx,
                    shape.dy,
                    shape.dz
                );
            }
            match half {
                None => half = Some(shape.dx),
                Some(first) if first != shape.dx => bail!(
                    "rubik builder `{}` requires identical blocks, but `{}` has half-extent {} instead of {}",
                    self.name,
                    child.volume,
                    shape.dx,
                    first
                ),
                Some(_) => {}
            }
        }
        // children count is checked by the caller, so half is present
        half.ok_or_else(|| anyhow!("rubik builder `{}` has no blocks", self.name))
    }
}

impl GeometryBuilder for RubikBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn construct(&self, geom: &mut Geometry, children: &[Constructed<'_>]) -> Result<String> {
        let (corner, edge, center) = match children {
            [corner, edge, center] => (corner, edge, center),
            _ => bail!(
                "rubik builder `{}` expects exactly three sub-builders (corner, edge, center), got {}",
                self.name,
                children.len()
            ),
        };

        let half = self.block_half(geom, children)?;
        let pitch = half + self.config.gap;

        let shape = BoxShape::cube(format!("{}_box_shape", self.name), pitch * 3.0);
        let shape_name = shape.name.clone();
        geom.add_shape(shape)?;

        let mut volume = Volume::new(
            format!("{}_volume", self.name),
            &self.config.material,
            shape_name,
        );

        // center-to-center distance between adjacent blocks
        let step = pitch * 2.0;

        // Blocks are consumed in reverse declaration order so that the
        // weight w = |i|+|j|+|k|-1 indexes straight into the list. The
        // weight counts the non-zero axes of the triple, which is what
        // distinguishes a face center from an edge or a corner position.
        let kinds = [center, edge, corner];

        for i in [-1i32, 0, 1] {
            for j in [-1i32, 0, 1] {
                for k in [-1i32, 0, 1] {
                    if (i, j, k) == (0, 0, 0) {
                        continue;
                    }

                    let w = (i.abs() + j.abs() + k.abs() - 1) as usize;
                    let block = kinds[w];

                    let triple = format!("{}{}{}", i, j, k);
                    let position = Position::new(
                        format!("pos_{}", triple),
                        step * f64::from(i),
                        step * f64::from(j),
                        step * f64::from(k),
                    );
                    let position_name = position.name.clone();
                    geom.add_position(position)?;

                    let place =
                        Placement::new(format!("place_{}", triple), block.volume).at(position_name);
                    let place_name = place.name.clone();
                    geom.add_placement(place)?;
                    volume.place(place_name);
                }
            }
        }

        let volume_name = volume.name.clone();
        geom.add_volume(volume)?;
        Ok(volume_name)
    }
}

/// Configuration for [`RubikBlockBuilder`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RubikBlockConfig {
    /// Advisory role of the block within a larger assembly; recorded but
    /// not read during construction.
    pub location: String,
    pub material: String,
    /// Full edge length of the block cube.
    pub size: Length,
}

impl Default for RubikBlockConfig {
    fn default() -> Self {
        Self {
            location: "center".to_string(),
            material: "Plastic".to_string(),
            size: Length::centimeters(1.0),
        }
    }
}

/// Builds a single corner, edge or center block: a leaf cube volume.
pub struct RubikBlockBuilder {
    name: String,
    config: RubikBlockConfig,
}

impl RubikBlockBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, RubikBlockConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: RubikBlockConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

impl GeometryBuilder for RubikBlockBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn half_extents(&self) -> Option<HalfExtents> {
        Some(HalfExtents::cube(self.config.size * 0.5))
    }

    fn construct(&self, geom: &mut Geometry, children: &[Constructed<'_>]) -> Result<String> {
        if !children.is_empty() {
            bail!(
                "block builder `{}` is a leaf and takes no sub-builders",
                self.name
            );
        }

        let shape = BoxShape::cube(format!("{}_box_shape", self.name), self.config.size * 0.5);
        let shape_name = shape.name.clone();
        geom.add_shape(shape)?;

        let volume = Volume::new(
            format!("{}_volume", self.name),
            &self.config.material,
            shape_name,
        );
        let volume_name = volume.name.clone();
        geom.add_volume(volume)?;
        Ok(volume_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_is_leaf() {
        let mut geom = Geometry::new();
        let block = RubikBlockBuilder::new("center_block");
        let volume_name = block.construct(&mut geom, &[]).unwrap();
        assert_eq!(volume_name, "center_block_volume");

        let volume = geom.volume(&volume_name).unwrap();
        assert_eq!(volume.material, "Plastic");
        assert!(volume.placements.is_empty());

        let shape = geom.shape(&volume.shape).unwrap();
        assert_eq!(shape.dx, Length::centimeters(0.5));
        assert_eq!(
            block.half_extents(),
            Some(HalfExtents::cube(Length::centimeters(0.5)))
        );
    }

    #[test]
    fn test_block_rejects_children() {
        let mut geom = Geometry::new();
        let leaf = RubikBlockBuilder::new("leaf");
        let other_volume = leaf.construct(&mut geom, &[]).unwrap();

        let block = RubikBlockBuilder::new("block");
        let err = block
            .construct(
                &mut geom,
                &[Constructed {
                    builder: &leaf,
                    volume: &other_volume,
                }],
            )
            .unwrap_err();
        assert!(err.to_string().contains("takes no sub-builders"));
    }

    #[test]
    fn test_rubik_requires_three_blocks() {
        let mut geom = Geometry::new();
        let block = RubikBlockBuilder::new("only");
        let volume = block.construct(&mut geom, &[]).unwrap();

        let rubik = RubikBuilder::new("rubik");
        let err = rubik
            .construct(
                &mut geom,
                &[Constructed {
                    builder: &block,
                    volume: &volume,
                }],
            )
            .unwrap_err();
        assert!(err.to_string().contains("exactly three sub-builders"));
    }
}
