// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Detector enclosure - a box volume stacking repeated layers along z

use super::{Constructed, GeometryBuilder};
use crate::geometry::{BoxShape, Geometry, HalfExtents, Placement, Position, Rotation, Volume};
use crate::units::Length;
use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

/// Configuration for [`EnclosureBuilder`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnclosureConfig {
    pub material: String,
    /// Half-extents of the enclosure box.
    pub dx: Length,
    pub dy: Length,
    pub dz: Length,
    /// How many times the layer stack is repeated.
    pub repetitions: u32,
    /// Auxiliary (key, value) pairs attached to the volume, in order.
    pub aux: Vec<(String, String)>,
}

impl Default for EnclosureConfig {
    fn default() -> Self {
        Self {
            material: "Air".to_string(),
            dx: Length::meters(1.0),
            dy: Length::meters(1.0),
            dz: Length::meters(1.0),
            repetitions: 1,
            aux: Vec::new(),
        }
    }
}

/// Builds a detector enclosure holding a repeated stack of layer volumes.
///
/// The sub-builders' volumes are stacked end-to-end along z, centered in
/// the enclosure, `repetitions` times in declaration order. The stack must
/// fit inside the configured half-extents.
pub struct EnclosureBuilder {
    name: String,
    config: EnclosureConfig,
}

impl EnclosureBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, EnclosureConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: EnclosureConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

impl GeometryBuilder for EnclosureBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn half_extents(&self) -> Option<HalfExtents> {
        Some(HalfExtents::new(
            self.config.dx,
            self.config.dy,
            self.config.dz,
        ))
    }

    fn construct(&self, geom: &mut Geometry, children: &[Constructed<'_>]) -> Result<String> {
        let shape = BoxShape::new(
            format!("{}_shape", self.name),
            self.config.dx,
            self.config.dy,
            self.config.dz,
        );
        let shape_name = shape.name.clone();
        geom.add_shape(shape)?;

        let mut volume = Volume::new(
            format!("{}_LV", self.name),
            &self.config.material,
            shape_name,
        );
        for (key, value) in &self.config.aux {
            volume.annotate(key, value);
        }

        let extents: Vec<HalfExtents> = children
            .iter()
            .map(|child| {
                child.builder.half_extents().ok_or_else(|| {
                    anyhow!(
                        "builder `{}` exposes no half-extents and cannot be stacked inside `{}`",
                        child.builder.name(),
                        self.name
                    )
                })
            })
            .collect::<Result<_>>()?;

        // Full size of the repeated layer stack. The transverse fit is
        // judged on dx for both axes.
        let mut half_x = Length::zero();
        let mut half_y = Length::zero();
        let mut half_z = Length::zero();
        for _ in 0..self.config.repetitions {
            for extent in &extents {
                half_x = half_x.max(extent.dx);
                half_y = half_x.max(extent.dx);
                half_z += extent.dz;
            }
        }

        if self.config.dx < half_x || self.config.dy < half_y || self.config.dz < half_z {
            bail!(
                "invalid geometry in {}: the stack needs ({}, {}, {}) but the enclosure half-extents are ({}, {}, {})",
                self.name,
                half_x,
                half_y,
                half_z,
                self.config.dx,
                self.config.dy,
                self.config.dz
            );
        }

        // Each layer's center sits at the midpoint of its own span: the
        // cursor advances by a layer's dz to reach its center, then by the
        // same dz again to reach the next layer's leading edge.
        let mut center_z = -half_z;
        for rep in 0..self.config.repetitions {
            for (child, extent) in children.iter().zip(&extents) {
                center_z += extent.dz;

                let position = Position::new(
                    format!("{}_pos{}", child.builder.name(), rep),
                    Length::zero(),
                    Length::zero(),
                    center_z,
                );
                let position_name = position.name.clone();
                geom.add_position(position)?;

                let rotation = Rotation::identity(format!("{}_rot{}", child.builder.name(), rep));
                let rotation_name = rotation.name.clone();
                geom.add_rotation(rotation)?;

                let place = Placement::new(
                    format!("{}_place{}", child.builder.name(), rep),
                    child.volume,
                )
                .at(position_name)
                .rotated(rotation_name);
                let place_name = place.name.clone();
                geom.add_placement(place)?;
                volume.place(place_name);

                center_z += extent.dz;
            }
        }

        let volume_name = volume.name.clone();
        geom.add_volume(volume)?;
        Ok(volume_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_enclosure_is_legal() {
        let mut geom = Geometry::new();
        let enclosure = EnclosureBuilder::with_config(
            "hall",
            EnclosureConfig {
                aux: vec![("Color".to_string(), "blue".to_string())],
                ..EnclosureConfig::default()
            },
        );
        let volume_name = enclosure.construct(&mut geom, &[]).unwrap();
        assert_eq!(volume_name, "hall_LV");

        let volume = geom.volume(&volume_name).unwrap();
        assert!(volume.placements.is_empty());
        assert_eq!(
            volume.params,
            vec![("Color".to_string(), "blue".to_string())]
        );
    }

    #[test]
    fn test_child_without_extents_is_rejected() {
        struct Opaque;

        impl GeometryBuilder for Opaque {
            fn name(&self) -> &str {
                "opaque"
            }

            fn construct(
                &self,
                _geom: &mut Geometry,
                _children: &[Constructed<'_>],
            ) -> Result<String> {
                Ok("opaque_volume".to_string())
            }
        }

        let mut geom = Geometry::new();
        let enclosure = EnclosureBuilder::new("hall");
        let err = enclosure
            .construct(
                &mut geom,
                &[Constructed {
                    builder: &Opaque,
                    volume: "opaque_volume",
                }],
            )
            .unwrap_err();
        assert!(err.to_string().contains("exposes no half-extents"));
    }
}
