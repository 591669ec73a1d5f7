// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Shared geometry store
//!
//! Every record category is a name-unique table that keeps insertion
//! order. Registration validates references: a placement must name an
//! already-registered volume, a volume an already-registered shape.
//! Material names on volumes are resolved later, when the geometry is
//! consumed, because materials are defined by the world builder which
//! constructs last.

use super::matter::{Element, Mixture};
use super::shapes::BoxShape;
use super::structure::{Placement, Position, Rotation, Volume};
use ahash::AHashMap;
use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
struct Table<T> {
    entries: AHashMap<String, T>,
    order: Vec<String>,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            entries: AHashMap::new(),
            order: Vec::new(),
        }
    }

    fn insert(&mut self, kind: &str, name: String, value: T) -> Result<()> {
        if self.entries.contains_key(&name) {
            bail!("duplicate {} name `{}`", kind, name);
        }
        self.order.push(name.clone());
        self.entries.insert(name, value);
        Ok(())
    }

    fn get(&self, kind: &str, name: &str) -> Result<&T> {
        self.entries
            .get(name)
            .ok_or_else(|| anyhow!("unknown {} `{}`", kind, name))
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(move |name| self.entries.get(name))
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

/// Per-category record counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub shapes: usize,
    pub volumes: usize,
    pub positions: usize,
    pub rotations: usize,
    pub placements: usize,
    pub elements: usize,
    pub mixtures: usize,
}

/// The geometry registry populated by builders during construction.
#[derive(Debug, Clone)]
pub struct Geometry {
    shapes: Table<BoxShape>,
    volumes: Table<Volume>,
    positions: Table<Position>,
    rotations: Table<Rotation>,
    placements: Table<Placement>,
    elements: Table<Element>,
    mixtures: Table<Mixture>,
}

impl Geometry {
    pub fn new() -> Self {
        Self {
            shapes: Table::new(),
            volumes: Table::new(),
            positions: Table::new(),
            rotations: Table::new(),
            placements: Table::new(),
            elements: Table::new(),
            mixtures: Table::new(),
        }
    }

    pub fn add_shape(&mut self, shape: BoxShape) -> Result<()> {
        let name = shape.name.clone();
        self.shapes.insert("shape", name, shape)
    }

    /// Register a volume. Its shape and every placement it references must
    /// already be registered.
    pub fn add_volume(&mut self, volume: Volume) -> Result<()> {
        if !self.shapes.contains(&volume.shape) {
            bail!(
                "volume `{}` references unknown shape `{}`",
                volume.name,
                volume.shape
            );
        }
        for placement in &volume.placements {
            if !self.placements.contains(placement) {
                bail!(
                    "volume `{}` references unknown placement `{}`",
                    volume.name,
                    placement
                );
            }
        }
        let name = volume.name.clone();
        self.volumes.insert("volume", name, volume)
    }

    pub fn add_position(&mut self, position: Position) -> Result<()> {
        let name = position.name.clone();
        self.positions.insert("position", name, position)
    }

    pub fn add_rotation(&mut self, rotation: Rotation) -> Result<()> {
        let name = rotation.name.clone();
        self.rotations.insert("rotation", name, rotation)
    }

    /// Register a placement. Its volume and any position/rotation it
    /// references must already be registered.
    pub fn add_placement(&mut self, placement: Placement) -> Result<()> {
        if !self.volumes.contains(&placement.volume) {
            bail!(
                "placement `{}` references unknown volume `{}`",
                placement.name,
                placement.volume
            );
        }
        if let Some(position) = &placement.position {
            if !self.positions.contains(position) {
                bail!(
                    "placement `{}` references unknown position `{}`",
                    placement.name,
                    position
                );
            }
        }
        if let Some(rotation) = &placement.rotation {
            if !self.rotations.contains(rotation) {
                bail!(
                    "placement `{}` references unknown rotation `{}`",
                    placement.name,
                    rotation
                );
            }
        }
        let name = placement.name.clone();
        self.placements.insert("placement", name, placement)
    }

    pub fn add_element(&mut self, element: Element) -> Result<()> {
        let name = element.name.clone();
        self.elements.insert("element", name, element)
    }

    pub fn add_mixture(&mut self, mixture: Mixture) -> Result<()> {
        let name = mixture.name.clone();
        self.mixtures.insert("mixture", name, mixture)
    }

    pub fn shape(&self, name: &str) -> Result<&BoxShape> {
        self.shapes.get("shape", name)
    }

    pub fn volume(&self, name: &str) -> Result<&Volume> {
        self.volumes.get("volume", name)
    }

    pub fn position(&self, name: &str) -> Result<&Position> {
        self.positions.get("position", name)
    }

    pub fn rotation(&self, name: &str) -> Result<&Rotation> {
        self.rotations.get("rotation", name)
    }

    pub fn placement(&self, name: &str) -> Result<&Placement> {
        self.placements.get("placement", name)
    }

    pub fn element(&self, name: &str) -> Result<&Element> {
        self.elements.get("element", name)
    }

    pub fn mixture(&self, name: &str) -> Result<&Mixture> {
        self.mixtures.get("mixture", name)
    }

    pub fn shapes(&self) -> impl Iterator<Item = &BoxShape> + '_ {
        self.shapes.iter()
    }

    pub fn volumes(&self) -> impl Iterator<Item = &Volume> + '_ {
        self.volumes.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> + '_ {
        self.positions.iter()
    }

    pub fn rotations(&self) -> impl Iterator<Item = &Rotation> + '_ {
        self.rotations.iter()
    }

    pub fn placements(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter()
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter()
    }

    pub fn mixtures(&self) -> impl Iterator<Item = &Mixture> + '_ {
        self.mixtures.iter()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            shapes: self.shapes.len(),
            volumes: self.volumes.len(),
            positions: self.positions.len(),
            rotations: self.rotations.len(),
            placements: self.placements.len(),
            elements: self.elements.len(),
            mixtures: self.mixtures.len(),
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Length;

    fn cube_volume(geom: &mut Geometry, name: &str) {
        let shape = BoxShape::cube(format!("{}_shape", name), Length::centimeters(1.0));
        geom.add_shape(shape).unwrap();
        geom.add_volume(Volume::new(name, "Air", format!("{}_shape", name)))
            .unwrap();
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut geom = Geometry::new();
        cube_volume(&mut geom, "box");
        let again = BoxShape::cube("box_shape", Length::centimeters(2.0));
        let err = geom.add_shape(again).unwrap_err();
        assert!(err.to_string().contains("duplicate shape name `box_shape`"));
    }

    #[test]
    fn test_placement_requires_registered_volume() {
        let mut geom = Geometry::new();
        let err = geom
            .add_placement(Placement::new("lost_place", "missing_volume"))
            .unwrap_err();
        assert!(err.to_string().contains("unknown volume `missing_volume`"));
    }

    #[test]
    fn test_placement_requires_registered_position() {
        let mut geom = Geometry::new();
        cube_volume(&mut geom, "box");
        let err = geom
            .add_placement(Placement::new("box_place", "box").at("nowhere"))
            .unwrap_err();
        assert!(err.to_string().contains("unknown position `nowhere`"));
    }

    #[test]
    fn test_volume_requires_registered_shape() {
        let mut geom = Geometry::new();
        let err = geom
            .add_volume(Volume::new("box", "Air", "missing_shape"))
            .unwrap_err();
        assert!(err.to_string().contains("unknown shape `missing_shape`"));
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let mut geom = Geometry::new();
        cube_volume(&mut geom, "first");
        cube_volume(&mut geom, "second");
        cube_volume(&mut geom, "third");
        let names: Vec<&str> = geom.volumes().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(geom.summary().volumes, 3);
    }
}
