// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Composition graph for builder hierarchies

use ahash::AHashMap;
use anyhow::{bail, Result};
use std::collections::HashSet;

/// Directed acyclic graph linking each builder to its ordered
/// sub-builders. Built at configuration time; evaluated leaves-first.
#[derive(Debug, Clone, Default)]
pub struct CompositionGraph {
    /// Maps builder name to its direct sub-builders, in declaration order.
    children: AHashMap<String, Vec<String>>,
    /// Maps builder name to its direct parents.
    parents: AHashMap<String, Vec<String>>,
    /// All builder names, in registration order.
    nodes: Vec<String>,
}

impl CompositionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, name: &str) -> Result<()> {
        if self.contains(name) {
            bail!("duplicate builder name `{}`", name);
        }
        self.nodes.push(name.to_string());
        Ok(())
    }

    /// Declare `parent`'s sub-builders in order. Sub-builder names may be
    /// registered later; they are resolved when the order is computed.
    pub fn declare_children(&mut self, parent: &str, children: &[&str]) -> Result<()> {
        if !self.contains(parent) {
            bail!("unknown builder `{}`", parent);
        }
        for child in children {
            self.children
                .entry(parent.to_string())
                .or_default()
                .push(child.to_string());
            self.parents
                .entry(child.to_string())
                .or_default()
                .push(parent.to_string());
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.iter().any(|node| node == name)
    }

    pub fn children_of(&self, name: &str) -> &[String] {
        self.children.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn parents_of(&self, name: &str) -> &[String] {
        self.parents.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Leaves-first construction order: every builder appears after all of
    /// its sub-builders. Deterministic (registration order breaks ties).
    /// Fails on unknown sub-builder names and on cycles.
    pub fn construction_order(&self) -> Result<Vec<String>> {
        for node in &self.nodes {
            for child in self.children_of(node) {
                if !self.contains(child) {
                    bail!(
                        "builder `{}` references unknown sub-builder `{}`",
                        node,
                        child
                    );
                }
            }
        }

        let mut order = Vec::with_capacity(self.nodes.len());
        let mut done: HashSet<&str> = HashSet::new();
        let mut remaining: Vec<&String> = self.nodes.iter().collect();

        while !remaining.is_empty() {
            let before = remaining.len();
            remaining.retain(|node| {
                let ready = self
                    .children_of(node)
                    .iter()
                    .all(|child| done.contains(child.as_str()));
                if ready {
                    done.insert(node.as_str());
                    order.push((*node).clone());
                }
                !ready
            });
            if remaining.len() == before {
                let stuck: Vec<&str> = remaining.iter().map(|node| node.as_str()).collect();
                bail!("composition cycle involving: {}", stuck.join(", "));
            }
        }

        Ok(order)
    }
}
