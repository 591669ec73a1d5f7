// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Material records

use serde::{Deserialize, Serialize};

/// A chemical element, identified by symbol and atomic number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    pub symbol: String,
    pub atomic_number: u32,
    /// Molar mass in g/mole.
    pub molar_mass: f64,
}

impl Element {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        atomic_number: u32,
        molar_mass: f64,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            atomic_number,
            molar_mass,
        }
    }
}

/// A material mixed from named components by mass fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mixture {
    pub name: String,
    /// Density in g/cc.
    pub density: f64,
    pub components: Vec<(String, f64)>,
}

impl Mixture {
    pub fn new(
        name: impl Into<String>,
        density: f64,
        components: Vec<(&str, f64)>,
    ) -> Self {
        Self {
            name: name.into(),
            density,
            components: components
                .into_iter()
                .map(|(component, fraction)| (component.to_string(), fraction))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixture_components() {
        let air = Mixture::new(
            "Air",
            0.001225,
            vec![("Elem_nitrogen", 0.8), ("Elem_oxygen", 0.2)],
        );
        assert_eq!(air.components.len(), 2);
        assert_eq!(air.components[0].0, "Elem_nitrogen");
    }
}
