//! Declarative molecule records
//!
//! The wire shape shared by the bundled molecule data source and user
//! import/export files:
//!
//! ```json
//! {
//!   "name": "Water",
//!   "formula": "H2O",
//!   "atoms": [ { "type": "O", "position": { "x": 0, "y": 0, "z": 0 }, "charge": "0" }, ... ],
//!   "bonds": [ { "atom1Index": 2, "atom2Index": 0, "isDouble": false }, ... ]
//! }
//! ```
//!
//! Bond records reference atoms by their index in the atom list *after*
//! unknown-type atoms have been dropped, so importers validate indices at
//! build time rather than trusting them.

use lin_alg::f32::Vec3;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::{IoError, IoResult};

/// Bundled bootstrap molecule data (the six stock molecules).
const BUILTIN_MOLECULES: &str = include_str!("../data/molecules.json");

static BUILTIN: OnceLock<Vec<MoleculeRecord>> = OnceLock::new();

/// A position on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for PositionRecord {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<PositionRecord> for Vec3 {
    fn from(p: PositionRecord) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

/// Optional denormalized element properties carried on exported atoms.
///
/// Emitted for richer round-trips; ignored on import, where the element
/// table is authoritative. All fields default so foreign records with a
/// partial block still parse.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AtomProperties {
    pub full_name: String,
    pub radius: f32,
    pub color: u32,
    pub metallic: bool,
    pub atomic_number: u32,
    pub atomic_weight: String,
}

/// One atom entry of a molecule record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomRecord {
    /// Element type symbol
    #[serde(rename = "type")]
    pub symbol: String,
    /// Position in model space
    pub position: PositionRecord,
    /// Charge label, preserved verbatim
    #[serde(default = "default_charge")]
    pub charge: String,
    /// Optional denormalized display properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<AtomProperties>,
}

fn default_charge() -> String {
    "0".to_string()
}

/// One bond entry of a molecule record
///
/// Indices are signed on the wire so that out-of-range values (including
/// negatives) surface as skippable entries instead of parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondRecord {
    pub atom1_index: i32,
    pub atom2_index: i32,
    pub is_double: bool,
}

/// A complete declarative molecule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeRecord {
    pub name: String,
    #[serde(default)]
    pub formula: String,
    pub atoms: Vec<AtomRecord>,
    pub bonds: Vec<BondRecord>,
}

impl MoleculeRecord {
    /// Check record-level requirements beyond what serde enforces.
    ///
    /// Missing `atoms`/`bonds`/`name` keys already fail at parse time; an
    /// empty name is rejected here because the registry keys on it.
    pub fn validate(&self) -> IoResult<()> {
        if self.name.is_empty() {
            return Err(IoError::InvalidFormat("record has an empty name".into()));
        }
        Ok(())
    }
}

/// Top-level shape of a molecule data source file
#[derive(Debug, Clone, Deserialize)]
pub struct MoleculeFile {
    pub molecules: Vec<MoleculeRecord>,
}

/// The bundled bootstrap molecules, parsed on first use.
pub fn builtin_molecules() -> &'static [MoleculeRecord] {
    BUILTIN.get_or_init(|| {
        let file: MoleculeFile = serde_json::from_str(BUILTIN_MOLECULES)
            .unwrap_or_else(|e| panic!("bundled molecule data is invalid: {e}"));
        file.molecules
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_molecules_parse() {
        let mols = builtin_molecules();
        assert_eq!(mols.len(), 6);
        assert_eq!(mols[0].name, "Baking soda");
        assert_eq!(mols[4].formula, "H2O");
        for m in mols {
            m.validate().unwrap();
        }
    }

    #[test]
    fn test_charge_defaults_to_zero() {
        let json = r#"{ "type": "H", "position": { "x": 0, "y": 0, "z": 0 } }"#;
        let atom: AtomRecord = serde_json::from_str(json).unwrap();
        assert_eq!(atom.charge, "0");
        assert!(atom.properties.is_none());
    }

    #[test]
    fn test_bond_record_wire_names() {
        let json = r#"{ "atom1Index": 0, "atom2Index": 1, "isDouble": true }"#;
        let bond: BondRecord = serde_json::from_str(json).unwrap();
        assert_eq!(bond.atom1_index, 0);
        assert!(bond.is_double);
        let back = serde_json::to_string(&bond).unwrap();
        assert!(back.contains("atom1Index"));
        assert!(back.contains("isDouble"));
    }

    #[test]
    fn test_empty_name_is_invalid() {
        let record = MoleculeRecord {
            name: String::new(),
            formula: String::new(),
            atoms: vec![],
            bonds: vec![],
        };
        assert!(record.validate().is_err());
    }
}
