//! Record parsing and molecule assembly
//!
//! Turns JSON text into [`MoleculeRecord`]s and records into live
//! [`Molecule`]s. Element-level problems (unknown atom type, bad bond index,
//! degenerate bond) are logged and skipped; only record-level problems abort.

use std::path::Path;

use molview_mol::{Atom, AtomIndex, BondKind, ElementTable, Molecule};

use crate::error::{IoError, IoResult};
use crate::records::MoleculeRecord;

/// Parse and validate a single molecule record from JSON text.
pub fn parse_record(json: &str) -> IoResult<MoleculeRecord> {
    let record: MoleculeRecord =
        serde_json::from_str(json).map_err(|e| IoError::InvalidFormat(e.to_string()))?;
    record.validate()?;
    Ok(record)
}

/// Read and validate a molecule record from a file.
pub fn read_record_file(path: &Path) -> IoResult<MoleculeRecord> {
    let json = std::fs::read_to_string(path)?;
    parse_record(&json)
}

/// Build a live molecule from a declarative record.
///
/// Atoms are processed in declared order; an atom whose type is not in the
/// element table is skipped with a warning, and every later atom shifts down
/// one index. Bond indices therefore refer to the post-filter atom list and
/// are validated against it; invalid or degenerate entries are skipped with
/// a warning. This never fails: a record full of bad elements yields an
/// empty molecule.
pub fn build_molecule(table: &ElementTable, record: &MoleculeRecord) -> Molecule {
    let mut molecule = Molecule::new(record.name.clone(), record.formula.clone());

    for atom_record in &record.atoms {
        match Atom::from_symbol(
            table,
            atom_record.position.into(),
            &atom_record.symbol,
            &atom_record.charge,
        ) {
            Ok(atom) => {
                molecule.add_atom(atom);
            }
            Err(e) => {
                log::warn!("Skipping atom in '{}': {}", record.name, e);
            }
        }
    }

    let atom_count = molecule.atom_count() as i32;
    for (i, bond_record) in record.bonds.iter().enumerate() {
        let (i1, i2) = (bond_record.atom1_index, bond_record.atom2_index);
        if i1 < 0 || i2 < 0 || i1 >= atom_count || i2 >= atom_count {
            log::warn!(
                "Skipping bond {} in '{}': atom index out of range ({}, {})",
                i,
                record.name,
                i1,
                i2
            );
            continue;
        }
        let kind = BondKind::from_is_double(bond_record.is_double);
        if let Err(e) = molecule.add_bond(
            AtomIndex::new(i1 as u32),
            AtomIndex::new(i2 as u32),
            kind,
        ) {
            log::warn!("Skipping bond {} in '{}': {}", i, record.name, e);
        }
    }

    molecule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{builtin_molecules, BondRecord};

    #[test]
    fn test_parse_record_rejects_missing_fields() {
        // No bonds key
        let json = r#"{ "name": "X", "atoms": [] }"#;
        assert!(matches!(
            parse_record(json),
            Err(IoError::InvalidFormat(_))
        ));
        // Not JSON at all
        assert!(parse_record("{").is_err());
    }

    #[test]
    fn test_build_builtin_water() {
        let record = &builtin_molecules()[4];
        assert_eq!(record.name, "Water");
        let mol = build_molecule(ElementTable::builtin(), record);
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.bond_count(), 2);
        assert_eq!(mol.atoms()[2].symbol, "O");
    }

    #[test]
    fn test_unknown_atom_is_skipped_and_indices_shift() {
        let json = r#"{
            "name": "Shifty",
            "atoms": [
                { "type": "Qq", "position": { "x": 0, "y": 0, "z": 0 }, "charge": "0" },
                { "type": "C", "position": { "x": 0, "y": 0, "z": 0 }, "charge": "0" },
                { "type": "O", "position": { "x": 1.5, "y": 0, "z": 0 }, "charge": "0" }
            ],
            "bonds": [
                { "atom1Index": 0, "atom2Index": 1, "isDouble": false },
                { "atom1Index": 2, "atom2Index": 1, "isDouble": false }
            ]
        }"#;
        let record = parse_record(json).unwrap();
        let mol = build_molecule(ElementTable::builtin(), &record);

        // The unknown first atom is gone; C and O are now indices 0 and 1.
        assert_eq!(mol.atom_count(), 2);
        assert_eq!(mol.atoms()[0].symbol, "C");
        // Bond (2,1) now points past the end and is dropped; bond (0,1)
        // survives but connects different atoms than the author intended.
        // That is the documented index-shift consequence of a bad atom.
        assert_eq!(mol.bond_count(), 1);
        assert_eq!(mol.bonds()[0].atoms.0.as_u32(), 0);
    }

    #[test]
    fn test_out_of_range_bond_is_skipped_others_intact() {
        let mut record = builtin_molecules()[3].clone(); // Methane
        record.bonds.insert(
            1,
            BondRecord {
                atom1_index: 0,
                atom2_index: 99,
                is_double: false,
            },
        );
        record.bonds.push(BondRecord {
            atom1_index: -1,
            atom2_index: 0,
            is_double: false,
        });
        let mol = build_molecule(ElementTable::builtin(), &record);
        assert_eq!(mol.atom_count(), 5);
        assert_eq!(mol.bond_count(), 4); // the original four C-H bonds
    }

    #[test]
    fn test_degenerate_bond_is_skipped() {
        let json = r#"{
            "name": "Overlap",
            "atoms": [
                { "type": "C", "position": { "x": 1, "y": 1, "z": 1 }, "charge": "0" },
                { "type": "C", "position": { "x": 1, "y": 1, "z": 1 }, "charge": "0" }
            ],
            "bonds": [ { "atom1Index": 0, "atom2Index": 1, "isDouble": false } ]
        }"#;
        let record = parse_record(json).unwrap();
        let mol = build_molecule(ElementTable::builtin(), &record);
        assert_eq!(mol.atom_count(), 2);
        assert_eq!(mol.bond_count(), 0);
    }
}
