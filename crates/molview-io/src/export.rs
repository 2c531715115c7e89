//! Molecule → declarative record export
//!
//! Bond strands store no atom identity, so connectivity is re-derived from
//! geometry: each bond's first strand gives a start and end point, and each
//! point is independently matched to the nearest atom in the molecule's atom
//! list. A bond whose two inferred endpoints collapse onto one atom, or whose
//! nearest atom is implausibly far away, is emitted with a soft warning
//! rather than dropped, since the best guess is still the author's most
//! likely intent.

use std::path::Path;

use lin_alg::f32::Vec3;
use molview_mol::{Atom, Molecule, Strand};
use thiserror::Error;

use crate::error::IoResult;
use crate::records::{AtomProperties, AtomRecord, BondRecord, MoleculeRecord};

/// Inferred-endpoint distances beyond this indicate corrupted strand
/// geometry. Legitimate endpoints sit within the double-strand offset
/// (0.12) of an atom center.
pub const DISTANT_ENDPOINT_THRESHOLD: f32 = 0.5;

/// Soft warnings produced while exporting a molecule
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportWarning {
    /// Both inferred endpoints of a bond map to the same atom
    #[error("bond {bond}: both endpoints resolve to atom {atom}")]
    CoincidentEndpoints { bond: usize, atom: u32 },

    /// An inferred endpoint is suspiciously far from every atom
    #[error("bond {bond}: nearest atom is {distance} units from the inferred endpoint")]
    DistantEndpoint { bond: usize, distance: f32 },
}

/// Export a molecule to its declarative record.
///
/// Atoms are emitted verbatim (symbol, position, charge) plus their
/// denormalized display properties. Bonds are reconstructed geometrically;
/// see the module docs. Output is deterministic given the molecule's atom
/// order and strand geometry. Warnings are also logged at `warn`.
pub fn export_molecule(molecule: &Molecule) -> (MoleculeRecord, Vec<ExportWarning>) {
    let atoms = molecule
        .atoms()
        .iter()
        .map(|atom| AtomRecord {
            symbol: atom.symbol.clone(),
            position: atom.position.into(),
            charge: atom.charge.clone(),
            properties: Some(AtomProperties {
                full_name: atom.full_name.clone(),
                radius: atom.radius,
                color: atom.color,
                metallic: atom.metallic,
                atomic_number: atom.atomic_number,
                atomic_weight: atom.atomic_weight.clone(),
            }),
        })
        .collect();

    let mut bonds = Vec::with_capacity(molecule.bond_count());
    let mut warnings = Vec::new();

    for (bond_idx, bond) in molecule.bonds().iter().enumerate() {
        let Some((record, bond_warnings)) = infer_bond(
            bond_idx,
            &bond.strands()[0],
            bond.is_double(),
            molecule.atoms(),
        ) else {
            // No atoms to match against; nothing sensible to emit.
            continue;
        };
        for w in &bond_warnings {
            log::warn!("Export of '{}': {}", molecule.name, w);
        }
        warnings.extend(bond_warnings);
        bonds.push(record);
    }

    let record = MoleculeRecord {
        name: molecule.name.clone(),
        formula: molecule.formula.clone(),
        atoms,
        bonds,
    };
    (record, warnings)
}

/// Reconstruct one bond record from a strand's geometry.
///
/// Each strand endpoint is independently matched to the nearest atom.
/// Warnings flag the two ambiguous outcomes: both endpoints collapsing onto
/// one atom, or an endpoint farther than [`DISTANT_ENDPOINT_THRESHOLD`] from
/// every atom. The record is emitted either way. Returns `None` only when
/// `atoms` is empty.
fn infer_bond(
    bond: usize,
    strand: &Strand,
    is_double: bool,
    atoms: &[Atom],
) -> Option<(BondRecord, Vec<ExportWarning>)> {
    let (i1, d1) = closest_atom(strand.start(), atoms)?;
    let (i2, d2) = closest_atom(strand.end(), atoms)?;

    let mut warnings = Vec::new();
    let worst = d1.max(d2);
    if worst > DISTANT_ENDPOINT_THRESHOLD {
        warnings.push(ExportWarning::DistantEndpoint {
            bond,
            distance: worst,
        });
    }
    if i1 == i2 {
        warnings.push(ExportWarning::CoincidentEndpoints {
            bond,
            atom: i1 as u32,
        });
    }

    let record = BondRecord {
        atom1_index: i1 as i32,
        atom2_index: i2 as i32,
        is_double,
    };
    Some((record, warnings))
}

/// Index and distance of the atom closest to `point`.
///
/// First atom at the minimum distance wins; ties are not broken further.
fn closest_atom(point: Vec3, atoms: &[Atom]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, atom) in atoms.iter().enumerate() {
        let distance = (atom.position - point).magnitude();
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((i, distance));
        }
    }
    best
}

/// Serialize a record as pretty JSON (2-space indent, the download format).
pub fn to_json_string(record: &MoleculeRecord) -> IoResult<String> {
    serde_json::to_string_pretty(record)
        .map_err(|e| crate::error::IoError::InvalidFormat(e.to_string()))
}

/// Derive the download filename from a molecule name:
/// lowercase, whitespace runs collapsed to `_`, `.json` suffix.
pub fn export_filename(name: &str) -> String {
    let stem = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    format!("{stem}.json")
}

/// Write a record to a file as pretty JSON.
pub fn write_record_file(record: &MoleculeRecord, path: &Path) -> IoResult<()> {
    let json = to_json_string(record)?;
    std::fs::write(path, json)?;
    Ok(())
}
