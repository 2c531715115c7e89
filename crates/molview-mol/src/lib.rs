//! molview-rs molecular data structures
//!
//! This crate provides the core data model for the molview viewer:
//!
//! - [`ElementTable`] - atom type symbol → display/physical properties
//! - [`Atom`] - a positioned element instance with a charge label
//! - [`Bond`] - single/double bond rendered as atom-blind cylinder strands
//! - [`Molecule`] - named aggregate with visibility and orientation state
//!
//! # Architecture
//!
//! Atoms are stored in a flat list; bonds reference atoms by index into that
//! list. Strand geometry (midpoint, orientation, length) is computed from the
//! atom positions at construction and retains no atom identity, so exporters
//! must recover connectivity geometrically (see `molview-io`).
//!
//! # Example
//!
//! ```rust
//! use lin_alg::f32::Vec3;
//! use molview_mol::{Atom, BondKind, ElementTable, Molecule};
//!
//! let table = ElementTable::builtin();
//! let mut mol = Molecule::new("Carbon monoxide", "CO");
//!
//! let c = mol.add_atom(Atom::from_symbol(table, Vec3::new(0.0, 0.0, 0.0), "C", "0").unwrap());
//! let o = mol.add_atom(Atom::from_symbol(table, Vec3::new(1.13, 0.0, 0.0), "O", "0").unwrap());
//! mol.add_bond(c, o, BondKind::Double).unwrap();
//!
//! assert_eq!(mol.atom_count(), 2);
//! assert!(mol.bonds()[0].is_double());
//! ```

mod atom;
mod bond;
mod element;
mod error;
mod index;
mod molecule;
mod quat;

pub use atom::{Atom, ATOM_DISPLAY_SCALE};
pub use bond::{
    Bond, BondKind, Strand, BOND_AXIS, DOUBLE_STRAND_OFFSET, DOUBLE_STRAND_RADIUS,
    SINGLE_STRAND_RADIUS,
};
pub use element::{ElementData, ElementTable};
pub use error::{MolError, MolResult};
pub use index::{AtomIndex, BondIndex};
pub use molecule::{Molecule, ViewMode};
pub use quat::Quat;
