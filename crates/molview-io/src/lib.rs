//! Declarative record formats and import/export for molview-rs
//!
//! This crate owns the JSON wire format shared by the bundled data sources
//! and user import/export files, and the two conversions around it:
//!
//! - [`import::build_molecule`] - declarative record → live [`molview_mol::Molecule`]
//! - [`export::export_molecule`] - live molecule → declarative record, with
//!   bond connectivity re-derived from strand geometry alone
//!
//! Registry-level import flow (replace confirmation, selection, view modes)
//! lives in `molview-scene`; this crate stays at the record level.

pub mod export;
pub mod import;

mod error;
mod records;

pub use error::{IoError, IoResult};
pub use export::{
    export_filename, export_molecule, to_json_string, write_record_file, ExportWarning,
    DISTANT_ENDPOINT_THRESHOLD,
};
pub use import::{build_molecule, parse_record, read_record_file};
pub use records::{
    builtin_molecules, AtomProperties, AtomRecord, BondRecord, MoleculeFile, MoleculeRecord,
    PositionRecord,
};
