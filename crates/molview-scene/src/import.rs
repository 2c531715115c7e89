//! Registry-level import flow
//!
//! Wraps the record-level parsing and assembly from `molview-io` with the
//! interactive policy: a record whose name collides with a loaded molecule
//! replaces it only after confirmation, and a freshly imported molecule is
//! selected and shown in the current view mode.

use molview_io::{build_molecule, MoleculeRecord};
use molview_mol::ElementTable;

use crate::error::SceneResult;
use crate::registry::MoleculeRegistry;

/// Decision hook for name collisions on import
///
/// The viewer shell supplies the interactive prompt; [`AlwaysReplace`] and
/// [`NeverReplace`] cover headless and test use.
pub trait ReplaceConfirm {
    /// Should the molecule `name` be replaced by the incoming record?
    fn confirm_replace(&mut self, name: &str) -> bool;
}

/// Replace on collision without asking
pub struct AlwaysReplace;

impl ReplaceConfirm for AlwaysReplace {
    fn confirm_replace(&mut self, _name: &str) -> bool {
        true
    }
}

/// Keep the existing molecule on collision
pub struct NeverReplace;

impl ReplaceConfirm for NeverReplace {
    fn confirm_replace(&mut self, _name: &str) -> bool {
        false
    }
}

/// Result of an import attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The molecule was registered and selected
    Imported {
        /// Whether an existing molecule of the same name was replaced
        replaced: bool,
    },
    /// A same-name collision was declined; the registry is unchanged
    Cancelled,
}

/// Import a parsed record into the registry
///
/// The registry is untouched unless the record validates and any name
/// collision is confirmed. On success the new molecule is selected, so it is
/// the only visible one, and the registry's current view mode applies to it.
pub fn import_record(
    registry: &mut MoleculeRegistry,
    table: &ElementTable,
    record: &MoleculeRecord,
    confirm: &mut dyn ReplaceConfirm,
) -> SceneResult<ImportOutcome> {
    record.validate()?;

    let replaced = if registry.contains(&record.name) {
        if !confirm.confirm_replace(&record.name) {
            log::info!("import of '{}' cancelled", record.name);
            return Ok(ImportOutcome::Cancelled);
        }
        registry.remove(&record.name);
        true
    } else {
        false
    };

    let molecule = build_molecule(table, record);
    registry.add(molecule)?;
    registry.select(&record.name)?;

    log::info!(
        "imported '{}' ({} atoms, {} bonds){}",
        record.name,
        registry.selected().map(|m| m.atom_count()).unwrap_or(0),
        registry.selected().map(|m| m.bond_count()).unwrap_or(0),
        if replaced { ", replacing previous" } else { "" }
    );
    Ok(ImportOutcome::Imported { replaced })
}
