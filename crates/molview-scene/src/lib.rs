//! Interactive viewer state for molview-rs
//!
//! This crate layers the interactive pieces over `molview-mol` and
//! `molview-io`:
//! - [`MoleculeRegistry`]: named molecules with exclusive selection
//! - [`import_record`]: record import with replace confirmation
//! - [`Ray`]/[`pick_atom`]: CPU ray picking for hover and clicks
//! - [`InputState`]: pointer bookkeeping for the hosting shell
//! - [`Viewer`]: the single entry point a shell drives
//!
//! Everything here is synchronous and single-threaded; the renderer and the
//! event loop live in the hosting shell, which forwards events in and reads
//! state back out each frame.

mod error;
mod import;
mod input;
mod pick;
mod registry;
mod viewer;

pub use error::{SceneError, SceneResult};
pub use import::{import_record, AlwaysReplace, ImportOutcome, NeverReplace, ReplaceConfirm};
pub use input::{InputDelta, InputState, PointerButton};
pub use pick::{pick_atom, PickHit, Ray};
pub use registry::MoleculeRegistry;
pub use viewer::{
    AtomTooltip, Viewer, AUTO_ROTATE_STEP, CAMERA_HOME_DISTANCE, CAMERA_MAX_DISTANCE,
    CAMERA_MIN_DISTANCE,
};
