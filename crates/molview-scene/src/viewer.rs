//! High-level viewer state
//!
//! [`Viewer`] ties the pieces together for a hosting shell: the molecule
//! registry, the element table, pointer input, hover picking, auto-rotation
//! and the camera distance. Rendering itself stays outside; the viewer hands
//! the shell everything it needs to draw and reacts to the events the shell
//! forwards.

use molview_io::{export_filename, export_molecule, ExportWarning, MoleculeRecord};
use molview_mol::{AtomIndex, ElementTable, Molecule, ViewMode};

use crate::error::{SceneError, SceneResult};
use crate::import::{import_record, ImportOutcome, ReplaceConfirm};
use crate::input::{InputDelta, InputState};
use crate::pick::{pick_atom, Ray};
use crate::registry::MoleculeRegistry;

/// Rotation per frame while auto-rotation is on (radians)
pub const AUTO_ROTATE_STEP: f32 = 0.005;

/// Home camera distance
pub const CAMERA_HOME_DISTANCE: f32 = 10.0;

/// Closest the camera may zoom
pub const CAMERA_MIN_DISTANCE: f32 = 4.0;

/// Farthest the camera may zoom
pub const CAMERA_MAX_DISTANCE: f32 = 20.0;

/// Tooltip data for a hovered atom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomTooltip {
    /// Element symbol
    pub symbol: String,
    /// Full element name
    pub full_name: String,
    /// Atomic number
    pub atomic_number: u32,
    /// Atomic weight, as displayed
    pub atomic_weight: String,
    /// Formal charge, as displayed
    pub charge: String,
}

/// Interactive viewer state
pub struct Viewer {
    registry: MoleculeRegistry,
    table: &'static ElementTable,
    input: InputState,
    auto_rotate: bool,
    camera_distance: f32,
    camera_offset: (f32, f32),
    hovered: Option<AtomIndex>,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewer {
    /// Create an empty viewer
    pub fn new() -> Self {
        Self {
            registry: MoleculeRegistry::new(),
            table: ElementTable::builtin(),
            input: InputState::new(),
            auto_rotate: true,
            camera_distance: CAMERA_HOME_DISTANCE,
            camera_offset: (0.0, 0.0),
            hovered: None,
        }
    }

    /// Create a viewer preloaded with the bundled molecules
    ///
    /// The first bundled molecule is selected.
    pub fn with_builtin_molecules() -> Self {
        let mut viewer = Self::new();
        let mut first: Option<String> = None;
        for record in molview_io::builtin_molecules() {
            let molecule = molview_io::build_molecule(viewer.table, record);
            if let Err(err) = viewer.registry.add(molecule) {
                log::warn!("skipping bundled molecule: {err}");
                continue;
            }
            if first.is_none() {
                first = Some(record.name.clone());
            }
        }
        if let Some(name) = first {
            // Names come straight out of the registry, so this cannot miss.
            let _ = viewer.registry.select(&name);
        }
        viewer
    }

    /// Access the molecule registry
    pub fn registry(&self) -> &MoleculeRegistry {
        &self.registry
    }

    /// Access the input state, for forwarding pointer events
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Get the element table the viewer assembles molecules with
    pub fn element_table(&self) -> &'static ElementTable {
        self.table
    }

    /// Select a molecule by name
    pub fn select_molecule(&mut self, name: &str) -> SceneResult<()> {
        self.hovered = None;
        self.registry.select(name)
    }

    /// Get the selected molecule
    pub fn selected(&self) -> Option<&Molecule> {
        self.registry.selected()
    }

    /// Set the view mode for the selected molecule and future selections
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.registry.set_view_mode(mode);
    }

    /// Toggle auto-rotation, returning the new state
    pub fn toggle_rotation(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    /// Check if auto-rotation is on
    pub fn is_rotating(&self) -> bool {
        self.auto_rotate
    }

    /// Export the selected molecule as a record
    ///
    /// Fails with [`SceneError::NoSelection`] when nothing is selected.
    /// Export warnings are reported alongside the record (and logged by the
    /// exporter); the record is produced regardless.
    pub fn export_current(&self) -> SceneResult<(MoleculeRecord, Vec<ExportWarning>)> {
        let molecule = self.registry.selected().ok_or(SceneError::NoSelection)?;
        Ok(export_molecule(molecule))
    }

    /// Suggested download filename for the selected molecule
    pub fn export_current_filename(&self) -> SceneResult<String> {
        let molecule = self.registry.selected().ok_or(SceneError::NoSelection)?;
        Ok(export_filename(&molecule.name))
    }

    /// Import a parsed record, replacing a same-name molecule on confirmation
    pub fn import_record(
        &mut self,
        record: &MoleculeRecord,
        confirm: &mut dyn ReplaceConfirm,
    ) -> SceneResult<ImportOutcome> {
        self.hovered = None;
        import_record(&mut self.registry, self.table, record, confirm)
    }

    /// Pick the atom under the pointer and build its tooltip
    ///
    /// Remembers the hovered atom index so the renderer can highlight it;
    /// a miss clears the highlight.
    pub fn hover(&mut self, ray: &Ray) -> Option<AtomTooltip> {
        let molecule = self.registry.selected()?;
        let hit = pick_atom(molecule, ray);
        self.hovered = hit.map(|h| h.atom_index);

        let atom = molecule.atom(hit?.atom_index)?;
        Some(AtomTooltip {
            symbol: atom.symbol.clone(),
            full_name: atom.full_name.clone(),
            atomic_number: atom.atomic_number,
            atomic_weight: atom.atomic_weight.clone(),
            charge: atom.charge.clone(),
        })
    }

    /// Get the currently hovered atom, if any
    pub fn hovered_atom(&self) -> Option<AtomIndex> {
        self.hovered
    }

    /// Rotate the selected molecule by a pointer drag (pixels)
    pub fn drag_rotate(&mut self, dx: f32, dy: f32) {
        if let Some(molecule) = self.registry.selected_mut() {
            molecule.rotate_x(dy * self.input.rotate_sensitivity);
            molecule.rotate_y(dx * self.input.rotate_sensitivity);
        }
    }

    /// Zoom the camera; positive delta moves closer
    pub fn wheel_zoom(&mut self, delta: f32) {
        self.camera_distance =
            (self.camera_distance - delta).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Pan the camera in view space (pixels)
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.camera_offset.0 += dx;
        self.camera_offset.1 += dy;
    }

    /// Current camera distance
    pub fn camera_distance(&self) -> f32 {
        self.camera_distance
    }

    /// Current camera pan offset
    pub fn camera_offset(&self) -> (f32, f32) {
        self.camera_offset
    }

    /// Reset molecule rotation and camera to the home view
    pub fn reset_view(&mut self) {
        if let Some(molecule) = self.registry.selected_mut() {
            molecule.rotation = lin_alg::f32::Vec3::new(0.0, 0.0, 0.0);
        }
        self.camera_distance = CAMERA_HOME_DISTANCE;
        self.camera_offset = (0.0, 0.0);
    }

    /// Advance one frame: drain input, then auto-rotate
    ///
    /// Auto-rotation pauses while a drag is in progress so the molecule does
    /// not fight the pointer.
    pub fn tick(&mut self) {
        for delta in self.input.take_deltas() {
            match delta {
                InputDelta::RotateMolecule { x, y } => {
                    if let Some(molecule) = self.registry.selected_mut() {
                        molecule.rotate_x(x);
                        molecule.rotate_y(y);
                    }
                }
                InputDelta::PanCamera { x, y } => self.pan(x, y),
                InputDelta::Zoom(delta) => self.wheel_zoom(delta),
                InputDelta::ResetView => self.reset_view(),
            }
        }

        if self.auto_rotate && !self.input.dragging() {
            if let Some(molecule) = self.registry.selected_mut() {
                molecule.rotate_y(AUTO_ROTATE_STEP);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::AlwaysReplace;
    use crate::input::PointerButton;
    use lin_alg::f32::Vec3;

    #[test]
    fn test_builtin_viewer_selects_first() {
        let viewer = Viewer::with_builtin_molecules();
        assert_eq!(viewer.registry().len(), 6);
        assert_eq!(viewer.registry().selected_name(), Some("Baking soda"));
        assert!(viewer.selected().unwrap().visible);
    }

    #[test]
    fn test_export_requires_selection() {
        let viewer = Viewer::new();
        assert!(matches!(
            viewer.export_current(),
            Err(SceneError::NoSelection)
        ));
    }

    #[test]
    fn test_export_current_filename() {
        let mut viewer = Viewer::with_builtin_molecules();
        viewer.select_molecule("Baking soda").unwrap();
        assert_eq!(viewer.export_current_filename().unwrap(), "baking_soda.json");
    }

    #[test]
    fn test_tick_auto_rotates_selected() {
        let mut viewer = Viewer::with_builtin_molecules();
        let before = viewer.selected().unwrap().rotation.y;
        viewer.tick();
        let after = viewer.selected().unwrap().rotation.y;
        assert!((after - before - AUTO_ROTATE_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_auto_rotation_pauses_during_drag() {
        let mut viewer = Viewer::with_builtin_molecules();
        viewer.input_mut().handle_button(PointerButton::Primary, true);
        let before = viewer.selected().unwrap().rotation.y;
        viewer.tick();
        assert_eq!(viewer.selected().unwrap().rotation.y, before);
    }

    #[test]
    fn test_toggle_rotation() {
        let mut viewer = Viewer::with_builtin_molecules();
        assert!(viewer.is_rotating());
        assert!(!viewer.toggle_rotation());

        let before = viewer.selected().unwrap().rotation.y;
        viewer.tick();
        assert_eq!(viewer.selected().unwrap().rotation.y, before);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut viewer = Viewer::new();
        viewer.wheel_zoom(100.0);
        assert_eq!(viewer.camera_distance(), CAMERA_MIN_DISTANCE);
        viewer.wheel_zoom(-100.0);
        assert_eq!(viewer.camera_distance(), CAMERA_MAX_DISTANCE);
    }

    #[test]
    fn test_reset_view() {
        let mut viewer = Viewer::with_builtin_molecules();
        viewer.drag_rotate(50.0, 30.0);
        viewer.wheel_zoom(3.0);
        viewer.pan(5.0, -2.0);

        viewer.reset_view();
        let molecule = viewer.selected().unwrap();
        assert_eq!(molecule.rotation, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(viewer.camera_distance(), CAMERA_HOME_DISTANCE);
        assert_eq!(viewer.camera_offset(), (0.0, 0.0));
    }

    #[test]
    fn test_hover_reports_and_clears() {
        let mut viewer = Viewer::with_builtin_molecules();
        viewer.select_molecule("Water").unwrap();

        // Oxygen sits at the origin of the bundled water molecule.
        let hit_ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let tooltip = viewer.hover(&hit_ray).unwrap();
        assert_eq!(tooltip.symbol, "O");
        assert_eq!(tooltip.full_name, "Oxygen");
        assert_eq!(tooltip.atomic_number, 8);
        assert!(viewer.hovered_atom().is_some());

        let miss_ray = Ray::new(Vec3::new(50.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(viewer.hover(&miss_ray).is_none());
        assert!(viewer.hovered_atom().is_none());
    }

    #[test]
    fn test_import_through_viewer() {
        let mut viewer = Viewer::with_builtin_molecules();
        let record = molview_io::parse_record(
            r#"{
                "name": "Probe",
                "atoms": [
                    { "type": "C", "position": { "x": 0, "y": 0, "z": 0 }, "charge": "0" }
                ],
                "bonds": []
            }"#,
        )
        .unwrap();

        let outcome = viewer.import_record(&record, &mut AlwaysReplace).unwrap();
        assert_eq!(outcome, ImportOutcome::Imported { replaced: false });
        assert_eq!(viewer.registry().selected_name(), Some("Probe"));
    }
}
