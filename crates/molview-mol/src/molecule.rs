//! Molecule container
//!
//! Provides the [`Molecule`] aggregate: a named, ordered collection of atoms
//! and bonds with visibility, orientation, and view-mode display state.
//! Assembly from declarative records lives in `molview-io`; this module
//! provides the building primitives it uses.

use lin_alg::f32::Vec3;

use crate::atom::Atom;
use crate::bond::{Bond, BondKind};
use crate::error::{MolError, MolResult};
use crate::index::{AtomIndex, BondIndex};

/// Display mode for a molecule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Solid spheres and cylinders at full scale
    #[default]
    BallStick,
    /// Wireframe materials, atoms shrunk to 80%, bonds semi-transparent
    Wireframe,
}

impl ViewMode {
    /// Parse the UI-facing mode name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ball-stick" => Some(ViewMode::BallStick),
            "wireframe" => Some(ViewMode::Wireframe),
            _ => None,
        }
    }

    /// The UI-facing mode name
    pub fn name(&self) -> &'static str {
        match self {
            ViewMode::BallStick => "ball-stick",
            ViewMode::Wireframe => "wireframe",
        }
    }

    /// Scale applied to atom spheres in this mode
    #[inline]
    pub fn atom_scale(&self) -> f32 {
        match self {
            ViewMode::BallStick => 1.0,
            ViewMode::Wireframe => 0.8,
        }
    }

    /// Whether materials render as wireframe in this mode
    #[inline]
    pub fn wireframe(&self) -> bool {
        *self == ViewMode::Wireframe
    }

    /// Bond material opacity in this mode
    #[inline]
    pub fn bond_opacity(&self) -> f32 {
        match self {
            ViewMode::BallStick => 1.0,
            ViewMode::Wireframe => 0.7,
        }
    }
}

/// A named aggregate of atoms and bonds
///
/// Bonds reference atoms by index into the atom list; `add_bond` enforces
/// that both endpoints exist, so a constructed molecule always satisfies the
/// containment invariant. Visibility and rotation apply to the aggregate as
/// a whole, never per-element.
#[derive(Debug, Clone)]
pub struct Molecule {
    /// Display name, unique within a registry
    pub name: String,
    /// Chemical formula, informational only
    pub formula: String,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    /// Whether the molecule is currently shown
    pub visible: bool,
    /// Orientation as Euler angles, applied X then Y then Z
    pub rotation: Vec3,
    view_mode: ViewMode,
}

impl Molecule {
    /// Create an empty molecule
    pub fn new(name: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
            atoms: Vec::new(),
            bonds: Vec::new(),
            visible: true,
            rotation: Vec3::new(0.0, 0.0, 0.0),
            view_mode: ViewMode::default(),
        }
    }

    /// Append an atom, returning its index
    pub fn add_atom(&mut self, atom: Atom) -> AtomIndex {
        self.atoms.push(atom);
        AtomIndex::from(self.atoms.len() - 1)
    }

    /// Create a bond between two existing atoms, returning its index.
    ///
    /// Fails with [`MolError::AtomIndexOutOfBounds`] if either index is not
    /// in range, or [`MolError::DegenerateBond`] if the atoms coincide.
    pub fn add_bond(
        &mut self,
        i1: AtomIndex,
        i2: AtomIndex,
        kind: BondKind,
    ) -> MolResult<BondIndex> {
        let count = self.atoms.len();
        for idx in [i1, i2] {
            if idx.as_usize() >= count {
                return Err(MolError::AtomIndexOutOfBounds(idx.as_u32(), count));
            }
        }
        let bond = Bond::between(
            &self.atoms[i1.as_usize()],
            i1,
            &self.atoms[i2.as_usize()],
            i2,
            kind,
        )?;
        self.bonds.push(bond);
        Ok(BondIndex::from(self.bonds.len() - 1))
    }

    /// All atoms in insertion order
    #[inline]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// All bonds in insertion order
    #[inline]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Get an atom by index
    pub fn atom(&self, index: AtomIndex) -> Option<&Atom> {
        self.atoms.get(index.as_usize())
    }

    /// Number of atoms
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Number of bonds
    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Hide the whole molecule (single aggregate flag)
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Show the whole molecule
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Set the orientation to absolute Euler angles
    pub fn rotate(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Vec3::new(x, y, z);
    }

    /// Apply a rotation delta around the X axis
    pub fn rotate_x(&mut self, delta: f32) {
        self.rotation.x += delta;
    }

    /// Apply a rotation delta around the Y axis
    pub fn rotate_y(&mut self, delta: f32) {
        self.rotation.y += delta;
    }

    /// Current view mode
    #[inline]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switch display mode.
    ///
    /// A pure display-state transform, idempotent; the renderer reads the
    /// derived parameters ([`ViewMode::atom_scale`] and friends).
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// An atom's position with the molecule's rotation applied.
    ///
    /// Used by picking, which works in world space while atoms are stored in
    /// model space.
    pub fn world_atom_position(&self, index: AtomIndex) -> Option<Vec3> {
        self.atom(index)
            .map(|a| euler_xyz_rotate(self.rotation, a.position))
    }
}

/// Rotate `v` by Euler angles applied X, then Y, then Z.
fn euler_xyz_rotate(angles: Vec3, v: Vec3) -> Vec3 {
    let (sx, cx) = angles.x.sin_cos();
    let (sy, cy) = angles.y.sin_cos();
    let (sz, cz) = angles.z.sin_cos();

    let v = Vec3::new(v.x, cx * v.y - sx * v.z, sx * v.y + cx * v.z);
    let v = Vec3::new(cy * v.x + sy * v.z, v.y, -sy * v.x + cy * v.z);
    Vec3::new(cz * v.x - sz * v.y, sz * v.x + cz * v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementTable;

    fn carbon_at(x: f32, y: f32, z: f32) -> Atom {
        Atom::from_symbol(ElementTable::builtin(), Vec3::new(x, y, z), "C", "0").unwrap()
    }

    #[test]
    fn test_add_atom_and_bond() {
        let mut mol = Molecule::new("Test", "C2");
        let a = mol.add_atom(carbon_at(0.0, 0.0, 0.0));
        let b = mol.add_atom(carbon_at(1.5, 0.0, 0.0));
        mol.add_bond(a, b, BondKind::Single).unwrap();

        assert_eq!(mol.atom_count(), 2);
        assert_eq!(mol.bond_count(), 1);
        assert_eq!(mol.bonds()[0].atoms, (a, b));
    }

    #[test]
    fn test_add_bond_rejects_out_of_range_index() {
        let mut mol = Molecule::new("Test", "");
        let a = mol.add_atom(carbon_at(0.0, 0.0, 0.0));
        let result = mol.add_bond(a, AtomIndex(5), BondKind::Single);
        assert!(matches!(result, Err(MolError::AtomIndexOutOfBounds(5, 1))));
        assert_eq!(mol.bond_count(), 0);
    }

    #[test]
    fn test_visibility_is_aggregate() {
        let mut mol = Molecule::new("Test", "");
        assert!(mol.visible);
        mol.hide();
        assert!(!mol.visible);
        mol.show();
        assert!(mol.visible);
    }

    #[test]
    fn test_view_mode_parameters() {
        let mut mol = Molecule::new("Test", "");
        assert_eq!(mol.view_mode(), ViewMode::BallStick);
        assert_eq!(mol.view_mode().atom_scale(), 1.0);

        mol.set_view_mode(ViewMode::Wireframe);
        assert_eq!(mol.view_mode().atom_scale(), 0.8);
        assert!(mol.view_mode().wireframe());
        assert_eq!(mol.view_mode().bond_opacity(), 0.7);

        // Idempotent
        mol.set_view_mode(ViewMode::Wireframe);
        assert_eq!(mol.view_mode(), ViewMode::Wireframe);
    }

    #[test]
    fn test_view_mode_names() {
        assert_eq!(ViewMode::from_name("ball-stick"), Some(ViewMode::BallStick));
        assert_eq!(ViewMode::from_name("wireframe"), Some(ViewMode::Wireframe));
        assert_eq!(ViewMode::from_name("cartoon"), None);
        assert_eq!(ViewMode::Wireframe.name(), "wireframe");
    }

    #[test]
    fn test_rotation_deltas_accumulate() {
        let mut mol = Molecule::new("Test", "");
        mol.rotate_y(0.005);
        mol.rotate_y(0.005);
        assert!((mol.rotation.y - 0.01).abs() < 1e-6);
        mol.rotate(0.0, 0.0, 0.0);
        assert_eq!(mol.rotation.y, 0.0);
    }

    #[test]
    fn test_world_atom_position_applies_rotation() {
        let mut mol = Molecule::new("Test", "");
        let a = mol.add_atom(carbon_at(1.0, 0.0, 0.0));
        mol.rotate(0.0, std::f32::consts::FRAC_PI_2, 0.0);
        let p = mol.world_atom_position(a).unwrap();
        // +X rotated 90 degrees about Y lands on -Z
        assert!(p.x.abs() < 1e-6);
        assert!((p.z + 1.0).abs() < 1e-6);
    }
}
