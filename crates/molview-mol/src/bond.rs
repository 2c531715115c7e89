//! Bond data structure
//!
//! A bond connects two atoms and is rendered as one cylinder strand (single
//! bond) or two parallel strands (double bond). Strand geometry is derived
//! purely from the two atom positions at construction time; a strand stores
//! midpoint, orientation, length, and radius but no atom identity. Exporters
//! must recover connectivity from that geometry (see `molview-io`). The bond
//! itself additionally records its endpoint indices, which back the molecule's
//! structural invariant and let tests cross-check the geometric inference.

use lin_alg::f32::Vec3;
use smallvec::SmallVec;

use crate::atom::Atom;
use crate::error::{MolError, MolResult};
use crate::index::AtomIndex;
use crate::quat::Quat;

/// Canonical cylinder axis; strand orientation maps this onto the bond direction.
pub const BOND_AXIS: Vec3 = Vec3 {
    x: 0.0,
    y: 1.0,
    z: 0.0,
};

/// Strand radius for a single bond
pub const SINGLE_STRAND_RADIUS: f32 = 0.06;
/// Strand radius for each half of a double bond
pub const DOUBLE_STRAND_RADIUS: f32 = 0.04;
/// Offset of each double-bond strand from the bond axis
pub const DOUBLE_STRAND_OFFSET: f32 = 0.12;

/// Bond multiplicity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondKind {
    /// Single bond, one strand
    #[default]
    Single,
    /// Double bond, two parallel strands
    Double,
}

impl BondKind {
    /// Construct from the wire format's boolean
    #[inline]
    pub fn from_is_double(is_double: bool) -> Self {
        if is_double {
            BondKind::Double
        } else {
            BondKind::Single
        }
    }

    /// Whether this is a double bond
    #[inline]
    pub fn is_double(&self) -> bool {
        *self == BondKind::Double
    }
}

/// One rendered cylinder of a bond
///
/// Pure geometry: deliberately stores no reference to the atoms it connects.
#[derive(Debug, Clone, PartialEq)]
pub struct Strand {
    /// Midpoint of the cylinder in model space
    pub position: Vec3,
    /// Rotation mapping [`BOND_AXIS`] onto the bond direction
    pub orientation: Quat,
    /// Cylinder length (distance between the atom centers)
    pub length: f32,
    /// Cylinder radius
    pub radius: f32,
}

impl Strand {
    /// Reconstruct the strand's start point from its stored geometry
    pub fn start(&self) -> Vec3 {
        self.position - self.direction() * (self.length * 0.5)
    }

    /// Reconstruct the strand's end point from its stored geometry
    pub fn end(&self) -> Vec3 {
        self.position + self.direction() * (self.length * 0.5)
    }

    /// The bond direction encoded in the orientation
    pub fn direction(&self) -> Vec3 {
        self.orientation.rotate(BOND_AXIS)
    }
}

/// A bond between two atoms of the same molecule
#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    /// Endpoint atom indices into the owning molecule's atom list
    pub atoms: (AtomIndex, AtomIndex),
    /// Rendered strands: one for a single bond, two for a double bond
    strands: SmallVec<[Strand; 2]>,
}

impl Bond {
    /// Build a bond between two atoms.
    ///
    /// `i1`/`i2` are the atoms' indices in the owning molecule; the caller is
    /// responsible for their validity. Returns
    /// [`MolError::DegenerateBond`] when the atoms coincide, since the bond
    /// direction is then undefined.
    pub fn between(
        a1: &Atom,
        i1: AtomIndex,
        a2: &Atom,
        i2: AtomIndex,
        kind: BondKind,
    ) -> MolResult<Self> {
        let delta = a2.position - a1.position;
        let length = delta.magnitude();
        if length <= 1e-6 {
            return Err(MolError::DegenerateBond(i1.as_u32(), i2.as_u32()));
        }

        let direction = delta / length;
        let orientation = Quat::from_unit_vectors(BOND_AXIS, direction);
        let midpoint = (a1.position + a2.position) * 0.5;

        let strands = match kind {
            BondKind::Single => {
                let mut s = SmallVec::new();
                s.push(Strand {
                    position: midpoint,
                    orientation,
                    length,
                    radius: SINGLE_STRAND_RADIUS,
                });
                s
            }
            BondKind::Double => {
                let offset = in_plane_perpendicular(direction) * DOUBLE_STRAND_OFFSET;
                let mut s = SmallVec::new();
                for sign in [1.0f32, -1.0] {
                    s.push(Strand {
                        position: midpoint + offset * sign,
                        orientation,
                        length,
                        radius: DOUBLE_STRAND_RADIUS,
                    });
                }
                s
            }
        };

        Ok(Self {
            atoms: (i1, i2),
            strands,
        })
    }

    /// The rendered strands
    #[inline]
    pub fn strands(&self) -> &[Strand] {
        &self.strands
    }

    /// Whether this bond renders as a double bond.
    ///
    /// Derived structurally from the strand count, which is also how export
    /// reconstructs the flag.
    #[inline]
    pub fn is_double(&self) -> bool {
        self.strands.len() > 1
    }

    /// Check if this bond involves the given atom
    #[inline]
    pub fn involves(&self, atom: AtomIndex) -> bool {
        self.atoms.0 == atom || self.atoms.1 == atom
    }
}

/// Perpendicular used to offset double-bond strands.
///
/// `(dir.y, -dir.x, 0)` is a true perpendicular only for bonds lying in the
/// XY plane; for out-of-plane bonds it is an approximation kept from the
/// original layout, which places molecules near that plane. A bond parallel
/// to the Z axis would make the formula degenerate, so that case falls back
/// to the X axis.
fn in_plane_perpendicular(direction: Vec3) -> Vec3 {
    let p = Vec3::new(direction.y, -direction.x, 0.0);
    if p.magnitude_squared() <= 1e-10 {
        Vec3::new(1.0, 0.0, 0.0)
    } else {
        p.to_normalized()
    }
}
