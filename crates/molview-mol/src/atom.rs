//! Atom data structure
//!
//! A positioned instance of an element with a charge annotation. Display
//! properties (radius, color, metallic) are denormalized from the element
//! table at construction so the renderer never needs the table, and the
//! identity fields survive round-trip export.

use lin_alg::f32::Vec3;

use crate::element::ElementTable;
use crate::error::MolResult;

/// Scale factor from element radius to rendered sphere radius.
///
/// The renderer draws spheres of `radius * ATOM_DISPLAY_SCALE` (times the
/// current view-mode scale); picking uses the same value.
pub const ATOM_DISPLAY_SCALE: f32 = 0.3;

/// A positioned atom within a molecule
///
/// Owned exclusively by its molecule. Immutable after construction; rotation
/// is applied at the molecule level, not per-atom.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Element type symbol (e.g. "C", "Na")
    pub symbol: String,
    /// Human-readable element name
    pub full_name: String,
    /// Charge label, free-form signed string (e.g. "+1", "-1", "0"),
    /// preserved verbatim through import/export
    pub charge: String,
    /// Atomic number
    pub atomic_number: u32,
    /// Atomic weight, verbatim from the element source
    pub atomic_weight: String,
    /// Display radius in world units (before `ATOM_DISPLAY_SCALE`)
    pub radius: f32,
    /// Display color, packed 0xRRGGBB
    pub color: u32,
    /// Whether to render with a metallic material
    pub metallic: bool,
    /// Position in the molecule's model space
    pub position: Vec3,
}

impl Atom {
    /// Construct an atom by resolving `symbol` in the element table.
    ///
    /// Pure function of its inputs. Returns [`crate::MolError::UnknownSymbol`]
    /// when the symbol is not in the table; callers assembling a molecule
    /// skip the atom and continue.
    pub fn from_symbol(
        table: &ElementTable,
        position: Vec3,
        symbol: &str,
        charge: &str,
    ) -> MolResult<Self> {
        let data = table.lookup(symbol)?;
        Ok(Self {
            symbol: data.symbol.clone(),
            full_name: data.full_name.clone(),
            charge: charge.to_string(),
            atomic_number: data.atomic_number,
            atomic_weight: data.atomic_weight.clone(),
            radius: data.radius,
            color: data.color,
            metallic: data.metallic,
            position,
        })
    }

    /// Rendered sphere radius at full (ball-and-stick) scale
    #[inline]
    pub fn display_radius(&self) -> f32 {
        self.radius * ATOM_DISPLAY_SCALE
    }
}
