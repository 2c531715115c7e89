//! Element data table
//!
//! Provides the [`ElementTable`], a load-once lookup from an atom type symbol
//! (e.g. "C", "O", "Na") to its display and physical properties. The table is
//! populated from a declarative JSON source of the form:
//!
//! ```json
//! { "atoms": [ { "name": "C", "fullName": "Carbon", "radius": 1.7,
//!               "color": 3355443, "metallic": false,
//!               "atomicNumber": 6, "atomicWeight": "12.011" }, ... ] }
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::{MolError, MolResult};

/// Bundled default element data, compiled into the library.
const BUILTIN_ELEMENTS: &str = include_str!("../data/elements.json");

static BUILTIN_TABLE: OnceLock<ElementTable> = OnceLock::new();

/// Static properties of an atom type
///
/// `color` is packed 0xRRGGBB. `atomic_weight` is kept as a string so the
/// source data's formatting survives round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementData {
    /// Type symbol, unique table key (e.g. "Na")
    #[serde(rename = "name")]
    pub symbol: String,
    /// Human-readable element name (e.g. "Sodium")
    pub full_name: String,
    /// Display radius in world units
    pub radius: f32,
    /// Display color, packed 0xRRGGBB
    pub color: u32,
    /// Whether the element renders with a metallic material
    pub metallic: bool,
    /// Atomic number
    pub atomic_number: u32,
    /// Atomic weight, verbatim from the data source
    pub atomic_weight: String,
}

/// Top-level shape of the element data source
#[derive(Debug, Deserialize)]
struct ElementFile {
    atoms: Vec<ElementData>,
}

/// Lookup table from atom type symbol to element properties
///
/// Loaded once at startup; read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ElementTable {
    by_symbol: AHashMap<String, ElementData>,
}

impl ElementTable {
    /// Parse an element table from its JSON data source.
    ///
    /// If the source lists a symbol more than once, the last entry wins.
    pub fn from_json(json: &str) -> MolResult<Self> {
        let file: ElementFile =
            serde_json::from_str(json).map_err(|e| MolError::InvalidElementData(e.to_string()))?;

        let mut by_symbol = AHashMap::with_capacity(file.atoms.len());
        for data in file.atoms {
            by_symbol.insert(data.symbol.clone(), data);
        }
        Ok(Self { by_symbol })
    }

    /// The bundled default table.
    ///
    /// Parsed on first use; the bundled data is validated by tests, so the
    /// parse cannot fail at runtime.
    pub fn builtin() -> &'static ElementTable {
        BUILTIN_TABLE.get_or_init(|| {
            ElementTable::from_json(BUILTIN_ELEMENTS)
                .unwrap_or_else(|e| panic!("bundled element data is invalid: {e}"))
        })
    }

    /// Look up an element by symbol.
    ///
    /// Returns [`MolError::UnknownSymbol`] on a miss. Callers constructing
    /// atoms treat this as a per-atom failure, not a fatal one.
    pub fn lookup(&self, symbol: &str) -> MolResult<&ElementData> {
        self.by_symbol
            .get(symbol)
            .ok_or_else(|| MolError::UnknownSymbol(symbol.to_string()))
    }

    /// Look up an element by symbol, returning `None` on a miss.
    pub fn get(&self, symbol: &str) -> Option<&ElementData> {
        self.by_symbol.get(symbol)
    }

    /// Number of known elements
    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }

    /// Iterate over all known elements (unspecified order)
    pub fn iter(&self) -> impl Iterator<Item = &ElementData> {
        self.by_symbol.values()
    }
}
