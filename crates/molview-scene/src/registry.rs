//! Molecule registry with name lookup and single selection
//!
//! The registry owns every loaded [`Molecule`] and keeps a name index over
//! them. Selection is exclusive: selecting a molecule hides all others, so at
//! most one molecule is visible at a time.

use ahash::AHashMap;

use molview_mol::{Molecule, ViewMode};

use crate::error::{SceneError, SceneResult};

/// Registry of loaded molecules
///
/// Maintains the invariant that `name_to_index[m.name] == i` for every
/// molecule `m` at position `i`, with no stale entries.
pub struct MoleculeRegistry {
    /// Molecules in load order
    molecules: Vec<Molecule>,
    /// Name lookup into `molecules`
    name_to_index: AHashMap<String, usize>,
    /// Position of the selected molecule, if any
    selected: Option<usize>,
    /// Mode applied to newly selected or imported molecules
    view_mode: ViewMode,
}

impl Default for MoleculeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MoleculeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            molecules: Vec::new(),
            name_to_index: AHashMap::new(),
            selected: None,
            view_mode: ViewMode::BallStick,
        }
    }

    /// Get the number of molecules
    pub fn len(&self) -> usize {
        self.molecules.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.molecules.is_empty()
    }

    /// Check if a molecule with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    /// Add a molecule to the registry
    ///
    /// The molecule keeps its current visibility; call [`select`] to show it.
    /// Fails with [`SceneError::DuplicateName`] if the name is taken; the
    /// import flow removes the old entry first when replacement is confirmed.
    ///
    /// [`select`]: MoleculeRegistry::select
    pub fn add(&mut self, molecule: Molecule) -> SceneResult<usize> {
        if self.name_to_index.contains_key(&molecule.name) {
            return Err(SceneError::DuplicateName(molecule.name.clone()));
        }
        let index = self.molecules.len();
        self.name_to_index.insert(molecule.name.clone(), index);
        self.molecules.push(molecule);
        Ok(index)
    }

    /// Remove a molecule by name
    ///
    /// Later molecules shift down one slot and the name index is rewritten
    /// to match. The selection follows the molecule it pointed at, or clears
    /// if that molecule was the one removed.
    pub fn remove(&mut self, name: &str) -> Option<Molecule> {
        let index = self.name_to_index.remove(name)?;
        let removed = self.molecules.remove(index);

        for slot in self.name_to_index.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };

        Some(removed)
    }

    /// Get a molecule by name
    pub fn get(&self, name: &str) -> Option<&Molecule> {
        self.name_to_index.get(name).map(|&i| &self.molecules[i])
    }

    /// Get mutable access to a molecule by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Molecule> {
        let index = *self.name_to_index.get(name)?;
        Some(&mut self.molecules[index])
    }

    /// Select a molecule by name, hiding every other one
    pub fn select(&mut self, name: &str) -> SceneResult<()> {
        let index = *self
            .name_to_index
            .get(name)
            .ok_or_else(|| SceneError::NotFound(name.to_string()))?;

        for molecule in &mut self.molecules {
            molecule.hide();
        }
        let selected = &mut self.molecules[index];
        selected.show();
        selected.set_view_mode(self.view_mode);
        self.selected = Some(index);
        Ok(())
    }

    /// Get the selected molecule
    pub fn selected(&self) -> Option<&Molecule> {
        self.selected.map(|i| &self.molecules[i])
    }

    /// Get mutable access to the selected molecule
    pub fn selected_mut(&mut self) -> Option<&mut Molecule> {
        self.selected.map(|i| &mut self.molecules[i])
    }

    /// Get the name of the selected molecule
    pub fn selected_name(&self) -> Option<&str> {
        self.selected.map(|i| self.molecules[i].name.as_str())
    }

    /// Get the current view mode
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Set the view mode
    ///
    /// The mode is recorded for future selections and applied to the
    /// selected molecule right away.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        if let Some(i) = self.selected {
            self.molecules[i].set_view_mode(mode);
        }
    }

    /// Iterate over all molecules in load order
    pub fn iter(&self) -> impl Iterator<Item = &Molecule> {
        self.molecules.iter()
    }

    /// Iterate over molecule names in load order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.molecules.iter().map(|m| m.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn molecule(name: &str) -> Molecule {
        Molecule::new(name, "")
    }

    fn assert_index_consistent(registry: &MoleculeRegistry) {
        assert_eq!(registry.name_to_index.len(), registry.molecules.len());
        for (i, m) in registry.molecules.iter().enumerate() {
            assert_eq!(registry.name_to_index[&m.name], i);
        }
    }

    #[test]
    fn test_add_and_lookup() {
        let mut registry = MoleculeRegistry::new();
        registry.add(molecule("Water")).unwrap();
        registry.add(molecule("Methane")).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("Water"));
        assert!(registry.get("Methane").is_some());
        assert!(registry.get("Ethanol").is_none());
        assert_index_consistent(&registry);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = MoleculeRegistry::new();
        registry.add(molecule("Water")).unwrap();

        let err = registry.add(molecule("Water")).unwrap_err();
        assert!(matches!(err, SceneError::DuplicateName(name) if name == "Water"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_middle_reindexes() {
        let mut registry = MoleculeRegistry::new();
        registry.add(molecule("A")).unwrap();
        registry.add(molecule("B")).unwrap();
        registry.add(molecule("C")).unwrap();
        registry.select("C").unwrap();

        let removed = registry.remove("B").unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(registry.len(), 2);
        assert_index_consistent(&registry);
        // Selection followed C down to its new slot.
        assert_eq!(registry.selected_name(), Some("C"));
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut registry = MoleculeRegistry::new();
        registry.add(molecule("A")).unwrap();
        registry.select("A").unwrap();

        registry.remove("A");
        assert!(registry.selected().is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_select_shows_exactly_one() {
        let mut registry = MoleculeRegistry::new();
        registry.add(molecule("A")).unwrap();
        registry.add(molecule("B")).unwrap();

        registry.select("A").unwrap();
        registry.select("B").unwrap();

        let visible: Vec<_> = registry.iter().filter(|m| m.visible).collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "B");
        assert_eq!(registry.selected_name(), Some("B"));
    }

    #[test]
    fn test_select_unknown_fails() {
        let mut registry = MoleculeRegistry::new();
        let err = registry.select("Nothing").unwrap_err();
        assert!(matches!(err, SceneError::NotFound(_)));
    }

    #[test]
    fn test_view_mode_applied_on_select() {
        let mut registry = MoleculeRegistry::new();
        registry.add(molecule("A")).unwrap();
        registry.set_view_mode(ViewMode::Wireframe);

        registry.select("A").unwrap();
        assert_eq!(registry.selected().unwrap().view_mode(), ViewMode::Wireframe);

        registry.set_view_mode(ViewMode::BallStick);
        assert_eq!(registry.selected().unwrap().view_mode(), ViewMode::BallStick);
    }
}
