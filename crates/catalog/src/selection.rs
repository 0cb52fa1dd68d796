use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::types::Ingredient;

/// Ingredient ids the user owns, in the order they were picked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Adds the id when absent, removes it when present.
    ///
    /// Returns whether the id is selected afterwards.
    pub fn toggle(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();

        if let Some(pos) = self.ids.iter().position(|i| *i == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Toggles an id, rejecting ids the catalog does not know.
    pub fn toggle_in(&mut self, catalog: &[Ingredient], id: &str) -> CatalogResult<bool> {
        if !catalog.iter().any(|i| i.id == id) {
            return Err(CatalogError::ingredient_not_found(id));
        }

        Ok(self.toggle(id))
    }

    /// Union with `ids`, keeping existing order and skipping duplicates.
    ///
    /// Returns how many ids were newly added.
    pub fn extend<I, S>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.ids.len();

        for id in ids {
            let id = id.into();
            if !self.contains(&id) {
                self.ids.push(id);
            }
        }

        self.ids.len() - before
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn can_proceed(&self) -> bool {
        !self.is_empty()
    }

    /// Fails with [`CatalogError::NothingSelected`] while the selection is empty.
    pub fn ensure_can_proceed(&self) -> CatalogResult<()> {
        if self.can_proceed() {
            Ok(())
        } else {
            Err(CatalogError::NothingSelected)
        }
    }

    /// Selected ingredients in catalog order.
    pub fn resolve<'a>(&self, catalog: &'a [Ingredient]) -> Vec<&'a Ingredient> {
        catalog.iter().filter(|i| self.contains(&i.id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = Selection::default();
        assert!(selection.toggle("ing-1"));
        assert!(selection.contains("ing-1"));
        assert!(!selection.toggle("ing-1"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_in_rejects_unknown_ids() {
        let catalog = fixtures::ingredients();
        let mut selection = Selection::default();

        assert_eq!(
            selection.toggle_in(&catalog, "ing-404"),
            Err(CatalogError::ingredient_not_found("ing-404"))
        );
        assert!(selection.is_empty());
    }

    #[test]
    fn test_extend_is_duplicate_free() {
        let mut selection = Selection::default();
        selection.toggle("ing-2");

        let added = selection.extend(["ing-1", "ing-2", "ing-1", "ing-8"]);

        assert_eq!(added, 2);
        assert_eq!(selection.ids(), ["ing-2", "ing-1", "ing-8"]);
    }

    #[test]
    fn test_resolve_follows_catalog_order() {
        let catalog = fixtures::ingredients();
        let mut selection = Selection::default();
        selection.extend(["ing-8", "ing-1"]);

        let names: Vec<&str> = selection
            .resolve(&catalog)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["雞胸肉", "番茄"]);
    }

    #[test]
    fn test_proceed_requires_a_selection() {
        let mut selection = Selection::default();
        assert!(!selection.can_proceed());
        assert_eq!(
            selection.ensure_can_proceed(),
            Err(CatalogError::NothingSelected)
        );

        selection.toggle("ing-3");
        assert!(selection.can_proceed());
        assert!(selection.ensure_can_proceed().is_ok());
    }
}
