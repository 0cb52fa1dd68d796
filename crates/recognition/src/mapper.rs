//! Maps recognizer output onto the local ingredient catalog.
//!
//! Each confident item maps to the first catalog ingredient whose name contains
//! the recognised name, or whose category appears inside the recognised name.
//! Only one ingredient is taken per item and nothing is scored.

use lazykitchen_catalog::Ingredient;

use crate::types::RecognizedItem;

pub const CONFIDENCE_THRESHOLD: f32 = 0.6;

fn matches(ingredient: &Ingredient, recognized: &str) -> bool {
    ingredient.name.to_lowercase().contains(recognized)
        || ingredient
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .is_some_and(|c| recognized.contains(&c.to_lowercase()))
}

/// First catalog ingredient matching one recognised item, if any.
pub fn match_item<'a>(item: &RecognizedItem, catalog: &'a [Ingredient]) -> Option<&'a Ingredient> {
    if item.confidence < CONFIDENCE_THRESHOLD {
        return None;
    }

    let recognized = item.name.to_lowercase();
    catalog.iter().find(|i| matches(i, &recognized))
}

/// Catalog ids for the recognised items, in item order.
///
/// Ids may repeat when several items land on the same ingredient; merging into
/// a [`lazykitchen_catalog::Selection`] removes the duplicates.
pub fn map_to_catalog(items: &[RecognizedItem], catalog: &[Ingredient]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| match_item(item, catalog))
        .map(|i| i.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazykitchen_catalog::fixtures;

    #[test]
    fn test_low_confidence_items_are_discarded() {
        let catalog = fixtures::ingredients();
        let items = vec![
            RecognizedItem::new("番茄", 0.59),
            RecognizedItem::new("洋蔥", 0.6),
        ];

        assert_eq!(map_to_catalog(&items, &catalog), vec!["ing-2"]);
    }

    #[test]
    fn test_name_contains_recognized_name() {
        let catalog = fixtures::ingredients();
        let items = vec![RecognizedItem::new("胸肉", 0.9)];
        assert_eq!(map_to_catalog(&items, &catalog), vec!["ing-1"]);
    }

    #[test]
    fn test_category_inside_recognized_name() {
        let catalog = fixtures::ingredients();
        let items = vec![RecognizedItem::new("新鮮蔬菜", 0.8)];

        // 洋蔥 is the first vegetable in the catalog
        assert_eq!(map_to_catalog(&items, &catalog), vec!["ing-2"]);
    }

    #[test]
    fn test_name_inside_category_does_not_match() {
        let catalog = vec![Ingredient::new("a", "Thyme").with_category("Fresh herbs")];
        let items = vec![RecognizedItem::new("herbs", 0.9)];

        assert!(map_to_catalog(&items, &catalog).is_empty());
    }

    #[test]
    fn test_empty_category_matches_nothing() {
        let catalog = vec![
            Ingredient::new("a", "水").with_category(""),
            Ingredient::new("b", "番茄").with_category("蔬菜"),
        ];
        let items = vec![RecognizedItem::new("番茄", 0.9)];

        assert_eq!(map_to_catalog(&items, &catalog), vec!["b"]);
    }

    #[test]
    fn test_first_catalog_match_wins() {
        let catalog = fixtures::ingredients();
        let items = vec![RecognizedItem::new("雞", 0.95)];

        assert_eq!(map_to_catalog(&items, &catalog), vec!["ing-1"]);
    }

    #[test]
    fn test_unmatched_items_are_dropped_and_repeats_kept() {
        let catalog = fixtures::ingredients();
        let items = vec![
            RecognizedItem::new("Tomato", 0.99),
            RecognizedItem::new("番茄", 0.99),
            RecognizedItem::new("番茄", 0.75),
        ];

        assert_eq!(map_to_catalog(&items, &catalog), vec!["ing-8", "ing-8"]);
    }

    #[test]
    fn test_matching_ignores_ascii_case() {
        let catalog = vec![Ingredient::new("b", "Bell Pepper").with_category("Vegetables")];
        let items = vec![
            RecognizedItem::new("PEPPER", 0.7),
            RecognizedItem::new("mixed VEGETABLES", 0.7),
        ];

        assert_eq!(map_to_catalog(&items, &catalog), vec!["b", "b"]);
    }
}
