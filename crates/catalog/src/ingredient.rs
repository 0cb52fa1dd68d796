use serde::{Deserialize, Serialize};

use crate::types::Ingredient;

/// Keyword and category filter for the ingredient picker.
///
/// An ingredient is kept when the keyword is empty or appears (case-insensitive)
/// in its name or category, and when no category is active or the active
/// category equals the ingredient's category. Catalog order is preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientFilter {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl IngredientFilter {
    pub fn new(keyword: impl Into<String>, category: Option<String>) -> Self {
        Self {
            keyword: keyword.into(),
            category,
        }
    }

    pub fn matches(&self, ingredient: &Ingredient) -> bool {
        self.matches_keyword(ingredient) && self.matches_category(ingredient)
    }

    fn matches_keyword(&self, ingredient: &Ingredient) -> bool {
        if self.keyword.is_empty() {
            return true;
        }

        let keyword = self.keyword.to_lowercase();

        ingredient.name.to_lowercase().contains(&keyword)
            || ingredient
                .category
                .as_ref()
                .is_some_and(|c| c.to_lowercase().contains(&keyword))
    }

    fn matches_category(&self, ingredient: &Ingredient) -> bool {
        match &self.category {
            None => true,
            Some(active) => ingredient.category.as_deref() == Some(active.as_str()),
        }
    }

    pub fn apply<'a>(&self, ingredients: &'a [Ingredient]) -> Vec<&'a Ingredient> {
        ingredients.iter().filter(|i| self.matches(i)).collect()
    }
}

/// Distinct, non-empty categories in first-seen order.
pub fn categories(ingredients: &[Ingredient]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();

    for category in ingredients.iter().filter_map(|i| i.category.as_ref()) {
        if !category.is_empty() && !seen.contains(category) {
            seen.push(category.clone());
        }
    }

    seen
}

/// Single-select chip state: choosing the active value again clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveChip(Option<String>);

impl ActiveChip {
    pub fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn toggle(&mut self, value: impl Into<String>) -> Option<&str> {
        let value = value.into();

        if self.0.as_ref() == Some(&value) {
            self.0 = None;
        } else {
            self.0 = Some(value);
        }

        self.get()
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}
