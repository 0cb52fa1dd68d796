use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::ingredient::ActiveChip;
use crate::types::{Comment, Recipe};

/// How many recipes the detail view suggests next to the current one.
pub const RELATED_RECIPES: usize = 3;

/// A tag chip on the recommendation view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TagChip {
    pub id: &'static str,
    pub name: &'static str,
    pub tag: &'static str,
}

pub const RECOMMENDED_TAGS: [TagChip; 4] = [
    TagChip {
        id: "hot",
        name: "🔥 熱門",
        tag: "家常菜",
    },
    TagChip {
        id: "protein",
        name: "💪 高蛋白",
        tag: "高蛋白",
    },
    TagChip {
        id: "simple",
        name: "🧂 極簡料理",
        tag: "簡易",
    },
    TagChip {
        id: "season",
        name: "📅 季節推薦",
        tag: "快速",
    },
];

/// Single-select tag filter; toggling the active tag clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFilter {
    active: ActiveChip,
}

impl TagFilter {
    pub fn active(&self) -> Option<&str> {
        self.active.get()
    }

    pub fn toggle(&mut self, tag: impl Into<String>) -> Option<&str> {
        self.active.toggle(tag)
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        match self.active() {
            None => recipes.iter().collect(),
            Some(tag) => recipes.iter().filter(|r| r.has_tag(tag)).collect(),
        }
    }
}

/// The recipe catalog together with the user's favorite flags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
    comments: Vec<Comment>,
}

impl RecipeBook {
    pub fn new(recipes: Vec<Recipe>, comments: Vec<Comment>) -> Self {
        Self { recipes, comments }
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn find(&self, id: &str) -> CatalogResult<&Recipe> {
        self.recipes
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CatalogError::recipe_not_found(id))
    }

    /// The recipe with `id`, or the first recipe when no id is given.
    pub fn find_or_first(&self, id: Option<&str>) -> CatalogResult<&Recipe> {
        match id {
            Some(id) => self.find(id),
            None => self
                .recipes
                .first()
                .ok_or_else(|| CatalogError::recipe_not_found("")),
        }
    }

    /// Flips `is_favorite` on one recipe and returns the new value.
    pub fn toggle_favorite(&mut self, id: &str) -> CatalogResult<bool> {
        let recipe = self
            .recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| CatalogError::recipe_not_found(id))?;

        recipe.is_favorite = !recipe.is_favorite;

        tracing::debug!(recipe_id = %id, is_favorite = recipe.is_favorite, "Recipe favorite toggled");

        Ok(recipe.is_favorite)
    }

    pub fn favorites(&self) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.is_favorite).collect()
    }

    pub fn comments_for(&self, recipe_id: &str) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| c.recipe_id == recipe_id)
            .collect()
    }

    pub fn related(&self) -> Vec<&Recipe> {
        self.recipes.iter().take(RELATED_RECIPES).collect()
    }
}

/// Star rating shown on related recipe cards, derived from the like count.
pub fn display_rating(recipe: &Recipe) -> f32 {
    match recipe.community_stats.likes {
        0 => 4.5,
        likes => 4.0 + (likes % 10) as f32 / 10.0,
    }
}
