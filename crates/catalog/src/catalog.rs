use std::collections::HashSet;

use crate::error::{CatalogError, CatalogResult};
use crate::fixtures;
use crate::types::{Comment, CookingTip, Ingredient, Recipe};

/// Everything the application serves, as loaded at start-up.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub ingredients: Vec<Ingredient>,
    pub recipes: Vec<Recipe>,
    pub comments: Vec<Comment>,
    pub tips: Vec<CookingTip>,
}

impl Catalog {
    /// The built-in data set.
    pub fn builtin() -> Self {
        Self {
            ingredients: fixtures::ingredients(),
            recipes: fixtures::recipes(),
            comments: fixtures::comments(),
            tips: fixtures::cooking_tips(),
        }
    }

    /// Checks id uniqueness per collection and dense 1-based step order.
    pub fn validate(&self) -> CatalogResult<()> {
        unique_ids("Ingredient", self.ingredients.iter().map(|i| i.id.as_str()))?;
        unique_ids("Recipe", self.recipes.iter().map(|r| r.id.as_str()))?;
        unique_ids("Cooking tip", self.tips.iter().map(|t| t.id.as_str()))?;

        for recipe in &self.recipes {
            validate_steps(recipe)?;
        }

        Ok(())
    }
}

fn unique_ids<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> CatalogResult<()> {
    let mut seen = HashSet::new();

    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_owned(),
            });
        }
    }

    Ok(())
}

pub fn validate_steps(recipe: &Recipe) -> CatalogResult<()> {
    for (position, step) in (1u16..).zip(&recipe.steps) {
        if step.order != position {
            return Err(CatalogError::StepOrder {
                recipe_id: recipe.id.clone(),
                expected: position,
                found: step.order,
            });
        }
    }

    Ok(())
}
