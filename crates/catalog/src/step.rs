use serde::Serialize;

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Recipe, RecipeStep};

/// Position within a recipe's cooking steps.
///
/// `next` and `prev` stop at the ends instead of wrapping.
#[derive(Clone, Debug)]
pub struct StepCursor<'a> {
    steps: &'a [RecipeStep],
    index: usize,
}

#[derive(Debug, Serialize)]
pub struct StepView<'a> {
    pub index: usize,
    pub number: usize,
    pub total: usize,
    pub step: &'a RecipeStep,
    pub progress: f32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<'a> StepCursor<'a> {
    pub fn new(recipe: &'a Recipe) -> CatalogResult<Self> {
        if recipe.steps.is_empty() {
            return Err(CatalogError::NoSteps {
                recipe_id: recipe.id.clone(),
            });
        }

        Ok(Self {
            steps: &recipe.steps,
            index: 0,
        })
    }

    pub fn at(recipe: &'a Recipe, index: usize) -> CatalogResult<Self> {
        let mut cursor = Self::new(recipe)?;
        cursor.go_to(index)?;
        Ok(cursor)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'a RecipeStep {
        &self.steps[self.index]
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.steps.len()
    }

    pub fn next(&mut self) -> &'a RecipeStep {
        if self.has_next() {
            self.index += 1;
        }
        self.current()
    }

    pub fn prev(&mut self) -> &'a RecipeStep {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    pub fn go_to(&mut self, index: usize) -> CatalogResult<&'a RecipeStep> {
        if index >= self.steps.len() {
            return Err(CatalogError::StepOutOfRange {
                index,
                len: self.steps.len(),
            });
        }

        self.index = index;
        Ok(self.current())
    }

    /// Completion percentage including the current step.
    pub fn progress(&self) -> f32 {
        (self.index + 1) as f32 / self.steps.len() as f32 * 100.0
    }

    pub fn view(&self) -> StepView<'a> {
        StepView {
            index: self.index,
            number: self.index + 1,
            total: self.steps.len(),
            step: self.current(),
            progress: self.progress(),
            has_prev: self.has_prev(),
            has_next: self.has_next(),
        }
    }
}
