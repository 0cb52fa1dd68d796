use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Recipe {recipe_id} has step order {found} at position {expected}")]
    StepOrder {
        recipe_id: String,
        expected: u16,
        found: u16,
    },

    #[error("Recipe {recipe_id} has no steps")]
    NoSteps { recipe_id: String },

    #[error("Step {index} is out of range for a recipe with {len} steps")]
    StepOutOfRange { index: usize, len: usize },

    #[error("Select at least one ingredient first")]
    NothingSelected,
}

impl CatalogError {
    pub fn ingredient_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "Ingredient",
            id: id.into(),
        }
    }

    pub fn recipe_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "Recipe",
            id: id.into(),
        }
    }

    pub fn tip_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "Cooking tip",
            id: id.into(),
        }
    }
}
