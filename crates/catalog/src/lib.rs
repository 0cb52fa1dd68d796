pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod ingredient;
pub mod recipe;
pub mod selection;
pub mod step;
pub mod tip;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use ingredient::{ActiveChip, IngredientFilter, categories};
pub use recipe::{RECOMMENDED_TAGS, RecipeBook, TagChip, TagFilter, display_rating};
pub use selection::Selection;
pub use step::{StepCursor, StepView};
pub use tip::{CategoryChip, TIP_CATEGORIES, TipBoard};
pub use types::*;
