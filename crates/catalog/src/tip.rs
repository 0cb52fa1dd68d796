use serde::Serialize;

use crate::error::{CatalogError, CatalogResult};
use crate::ingredient::ActiveChip;
use crate::types::CookingTip;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryChip {
    pub id: &'static str,
    pub name: &'static str,
    pub value: &'static str,
}

pub const TIP_CATEGORIES: [CategoryChip; 5] = [
    CategoryChip {
        id: "prep",
        name: "🔪 食材處理",
        value: "食材處理",
    },
    CategoryChip {
        id: "cooking",
        name: "🍳 烹飪方法",
        value: "烹飪方法",
    },
    CategoryChip {
        id: "flavor",
        name: "🧂 調味技巧",
        value: "調味技巧",
    },
    CategoryChip {
        id: "save",
        name: "📦 保存方法",
        value: "保存方法",
    },
    CategoryChip {
        id: "time",
        name: "⏱️ 時間管理",
        value: "時間管理",
    },
];

/// Cooking tips with the active category chip and favorite flags.
#[derive(Clone, Debug, Default)]
pub struct TipBoard {
    tips: Vec<CookingTip>,
    category: ActiveChip,
}

impl TipBoard {
    pub fn new(tips: Vec<CookingTip>) -> Self {
        Self {
            tips,
            category: ActiveChip::default(),
        }
    }

    pub fn all(&self) -> &[CookingTip] {
        &self.tips
    }

    pub fn active_category(&self) -> Option<&str> {
        self.category.get()
    }

    /// `None` selects every category.
    pub fn toggle_category(&mut self, category: Option<String>) -> Option<&str> {
        match category {
            Some(category) => self.category.toggle(category),
            None => {
                self.category.clear();
                None
            }
        }
    }

    pub fn visible(&self) -> Vec<&CookingTip> {
        match self.category.get() {
            None => self.tips.iter().collect(),
            Some(category) => self.tips.iter().filter(|t| t.category == category).collect(),
        }
    }

    pub fn toggle_favorite(&mut self, id: &str) -> CatalogResult<bool> {
        let tip = self
            .tips
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CatalogError::tip_not_found(id))?;

        tip.is_favorite = !tip.is_favorite;
        Ok(tip.is_favorite)
    }
}
