use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::{Validate, ValidationError};

use crate::error::ProfileResult;

/// Appliance choices offered by the profile form.
pub const APPLIANCES: [&str; 10] = [
    "電鍋", "微波爐", "烤箱", "平底鍋", "電子鍋", "氣炸鍋", "壓力鍋", "電磁爐", "慢燉鍋", "攪拌機",
];

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum DietaryPreference {
    #[default]
    #[strum(serialize = "葷")]
    #[serde(rename = "葷")]
    Meat,
    #[strum(serialize = "素")]
    #[serde(rename = "素")]
    Vegetarian,
}

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum SkillLevel {
    #[default]
    #[strum(serialize = "快速")]
    #[serde(rename = "快速")]
    Quick,
    #[strum(serialize = "進階")]
    #[serde(rename = "進階")]
    Advanced,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Name is required".into()));
    }

    Ok(())
}

#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,

    #[validate(
        length(max = 50, message = "Name must be at most 50 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[serde(default)]
    pub preference: DietaryPreference,

    #[serde(default)]
    pub skill_level: SkillLevel,

    #[serde(default)]
    pub appliances: Vec<String>,

    #[serde(default)]
    pub allergies: Vec<String>,

    #[serde(default)]
    pub favorite_ingredients: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            id: "user-1".to_owned(),
            name: "王小明".to_owned(),
            preference: DietaryPreference::Meat,
            skill_level: SkillLevel::Quick,
            appliances: owned(&["電鍋", "微波爐", "平底鍋", "氣炸鍋"]),
            allergies: owned(&["海鮮", "花生"]),
            favorite_ingredients: owned(&["雞肉", "蔬菜", "蛋"]),
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

/// Trims entries, drops empty ones and keeps the first of each duplicate.
fn dedup(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());

    for value in values {
        let value = value.trim();
        if !value.is_empty() && !out.iter().any(|v| v == value) {
            out.push(value.to_owned());
        }
    }

    out
}

/// Splits a comma separated form field such as `花生,海鮮, 牛奶`.
pub fn parse_list(text: &str) -> Vec<String> {
    dedup(
        text.split([',', '，'])
            .map(str::to_owned)
            .collect(),
    )
}

impl UserProfile {
    /// Trims the name and de-duplicates every set field.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            appliances: dedup(self.appliances),
            allergies: dedup(self.allergies),
            favorite_ingredients: dedup(self.favorite_ingredients),
            ..self
        }
    }

    /// Normalizes then validates; what gets stored.
    pub fn prepare(self) -> ProfileResult<Self> {
        let profile = self.normalized();
        profile.validate()?;
        Ok(profile)
    }

    pub fn has_appliance(&self, appliance: &str) -> bool {
        self.appliances.iter().any(|a| a == appliance)
    }

    /// Checkbox semantics: adds when missing, removes when present.
    pub fn toggle_appliance(&mut self, appliance: &str) -> bool {
        if let Some(pos) = self.appliances.iter().position(|a| a == appliance) {
            self.appliances.remove(pos);
            false
        } else {
            self.appliances.push(appliance.to_owned());
            true
        }
    }
}
