//! Rule-based replies for the in-app cooking assistant.
//!
//! The input is lower-cased and checked against keyword groups in a fixed
//! order; the first group that matches decides the reply. Only the recommend
//! and simple groups look at the recipes, and both pick one at random from the
//! injected generator.

use lazykitchen_catalog::{Difficulty, Recipe};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

pub const GREETING: &str =
    "你好！我是你的食譜助手。有什麼可以幫到你的嗎？我可以推薦食譜、解釋烹飪步驟或提供食材替代建議。";
pub const NO_RECIPES: &str = "抱歉，目前沒有可用的食譜推薦。";
pub const NO_SIMPLE_RECIPES: &str =
    "我找不到特別簡單的食譜，但你可以瀏覽所有食譜並按照烹飪時間排序找到快速料理。";
pub const SUBSTITUTION: &str = "食材替代是很常見的需求。一般來說，肉類可以相互替代，蔬菜可以用季節性蔬菜替換。調味料則要考慮風味相似性。有特定食材想替換嗎？";
pub const INGREDIENTS: &str =
    "食材是料理的靈魂！你可以在食材輸入頁面選擇你家中有的食材，我會根據這些推薦適合的食譜。";
pub const HOW_TO: &str =
    "每個食譜都有詳細的步驟說明。點擊食譜卡片後可以查看完整的烹飪過程。你想了解哪道料理的做法呢？";
pub const THANKS: &str =
    "不客氣！很高興能幫到你。如果還有其他問題，隨時都可以問我。祝你烹飪愉快！";
pub const FALLBACK: &str =
    "我可以幫你推薦食譜、解釋烹飪步驟或提供食材替代建議。請告訴我你想了解什麼？";
pub const DEFAULT_DESCRIPTION: &str = "這是一道美味的料理";

const GREETING_WORDS: &[&str] = &["你好", "嗨", "哈囉"];
const RECOMMEND_WORDS: &[&str] = &["推薦", "建議", "什麼好吃"];
const SIMPLE_WORDS: &[&str] = &["簡單", "容易", "快速"];
const INGREDIENT_WORDS: &[&str] = &["食材", "材料"];
const SUBSTITUTE_WORDS: &[&str] = &["替代", "換"];
const HOW_TO_WORDS: &[&str] = &["怎麼做", "如何"];
const THANKS_WORDS: &[&str] = &["謝謝", "感謝"];
const EASY_TAG_WORDS: &[&str] = &["簡易", "快速"];

/// Which rule produced a reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    Greeting,
    Recommend,
    Simple,
    Substitution,
    Ingredients,
    HowTo,
    Thanks,
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub intent: Intent,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_title: Option<String>,
}

impl ChatReply {
    fn text(intent: Intent, text: impl Into<String>) -> Self {
        Self {
            intent,
            text: text.into(),
            recipe_id: None,
            recipe_title: None,
        }
    }

    fn about(intent: Intent, text: String, recipe: &Recipe) -> Self {
        Self {
            intent,
            text,
            recipe_id: Some(recipe.id.clone()),
            recipe_title: Some(recipe.title.clone()),
        }
    }
}

fn mentions(input: &str, words: &[&str]) -> bool {
    words.iter().any(|w| input.contains(w))
}

/// Recipes the simple rule may suggest: easy difficulty, or tagged as quick.
pub fn is_easy(recipe: &Recipe) -> bool {
    recipe.difficulty == Difficulty::Simple
        || recipe.tags.iter().any(|tag| mentions(tag, EASY_TAG_WORDS))
}

pub fn classify(input: &str) -> Intent {
    let input = input.to_lowercase();

    if mentions(&input, GREETING_WORDS) {
        Intent::Greeting
    } else if mentions(&input, RECOMMEND_WORDS) {
        Intent::Recommend
    } else if mentions(&input, SIMPLE_WORDS) {
        Intent::Simple
    } else if mentions(&input, INGREDIENT_WORDS) {
        if mentions(&input, SUBSTITUTE_WORDS) {
            Intent::Substitution
        } else {
            Intent::Ingredients
        }
    } else if mentions(&input, HOW_TO_WORDS) {
        Intent::HowTo
    } else if mentions(&input, THANKS_WORDS) {
        Intent::Thanks
    } else {
        Intent::Fallback
    }
}

/// Builds the reply for one message. Earlier messages play no part.
pub fn respond<R: Rng + ?Sized>(input: &str, recipes: &[Recipe], rng: &mut R) -> ChatReply {
    let intent = classify(input);

    let reply = match intent {
        Intent::Greeting => ChatReply::text(intent, GREETING),
        Intent::Recommend => match recipes.choose(rng) {
            None => ChatReply::text(intent, NO_RECIPES),
            Some(recipe) => {
                let description = recipe
                    .description
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .unwrap_or(DEFAULT_DESCRIPTION);
                ChatReply::about(
                    intent,
                    format!("我推薦你試試「{}」，{}", recipe.title, description),
                    recipe,
                )
            }
        },
        Intent::Simple => {
            let easy: Vec<&Recipe> = recipes.iter().filter(|r| is_easy(r)).collect();
            match easy.choose(rng) {
                None => ChatReply::text(intent, NO_SIMPLE_RECIPES),
                Some(recipe) => ChatReply::about(
                    intent,
                    format!(
                        "「{}」是一道很容易製作的料理，適合新手嘗試。只需要{}分鐘就能完成！",
                        recipe.title,
                        recipe.total_time()
                    ),
                    recipe,
                ),
            }
        }
        Intent::Substitution => ChatReply::text(intent, SUBSTITUTION),
        Intent::Ingredients => ChatReply::text(intent, INGREDIENTS),
        Intent::HowTo => ChatReply::text(intent, HOW_TO),
        Intent::Thanks => ChatReply::text(intent, THANKS),
        Intent::Fallback => ChatReply::text(intent, FALLBACK),
    };

    tracing::debug!(intent = %intent, recipe_id = ?reply.recipe_id, "Chat reply generated");

    reply
}
