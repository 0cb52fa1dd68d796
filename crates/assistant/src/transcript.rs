use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use time::OffsetDateTime;

use crate::responder::ChatReply;

/// Welcome line shown when a conversation opens. Slightly shorter than the
/// greeting reply.
pub const WELCOME: &str =
    "你好！我是你的食譜助手。有什麼可以幫到你嗎？我可以推薦食譜、解釋烹飪步驟或提供食材替代建議。";

/// Oldest messages are dropped beyond this many.
pub const MAX_MESSAGES: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// Set on the "view recipe" line that follows a reply about a recipe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    pub timestamp: u64,
}

fn now() -> u64 {
    OffsetDateTime::now_utc().unix_timestamp() as u64
}

/// Display-only chat history. Replies never read from it.
#[derive(Clone, Debug, Serialize)]
pub struct Transcript {
    messages: Vec<Message>,
    #[serde(skip)]
    next_id: u64,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: vec![Message {
                id: "welcome".to_owned(),
                sender: Sender::Bot,
                text: WELCOME.to_owned(),
                recipe_id: None,
                timestamp: now(),
            }],
            next_id: 1,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(&mut self, prefix: &str, sender: Sender, text: String, recipe_id: Option<String>) {
        let id = format!("{prefix}-{}", self.next_id);
        self.next_id += 1;
        self.messages.push(Message {
            id,
            sender,
            text,
            recipe_id,
            timestamp: now(),
        });

        if self.messages.len() > MAX_MESSAGES {
            let excess = self.messages.len() - MAX_MESSAGES;
            self.messages.drain(..excess);
        }
    }

    /// Appends the user's line. Blank input is ignored and returns `None`.
    pub fn push_user(&mut self, text: &str) -> Option<&Message> {
        if text.trim().is_empty() {
            return None;
        }

        self.push("user", Sender::User, text.to_owned(), None);
        self.messages.last()
    }

    /// Appends the reply, plus a "查看食譜" line when it points at a recipe.
    pub fn push_reply(&mut self, reply: &ChatReply) {
        self.push("bot", Sender::Bot, reply.text.clone(), None);

        if let Some(recipe_id) = &reply.recipe_id {
            let title = reply.recipe_title.as_deref().unwrap_or_default();
            self.push(
                "action",
                Sender::Bot,
                format!("查看食譜：{title}"),
                Some(recipe_id.clone()),
            );
        }
    }
}
