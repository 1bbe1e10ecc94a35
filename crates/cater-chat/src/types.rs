//! Message, reply and memory types shared across the chat crate.

use std::collections::BTreeSet;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use cater_core::types::ServiceCategory;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// One entry of the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique within the session.
    pub id: String,
    pub role: MessageRole,
    /// Free text, possibly spanning several paragraphs.
    pub content: String,
    /// Creation time; display only.
    pub timestamp: DateTime<Local>,
    /// Quick-reply chips. Only assistant messages carry them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl Message {
    /// A user-authored message.
    pub fn user(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: MessageRole::User,
            content: content.into(),
            timestamp: Local::now(),
            suggestions: None,
        }
    }

    /// An assistant message built from a selected reply.
    pub fn assistant(id: impl Into<String>, reply: Reply) -> Self {
        let suggestions = if reply.suggestions.is_empty() {
            None
        } else {
            Some(reply.suggestions)
        };
        Self {
            id: id.into(),
            role: MessageRole::Assistant,
            content: reply.content,
            timestamp: Local::now(),
            suggestions,
        }
    }

    /// Local `HH:MM` time shown next to the bubble.
    pub fn display_time(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }

    /// Suggestions as a slice, empty when there are none.
    pub fn suggestion_list(&self) -> &[String] {
        self.suggestions.as_deref().unwrap_or(&[])
    }
}

/// Reply text plus follow-up suggestions, as produced by a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub content: String,
    pub suggestions: Vec<String>,
}

/// Tags accumulated from what the visitor has said so far.
///
/// Tag sets only grow; `clear` is the only way back to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMemory {
    pub interests: BTreeSet<String>,
    /// Last service category the visitor mentioned.
    pub service_type: Option<ServiceCategory>,
    pub mentioned_topics: BTreeSet<String>,
}

impl ConversationMemory {
    pub fn is_empty(&self) -> bool {
        self.interests.is_empty() && self.service_type.is_none() && self.mentioned_topics.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(content: &str, suggestions: &[&str]) -> Reply {
        Reply {
            content: content.to_string(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_user_message_has_no_suggestions() {
        let msg = Message::user("user-1", "Hello");
        assert_eq!(msg.role, MessageRole::User);
        assert!(msg.suggestions.is_none());
        assert!(msg.suggestion_list().is_empty());
    }

    #[test]
    fn test_assistant_message_keeps_suggestions() {
        let msg = Message::assistant("assistant-1", reply("Hi", &["a", "b", "c"]));
        assert_eq!(msg.role, MessageRole::Assistant);
        assert_eq!(msg.suggestion_list(), ["a", "b", "c"]);
    }

    #[test]
    fn test_assistant_message_without_suggestions() {
        let msg = Message::assistant("assistant-1", reply("Hi", &[]));
        assert!(msg.suggestions.is_none());
    }

    #[test]
    fn test_display_time_format() {
        let msg = Message::user("user-1", "Hello");
        let time = msg.display_time();
        assert_eq!(time.len(), 5);
        assert_eq!(&time[2..3], ":");
    }

    #[test]
    fn test_message_serde_roles_lowercase() {
        let msg = Message::user("user-1", "Hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        assert!(!json.contains("suggestions"));

        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.content, "Hello");
    }

    #[test]
    fn test_memory_clear() {
        let mut memory = ConversationMemory::default();
        assert!(memory.is_empty());

        memory.interests.insert("pricing".to_string());
        memory.service_type = Some(ServiceCategory::Wedding);
        memory.mentioned_topics.insert("pricing".to_string());
        assert!(!memory.is_empty());

        memory.clear();
        assert!(memory.is_empty());
    }
}
