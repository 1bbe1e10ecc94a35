//! Conversational assistant for the catering site.
//!
//! Provides keyword-based memory extraction, bilingual canned response
//! tables, an ordered rule list that picks a reply, and the session engine
//! the host page drives.

pub mod engine;
pub mod error;
pub mod keywords;
pub mod rules;
pub mod session;
pub mod templates;
pub mod types;

pub use engine::ChatEngine;
pub use error::{validate_utterance, ChatError};
pub use keywords::{extract_memory, KeywordGroup, MemoryUpdate};
pub use rules::{Rule, RuleInput, RuleSet};
pub use session::{ConversationSession, SessionState};
pub use templates::{ResponseKey, ResponseTable, Template};
pub use types::{ConversationMemory, Message, MessageRole, Reply};
