//! Conversation session state.
//!
//! One session per visitor: the transcript, the page and language context the
//! host last reported, and the accumulated memory. Lifecycle:
//! - Uninitialized -> Open (first open, welcome synthesized)
//! - Open -> Closed (transcript and memory kept)
//! - Closed -> Open (welcome only if the transcript is empty)
//! - Uninitialized -> Closed (host closes before ever opening)

use std::fmt;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use cater_core::types::{Language, PageContext};

use crate::keywords::MemoryUpdate;
use crate::templates::{ResponseKey, ResponseTable};
use crate::types::{ConversationMemory, Message, MessageRole, Reply};

/// Id of the synthesized greeting.
pub const WELCOME_ID: &str = "welcome";

/// Visibility state of the chat widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Never opened in this process.
    Uninitialized,
    Open,
    Closed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Uninitialized => write!(f, "Uninitialized"),
            SessionState::Open => write!(f, "Open"),
            SessionState::Closed => write!(f, "Closed"),
        }
    }
}

impl SessionState {
    /// Returns whether moving from `self` to `target` changes the state.
    pub fn can_transition_to(&self, target: &SessionState) -> bool {
        matches!(
            (self, target),
            (SessionState::Uninitialized, SessionState::Open)
                | (SessionState::Uninitialized, SessionState::Closed)
                | (SessionState::Open, SessionState::Closed)
                | (SessionState::Closed, SessionState::Open)
        )
    }
}

/// Transcript and context of one visitor's conversation.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    id: Uuid,
    state: SessionState,
    messages: Vec<Message>,
    page_context: PageContext,
    language: Language,
    memory: ConversationMemory,
    seq: u64,
}

impl ConversationSession {
    pub fn new(language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: SessionState::Uninitialized,
            messages: Vec::new(),
            page_context: PageContext::default(),
            language,
            memory: ConversationMemory::default(),
            seq: 0,
        }
    }

    /// Session rebuilt from persisted flags. A widget left open comes back
    /// open with an empty transcript; the next `open` welcomes.
    pub fn restored(language: Language, was_open: bool) -> Self {
        let mut session = Self::new(language);
        if was_open {
            session.state = SessionState::Open;
        }
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn page_context(&self) -> PageContext {
        self.page_context
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    /// Open the widget. Returns `true` when a welcome was synthesized.
    pub fn open(&mut self) -> bool {
        self.transition(SessionState::Open);
        if self.messages.is_empty() {
            self.push_welcome();
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.transition(SessionState::Closed);
    }

    /// Move to `target`. Returns `false` when the state is unchanged.
    fn transition(&mut self, target: SessionState) -> bool {
        if !self.state.can_transition_to(&target) {
            return false;
        }
        debug!(session = %self.id, "Chat session state: {} -> {}", self.state, target);
        self.state = target;
        true
    }

    /// Switch language and restart the transcript with the localized welcome.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.messages.clear();
        self.push_welcome();
    }

    pub fn set_page_context(&mut self, context: PageContext) {
        self.page_context = context;
    }

    pub fn apply_memory(&mut self, update: &MemoryUpdate) {
        update.apply(&mut self.memory);
    }

    pub fn clear_memory(&mut self) {
        self.memory.clear();
    }

    /// Drop the transcript. Memory is kept.
    pub fn clear_conversation(&mut self) {
        self.messages.clear();
    }

    pub fn push_user(&mut self, content: &str) -> Message {
        let message = Message::user(self.next_id(MessageRole::User), content);
        self.messages.push(message.clone());
        message
    }

    pub fn push_assistant(&mut self, reply: Reply) -> Message {
        let message = Message::assistant(self.next_id(MessageRole::Assistant), reply);
        self.messages.push(message.clone());
        message
    }

    fn push_welcome(&mut self) {
        let reply =
            ResponseTable::for_language(self.language).reply(ResponseKey::Welcome, "");
        self.messages.push(Message::assistant(WELCOME_ID, reply));
    }

    // `{role}-{millis}-{seq}`, unique within the session.
    fn next_id(&mut self, role: MessageRole) -> String {
        self.seq += 1;
        format!(
            "{}-{}-{}",
            role.as_str(),
            Utc::now().timestamp_millis(),
            self.seq
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::extract_memory;
    use std::collections::HashSet;

    fn reply(content: &str) -> Reply {
        Reply {
            content: content.to_string(),
            suggestions: vec![],
        }
    }

    #[test]
    fn test_state_display() {
        assert_eq!(SessionState::Uninitialized.to_string(), "Uninitialized");
        assert_eq!(SessionState::Open.to_string(), "Open");
        assert_eq!(SessionState::Closed.to_string(), "Closed");
    }

    #[test]
    fn test_valid_transitions() {
        use SessionState::*;
        assert!(Uninitialized.can_transition_to(&Open));
        assert!(Uninitialized.can_transition_to(&Closed));
        assert!(Open.can_transition_to(&Closed));
        assert!(Closed.can_transition_to(&Open));
    }

    #[test]
    fn test_invalid_transitions() {
        use SessionState::*;
        assert!(!Open.can_transition_to(&Open));
        assert!(!Open.can_transition_to(&Uninitialized));
        assert!(!Closed.can_transition_to(&Uninitialized));
    }

    #[test]
    fn test_transition_reports_changes_only() {
        let mut session = ConversationSession::new(Language::En);
        assert!(session.transition(SessionState::Open));
        assert!(!session.transition(SessionState::Open));
        assert!(!session.transition(SessionState::Uninitialized));
        assert_eq!(session.state(), SessionState::Open);

        assert!(session.transition(SessionState::Closed));
        assert!(!session.transition(SessionState::Closed));
        assert_eq!(session.state(), SessionState::Closed);
    }

    #[test]
    fn test_open_and_close_are_idempotent() {
        let mut session = ConversationSession::new(Language::En);
        session.close();
        session.close();
        assert_eq!(session.state(), SessionState::Closed);

        assert!(session.open());
        assert!(!session.open());
        assert_eq!(session.state(), SessionState::Open);
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_first_open_welcomes() {
        let mut session = ConversationSession::new(Language::En);
        assert_eq!(session.state(), SessionState::Uninitialized);

        assert!(session.open());
        assert!(session.is_open());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].id, WELCOME_ID);
        assert_eq!(session.messages()[0].role, MessageRole::Assistant);
    }

    #[test]
    fn test_reopen_keeps_transcript() {
        let mut session = ConversationSession::new(Language::En);
        session.open();
        session.push_user("hello there");
        session.close();
        assert_eq!(session.state(), SessionState::Closed);
        assert_eq!(session.messages().len(), 2);

        assert!(!session.open());
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_set_language_resets_to_welcome() {
        let mut session = ConversationSession::new(Language::En);
        session.open();
        session.push_user("price");
        session.push_assistant(reply("..."));

        session.set_language(Language::Tr);
        assert_eq!(session.language(), Language::Tr);
        assert_eq!(session.messages().len(), 1);
        assert!(session.messages()[0].content.starts_with("Etkinlik Catering"));
        assert!(session.is_open());
    }

    #[test]
    fn test_set_language_keeps_closed_state() {
        let mut session = ConversationSession::new(Language::En);
        session.open();
        session.close();
        session.set_language(Language::Tr);
        assert_eq!(session.state(), SessionState::Closed);
    }

    #[test]
    fn test_restored_open_session_has_no_welcome() {
        let mut session = ConversationSession::restored(Language::Tr, true);
        assert!(session.is_open());
        assert!(session.messages().is_empty());

        assert!(session.open());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_restored_closed_session_is_uninitialized() {
        let session = ConversationSession::restored(Language::En, false);
        assert_eq!(session.state(), SessionState::Uninitialized);
    }

    #[test]
    fn test_message_ids_are_unique() {
        let mut session = ConversationSession::new(Language::En);
        session.open();
        for _ in 0..20 {
            session.push_user("same text");
            session.push_assistant(reply("same reply"));
        }
        let ids: HashSet<_> = session.messages().iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids.len(), session.messages().len());
        assert!(session.messages()[1].id.starts_with("user-"));
        assert!(session.messages()[2].id.starts_with("assistant-"));
    }

    #[test]
    fn test_memory_and_transcript_are_independent() {
        let mut session = ConversationSession::new(Language::En);
        session.open();
        session.push_user("wedding");
        session.apply_memory(&extract_memory("wedding"));

        session.clear_memory();
        assert!(session.memory().is_empty());
        assert_eq!(session.messages().len(), 2);

        session.apply_memory(&extract_memory("festival"));
        session.clear_conversation();
        assert!(session.messages().is_empty());
        assert!(!session.memory().is_empty());
    }

    #[test]
    fn test_page_context_update() {
        let mut session = ConversationSession::new(Language::En);
        assert_eq!(session.page_context(), PageContext::Home);
        session.set_page_context(PageContext::ServiceDetail);
        assert_eq!(session.page_context(), PageContext::ServiceDetail);
    }
}
