//! Chat engine: the handle the host page drives.
//!
//! Wires memory extraction, rule selection and the session together, and
//! persists the widget flags. Cloning is cheap; every clone shares the same
//! session, so the host can poll `is_loading` while a send is in flight.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info, warn};
use uuid::Uuid;

use cater_core::config::ChatConfig;
use cater_core::types::{Language, PageContext};
use cater_storage::flags::ChatFlags;

use crate::error::ChatError;
use crate::keywords::extract_memory;
use crate::rules::{RuleInput, RuleSet};
use crate::session::{ConversationSession, SessionState};
use crate::templates::ResponseTable;
use crate::types::{ConversationMemory, Message};

/// Conversation engine for one visitor.
#[derive(Debug, Clone)]
pub struct ChatEngine {
    inner: Arc<EngineInner>,
}

#[derive(Debug)]
struct EngineInner {
    session: Mutex<ConversationSession>,
    flags: Option<ChatFlags>,
    rules: RuleSet,
    delay: Duration,
    short_threshold: usize,
    in_flight: AtomicUsize,
}

/// Decrements the in-flight counter when a send finishes or is dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl ChatEngine {
    /// Engine without persistence, starting in `language`.
    pub fn new(config: &ChatConfig, language: Language) -> Self {
        Self::build(config, ConversationSession::new(language), None)
    }

    /// Engine restored from the persisted flags.
    ///
    /// Language precedence: stored flag, then `config.default_language`, then
    /// the locale heuristic, then English.
    pub fn restore(
        config: &ChatConfig,
        flags: ChatFlags,
        locale: Option<&str>,
    ) -> Result<Self, ChatError> {
        let stored = flags.language()?;
        let language = stored
            .or(config.default_language)
            .or_else(|| locale.map(Language::from_locale))
            .unwrap_or_default();
        let was_open = flags.chat_open()?;

        info!(
            language = %language,
            from_flag = stored.is_some(),
            was_open,
            "Chat engine restored"
        );

        Ok(Self::build(
            config,
            ConversationSession::restored(language, was_open),
            Some(flags),
        ))
    }

    fn build(config: &ChatConfig, session: ConversationSession, flags: Option<ChatFlags>) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                session: Mutex::new(session),
                flags,
                rules: RuleSet::standard(),
                delay: Duration::from_millis(config.response_delay_ms),
                short_threshold: config.short_utterance_chars,
                in_flight: AtomicUsize::new(0),
            }),
        }
    }

    // Session data is plain values, so a poisoned lock is still usable.
    fn session(&self) -> MutexGuard<'_, ConversationSession> {
        self.inner
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, what: &str, write: impl FnOnce(&ChatFlags) -> cater_core::Result<()>) {
        if let Some(flags) = &self.inner.flags {
            if let Err(e) = write(flags) {
                warn!(flag = what, error = %e, "Failed to persist chat flag");
            }
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Open the widget; the first open (or one after the transcript was
    /// cleared) synthesizes the localized welcome.
    pub fn open(&self) {
        let welcomed = self.session().open();
        info!(welcomed, "Chat opened");
        self.persist("chatbot-open", |f| f.set_chat_open(true));
    }

    /// Close the widget. Transcript and memory are kept.
    pub fn close(&self) {
        self.session().close();
        info!("Chat closed");
        self.persist("chatbot-open", |f| f.set_chat_open(false));
    }

    /// Switch language; the transcript restarts with the new welcome.
    pub fn set_language(&self, language: Language) {
        self.session().set_language(language);
        info!(language = %language, "Chat language changed");
        self.persist("lang", |f| f.set_language(language));
    }

    pub fn set_page_context(&self, context: PageContext) {
        self.session().set_page_context(context);
        debug!(page = %context, "Page context updated");
    }

    pub fn clear_memory(&self) {
        self.session().clear_memory();
        debug!("Conversation memory cleared");
    }

    /// Discard the transcript. Memory is kept; the next `open` welcomes again.
    pub fn clear_conversation(&self) {
        self.session().clear_conversation();
        info!("Conversation cleared");
    }

    /// Append the visitor's message, wait the configured delay and append the
    /// assistant's reply, which is also returned.
    ///
    /// The reply is chosen with the page context and language current at call
    /// time and with memory already updated from `text`.
    pub async fn send_message(&self, text: &str) -> Message {
        let (page, language, memory, _guard) = {
            let mut session = self.session();
            session.push_user(text);
            let update = extract_memory(text);
            session.apply_memory(&update);
            let guard = InFlight::enter(&self.inner.in_flight);
            (
                session.page_context(),
                session.language(),
                session.memory().clone(),
                guard,
            )
        };

        if !self.inner.delay.is_zero() {
            tokio::time::sleep(self.inner.delay).await;
        }

        let table = ResponseTable::for_language(language);
        let input = RuleInput::new(text, page, &memory, self.inner.short_threshold);
        let (rule, reply) = self.inner.rules.select(&input, &table);

        let message = self.session().push_assistant(reply);
        debug!(rule, id = %message.id, "Reply appended");
        message
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn messages(&self) -> Vec<Message> {
        self.session().messages().to_vec()
    }

    pub fn is_open(&self) -> bool {
        self.session().is_open()
    }

    /// True while any `send_message` call is waiting for its reply.
    pub fn is_loading(&self) -> bool {
        self.inner.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn language(&self) -> Language {
        self.session().language()
    }

    pub fn page_context(&self) -> PageContext {
        self.session().page_context()
    }

    pub fn memory(&self) -> ConversationMemory {
        self.session().memory().clone()
    }

    pub fn state(&self) -> SessionState {
        self.session().state()
    }

    pub fn session_id(&self) -> Uuid {
        self.session().id()
    }
}
