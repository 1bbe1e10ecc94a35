//! Typed access to the flags persisted between visits.

use std::sync::Arc;

use tracing::warn;

use cater_core::error::CaterError;
use cater_core::types::Language;

use crate::preferences::PreferenceStore;

/// Whether the chat widget was left open (`"true"` / `"false"`).
pub const CHAT_OPEN_KEY: &str = "chatbot-open";
/// Last selected language (`"tr"` / `"en"`).
pub const LANGUAGE_KEY: &str = "lang";
/// Set once the visitor has dismissed the intro overlay.
pub const INTRO_SEEN_KEY: &str = "intro-seen";

/// Flag accessor shared by the chat engine and the host.
#[derive(Clone)]
pub struct ChatFlags {
    store: Arc<dyn PreferenceStore>,
}

impl ChatFlags {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// `true` only when the flag holds exactly `"true"`.
    pub fn chat_open(&self) -> Result<bool, CaterError> {
        Ok(self.store.get(CHAT_OPEN_KEY)?.as_deref() == Some("true"))
    }

    pub fn set_chat_open(&self, open: bool) -> Result<(), CaterError> {
        self.store
            .set(CHAT_OPEN_KEY, if open { "true" } else { "false" })
    }

    /// Persisted language, `None` when absent or unrecognized.
    pub fn language(&self) -> Result<Option<Language>, CaterError> {
        let Some(raw) = self.store.get(LANGUAGE_KEY)? else {
            return Ok(None);
        };
        match raw.parse::<Language>() {
            Ok(lang) => Ok(Some(lang)),
            Err(e) => {
                warn!(value = %raw, error = %e, "Ignoring stored language");
                Ok(None)
            }
        }
    }

    pub fn set_language(&self, language: Language) -> Result<(), CaterError> {
        self.store.set(LANGUAGE_KEY, language.as_str())
    }

    pub fn intro_seen(&self) -> Result<bool, CaterError> {
        Ok(self.store.get(INTRO_SEEN_KEY)?.as_deref() == Some("true"))
    }

    pub fn mark_intro_seen(&self) -> Result<(), CaterError> {
        self.store.set(INTRO_SEEN_KEY, "true")
    }
}

impl std::fmt::Debug for ChatFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatFlags").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::preferences::{MemoryPreferences, PreferenceRepository};

    fn memory_flags() -> (Arc<MemoryPreferences>, ChatFlags) {
        let store = Arc::new(MemoryPreferences::new());
        let flags = ChatFlags::new(store.clone());
        (store, flags)
    }

    #[test]
    fn test_defaults_when_nothing_stored() {
        let (_, flags) = memory_flags();
        assert!(!flags.chat_open().unwrap());
        assert_eq!(flags.language().unwrap(), None);
        assert!(!flags.intro_seen().unwrap());
    }

    #[test]
    fn test_chat_open_written_as_strings() {
        let (store, flags) = memory_flags();
        flags.set_chat_open(true).unwrap();
        assert_eq!(store.get(CHAT_OPEN_KEY).unwrap().as_deref(), Some("true"));
        assert!(flags.chat_open().unwrap());

        flags.set_chat_open(false).unwrap();
        assert_eq!(store.get(CHAT_OPEN_KEY).unwrap().as_deref(), Some("false"));
        assert!(!flags.chat_open().unwrap());
    }

    #[test]
    fn test_language_roundtrip() {
        let (store, flags) = memory_flags();
        flags.set_language(Language::Tr).unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("tr"));
        assert_eq!(flags.language().unwrap(), Some(Language::Tr));
    }

    #[test]
    fn test_unrecognized_language_is_ignored() {
        let (store, flags) = memory_flags();
        store.set(LANGUAGE_KEY, "fr").unwrap();
        assert_eq!(flags.language().unwrap(), None);
    }

    #[test]
    fn test_intro_seen_on_sqlite() {
        let repo = PreferenceRepository::new(Arc::new(Database::in_memory().unwrap()));
        let flags = ChatFlags::new(Arc::new(repo));
        assert!(!flags.intro_seen().unwrap());
        flags.mark_intro_seen().unwrap();
        assert!(flags.intro_seen().unwrap());
    }
}
