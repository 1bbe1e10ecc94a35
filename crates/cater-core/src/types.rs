use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CaterError;

// =============================================================================
// Language
// =============================================================================

/// Display language of the site and the chat assistant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Turkish.
    Tr,
    /// English (default when nothing else is known).
    #[default]
    En,
}

impl Language {
    /// Both supported languages, Turkish first as on the site's switcher.
    pub const ALL: [Language; 2] = [Language::Tr, Language::En];

    /// The persisted tag: `"tr"` or `"en"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }

    /// Pick a language from a locale string such as `tr-TR` or `en_US.UTF-8`.
    ///
    /// Turkish when the locale starts with `tr` (case-insensitive), English otherwise.
    pub fn from_locale(locale: &str) -> Self {
        if locale.trim().to_lowercase().starts_with("tr") {
            Language::Tr
        } else {
            Language::En
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tr" => Ok(Language::Tr),
            "en" => Ok(Language::En),
            other => Err(CaterError::UnknownLanguage(other.to_string())),
        }
    }
}

// =============================================================================
// PageContext
// =============================================================================

/// Coarse description of which part of the site the visitor is viewing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageContext {
    /// Landing page, or any section without a more specific context.
    #[default]
    Home,
    /// The services overview section.
    ServiceList,
    /// A single service page (or the proof section of the landing page).
    ServiceDetail,
}

impl PageContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageContext::Home => "home",
            PageContext::ServiceList => "service-list",
            PageContext::ServiceDetail => "service-detail",
        }
    }

    /// Map a landing-page section id to the context the assistant should use.
    pub fn for_section(section_id: &str) -> Self {
        match section_id.trim() {
            "services" => PageContext::ServiceList,
            "proof" => PageContext::ServiceDetail,
            _ => PageContext::Home,
        }
    }
}

impl fmt::Display for PageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageContext {
    type Err = CaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(PageContext::Home),
            // Older host pages still send the product-* names.
            "service-list" | "product-list" => Ok(PageContext::ServiceList),
            "service-detail" | "product-detail" => Ok(PageContext::ServiceDetail),
            other => Err(CaterError::UnknownPageContext(other.to_string())),
        }
    }
}

// =============================================================================
// ServiceCategory
// =============================================================================

/// Catering service category the visitor has shown interest in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Corporate,
    Wedding,
    Festival,
    Workshop,
    Seminar,
    Outdoor,
}

impl ServiceCategory {
    /// All categories in keyword scan order.
    pub const ALL: [ServiceCategory; 6] = [
        ServiceCategory::Corporate,
        ServiceCategory::Wedding,
        ServiceCategory::Festival,
        ServiceCategory::Workshop,
        ServiceCategory::Seminar,
        ServiceCategory::Outdoor,
    ];

    /// Lowercase English tag, the value kept in conversation memory.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Corporate => "corporate",
            ServiceCategory::Wedding => "wedding",
            ServiceCategory::Festival => "festival",
            ServiceCategory::Workshop => "workshop",
            ServiceCategory::Seminar => "seminar",
            ServiceCategory::Outdoor => "outdoor",
        }
    }

    /// Interest tag recorded when the category is mentioned.
    pub fn interest_tag(&self) -> &'static str {
        match self {
            ServiceCategory::Corporate => "corporate events",
            ServiceCategory::Wedding => "wedding events",
            ServiceCategory::Festival => "festival events",
            ServiceCategory::Workshop => "workshop events",
            ServiceCategory::Seminar => "seminar events",
            ServiceCategory::Outdoor => "outdoor events",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceCategory {
    type Err = CaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ServiceCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or(CaterError::UnknownService(wanted))
    }
}

// =============================================================================
// Tests
// =============================================================================
