//! Keyword groups and memory extraction.
//!
//! All matching is substring matching on the utterance as folded by
//! [`fold_case`]. Groups carry both the English and the Turkish terms, so
//! detection does not depend on the session language.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use cater_core::types::ServiceCategory;

use crate::types::ConversationMemory;

// =============================================================================
// KeywordGroup
// =============================================================================

/// Named set of keywords; matches when any of them occurs in the text.
#[derive(Debug, Clone, Copy)]
pub struct KeywordGroup {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

/// Lowercase for keyword matching. Turkish dotted capital `İ` folds to a
/// plain `i` instead of `i` plus a combining dot.
pub fn fold_case(text: &str) -> String {
    text.replace('İ', "i").to_lowercase()
}

impl KeywordGroup {
    /// `lower` must already be folded with [`fold_case`].
    pub fn matches(&self, lower: &str) -> bool {
        self.terms.iter().any(|term| lower.contains(term))
    }
}

// -----------------------------------------------------------------------------
// Service categories
// -----------------------------------------------------------------------------

pub const CORPORATE: KeywordGroup = KeywordGroup {
    name: "corporate",
    terms: &["corporate", "company", "business event", "kurumsal", "şirket"],
};

pub const WEDDING: KeywordGroup = KeywordGroup {
    name: "wedding",
    terms: &["wedding", "engagement", "düğün", "nişan"],
};

pub const FESTIVAL: KeywordGroup = KeywordGroup {
    name: "festival",
    terms: &["festival", "large event", "büyük etkinlik", "büyük bir etkinlik"],
};

pub const WORKSHOP: KeywordGroup = KeywordGroup {
    name: "workshop",
    terms: &["workshop", "atölye"],
};

pub const SEMINAR: KeywordGroup = KeywordGroup {
    name: "seminar",
    terms: &["seminar", "conference", "seminer", "konferans"],
};

pub const OUTDOOR: KeywordGroup = KeywordGroup {
    name: "outdoor",
    terms: &["outdoor", "picnic", "açık alan", "açık hava", "piknik"],
};

/// Keyword group that detects a service category.
pub fn category_group(category: ServiceCategory) -> &'static KeywordGroup {
    match category {
        ServiceCategory::Corporate => &CORPORATE,
        ServiceCategory::Wedding => &WEDDING,
        ServiceCategory::Festival => &FESTIVAL,
        ServiceCategory::Workshop => &WORKSHOP,
        ServiceCategory::Seminar => &SEMINAR,
        ServiceCategory::Outdoor => &OUTDOOR,
    }
}

// -----------------------------------------------------------------------------
// Topics
// -----------------------------------------------------------------------------

pub const PROCESS: KeywordGroup = KeywordGroup {
    name: "process",
    terms: &[
        "process",
        "planning",
        "how does it work",
        "how do you work",
        "steps",
        "süreç",
        "sürec",
        "planlama",
        "nasıl çalış",
        "aşama",
    ],
};

pub const CATEGORIES: KeywordGroup = KeywordGroup {
    name: "categories",
    terms: &[
        "what do you offer",
        "services",
        "categories",
        "category",
        "what kind",
        "types of",
        "hizmet",
        "kategori",
        "neler sunuyorsunuz",
    ],
};

pub const SERVICES_OFFERED: KeywordGroup = KeywordGroup {
    name: "services-offered",
    terms: &[
        "service",
        "offer",
        "provide",
        "staff",
        "categor",
        "hizmet",
        "sunuyor",
        "sağlıyor",
        "personel",
        "kategori",
    ],
};

pub const CAPACITY: KeywordGroup = KeywordGroup {
    name: "capacity",
    terms: &[
        "capacity",
        "capacities",
        "guest",
        "how many",
        "maximum",
        "scale",
        "multiple venue",
        "venues",
        "kapasite",
        "misafir",
        "kaç kişi",
        "maksimum",
        "birden fazla mekan",
    ],
};

pub const MENU: KeywordGroup = KeywordGroup {
    name: "menu",
    terms: &[
        "menu",
        "dessert",
        "food",
        "tasting",
        "dietary",
        "vegan",
        "menü",
        "tatlı",
        "yemek",
        "tadım",
    ],
};

pub const PRICING: KeywordGroup = KeywordGroup {
    name: "pricing",
    terms: &[
        "price",
        "pricing",
        "cost",
        "quote",
        "quotation",
        "budget",
        "fiyat",
        "teklif",
        "ücret",
        "maliyet",
        "bütçe",
    ],
};

pub const LOGISTICS: KeywordGroup = KeywordGroup {
    name: "logistics",
    terms: &[
        "deliver",
        "logistics",
        "transport",
        "shipping",
        "outside the city",
        "teslimat",
        "lojistik",
        "nakliye",
        "taşıma",
        "şehir dışı",
    ],
};

pub const TIMELINE: KeywordGroup = KeywordGroup {
    name: "timeline",
    terms: &[
        "lead time",
        "timeline",
        "how far in advance",
        "how soon",
        "how long before",
        "booking",
        "next week",
        "next month",
        "event date",
        "teslim süresi",
        "zaman çizelgesi",
        "ne kadar önce",
        "rezervasyon",
        "gelecek hafta",
        "gelecek ay",
        "etkinlik tarihi",
    ],
};

pub const QUALITY: KeywordGroup = KeywordGroup {
    name: "quality",
    terms: &[
        "quality",
        "hygiene",
        "standard",
        "certif",
        "food safety",
        "kalite",
        "hijyen",
        "standart",
        "sertifika",
    ],
};

// -----------------------------------------------------------------------------
// Interests
// -----------------------------------------------------------------------------

pub const SUSTAINABILITY: KeywordGroup = KeywordGroup {
    name: "sustainability",
    terms: &[
        "sustainab",
        "eco-friendly",
        "ecolog",
        "organic",
        "sürdürülebilir",
        "organik",
        "çevre dostu",
    ],
};

pub const BULK: KeywordGroup = KeywordGroup {
    name: "bulk orders",
    terms: &[
        "bulk",
        "volume",
        "large-scale",
        "minimum order",
        "toplu",
        "hacim",
        "minimum sipariş",
        "en az sipariş",
    ],
};

pub const CUSTOM: KeywordGroup = KeywordGroup {
    name: "custom menus",
    terms: &[
        "custom",
        "bespoke",
        "tailored",
        "kişiye özel",
        "özel menü",
        "özelleştir",
    ],
};

/// Asking for a recommendation; answered from remembered interests.
pub const RECOMMENDATION: KeywordGroup = KeywordGroup {
    name: "recommendation",
    terms: &[
        "recommend",
        "suggest",
        "product",
        "option",
        "tavsiye",
        "öneri",
        "ürün",
        "seçenek",
    ],
};

/// Cross-cutting groups whose `name` is recorded as a memory tag, in scan order.
pub const TOPIC_TAGS: [&KeywordGroup; 8] = [
    &CAPACITY,
    &PRICING,
    &MENU,
    &LOGISTICS,
    &SUSTAINABILITY,
    &BULK,
    &CUSTOM,
    &LEAD_TIME_TAG,
];

const LEAD_TIME_TAG: KeywordGroup = KeywordGroup {
    name: "lead time",
    terms: TIMELINE.terms,
};

// Questions about duration inside a logistics question ("how long does
// delivery take") get the lead-time answer.
static LEAD_TIME_QUESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\blead\s+time\b|\bhow\s+long\b|teslim\s+süresi|\bne\s+kadar\b")
        .expect("Invalid lead time regex")
});

/// Whether a logistics question is really asking about lead time.
pub fn asks_lead_time(lower: &str) -> bool {
    LEAD_TIME_QUESTION.is_match(lower)
}

// =============================================================================
// Memory extraction
// =============================================================================

/// What one utterance contributes to conversation memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryUpdate {
    /// Tags in scan order, without duplicates.
    pub tags: Vec<String>,
    /// Last matching service category in scan order.
    pub service_type: Option<ServiceCategory>,
}

impl MemoryUpdate {
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.service_type.is_none()
    }

    fn push_tag(&mut self, tag: &str) {
        if !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
    }

    /// Union the tags into both tag sets and overwrite the service type if
    /// one was detected.
    pub fn apply(&self, memory: &mut ConversationMemory) {
        for tag in &self.tags {
            memory.interests.insert(tag.clone());
            memory.mentioned_topics.insert(tag.clone());
        }
        if let Some(category) = self.service_type {
            memory.service_type = Some(category);
        }
    }
}

/// Scan an utterance for service categories and cross-cutting topics.
pub fn extract_memory(utterance: &str) -> MemoryUpdate {
    let lower = fold_case(utterance);
    let mut update = MemoryUpdate::default();

    for category in ServiceCategory::ALL {
        if category_group(category).matches(&lower) {
            update.push_tag(category.interest_tag());
            update.service_type = Some(category);
        }
    }

    for group in TOPIC_TAGS {
        if group.matches(&lower) {
            update.push_tag(group.name);
        }
    }

    if !update.is_empty() {
        debug!(tags = ?update.tags, service_type = ?update.service_type, "Memory tags extracted");
    }

    update
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_matches_substrings() {
        assert!(PRICING.matches("what are your prices?"));
        assert!(PRICING.matches("fiyatlarınız nedir"));
        assert!(!PRICING.matches("tell me about weddings"));
    }

    #[test]
    fn test_extract_corporate_english_and_turkish() {
        let en = extract_memory("We are planning a Corporate gala");
        assert_eq!(en.service_type, Some(ServiceCategory::Corporate));
        assert!(en.tags.contains(&"corporate events".to_string()));

        let tr = extract_memory("Kurumsal bir etkinlik düzenliyoruz");
        assert_eq!(tr.service_type, Some(ServiceCategory::Corporate));
    }

    #[test]
    fn test_last_category_in_scan_order_wins() {
        // Scan order is corporate, wedding, festival, workshop, seminar, outdoor.
        let update = extract_memory("an outdoor wedding for our company");
        assert_eq!(update.service_type, Some(ServiceCategory::Outdoor));
        assert!(update.tags.contains(&"corporate events".to_string()));
        assert!(update.tags.contains(&"wedding events".to_string()));
        assert!(update.tags.contains(&"outdoor events".to_string()));
    }

    #[test]
    fn test_cross_cutting_tags() {
        let update = extract_memory("Menu and price for 300 guests, delivery included");
        assert_eq!(
            update.tags,
            vec!["capacity", "pricing", "menu", "logistics"]
        );
        assert_eq!(update.service_type, None);
    }

    #[test]
    fn test_interest_tags() {
        assert_eq!(extract_memory("sustainability").tags, vec!["sustainability"]);
        assert_eq!(extract_memory("bulk").tags, vec!["bulk orders"]);
        assert_eq!(extract_memory("a bespoke dessert table").tags, vec!["menu", "custom menus"]);
        assert_eq!(extract_memory("what is the lead time").tags, vec!["lead time"]);
    }

    #[test]
    fn test_fold_case_turkish_dotted_capital() {
        assert_eq!(fold_case("ŞİRKET"), "şirket");
        assert_eq!(fold_case("İSTANBUL'da bir düğün"), "istanbul'da bir düğün");
        assert_eq!(fold_case("Wedding"), "wedding");
    }

    #[test]
    fn test_extract_uppercase_turkish_category() {
        let update = extract_memory("ŞİRKET etkinliği");
        assert_eq!(update.service_type, Some(ServiceCategory::Corporate));
        assert_eq!(update.tags, vec!["corporate events"]);
    }

    #[test]
    fn test_recommendation_is_not_a_memory_tag() {
        assert!(extract_memory("what would you recommend").is_empty());
    }

    #[test]
    fn test_no_tags_for_greeting() {
        assert!(extract_memory("merhaba").is_empty());
        assert!(extract_memory("hello there").is_empty());
    }

    #[test]
    fn test_apply_is_set_union() {
        let mut memory = ConversationMemory::default();
        let update = extract_memory("corporate pricing");
        update.apply(&mut memory);
        update.apply(&mut memory);

        assert_eq!(memory.interests.len(), 2);
        assert_eq!(memory.mentioned_topics.len(), 2);
        assert_eq!(memory.service_type, Some(ServiceCategory::Corporate));
    }

    #[test]
    fn test_apply_without_category_keeps_previous_service_type() {
        let mut memory = ConversationMemory::default();
        extract_memory("wedding").apply(&mut memory);
        extract_memory("price").apply(&mut memory);
        assert_eq!(memory.service_type, Some(ServiceCategory::Wedding));
    }

    #[test]
    fn test_asks_lead_time() {
        assert!(asks_lead_time("how long does delivery take"));
        assert!(asks_lead_time("delivery lead time?"));
        assert!(asks_lead_time("teslimat ne kadar sürer"));
        assert!(!asks_lead_time("do you handle delivery"));
    }
}
