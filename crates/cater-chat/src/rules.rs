//! Ordered reply rules.
//!
//! A rule is a `(predicate, response builder)` pair. Rules are checked in
//! list order and the first predicate that holds picks the reply; a final
//! clarification rule catches everything else.

use std::collections::BTreeSet;

use tracing::debug;

use cater_core::types::{PageContext, ServiceCategory};

use crate::keywords::{
    asks_lead_time, fold_case, KeywordGroup, BULK, CAPACITY, CATEGORIES, CORPORATE, CUSTOM,
    FESTIVAL, LOGISTICS, MENU, PRICING, PROCESS, QUALITY, RECOMMENDATION, SERVICES_OFFERED,
    SUSTAINABILITY, TIMELINE, WEDDING,
};
use crate::templates::{ResponseKey, ResponseTable};
use crate::types::{ConversationMemory, Reply};

// =============================================================================
// RuleInput
// =============================================================================

/// Everything a rule may look at: the utterance and the context snapshot
/// taken when it was sent.
#[derive(Debug, Clone)]
pub struct RuleInput<'a> {
    /// Utterance as submitted; echoed back by the clarification reply.
    pub text: &'a str,
    pub lower: String,
    pub page: PageContext,
    pub service_type: Option<ServiceCategory>,
    /// Interest tags remembered so far, including those from `text`.
    pub interests: BTreeSet<String>,
    /// Trimmed utterances with fewer characters than this are "unclear".
    pub short_threshold: usize,
}

impl<'a> RuleInput<'a> {
    pub fn new(
        text: &'a str,
        page: PageContext,
        memory: &ConversationMemory,
        short_threshold: usize,
    ) -> Self {
        Self {
            text,
            lower: fold_case(text),
            page,
            service_type: memory.service_type,
            interests: memory.interests.clone(),
            short_threshold,
        }
    }

    fn mentions(&self, group: &KeywordGroup) -> bool {
        group.matches(&self.lower)
    }

    fn remembers(&self, group: &KeywordGroup) -> bool {
        self.interests.contains(group.name)
    }

    fn on_detail_page(&self) -> bool {
        self.page == PageContext::ServiceDetail
    }

    fn on_overview_page(&self) -> bool {
        matches!(self.page, PageContext::Home | PageContext::ServiceList)
    }

    fn is_short(&self) -> bool {
        self.text.trim().chars().count() < self.short_threshold
    }

    /// Value substituted into detail templates.
    fn service_phrase(&self, table: &ResponseTable) -> &'static str {
        match self.service_type {
            Some(category) => category.as_str(),
            None => table.unknown_service_phrase(),
        }
    }
}

// =============================================================================
// Rule
// =============================================================================

/// One entry of the ordered rule list.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub predicate: fn(&RuleInput<'_>) -> bool,
    pub respond: fn(&RuleInput<'_>, &ResponseTable) -> Reply,
}

impl Rule {
    pub fn new(
        name: &'static str,
        predicate: fn(&RuleInput<'_>) -> bool,
        respond: fn(&RuleInput<'_>, &ResponseTable) -> Reply,
    ) -> Self {
        Self {
            name,
            predicate,
            respond,
        }
    }

    pub fn matches(&self, input: &RuleInput<'_>) -> bool {
        (self.predicate)(input)
    }

    pub fn reply(&self, input: &RuleInput<'_>, table: &ResponseTable) -> Reply {
        (self.respond)(input, table)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

// =============================================================================
// RuleSet
// =============================================================================

/// Ordered rules plus the catch-all fallback.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    fallback: Rule,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleSet {
    /// The assistant's rule list, highest priority first.
    pub fn standard() -> Self {
        let rules = vec![
            // Service page: answers are tailored to the remembered service.
            Rule::new(
                "detail-process",
                |i| i.on_detail_page() && i.mentions(&PROCESS),
                |i, t| t.reply(ResponseKey::DetailProcess, i.service_phrase(t)),
            ),
            Rule::new(
                "detail-pricing",
                |i| i.on_detail_page() && i.mentions(&PRICING),
                |i, t| t.reply(ResponseKey::DetailPricing, i.service_phrase(t)),
            ),
            Rule::new(
                "detail-capacity",
                |i| i.on_detail_page() && i.mentions(&CAPACITY),
                |i, t| t.reply(ResponseKey::DetailCapacity, i.service_phrase(t)),
            ),
            Rule::new(
                "categories",
                |i| i.on_overview_page() && i.mentions(&CATEGORIES),
                |_, t| t.reply(ResponseKey::Categories, ""),
            ),
            // General topics.
            Rule::new(
                "process",
                |i| i.mentions(&PROCESS),
                |_, t| t.reply(ResponseKey::Process, ""),
            ),
            Rule::new(
                "services-offered",
                |i| i.mentions(&SERVICES_OFFERED),
                |_, t| t.reply(ResponseKey::Services, ""),
            ),
            Rule::new(
                "capacity",
                |i| i.mentions(&CAPACITY),
                |_, t| t.reply(ResponseKey::Capacity, ""),
            ),
            Rule::new(
                "menu",
                |i| i.mentions(&MENU),
                |_, t| t.reply(ResponseKey::Menu, ""),
            ),
            Rule::new(
                "pricing",
                |i| i.mentions(&PRICING),
                |_, t| t.reply(ResponseKey::Pricing, ""),
            ),
            Rule::new(
                "logistics",
                |i| i.mentions(&LOGISTICS),
                |i, t| {
                    if asks_lead_time(&i.lower) {
                        t.reply(ResponseKey::LeadTime, "")
                    } else {
                        t.reply(ResponseKey::Logistics, "")
                    }
                },
            ),
            Rule::new(
                "timeline",
                |i| i.mentions(&TIMELINE),
                |_, t| t.reply(ResponseKey::LeadTime, ""),
            ),
            Rule::new(
                "quality",
                |i| i.mentions(&QUALITY),
                |_, t| t.reply(ResponseKey::Quality, ""),
            ),
            // Interests picked up from the conversation.
            Rule::new(
                "bulk-orders",
                |i| i.mentions(&BULK),
                |_, t| t.reply(ResponseKey::BulkOrders, ""),
            ),
            Rule::new(
                "sustainability",
                |i| i.mentions(&SUSTAINABILITY),
                |_, t| t.reply(ResponseKey::Sustainability, ""),
            ),
            Rule::new(
                "custom-menus",
                |i| i.mentions(&CUSTOM),
                |_, t| t.reply(ResponseKey::CustomMenus, ""),
            ),
            Rule::new(
                "memory-sustainability",
                |i| i.remembers(&SUSTAINABILITY) && i.mentions(&RECOMMENDATION),
                |_, t| t.reply(ResponseKey::MemorySustainability, ""),
            ),
            // Named services.
            Rule::new(
                "corporate",
                |i| i.mentions(&CORPORATE),
                |_, t| t.reply(ResponseKey::Corporate, ""),
            ),
            Rule::new(
                "wedding",
                |i| i.mentions(&WEDDING),
                |_, t| t.reply(ResponseKey::Wedding, ""),
            ),
            Rule::new(
                "festival",
                |i| i.mentions(&FESTIVAL),
                |_, t| t.reply(ResponseKey::Festival, ""),
            ),
            Rule::new(
                "unclear",
                |i| i.is_short(),
                |_, t| t.reply(ResponseKey::Unclear, ""),
            ),
        ];

        let fallback = Rule::new(
            "clarify",
            |_| true,
            |i, t| t.reply(ResponseKey::Clarify, i.text),
        );

        Self { rules, fallback }
    }

    /// Rule names in evaluation order, fallback last.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .chain(std::iter::once(&self.fallback))
            .map(|r| r.name)
            .collect()
    }

    /// First rule whose predicate holds.
    pub fn matching(&self, input: &RuleInput<'_>) -> &Rule {
        self.rules
            .iter()
            .find(|rule| rule.matches(input))
            .unwrap_or(&self.fallback)
    }

    /// Pick the reply for `input`. Returns the matched rule's name with it.
    pub fn select(&self, input: &RuleInput<'_>, table: &ResponseTable) -> (&'static str, Reply) {
        let rule = self.matching(input);
        debug!(
            rule = rule.name,
            page = %input.page,
            language = %table.language(),
            "Rule matched"
        );
        (rule.name, rule.reply(input, table))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cater_core::types::Language;

    fn input<'a>(text: &'a str, page: PageContext, service: Option<ServiceCategory>) -> RuleInput<'a> {
        let memory = ConversationMemory {
            service_type: service,
            ..Default::default()
        };
        RuleInput::new(text, page, &memory, 5)
    }

    fn input_remembering<'a>(text: &'a str, tags: &[&str]) -> RuleInput<'a> {
        let memory = ConversationMemory {
            interests: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        };
        RuleInput::new(text, PageContext::Home, &memory, 5)
    }

    fn rule_for(text: &str, page: PageContext) -> &'static str {
        RuleSet::standard().matching(&input(text, page, None)).name
    }

    fn en() -> ResponseTable {
        ResponseTable::for_language(Language::En)
    }

    fn tr() -> ResponseTable {
        ResponseTable::for_language(Language::Tr)
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(
            RuleSet::standard().names(),
            vec![
                "detail-process",
                "detail-pricing",
                "detail-capacity",
                "categories",
                "process",
                "services-offered",
                "capacity",
                "menu",
                "pricing",
                "logistics",
                "timeline",
                "quality",
                "bulk-orders",
                "sustainability",
                "custom-menus",
                "memory-sustainability",
                "corporate",
                "wedding",
                "festival",
                "unclear",
                "clarify",
            ]
        );
    }

    #[test]
    fn test_detail_rules_only_on_detail_page() {
        assert_eq!(rule_for("explain the process", PageContext::ServiceDetail), "detail-process");
        assert_eq!(rule_for("explain the process", PageContext::Home), "process");
        assert_eq!(rule_for("what is the price", PageContext::ServiceDetail), "detail-pricing");
        assert_eq!(rule_for("what is the price", PageContext::ServiceList), "pricing");
        assert_eq!(rule_for("how many guests", PageContext::ServiceDetail), "detail-capacity");
        assert_eq!(rule_for("how many guests", PageContext::Home), "capacity");
    }

    #[test]
    fn test_detail_checks_process_before_pricing_before_capacity() {
        assert_eq!(
            rule_for("pricing process for 200 guests", PageContext::ServiceDetail),
            "detail-process"
        );
        assert_eq!(
            rule_for("price for 200 guests", PageContext::ServiceDetail),
            "detail-pricing"
        );
    }

    #[test]
    fn test_detail_pricing_substitutes_remembered_service() {
        let rules = RuleSet::standard();
        for table in [en(), tr()] {
            let (name, reply) = rules.select(
                &input("price", PageContext::ServiceDetail, Some(ServiceCategory::Wedding)),
                &table,
            );
            assert_eq!(name, "detail-pricing");
            assert!(reply.content.contains("wedding"));
        }
    }

    #[test]
    fn test_detail_falls_back_to_generic_phrase() {
        let rules = RuleSet::standard();
        let (_, reply) = rules.select(&input("capacity?", PageContext::ServiceDetail, None), &en());
        assert!(reply.content.contains("this catering service"));

        let (_, reply) = rules.select(&input("kapasite?", PageContext::ServiceDetail, None), &tr());
        assert!(reply.content.contains("bu catering hizmeti"));
    }

    #[test]
    fn test_categories_on_overview_pages() {
        assert_eq!(rule_for("What catering services do you offer?", PageContext::Home), "categories");
        assert_eq!(rule_for("show me the categories", PageContext::ServiceList), "categories");
        assert_eq!(
            rule_for("What catering services do you offer?", PageContext::ServiceDetail),
            "services-offered"
        );
    }

    #[test]
    fn test_general_topics() {
        let page = PageContext::ServiceDetail;
        assert_eq!(rule_for("Can you provide staff?", page), "services-offered");
        assert_eq!(rule_for("do you have vegan options", page), "menu");
        assert_eq!(rule_for("teslimat yapıyor musunuz", page), "logistics");
        assert_eq!(rule_for("how far in advance should we book", page), "timeline");
        assert_eq!(rule_for("what about hygiene", page), "quality");
    }

    #[test]
    fn test_logistics_lead_time_branch() {
        let rules = RuleSet::standard();
        let table = en();

        let (name, reply) = rules.select(
            &input("how long does delivery take", PageContext::Home, None),
            &table,
        );
        assert_eq!(name, "logistics");
        assert_eq!(reply, table.reply(ResponseKey::LeadTime, ""));

        let (_, reply) = rules.select(
            &input("do you handle delivery", PageContext::Home, None),
            &table,
        );
        assert_eq!(reply, table.reply(ResponseKey::Logistics, ""));
    }

    #[test]
    fn test_named_services() {
        assert_eq!(rule_for("tell me about corporate events", PageContext::Home), "corporate");
        assert_eq!(rule_for("düğün", PageContext::Home), "wedding");
        assert_eq!(rule_for("a summer festival", PageContext::Home), "festival");
    }

    #[test]
    fn test_topic_beats_named_service() {
        assert_eq!(rule_for("wedding menu", PageContext::Home), "menu");
    }

    #[test]
    fn test_interest_topics() {
        let page = PageContext::Home;
        assert_eq!(rule_for("sustainability", page), "sustainability");
        assert_eq!(rule_for("Tell me about sustainable options", page), "sustainability");
        assert_eq!(rule_for("çevre dostu seçenekler", page), "sustainability");
        assert_eq!(rule_for("bulk", page), "bulk-orders");
        assert_eq!(rule_for("is there a minimum order?", page), "bulk-orders");
        assert_eq!(rule_for("a bespoke setup", page), "custom-menus");
        assert_eq!(rule_for("kişiye özel bir kurulum", page), "custom-menus");
    }

    #[test]
    fn test_keyword_rule_beats_unclear() {
        // "bulk" is shorter than the threshold but names a topic.
        let rules = RuleSet::standard();
        let (name, reply) = rules.select(&input("bulk", PageContext::Home, None), &en());
        assert_eq!(name, "bulk-orders");
        assert_eq!(reply, en().reply(ResponseKey::BulkOrders, ""));
    }

    #[test]
    fn test_remembered_sustainability_personalizes_recommendation() {
        let rules = RuleSet::standard();
        for (text, table) in [("What would you recommend?", en()), ("Ne önerirsiniz?", tr())] {
            let (name, reply) =
                rules.select(&input_remembering(text, &["sustainability"]), &table);
            assert_eq!(name, "memory-sustainability");
            assert_eq!(reply, table.reply(ResponseKey::MemorySustainability, ""));
        }
    }

    #[test]
    fn test_recommendation_without_interest_is_clarified() {
        let rules = RuleSet::standard();
        assert_eq!(
            rules.matching(&input_remembering("What would you recommend?", &[])).name,
            "clarify"
        );
        assert_eq!(
            rules
                .matching(&input_remembering("What would you recommend?", &["pricing"]))
                .name,
            "clarify"
        );
    }

    #[test]
    fn test_sustainability_question_beats_remembered_interest() {
        let input = input_remembering("any organic options?", &["sustainability"]);
        assert_eq!(RuleSet::standard().matching(&input).name, "sustainability");
    }

    #[test]
    fn test_turkish_dotted_capital_is_folded() {
        assert_eq!(rule_for("ŞİRKET etkinliği", PageContext::Home), "corporate");
        assert_eq!(rule_for("DÜĞÜN FİYATI", PageContext::ServiceDetail), "detail-pricing");
    }

    #[test]
    fn test_unclear_for_short_utterances() {
        let rules = RuleSet::standard();
        let table = en();
        let (name, reply) = rules.select(&input("hi", PageContext::Home, None), &table);
        assert_eq!(name, "unclear");
        assert_eq!(reply, table.reply(ResponseKey::Unclear, ""));
        assert_eq!(reply.suggestions.len(), 3);

        // Surrounding whitespace does not count.
        assert_eq!(rule_for("   ok   ", PageContext::Home), "unclear");
    }

    #[test]
    fn test_short_threshold_counts_characters() {
        // Four characters, more than four bytes.
        assert_eq!(rule_for("şşşş", PageContext::Home), "unclear");
        assert_eq!(rule_for("şşşşş", PageContext::Home), "clarify");
    }

    #[test]
    fn test_clarify_echoes_utterance() {
        let rules = RuleSet::standard();
        let (name, reply) = rules.select(&input("merhaba", PageContext::Home, None), &tr());
        assert_eq!(name, "clarify");
        assert!(reply.content.contains("\"merhaba\""));
        assert!(reply.content.contains("anlıyorum"));
    }

    #[test]
    fn test_keyword_detection_is_language_independent() {
        let rules = RuleSet::standard();
        let (name, reply) = rules.select(&input("price please", PageContext::Home, None), &tr());
        assert_eq!(name, "pricing");
        assert_eq!(reply, tr().reply(ResponseKey::Pricing, ""));
    }
}
