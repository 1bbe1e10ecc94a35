//! Bilingual canned response tables.
//!
//! Every reply the assistant can give lives here. A table maps a
//! [`ResponseKey`] to a [`Template`]; a template is either static text or
//! text with a single substitution (the service type, or the visitor's own
//! words for the clarification reply). Both languages are exhaustive matches
//! over the same key enum, so neither table can miss a key.

use cater_core::types::Language;

use crate::types::Reply;

// =============================================================================
// Keys and templates
// =============================================================================

/// Identifies one canned reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResponseKey {
    Welcome,
    Categories,
    DetailProcess,
    DetailPricing,
    DetailCapacity,
    Process,
    Services,
    Capacity,
    Menu,
    Pricing,
    Logistics,
    LeadTime,
    Quality,
    BulkOrders,
    Sustainability,
    CustomMenus,
    /// Recommendation for a visitor who already asked about sustainability.
    MemorySustainability,
    Corporate,
    Wedding,
    Festival,
    Unclear,
    Clarify,
}

impl ResponseKey {
    pub const ALL: [ResponseKey; 22] = [
        ResponseKey::Welcome,
        ResponseKey::Categories,
        ResponseKey::DetailProcess,
        ResponseKey::DetailPricing,
        ResponseKey::DetailCapacity,
        ResponseKey::Process,
        ResponseKey::Services,
        ResponseKey::Capacity,
        ResponseKey::Menu,
        ResponseKey::Pricing,
        ResponseKey::Logistics,
        ResponseKey::LeadTime,
        ResponseKey::Quality,
        ResponseKey::BulkOrders,
        ResponseKey::Sustainability,
        ResponseKey::CustomMenus,
        ResponseKey::MemorySustainability,
        ResponseKey::Corporate,
        ResponseKey::Wedding,
        ResponseKey::Festival,
        ResponseKey::Unclear,
        ResponseKey::Clarify,
    ];
}

/// Reply template: fixed text, or text built from one contextual value.
#[derive(Debug, Clone, Copy)]
pub enum Template {
    Static {
        content: &'static str,
        suggestions: &'static [&'static str],
    },
    Parameterized {
        render: fn(&str) -> String,
        suggestions: &'static [&'static str],
    },
}

impl Template {
    /// Build the reply. `param` is ignored by static templates.
    pub fn render(&self, param: &str) -> Reply {
        let (content, suggestions) = match self {
            Template::Static {
                content,
                suggestions,
            } => (content.to_string(), *suggestions),
            Template::Parameterized {
                render,
                suggestions,
            } => (render(param), *suggestions),
        };
        Reply {
            content,
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_parameterized(&self) -> bool {
        matches!(self, Template::Parameterized { .. })
    }

    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            Template::Static { suggestions, .. } | Template::Parameterized { suggestions, .. } => {
                *suggestions
            }
        }
    }
}

// =============================================================================
// ResponseTable
// =============================================================================

/// All replies for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseTable {
    language: Language,
}

impl ResponseTable {
    pub fn for_language(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn template(&self, key: ResponseKey) -> Template {
        match self.language {
            Language::En => english(key),
            Language::Tr => turkish(key),
        }
    }

    /// Render the reply for `key`.
    pub fn reply(&self, key: ResponseKey, param: &str) -> Reply {
        self.template(key).render(param)
    }

    /// Phrase substituted into detail replies when no service type is known.
    pub fn unknown_service_phrase(&self) -> &'static str {
        match self.language {
            Language::En => "this catering service",
            Language::Tr => "bu catering hizmeti",
        }
    }
}

// =============================================================================
// English
// =============================================================================

fn en_detail_process(service: &str) -> String {
    format!(
        "For {service}, our service process:\n\n\
         1. Planning & Requirement Analysis\n   \
         • Guest count, venue and timing review\n   \
         • Operational requirement mapping\n\n\
         2. Menu Development & Approval\n   \
         • Menu proposal and tasting session\n   \
         • Final approval and production plan\n\n\
         3. Production & Preparation\n   \
         • Controlled production in our own kitchens\n   \
         • Quality checkpoints at each stage\n\n\
         4. On-Site Setup & Service\n   \
         • Field team arrives early for staging\n   \
         • Supervised service and post-event review\n\n\
         Which stage would you like more detail on?"
    )
}

fn en_detail_pricing(service: &str) -> String {
    format!(
        "Pricing for {service} depends on:\n\
         • Number of guests\n\
         • Menu selection and presentation level\n\
         • Service staff and on-site setup requirements\n\
         • Venue location and delivery logistics\n\
         • Event date and duration\n\n\
         I can direct you to our quotation process. Would you like to proceed?"
    )
}

fn en_detail_capacity(service: &str) -> String {
    format!(
        "Our capacity for {service}:\n\
         • Daily production: 5,000+ servings\n\
         • Event size: from intimate groups of 20 up to 10,000 guests\n\
         • Simultaneous service at up to 10 venues\n\
         • Backup inventory and contingency staff for every event\n\n\
         How many guests are you expecting?"
    )
}

fn en_clarify(user_message: &str) -> String {
    format!(
        "I understand you're asking about \"{user_message}\".\n\n\
         To assist you effectively, could you clarify:\n\
         • Which type of event are you planning (corporate, wedding, festival, workshop, seminar, outdoor)?\n\
         • Do you need information about our service process or capacity?\n\
         • Are you looking for menu, pricing or logistics information?\n\n\
         I can also guide you to the relevant section of our website."
    )
}

fn english(key: ResponseKey) -> Template {
    match key {
        ResponseKey::Welcome => Template::Static {
            content: "I'm your Event Catering Assistant. I provide guidance on our catering services, event planning process, and guest capacities.\n\nHow can I assist you today?",
            suggestions: &[
                "Explain your event planning process",
                "What catering services do you offer?",
                "What guest capacities can you handle?",
            ],
        },
        ResponseKey::Categories => Template::Static {
            content: "Our catering services:\n\n\
                      • Corporate Event Catering\n  Meetings, product launches, executive summits\n\n\
                      • Wedding & Engagement Catering\n  Ceremonies, receptions, engagement parties\n\n\
                      • Festival & Large Event Catering\n  Public festivals, multi-day events, 500 - 10,000 guests\n\n\
                      • Workshop & Special Experience Catering\n  Brand experiences and curated gatherings\n\n\
                      • Seminar & Conference Catering\n  Coffee breaks and continuous service for attendees\n\n\
                      • Outdoor & Activity Catering\n  Mobile setups for parks, beaches and activity events\n\n\
                      Which type of event are you planning?",
            suggestions: &[
                "Tell me about corporate event catering",
                "Tell me about wedding catering",
                "Tell me about festival catering",
            ],
        },
        ResponseKey::DetailProcess => Template::Parameterized {
            render: en_detail_process,
            suggestions: &[
                "Explain your quality standards",
                "How far in advance should we book?",
                "Tell me about menu tasting",
            ],
        },
        ResponseKey::DetailPricing => Template::Parameterized {
            render: en_detail_pricing,
            suggestions: &[
                "Yes, request a quotation",
                "What is the minimum guest count?",
                "What affects the final price?",
            ],
        },
        ResponseKey::DetailCapacity => Template::Parameterized {
            render: en_detail_capacity,
            suggestions: &[
                "We expect more than 1,000 guests",
                "Can you serve multiple venues?",
                "Tell me about on-site staffing",
            ],
        },
        ResponseKey::Process => Template::Static {
            content: "Our event catering process:\n\n\
                      1. Consultation & Planning\n   \
                      • Requirement analysis and timeline development\n   \
                      • Venue and guest flow review\n\n\
                      2. Menu Development & Tasting\n   \
                      • Menu proposal tailored to your event\n   \
                      • Tasting session and approval\n\n\
                      3. Production & Preparation\n   \
                      • Controlled production in dedicated facilities\n   \
                      • Quality checkpoints at each stage\n\n\
                      4. Logistics, Setup & Service\n   \
                      • Temperature-stable transport with real-time tracking\n   \
                      • Early on-site setup and supervised service\n   \
                      • Post-event review and feedback\n\n\
                      Which stage would you like more detail on?",
            suggestions: &[
                "Explain your quality standards",
                "How far in advance should we book?",
                "Tell me about delivery logistics",
            ],
        },
        ResponseKey::Services => Template::Static {
            content: "We provide end-to-end event catering:\n\
                      • Menu design and tasting\n\
                      • Production in our own kitchens\n\
                      • Delivery and on-site setup\n\
                      • Service staff and supervision\n\
                      • Post-event wrap-up\n\n\
                      Our services cover corporate events, weddings, festivals, workshops, seminars and outdoor activities. Which one fits your event?",
            suggestions: &[
                "Show me your catering categories",
                "Explain your event planning process",
                "How do I request a quotation?",
            ],
        },
        ResponseKey::Capacity => Template::Static {
            content: "Our catering capacity:\n\
                      • Daily production: 5,000+ servings\n\
                      • Corporate and wedding events: 20 - 500 guests\n\
                      • Festivals and large events: 500 - 10,000 guests\n\
                      • Simultaneous service at up to 10 venues\n\n\
                      How many guests are you planning for?",
            suggestions: &[
                "We are planning a large event",
                "Can you serve multiple venues?",
                "Explain your event planning process",
            ],
        },
        ResponseKey::Menu => Template::Static {
            content: "Our menus are built around your event:\n\
                      • Signature desserts and pastry tables\n\
                      • Savory catering and finger food\n\
                      • Vegetarian, vegan and allergen-aware options\n\
                      • Tasting session before final approval\n\
                      • Presentation styled to your venue\n\n\
                      Would you like to plan a tasting?",
            suggestions: &[
                "Yes, plan a tasting",
                "Do you offer vegan options?",
                "How is menu pricing calculated?",
            ],
        },
        ResponseKey::Pricing => Template::Static {
            content: "Every quotation is prepared for the specific event. Pricing depends on:\n\
                      • Number of guests\n\
                      • Menu selection and presentation level\n\
                      • Service staff and setup requirements\n\
                      • Venue location and logistics\n\
                      • Event date and duration\n\n\
                      Share your event details and we will prepare a quotation.",
            suggestions: &[
                "Yes, request a quotation",
                "What details do you need for a quote?",
                "What is the minimum guest count?",
            ],
        },
        ResponseKey::Logistics => Template::Static {
            content: "Our logistics and delivery capabilities:\n\
                      • Temperature-stable transport vehicles\n\
                      • Real-time tracking and contingency routing\n\
                      • Coordinated delivery to multiple venues\n\
                      • Dedicated field teams for setup\n\
                      • Backup inventory on site\n\n\
                      Where will your event take place?",
            suggestions: &[
                "Do you deliver outside the city?",
                "How long before the event do you arrive?",
                "Can you serve multiple venues?",
            ],
        },
        ResponseKey::LeadTime => Template::Static {
            content: "Typical lead times:\n\
                      • Small events (up to 100 guests): 1 - 2 weeks\n\
                      • Corporate events and weddings: 3 - 6 weeks\n\
                      • Festivals and large events: 2 - 3 months\n\
                      • Urgent requests: evaluated case by case\n\n\
                      On the event day our field team arrives early for staging and setup.\n\n\
                      What is your event date?",
            suggestions: &[
                "Our event is next week",
                "Tell me about delivery logistics",
                "How do I request a quotation?",
            ],
        },
        ResponseKey::Quality => Template::Static {
            content: "Our quality framework:\n\n\
                      • Ingredients\n  Verified suppliers and incoming inspection\n\n\
                      • Production\n  Hygiene-controlled kitchens, checkpoints at every stage\n\n\
                      • Transport\n  Temperature-stable vehicles with tracking\n\n\
                      • On Site\n  Supervisors verify presentation and service standards\n\n\
                      • Review\n  Post-event verification and structured feedback\n\n\
                      We keep the same standard at every venue and every scale.",
            suggestions: &[
                "Which certifications do you hold?",
                "How do you ensure hygiene on site?",
                "Explain your event planning process",
            ],
        },
        ResponseKey::BulkOrders => Template::Static {
            content: "Minimum orders and large volumes:\n\
                      • Full-service catering: from 20 guests\n\
                      • Drop-off orders: from 30 servings\n\
                      • Large volumes: up to 10,000 guests per event\n\
                      • Multi-day and recurring orders on request\n\n\
                      For recurring or high-volume orders we can agree flexible terms.",
            suggestions: &[
                "We expect more than 1,000 guests",
                "Do you offer recurring corporate catering?",
                "How do I request a quotation?",
            ],
        },
        ResponseKey::Sustainability => Template::Static {
            content: "Our sustainable catering options:\n\
                      • Seasonal menus from local suppliers\n\
                      • Organic ingredients on request\n\
                      • Reusable serveware and compostable packaging\n\
                      • Waste sorting at every venue\n\
                      • Surplus food donated after the event\n\n\
                      Would you like an eco-friendly menu proposal?",
            suggestions: &[
                "Yes, prepare an eco-friendly menu",
                "Do you use organic ingredients?",
                "How is menu pricing calculated?",
            ],
        },
        ResponseKey::CustomMenus => Template::Static {
            content: "Yes, every menu can be customized:\n\n\
                      • Theme & Concept\n  Dishes and presentation built around your event or brand\n\n\
                      • Dietary Requirements\n  Vegetarian, vegan, gluten-free and allergen-aware dishes\n\n\
                      • Stations & Tables\n  Live stations, dessert tables and custom serveware\n\n\
                      • Tasting & Approval\n  Tasting session and revisions before final approval\n\n\
                      What kind of customization do you have in mind?",
            suggestions: &[
                "Do you offer vegan options?",
                "Yes, plan a tasting",
                "How far in advance should we book?",
            ],
        },
        ResponseKey::MemorySustainability => Template::Static {
            content: "Since sustainability matters to you, I recommend our seasonal menus:\n\
                      • Locally sourced, seasonal ingredients\n\
                      • Organic choices across the menu\n\
                      • Reusable serveware and minimal packaging\n\
                      • Surplus food donated after the event\n\n\
                      Shall I note this for your quotation?",
            suggestions: &[
                "Yes, add it to my quotation",
                "Show me your catering categories",
                "Tell me about menu tasting",
            ],
        },
        ResponseKey::Corporate => Template::Static {
            content: "Corporate Event Catering:\n\n\
                      • Meetings, product launches, executive summits and annual meetings\n\
                      • 20 - 500 corporate guests per event\n\
                      • Menu development and approval with your team\n\
                      • On-site setup, supervised service and post-event review\n\
                      • Corporate-level reporting and coordination\n\n\
                      Would you like to discuss your corporate event?",
            suggestions: &[
                "What are your prices for a corporate event?",
                "Explain your event planning process",
                "Can you serve multiple venues?",
            ],
        },
        ResponseKey::Wedding => Template::Static {
            content: "Wedding & Engagement Catering:\n\n\
                      • Wedding ceremonies, receptions and engagement parties\n\
                      • 50 - 500 wedding guests\n\
                      • Wedding consultation, menu design and tasting\n\
                      • Venue setup and celebration support\n\n\
                      Would you like to plan a tasting for your wedding?",
            suggestions: &[
                "Yes, plan a tasting",
                "What are your wedding prices?",
                "How far in advance should we book?",
            ],
        },
        ResponseKey::Festival => Template::Static {
            content: "Festival & Large Event Catering:\n\n\
                      • Public festivals, multi-day events and large celebrations\n\
                      • 500 - 10,000 guests\n\
                      • Production scaling and field logistics setup\n\
                      • Rapid deployment and continuous service\n\n\
                      How large is your event?",
            suggestions: &[
                "We expect more than 1,000 guests",
                "Tell me about delivery logistics",
                "How far in advance should we book?",
            ],
        },
        ResponseKey::Unclear => Template::Static {
            content: "Could you provide more details? I can assist with:\n\
                      • Catering service categories\n\
                      • Event planning process and capacity\n\
                      • Menus and pricing\n\
                      • Delivery, logistics and lead times\n\
                      • Quality standards",
            suggestions: &[
                "Show me your catering categories",
                "Explain your event planning process",
                "How do I request a quotation?",
            ],
        },
        ResponseKey::Clarify => Template::Parameterized {
            render: en_clarify,
            suggestions: &[
                "Show me your catering categories",
                "Explain your event planning process",
                "I need quotation information",
            ],
        },
    }
}

// =============================================================================
// Turkish
// =============================================================================

fn tr_detail_process(service: &str) -> String {
    format!(
        "{service} için hizmet sürecimiz:\n\n\
         1. Planlama ve Gereksinim Analizi\n   \
         • Misafir sayısı, mekan ve zamanlama incelemesi\n   \
         • Operasyonel gereksinim haritalama\n\n\
         2. Menü Geliştirme ve Onay\n   \
         • Menü önerisi ve tadım\n   \
         • Final onay ve üretim planı\n\n\
         3. Üretim ve Hazırlık\n   \
         • Kendi mutfaklarımızda kontrollü üretim\n   \
         • Her aşamada kalite kontrol noktaları\n\n\
         4. Sahada Kurulum ve Servis\n   \
         • Saha ekibi kurulum için erken gelir\n   \
         • Denetimli servis ve etkinlik sonrası inceleme\n\n\
         Hangi aşama için daha fazla detay istersiniz?"
    )
}

fn tr_detail_pricing(service: &str) -> String {
    format!(
        "{service} için fiyatlandırma şunlara bağlıdır:\n\
         • Misafir sayısı\n\
         • Menü seçimi ve sunum seviyesi\n\
         • Servis personeli ve sahada kurulum gereksinimleri\n\
         • Mekan konumu ve teslimat lojistiği\n\
         • Etkinlik tarihi ve süresi\n\n\
         Sizi teklif sürecimize yönlendirebilirim. Devam etmek ister misiniz?"
    )
}

fn tr_detail_capacity(service: &str) -> String {
    format!(
        "{service} için kapasitemiz:\n\
         • Günlük üretim: 5.000+ porsiyon\n\
         • Etkinlik büyüklüğü: 20 kişilik gruplardan 10.000 misafire kadar\n\
         • Aynı anda 10 mekana kadar servis\n\
         • Her etkinlik için yedek envanter ve personel\n\n\
         Kaç misafir bekliyorsunuz?"
    )
}

fn tr_clarify(user_message: &str) -> String {
    format!(
        "\"{user_message}\" hakkında sorduğunuzu anlıyorum.\n\n\
         Size etkili bir şekilde yardımcı olabilmem için şunları netleştirebilir misiniz:\n\
         • Hangi tür etkinlik planlıyorsunuz (kurumsal, düğün, festival, workshop, seminer, açık alan)?\n\
         • Hizmet sürecimiz veya kapasitemiz hakkında bilgi mi gerekiyor?\n\
         • Menü, fiyatlandırma veya lojistik bilgisi mi arıyorsunuz?\n\n\
         Ayrıca sizi web sitemizin ilgili bölümüne yönlendirebilirim."
    )
}

fn turkish(key: ResponseKey) -> Template {
    match key {
        ResponseKey::Welcome => Template::Static {
            content: "Etkinlik Catering Asistanınızım. Catering hizmetlerimiz, etkinlik planlama sürecimiz ve misafir kapasitelerimiz hakkında rehberlik sağlıyorum.\n\nBugün size nasıl yardımcı olabilirim?",
            suggestions: &[
                "Etkinlik planlama sürecinizi açıklayın",
                "Hangi catering hizmetlerini sunuyorsunuz?",
                "Misafir kapasiteniz nedir?",
            ],
        },
        ResponseKey::Categories => Template::Static {
            content: "Catering hizmetlerimiz:\n\n\
                      • Kurumsal Etkinlik Catering\n  Toplantılar, ürün lansmanları, yönetici zirveleri\n\n\
                      • Düğün & Nişan Catering\n  Törenler, resepsiyonlar, nişan partileri\n\n\
                      • Festival & Büyük Etkinlik Catering\n  Halka açık festivaller, çok günlü etkinlikler, 500 - 10.000 misafir\n\n\
                      • Workshop & Özel Deneyim Catering\n  Marka deneyimleri ve küratörlü buluşmalar\n\n\
                      • Seminer & Konferans Catering\n  Katılımcılar için kahve arası ve sürekli servis\n\n\
                      • Açık Alan & Aktivite Catering\n  Park, plaj ve aktivite etkinlikleri için mobil kurulum\n\n\
                      Hangi tür etkinlik planlıyorsunuz?",
            suggestions: &[
                "Kurumsal etkinlik catering hakkında bilgi verin",
                "Düğün catering hakkında bilgi verin",
                "Festival catering hakkında bilgi verin",
            ],
        },
        ResponseKey::DetailProcess => Template::Parameterized {
            render: tr_detail_process,
            suggestions: &[
                "Kalite standartlarınızı açıklayın",
                "Ne kadar önceden rezervasyon yapmalıyız?",
                "Menü tadımı hakkında bilgi verin",
            ],
        },
        ResponseKey::DetailPricing => Template::Parameterized {
            render: tr_detail_pricing,
            suggestions: &[
                "Evet, teklif talep ediyorum",
                "Minimum misafir sayısı nedir?",
                "Final fiyatı neler etkiler?",
            ],
        },
        ResponseKey::DetailCapacity => Template::Parameterized {
            render: tr_detail_capacity,
            suggestions: &[
                "1.000'den fazla misafir bekliyoruz",
                "Birden fazla mekana servis verebilir misiniz?",
                "Sahada personel hakkında bilgi verin",
            ],
        },
        ResponseKey::Process => Template::Static {
            content: "Etkinlik catering sürecimiz:\n\n\
                      1. Danışmanlık ve Planlama\n   \
                      • Gereksinim analizi ve zaman çizelgesi\n   \
                      • Mekan ve misafir akışı incelemesi\n\n\
                      2. Menü Geliştirme ve Tadım\n   \
                      • Etkinliğinize özel menü önerisi\n   \
                      • Tadım ve onay\n\n\
                      3. Üretim ve Hazırlık\n   \
                      • Özel tesislerde kontrollü üretim\n   \
                      • Her aşamada kalite kontrol noktaları\n\n\
                      4. Lojistik, Kurulum ve Servis\n   \
                      • Gerçek zamanlı takip ile sıcaklık kontrollü taşıma\n   \
                      • Erken sahada kurulum ve denetimli servis\n   \
                      • Etkinlik sonrası inceleme ve geri bildirim\n\n\
                      Hangi aşama için daha fazla detay istersiniz?",
            suggestions: &[
                "Kalite standartlarınızı açıklayın",
                "Ne kadar önceden rezervasyon yapmalıyız?",
                "Teslimat lojistiği hakkında bilgi verin",
            ],
        },
        ResponseKey::Services => Template::Static {
            content: "Uçtan uca etkinlik catering hizmeti sağlıyoruz:\n\
                      • Menü tasarımı ve tadım\n\
                      • Kendi mutfaklarımızda üretim\n\
                      • Teslimat ve sahada kurulum\n\
                      • Servis personeli ve denetim\n\
                      • Etkinlik sonrası kapanış\n\n\
                      Hizmetlerimiz kurumsal etkinlikler, düğünler, festivaller, workshop'lar, seminerler ve açık alan aktivitelerini kapsar. Hangisi etkinliğinize uygun?",
            suggestions: &[
                "Catering kategorilerinizi gösterin",
                "Etkinlik planlama sürecinizi açıklayın",
                "Nasıl teklif talep edebilirim?",
            ],
        },
        ResponseKey::Capacity => Template::Static {
            content: "Catering kapasitemiz:\n\
                      • Günlük üretim: 5.000+ porsiyon\n\
                      • Kurumsal etkinlikler ve düğünler: 20 - 500 misafir\n\
                      • Festivaller ve büyük etkinlikler: 500 - 10.000 misafir\n\
                      • Aynı anda 10 mekana kadar servis\n\n\
                      Kaç misafir için planlama yapıyorsunuz?",
            suggestions: &[
                "Büyük bir etkinlik planlıyoruz",
                "Birden fazla mekana servis verebilir misiniz?",
                "Etkinlik planlama sürecinizi açıklayın",
            ],
        },
        ResponseKey::Menu => Template::Static {
            content: "Menülerimiz etkinliğinize göre hazırlanır:\n\
                      • İmza tatlılar ve pastane masaları\n\
                      • Tuzlu ikramlar ve finger food\n\
                      • Vejetaryen, vegan ve alerjen dostu seçenekler\n\
                      • Final onaydan önce tadım\n\
                      • Mekanınıza uygun sunum\n\n\
                      Bir tadım planlamak ister misiniz?",
            suggestions: &[
                "Evet, tadım planlayalım",
                "Vegan seçenekleriniz var mı?",
                "Menü fiyatı nasıl hesaplanır?",
            ],
        },
        ResponseKey::Pricing => Template::Static {
            content: "Her teklif etkinliğe özel hazırlanır. Fiyatlandırma şunlara bağlıdır:\n\
                      • Misafir sayısı\n\
                      • Menü seçimi ve sunum seviyesi\n\
                      • Servis personeli ve kurulum gereksinimleri\n\
                      • Mekan konumu ve lojistik\n\
                      • Etkinlik tarihi ve süresi\n\n\
                      Etkinlik detaylarınızı paylaşın, size özel teklif hazırlayalım.",
            suggestions: &[
                "Evet, teklif talep ediyorum",
                "Teklif için hangi bilgiler gerekli?",
                "Minimum misafir sayısı nedir?",
            ],
        },
        ResponseKey::Logistics => Template::Static {
            content: "Lojistik ve teslimat kabiliyetlerimiz:\n\
                      • Sıcaklık kontrollü taşıma araçları\n\
                      • Gerçek zamanlı takip ve yedek rota\n\
                      • Birden fazla mekana koordineli teslimat\n\
                      • Kurulum için özel saha ekipleri\n\
                      • Sahada yedek envanter\n\n\
                      Etkinliğiniz nerede gerçekleşecek?",
            suggestions: &[
                "Şehir dışına teslimat yapıyor musunuz?",
                "Etkinlikten ne kadar önce geliyorsunuz?",
                "Birden fazla mekana servis verebilir misiniz?",
            ],
        },
        ResponseKey::LeadTime => Template::Static {
            content: "Tipik hazırlık süreleri:\n\
                      • Küçük etkinlikler (100 misafire kadar): 1 - 2 hafta\n\
                      • Kurumsal etkinlikler ve düğünler: 3 - 6 hafta\n\
                      • Festivaller ve büyük etkinlikler: 2 - 3 ay\n\
                      • Acil talepler: duruma göre değerlendirilir\n\n\
                      Etkinlik günü saha ekibimiz kurulum için erken gelir.\n\n\
                      Etkinlik tarihiniz nedir?",
            suggestions: &[
                "Etkinliğimiz gelecek hafta",
                "Teslimat lojistiği hakkında bilgi verin",
                "Nasıl teklif talep edebilirim?",
            ],
        },
        ResponseKey::Quality => Template::Static {
            content: "Kalite çerçevemiz:\n\n\
                      • Malzemeler\n  Onaylı tedarikçiler ve giriş kontrolü\n\n\
                      • Üretim\n  Hijyen kontrollü mutfaklar, her aşamada kontrol noktaları\n\n\
                      • Taşıma\n  Takip sistemli, sıcaklık kontrollü araçlar\n\n\
                      • Sahada\n  Süpervizörler sunum ve servis standartlarını doğrular\n\n\
                      • İnceleme\n  Etkinlik sonrası doğrulama ve yapılandırılmış geri bildirim\n\n\
                      Her mekanda ve her ölçekte aynı standardı koruyoruz.",
            suggestions: &[
                "Hangi sertifikalara sahipsiniz?",
                "Sahada hijyeni nasıl kontrol ediyorsunuz?",
                "Etkinlik planlama sürecinizi açıklayın",
            ],
        },
        ResponseKey::BulkOrders => Template::Static {
            content: "Minimum sipariş ve yüksek hacimler:\n\
                      • Tam servis catering: 20 misafirden başlayarak\n\
                      • Teslim siparişleri: 30 porsiyondan başlayarak\n\
                      • Yüksek hacim: etkinlik başına 10.000 misafire kadar\n\
                      • Çok günlü ve düzenli siparişler talebe göre\n\n\
                      Düzenli veya yüksek hacimli siparişler için esnek koşullar belirleyebiliriz.",
            suggestions: &[
                "1.000'den fazla misafir bekliyoruz",
                "Düzenli kurumsal catering hizmeti sunuyor musunuz?",
                "Nasıl teklif talep edebilirim?",
            ],
        },
        ResponseKey::Sustainability => Template::Static {
            content: "Sürdürülebilir catering seçeneklerimiz:\n\
                      • Yerel tedarikçilerden mevsimlik menüler\n\
                      • Talebe göre organik malzemeler\n\
                      • Yeniden kullanılabilir servis ekipmanı ve kompostlanabilir ambalaj\n\
                      • Her mekanda atık ayrıştırma\n\
                      • Etkinlik sonrası artan yemeklerin bağışı\n\n\
                      Çevre dostu bir menü önerisi ister misiniz?",
            suggestions: &[
                "Evet, çevre dostu bir menü hazırlayın",
                "Organik malzeme kullanıyor musunuz?",
                "Menü fiyatı nasıl hesaplanır?",
            ],
        },
        ResponseKey::CustomMenus => Template::Static {
            content: "Evet, her menü kişiye özel hazırlanabilir:\n\n\
                      • Tema ve Konsept\n  Etkinliğinize veya markanıza göre yemekler ve sunum\n\n\
                      • Beslenme Gereksinimleri\n  Vejetaryen, vegan, glutensiz ve alerjen dostu yemekler\n\n\
                      • İstasyonlar ve Masalar\n  Canlı istasyonlar, tatlı masaları ve özel servis ekipmanı\n\n\
                      • Tadım ve Onay\n  Final onaydan önce tadım ve revizyonlar\n\n\
                      Nasıl bir özelleştirme düşünüyorsunuz?",
            suggestions: &[
                "Vegan seçenekleriniz var mı?",
                "Evet, tadım planlayalım",
                "Ne kadar önceden rezervasyon yapmalıyız?",
            ],
        },
        ResponseKey::MemorySustainability => Template::Static {
            content: "Sürdürülebilirliğe önem verdiğiniz için mevsimlik menülerimizi öneririm:\n\
                      • Yerel kaynaklı, mevsimlik malzemeler\n\
                      • Menü genelinde organik seçenekler\n\
                      • Yeniden kullanılabilir servis ekipmanı ve az ambalaj\n\
                      • Etkinlik sonrası artan yemeklerin bağışı\n\n\
                      Bunu teklifinize not edeyim mi?",
            suggestions: &[
                "Evet, teklifime ekleyin",
                "Catering kategorilerinizi gösterin",
                "Menü tadımı hakkında bilgi verin",
            ],
        },
        ResponseKey::Corporate => Template::Static {
            content: "Kurumsal Etkinlik Catering:\n\n\
                      • Toplantılar, ürün lansmanları, yönetici zirveleri ve yıllık toplantılar\n\
                      • Etkinlik başına 20 - 500 kurumsal misafir\n\
                      • Ekibinizle menü geliştirme ve onay\n\
                      • Sahada kurulum, denetimli servis ve etkinlik sonrası inceleme\n\
                      • Kurumsal seviye raporlama ve koordinasyon\n\n\
                      Kurumsal etkinliğinizi konuşmak ister misiniz?",
            suggestions: &[
                "Kurumsal etkinlik fiyatlarınız nedir?",
                "Etkinlik planlama sürecinizi açıklayın",
                "Birden fazla mekana servis verebilir misiniz?",
            ],
        },
        ResponseKey::Wedding => Template::Static {
            content: "Düğün & Nişan Catering:\n\n\
                      • Düğün törenleri, resepsiyonlar ve nişan partileri\n\
                      • 50 - 500 düğün misafiri\n\
                      • Düğün danışmanlığı, menü tasarımı ve tadım\n\
                      • Mekan kurulumu ve kutlama desteği\n\n\
                      Düğününüz için bir tadım planlamak ister misiniz?",
            suggestions: &[
                "Evet, tadım planlayalım",
                "Düğün fiyatlarınız nedir?",
                "Ne kadar önceden rezervasyon yapmalıyız?",
            ],
        },
        ResponseKey::Festival => Template::Static {
            content: "Festival & Büyük Etkinlik Catering:\n\n\
                      • Halka açık festivaller, çok günlü etkinlikler ve büyük kutlamalar\n\
                      • 500 - 10.000 misafir\n\
                      • Üretim ölçeklendirme ve saha lojistiği kurulumu\n\
                      • Hızlı konuşlandırma ve sürekli servis\n\n\
                      Etkinliğiniz ne büyüklükte?",
            suggestions: &[
                "1.000'den fazla misafir bekliyoruz",
                "Teslimat lojistiği hakkında bilgi verin",
                "Ne kadar önceden rezervasyon yapmalıyız?",
            ],
        },
        ResponseKey::Unclear => Template::Static {
            content: "Biraz daha detay verebilir misiniz? Şu konularda yardımcı olabilirim:\n\
                      • Catering hizmet kategorileri\n\
                      • Etkinlik planlama süreci ve kapasite\n\
                      • Menüler ve fiyatlandırma\n\
                      • Teslimat, lojistik ve hazırlık süreleri\n\
                      • Kalite standartları",
            suggestions: &[
                "Catering kategorilerinizi gösterin",
                "Etkinlik planlama sürecinizi açıklayın",
                "Nasıl teklif talep edebilirim?",
            ],
        },
        ResponseKey::Clarify => Template::Parameterized {
            render: tr_clarify,
            suggestions: &[
                "Catering kategorilerini gösterin",
                "Etkinlik planlama sürecinizi açıklayın",
                "Teklif bilgisine ihtiyacım var",
            ],
        },
    }
}

// =============================================================================
// Tests
// =============================================================================
