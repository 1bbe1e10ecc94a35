//! Catalog of catering services listed on the site.
//!
//! The host uses it to list services and to open a service page, which in
//! turn switches the assistant to the service-detail page context.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CaterError;
use crate::types::{Language, ServiceCategory};

/// Stable slug of a listed service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceId {
    CorporateDessertLogistics,
    HighVolumeEvent,
    PremiumHospitality,
    CorporateEventCatering,
    WeddingEngagementCatering,
    FestivalLargeEventCatering,
    WorkshopSpecialExperienceCatering,
    SeminarConferenceCatering,
    OutdoorActivityCatering,
}

impl ServiceId {
    pub fn slug(&self) -> &'static str {
        match self {
            ServiceId::CorporateDessertLogistics => "corporate-dessert-logistics",
            ServiceId::HighVolumeEvent => "high-volume-event",
            ServiceId::PremiumHospitality => "premium-hospitality",
            ServiceId::CorporateEventCatering => "corporate-event-catering",
            ServiceId::WeddingEngagementCatering => "wedding-engagement-catering",
            ServiceId::FestivalLargeEventCatering => "festival-large-event-catering",
            ServiceId::WorkshopSpecialExperienceCatering => {
                "workshop-special-experience-catering"
            }
            ServiceId::SeminarConferenceCatering => "seminar-conference-catering",
            ServiceId::OutdoorActivityCatering => "outdoor-activity-catering",
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ServiceId {
    type Err = CaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_lowercase();
        ServiceCatalog::standard()
            .entries()
            .iter()
            .map(|e| e.id)
            .find(|id| id.slug() == slug)
            .ok_or(CaterError::UnknownService(slug))
    }
}

/// One service as presented on the site.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub id: ServiceId,
    /// Category used by the assistant, if the service maps onto one.
    pub category: Option<ServiceCategory>,
    title_en: &'static str,
    title_tr: &'static str,
    event_size_en: &'static str,
    event_size_tr: &'static str,
}

impl CatalogEntry {
    pub fn title(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.title_en,
            Language::Tr => self.title_tr,
        }
    }

    /// Supported event size, e.g. "50 - 500 wedding guests".
    pub fn event_size(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.event_size_en,
            Language::Tr => self.event_size_tr,
        }
    }
}

/// Ordered list of services in site order.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    entries: Vec<CatalogEntry>,
}

impl ServiceCatalog {
    /// The nine services the site offers.
    pub fn standard() -> Self {
        let entry = |id,
                     category,
                     title_en,
                     title_tr,
                     event_size_en,
                     event_size_tr| CatalogEntry {
            id,
            category,
            title_en,
            title_tr,
            event_size_en,
            event_size_tr,
        };

        Self {
            entries: vec![
                entry(
                    ServiceId::CorporateDessertLogistics,
                    Some(ServiceCategory::Corporate),
                    "Corporate Dessert Logistics for Large-Scale Events",
                    "Büyük Ölçekli Etkinlikler için Kurumsal Tatlı Lojistiği",
                    "50 - 5,000 guests",
                    "50 - 5.000 misafir",
                ),
                entry(
                    ServiceId::HighVolumeEvent,
                    None,
                    "High-Volume Event Execution",
                    "Yüksek Hacimli Etkinlik Yönetimi",
                    "500 - 10,000 guests",
                    "500 - 10.000 misafir",
                ),
                entry(
                    ServiceId::PremiumHospitality,
                    None,
                    "Premium Hospitality Catering",
                    "Premium Misafirperverlik Catering",
                    "20 - 500 VIP guests",
                    "20 - 500 VIP misafir",
                ),
                entry(
                    ServiceId::CorporateEventCatering,
                    Some(ServiceCategory::Corporate),
                    "Corporate Event Catering",
                    "Kurumsal Etkinlik Catering",
                    "20 - 500 corporate guests",
                    "20 - 500 kurumsal misafir",
                ),
                entry(
                    ServiceId::WeddingEngagementCatering,
                    Some(ServiceCategory::Wedding),
                    "Wedding & Engagement Catering",
                    "Düğün & Nişan Catering",
                    "50 - 500 wedding guests",
                    "50 - 500 düğün misafiri",
                ),
                entry(
                    ServiceId::FestivalLargeEventCatering,
                    Some(ServiceCategory::Festival),
                    "Festival & Large Event Catering",
                    "Festival & Büyük Etkinlik Catering",
                    "500 - 10,000 guests",
                    "500 - 10.000 misafir",
                ),
                entry(
                    ServiceId::WorkshopSpecialExperienceCatering,
                    Some(ServiceCategory::Workshop),
                    "Workshop & Special Experience Catering",
                    "Workshop & Özel Deneyim Catering",
                    "10 - 200 guests",
                    "10 - 200 misafir",
                ),
                entry(
                    ServiceId::SeminarConferenceCatering,
                    Some(ServiceCategory::Seminar),
                    "Seminar & Conference Catering",
                    "Seminer & Konferans Catering",
                    "50 - 1,000 attendees",
                    "50 - 1.000 katılımcı",
                ),
                entry(
                    ServiceId::OutdoorActivityCatering,
                    Some(ServiceCategory::Outdoor),
                    "Outdoor & Activity Catering",
                    "Açık Alan & Aktivite Catering",
                    "50 - 1,000 guests",
                    "50 - 1.000 misafir",
                ),
            ],
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: ServiceId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Look a service up by its slug.
    pub fn find(&self, slug: &str) -> Result<&CatalogEntry, CaterError> {
        let id: ServiceId = slug.parse()?;
        self.get(id)
            .ok_or_else(|| CaterError::UnknownService(slug.to_string()))
    }
}
