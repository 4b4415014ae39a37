//! Company profile data model built up across the wizard steps.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Industries offered in the step-1 picker.
pub const INDUSTRIES: [&str; 12] = [
    "SaaS / Software",
    "E-commerce / Retail",
    "Professional Services",
    "Healthcare",
    "Manufacturing",
    "Food & Beverage",
    "Real Estate",
    "Construction",
    "Marketing / Advertising",
    "Education",
    "Consulting",
    "Other",
];

/// Two-letter US state codes offered in the step-1 picker.
pub const US_STATES: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

/// Legal structure of the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    SoleProprietor,
    Llc,
    SCorp,
    Corporation,
    Partnership,
}

impl BusinessType {
    pub const ALL: [BusinessType; 5] = [
        Self::SoleProprietor,
        Self::Llc,
        Self::SCorp,
        Self::Corporation,
        Self::Partnership,
    ];

    /// Human-readable label for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SoleProprietor => "Sole Proprietor",
            Self::Llc => "LLC",
            Self::SCorp => "S-Corporation",
            Self::Corporation => "C-Corporation",
            Self::Partnership => "Partnership",
        }
    }
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::SoleProprietor => "sole_proprietor",
            Self::Llc => "llc",
            Self::SCorp => "s_corp",
            Self::Corporation => "corporation",
            Self::Partnership => "partnership",
        };
        write!(f, "{s}")
    }
}

/// How far along the business is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    Startup,
    Growth,
    Mature,
    Enterprise,
}

impl GrowthStage {
    pub const ALL: [GrowthStage; 4] = [Self::Startup, Self::Growth, Self::Mature, Self::Enterprise];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Startup => "Startup (0-2 years)",
            Self::Growth => "Growth (2-5 years)",
            Self::Mature => "Mature (5+ years)",
            Self::Enterprise => "Enterprise (established)",
        }
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Startup => "startup",
            Self::Growth => "growth",
            Self::Mature => "mature",
            Self::Enterprise => "enterprise",
        };
        write!(f, "{s}")
    }
}

/// Who the business sells to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetMarket {
    #[serde(rename = "B2B")]
    B2b,
    #[serde(rename = "B2C")]
    B2c,
    #[serde(rename = "B2B2C")]
    B2b2c,
}

impl TargetMarket {
    pub const ALL: [TargetMarket; 3] = [Self::B2b, Self::B2c, Self::B2b2c];

    pub fn label(&self) -> &'static str {
        match self {
            Self::B2b => "B2B (Business to Business)",
            Self::B2c => "B2C (Business to Consumer)",
            Self::B2b2c => "B2B2C (Both)",
        }
    }
}

impl Default for TargetMarket {
    fn default() -> Self {
        Self::B2b
    }
}

impl std::fmt::Display for TargetMarket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::B2b => "B2B",
            Self::B2c => "B2C",
            Self::B2b2c => "B2B2C",
        };
        write!(f, "{s}")
    }
}

/// The in-progress company profile the wizard accumulates.
///
/// Field names match the backend's `companies` columns, so the struct
/// serializes directly into create/update payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    // Step 1: company basics
    pub name: String,
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub location_city: String,
    pub location_state: String,
    pub location_country: String,

    // Step 2: business profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<BusinessType>,
    pub founded_year: i32,
    pub employee_count: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_revenue: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_stage: Option<GrowthStage>,

    // Step 3: market context
    pub target_market: TargetMarket,
    #[serde(default)]
    pub primary_products: Vec<String>,
    #[serde(default)]
    pub competitors: Vec<String>,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            industry: String::new(),
            website: None,
            location_city: String::new(),
            location_state: String::new(),
            location_country: "USA".to_string(),
            business_type: None,
            founded_year: chrono::Utc::now().year(),
            employee_count: 1,
            annual_revenue: Decimal::ZERO,
            growth_stage: None,
            target_market: TargetMarket::default(),
            primary_products: Vec::new(),
            competitors: Vec::new(),
        }
    }
}

/// A company record as echoed by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub profile: CompanyProfile,
    #[serde(default)]
    pub onboarding_step: u8,
    #[serde(default)]
    pub onboarding_completed: bool,
}

/// The JSON body of every create/update call: the full profile plus the
/// target step and completion flag.
#[derive(Debug, Clone, Serialize)]
pub struct SavePayload {
    #[serde(flatten)]
    pub profile: CompanyProfile,
    pub onboarding_step: u8,
    pub onboarding_completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_profile_has_expected_values() {
        let p = CompanyProfile::default();
        assert!(p.name.is_empty());
        assert!(p.website.is_none());
        assert_eq!(p.location_country, "USA");
        assert!(p.business_type.is_none());
        assert_eq!(p.employee_count, 1);
        assert_eq!(p.annual_revenue, Decimal::ZERO);
        assert_eq!(p.target_market, TargetMarket::B2b);
        assert!(p.founded_year >= 1900);
        assert!(p.primary_products.is_empty());
        assert!(p.competitors.is_empty());
    }

    #[test]
    fn enum_display_matches_serde() {
        for bt in BusinessType::ALL {
            let json = serde_json::to_string(&bt).unwrap();
            assert_eq!(json, format!("\"{bt}\""));
        }
        for gs in GrowthStage::ALL {
            let json = serde_json::to_string(&gs).unwrap();
            assert_eq!(json, format!("\"{gs}\""));
        }
        for tm in TargetMarket::ALL {
            let json = serde_json::to_string(&tm).unwrap();
            assert_eq!(json, format!("\"{tm}\""));
        }
    }

    #[test]
    fn business_type_wire_values() {
        let json = serde_json::to_string(&BusinessType::SoleProprietor).unwrap();
        assert_eq!(json, "\"sole_proprietor\"");
        let json = serde_json::to_string(&BusinessType::SCorp).unwrap();
        assert_eq!(json, "\"s_corp\"");
        let parsed: BusinessType = serde_json::from_str("\"llc\"").unwrap();
        assert_eq!(parsed, BusinessType::Llc);
    }

    #[test]
    fn save_payload_uses_flat_snake_case_keys() {
        let mut profile = CompanyProfile {
            name: "Acme".to_string(),
            industry: "SaaS / Software".to_string(),
            location_city: "Austin".to_string(),
            location_state: "TX".to_string(),
            ..Default::default()
        };
        profile.business_type = Some(BusinessType::Llc);
        profile.growth_stage = Some(GrowthStage::Growth);
        profile.annual_revenue = dec!(250000);
        profile.primary_products = vec!["Cloud software".to_string()];

        let payload = SavePayload {
            profile,
            onboarding_step: 2,
            onboarding_completed: false,
        };
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["name"], "Acme");
        assert_eq!(value["location_city"], "Austin");
        assert_eq!(value["location_state"], "TX");
        assert_eq!(value["location_country"], "USA");
        assert_eq!(value["business_type"], "llc");
        assert_eq!(value["growth_stage"], "growth");
        assert_eq!(value["target_market"], "B2B");
        assert_eq!(value["annual_revenue"], 250000.0);
        assert_eq!(value["onboarding_step"], 2);
        assert_eq!(value["onboarding_completed"], false);
        // No nested "profile" object — the record is flat.
        assert!(value.get("profile").is_none());
        // Unset optionals stay off the wire.
        assert!(value.get("website").is_none());
    }

    #[test]
    fn record_roundtrip_from_server_row() {
        let row = serde_json::json!({
            "id": "1f0d2b0a-3f46-4f8e-9a45-6d2c8f0b1234",
            "name": "Acme",
            "industry": "Consulting",
            "location_city": "Austin",
            "location_state": "TX",
            "location_country": "USA",
            "business_type": "s_corp",
            "founded_year": 2018,
            "employee_count": 12,
            "annual_revenue": 1500000.0,
            "growth_stage": "mature",
            "target_market": "B2B2C",
            "primary_products": ["Advisory"],
            "competitors": [],
            "onboarding_step": 3,
            "onboarding_completed": false,
            // Columns this client does not model are ignored.
            "created_at": "2026-01-12T08:30:00Z"
        });

        let record: CompanyRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.profile.name, "Acme");
        assert_eq!(record.profile.business_type, Some(BusinessType::SCorp));
        assert_eq!(record.profile.annual_revenue, dec!(1500000));
        assert_eq!(record.profile.target_market, TargetMarket::B2b2c);
        assert_eq!(record.onboarding_step, 3);
        assert!(!record.onboarding_completed);
    }

    #[test]
    fn record_defaults_for_missing_meta_fields() {
        let row = serde_json::json!({
            "id": "1f0d2b0a-3f46-4f8e-9a45-6d2c8f0b1234",
            "name": "Acme",
            "industry": "",
            "location_city": "",
            "location_state": "",
            "location_country": "USA",
            "founded_year": 2020,
            "employee_count": 1,
            "annual_revenue": 0.0,
            "target_market": "B2B"
        });

        let record: CompanyRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.onboarding_step, 0);
        assert!(!record.onboarding_completed);
        assert!(record.profile.primary_products.is_empty());
    }
}
