//! Per-step validation gate for forward navigation.

use chrono::Datelike;
use rust_decimal::Decimal;

use super::model::CompanyProfile;
use super::state::WizardStep;

/// Whether the wizard may advance past `step` with the given profile.
///
/// Pure and cheap — recomputed on every input change to drive the
/// enabled/disabled state of the Continue control.
pub fn can_proceed(step: WizardStep, profile: &CompanyProfile) -> bool {
    match step {
        WizardStep::Landing => true,
        WizardStep::Basics => {
            !profile.name.trim().is_empty()
                && !profile.industry.trim().is_empty()
                && !profile.location_city.trim().is_empty()
                && !profile.location_state.trim().is_empty()
        }
        WizardStep::BusinessProfile => {
            profile.business_type.is_some() && profile.growth_stage.is_some()
        }
        // Step-3 fields are all optional; the summary only confirms.
        WizardStep::MarketContext | WizardStep::Summary => true,
    }
}

/// Founded year must fall within 1900..=current year.
pub fn founded_year_in_range(year: i32) -> bool {
    (1900..=chrono::Utc::now().year()).contains(&year)
}

/// Employee count must be at least 1.
pub fn employee_count_in_range(count: u32) -> bool {
    count >= 1
}

/// Annual revenue must be non-negative.
pub fn annual_revenue_in_range(revenue: Decimal) -> bool {
    revenue >= Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::model::{BusinessType, GrowthStage};
    use rust_decimal_macros::dec;

    fn filled_basics() -> CompanyProfile {
        CompanyProfile {
            name: "Acme".to_string(),
            industry: "SaaS / Software".to_string(),
            location_city: "Austin".to_string(),
            location_state: "TX".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn landing_always_passes() {
        assert!(can_proceed(WizardStep::Landing, &CompanyProfile::default()));
    }

    #[test]
    fn basics_requires_all_four_fields() {
        assert!(can_proceed(WizardStep::Basics, &filled_basics()));

        let clears: [fn(&mut CompanyProfile); 4] = [
            |p| p.name.clear(),
            |p| p.industry.clear(),
            |p| p.location_city.clear(),
            |p| p.location_state.clear(),
        ];
        for clear in clears {
            let mut profile = filled_basics();
            clear(&mut profile);
            assert!(!can_proceed(WizardStep::Basics, &profile));
        }
    }

    #[test]
    fn basics_rejects_whitespace_only_fields() {
        let mut profile = filled_basics();
        profile.name = "   ".to_string();
        assert!(!can_proceed(WizardStep::Basics, &profile));
    }

    #[test]
    fn basics_does_not_require_website() {
        let profile = filled_basics();
        assert!(profile.website.is_none());
        assert!(can_proceed(WizardStep::Basics, &profile));
    }

    #[test]
    fn business_profile_requires_type_and_stage() {
        let mut profile = filled_basics();
        assert!(!can_proceed(WizardStep::BusinessProfile, &profile));

        profile.business_type = Some(BusinessType::Llc);
        assert!(!can_proceed(WizardStep::BusinessProfile, &profile));

        profile.growth_stage = Some(GrowthStage::Startup);
        assert!(can_proceed(WizardStep::BusinessProfile, &profile));
    }

    #[test]
    fn market_context_and_summary_always_pass() {
        let profile = CompanyProfile::default();
        assert!(can_proceed(WizardStep::MarketContext, &profile));
        assert!(can_proceed(WizardStep::Summary, &profile));
    }

    #[test]
    fn field_ranges() {
        assert!(founded_year_in_range(1900));
        assert!(founded_year_in_range(chrono::Utc::now().year()));
        assert!(!founded_year_in_range(1899));
        assert!(!founded_year_in_range(chrono::Utc::now().year() + 1));

        assert!(employee_count_in_range(1));
        assert!(!employee_count_in_range(0));

        assert!(annual_revenue_in_range(Decimal::ZERO));
        assert!(annual_revenue_in_range(dec!(250000.50)));
        assert!(!annual_revenue_in_range(dec!(-1)));
    }
}
