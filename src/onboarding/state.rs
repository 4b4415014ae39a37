//! Wizard step machine — tracks which screen the user is on.

/// The screens of the onboarding wizard.
///
/// Progresses linearly: Landing → Basics → BusinessProfile → MarketContext →
/// Summary. Completing the wizard is a terminal action out of `Summary`, not
/// a sixth step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Landing,
    Basics,
    BusinessProfile,
    MarketContext,
    Summary,
}

impl WizardStep {
    /// Numeric index persisted as `onboarding_step` (0 = landing, 1..4 wizard).
    pub fn index(&self) -> u8 {
        match self {
            Self::Landing => 0,
            Self::Basics => 1,
            Self::BusinessProfile => 2,
            Self::MarketContext => 3,
            Self::Summary => 4,
        }
    }

    /// The step to resume at for a stored `onboarding_step` value.
    ///
    /// Stored values are clamped into `1..=4`: a record exists, so the
    /// landing screen is skipped, and the persisted step never exceeds 4.
    pub fn resume_from(stored: u8) -> WizardStep {
        match stored.clamp(1, 4) {
            1 => Self::Basics,
            2 => Self::BusinessProfile,
            3 => Self::MarketContext,
            _ => Self::Summary,
        }
    }

    /// The next step in the linear progression, if any.
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            Self::Landing => Some(Self::Basics),
            Self::Basics => Some(Self::BusinessProfile),
            Self::BusinessProfile => Some(Self::MarketContext),
            Self::MarketContext => Some(Self::Summary),
            Self::Summary => None,
        }
    }

    /// The previous step, if any. Going back is always local-only.
    pub fn prev(&self) -> Option<WizardStep> {
        match self {
            Self::Landing => None,
            Self::Basics => Some(Self::Landing),
            Self::BusinessProfile => Some(Self::Basics),
            Self::MarketContext => Some(Self::BusinessProfile),
            Self::Summary => Some(Self::MarketContext),
        }
    }

    pub fn is_landing(&self) -> bool {
        matches!(self, Self::Landing)
    }

    pub fn is_summary(&self) -> bool {
        matches!(self, Self::Summary)
    }

    /// Screen heading shown for this step.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Landing => "Welcome",
            Self::Basics => "Company Basics",
            Self::BusinessProfile => "Business Profile",
            Self::MarketContext => "Market Context",
            Self::Summary => "You're All Set!",
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Landing
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Landing => "landing",
            Self::Basics => "basics",
            Self::BusinessProfile => "business_profile",
            Self::MarketContext => "market_context",
            Self::Summary => "summary",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_all_steps() {
        let expected = [
            WizardStep::Basics,
            WizardStep::BusinessProfile,
            WizardStep::MarketContext,
            WizardStep::Summary,
        ];
        let mut current = WizardStep::Landing;
        for expected_next in expected {
            let next = current.next().unwrap();
            assert_eq!(next, expected_next);
            current = next;
        }
        assert!(current.next().is_none());
    }

    #[test]
    fn prev_walks_back_to_landing() {
        let mut current = WizardStep::Summary;
        while let Some(prev) = current.prev() {
            assert_eq!(prev.index(), current.index() - 1);
            current = prev;
        }
        assert_eq!(current, WizardStep::Landing);
    }

    #[test]
    fn indices_are_zero_through_four() {
        assert_eq!(WizardStep::Landing.index(), 0);
        assert_eq!(WizardStep::Basics.index(), 1);
        assert_eq!(WizardStep::BusinessProfile.index(), 2);
        assert_eq!(WizardStep::MarketContext.index(), 3);
        assert_eq!(WizardStep::Summary.index(), 4);
    }

    #[test]
    fn resume_clamps_stored_step() {
        assert_eq!(WizardStep::resume_from(0), WizardStep::Basics);
        assert_eq!(WizardStep::resume_from(1), WizardStep::Basics);
        assert_eq!(WizardStep::resume_from(2), WizardStep::BusinessProfile);
        assert_eq!(WizardStep::resume_from(3), WizardStep::MarketContext);
        assert_eq!(WizardStep::resume_from(4), WizardStep::Summary);
        // Out-of-range stored values never overshoot the summary.
        assert_eq!(WizardStep::resume_from(9), WizardStep::Summary);
    }

    #[test]
    fn default_is_landing() {
        assert!(WizardStep::default().is_landing());
        assert!(!WizardStep::default().is_summary());
    }
}
