//! Step controller — drives the wizard with server-synchronized checkpoints.

use std::sync::Arc;

use crate::navigation::{Navigator, paths};
use crate::session::SessionContext;
use crate::store::CompanyStore;

use super::list_builder::ListBuilder;
use super::model::{CompanyProfile, CompanyRecord};
use super::persist::{CompanySaver, SaveState};
use super::state::WizardStep;
use super::validate;

/// How the wizard positioned itself at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    /// No record on the server; the wizard starts at the landing screen.
    NewUser,
    /// An unfinished record was found; the wizard resumes at its stored step.
    Resumed(WizardStep),
    /// Onboarding already finished; the wizard is bypassed entirely.
    AlreadyCompleted,
    /// The initial fetch failed; degraded to the landing screen.
    LoadFailed,
}

/// Result of a forward-navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAdvance {
    /// The checkpoint persisted and the wizard moved to the new step.
    Advanced(WizardStep),
    /// Blocked locally: gate failed, save in flight, or nowhere to go.
    Blocked,
    /// The persistence call failed; step unchanged, see [`last_error`].
    ///
    /// [`last_error`]: OnboardingController::last_error
    Failed,
}

/// Owns the wizard: current step, in-progress profile, list builders, and
/// the checkpoint saver.
pub struct OnboardingController {
    step: WizardStep,
    profile: CompanyProfile,
    products: ListBuilder,
    competitors: ListBuilder,
    saver: CompanySaver,
    navigator: Arc<dyn Navigator>,
    saving: bool,
    last_error: Option<String>,
}

impl OnboardingController {
    /// Load any existing company record and position the wizard.
    ///
    /// A completed record bypasses the wizard (the navigator is sent to the
    /// dashboard without rendering any step). A failed fetch degrades to the
    /// landing screen, but as a distinct outcome so callers can surface it.
    pub async fn mount(
        store: Arc<dyn CompanyStore>,
        session: Arc<SessionContext>,
        navigator: Arc<dyn Navigator>,
    ) -> (Self, MountOutcome) {
        match store.list_companies().await {
            Ok(companies) => match companies.into_iter().next() {
                Some(record) if record.onboarding_completed => {
                    let controller =
                        Self::resumed(store, session, navigator, record, WizardStep::Landing);
                    controller.navigator.navigate(paths::DASHBOARD);
                    (controller, MountOutcome::AlreadyCompleted)
                }
                Some(record) => {
                    let step = WizardStep::resume_from(record.onboarding_step);
                    let controller = Self::resumed(store, session, navigator, record, step);
                    (controller, MountOutcome::Resumed(step))
                }
                None => (
                    Self::fresh(store, session, navigator),
                    MountOutcome::NewUser,
                ),
            },
            Err(e) => {
                tracing::warn!("Failed to load company record: {}", e);
                (
                    Self::fresh(store, session, navigator),
                    MountOutcome::LoadFailed,
                )
            }
        }
    }

    fn fresh(
        store: Arc<dyn CompanyStore>,
        session: Arc<SessionContext>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            step: WizardStep::Landing,
            profile: CompanyProfile::default(),
            products: ListBuilder::new(),
            competitors: ListBuilder::new(),
            saver: CompanySaver::new(store, session),
            navigator,
            saving: false,
            last_error: None,
        }
    }

    fn resumed(
        store: Arc<dyn CompanyStore>,
        session: Arc<SessionContext>,
        navigator: Arc<dyn Navigator>,
        record: CompanyRecord,
        step: WizardStep,
    ) -> Self {
        let CompanyRecord { id, profile, .. } = record;
        let products = ListBuilder::from_items(profile.primary_products.clone());
        let competitors = ListBuilder::from_items(profile.competitors.clone());
        Self {
            step,
            profile,
            products,
            competitors,
            saver: CompanySaver::resumed(store, session, id),
            navigator,
            saving: false,
            last_error: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn profile(&self) -> &CompanyProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut CompanyProfile {
        &mut self.profile
    }

    pub fn products(&self) -> &ListBuilder {
        &self.products
    }

    pub fn products_mut(&mut self) -> &mut ListBuilder {
        &mut self.products
    }

    pub fn competitors(&self) -> &ListBuilder {
        &self.competitors
    }

    pub fn competitors_mut(&mut self) -> &mut ListBuilder {
        &mut self.competitors
    }

    /// Whether a persistence call is outstanding. Navigation controls are
    /// disabled while this is set.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Inline message from the most recent failed save, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn save_state(&self) -> SaveState {
        self.saver.state()
    }

    /// Whether the Continue control is enabled for the current step.
    pub fn can_proceed(&self) -> bool {
        validate::can_proceed(self.step, &self.profile)
    }

    /// Profile as it would be persisted: form fields plus the current state
    /// of both list builders.
    pub fn profile_snapshot(&self) -> CompanyProfile {
        let mut profile = self.profile.clone();
        profile.primary_products = self.products.items().to_vec();
        profile.competitors = self.competitors.items().to_vec();
        profile
    }

    /// Leave the landing screen. Local-only; the first checkpoint happens on
    /// the first Continue.
    pub fn start(&mut self) -> bool {
        if !self.step.is_landing() {
            return false;
        }
        self.step = WizardStep::Basics;
        self.navigator.navigate(paths::ONBOARDING);
        true
    }

    /// Go back one step. Local-only, never persisted.
    pub fn back(&mut self) -> bool {
        if self.saving {
            return false;
        }
        let Some(prev) = self.step.prev() else {
            return false;
        };
        self.step = prev;
        if prev.is_landing() {
            self.navigator.navigate(paths::LANDING);
        }
        true
    }

    /// Try to advance to the next step, checkpointing progress first.
    ///
    /// The step only moves after the save succeeds; a failed save records a
    /// display message and leaves the wizard where it was. No automatic
    /// retry — the user re-triggers the action.
    pub async fn advance(&mut self) -> StepAdvance {
        if self.saving || self.step.is_landing() {
            return StepAdvance::Blocked;
        }
        let Some(next) = self.step.next() else {
            return StepAdvance::Blocked;
        };
        if !self.can_proceed() {
            // The Continue control is disabled in this state; attempting it
            // anyway is a no-op.
            return StepAdvance::Blocked;
        }

        self.saving = true;
        let profile = self.profile_snapshot();
        let result = self.saver.save(&profile, next.index(), false).await;
        self.saving = false;

        match result {
            Ok(_) => {
                self.last_error = None;
                self.step = next;
                StepAdvance::Advanced(next)
            }
            Err(e) => {
                tracing::warn!(step = %self.step, "Checkpoint save failed: {}", e);
                self.last_error = Some(e.user_message());
                StepAdvance::Failed
            }
        }
    }

    /// Finish onboarding from the summary screen.
    ///
    /// Persists the final record with the completion flag set, then sends the
    /// navigator to the dashboard. On failure the wizard stays on the summary
    /// with a message.
    pub async fn complete(&mut self) -> bool {
        if self.saving || !self.step.is_summary() {
            return false;
        }

        self.saving = true;
        let profile = self.profile_snapshot();
        let result = self
            .saver
            .save(&profile, WizardStep::Summary.index(), true)
            .await;
        self.saving = false;

        match result {
            Ok(_) => {
                self.last_error = None;
                self.navigator.navigate(paths::DASHBOARD);
                true
            }
            Err(e) => {
                tracing::warn!("Completion save failed: {}", e);
                self.last_error = Some(e.user_message());
                false
            }
        }
    }
}
