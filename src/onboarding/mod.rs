//! Company onboarding wizard — step machine, validation, persistence.
//!
//! The wizard collects a company profile across four screens, checkpointing
//! progress to the backend on every forward transition so a reload resumes
//! where the user left off. A record whose onboarding already finished
//! bypasses the wizard entirely.

pub mod controller;
pub mod list_builder;
pub mod model;
pub mod persist;
pub mod state;
pub mod validate;

pub use controller::{MountOutcome, OnboardingController, StepAdvance};
pub use list_builder::ListBuilder;
pub use model::{
    BusinessType, CompanyProfile, CompanyRecord, GrowthStage, SavePayload, TargetMarket,
};
pub use persist::{CompanySaver, SaveState};
pub use state::WizardStep;
