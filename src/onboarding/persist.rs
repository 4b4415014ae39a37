//! Checkpoint persistence — create-or-update of the company record.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::ApiError;
use crate::session::SessionContext;
use crate::store::CompanyStore;

use super::model::{CompanyProfile, CompanyRecord, SavePayload};

/// Whether the company record exists on the server yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    Unsaved,
    Saved(Uuid),
}

/// Persists wizard progress with exactly one create or update per save.
pub struct CompanySaver {
    store: Arc<dyn CompanyStore>,
    session: Arc<SessionContext>,
    state: SaveState,
}

impl CompanySaver {
    /// Saver for a session with no server-side record yet.
    pub fn new(store: Arc<dyn CompanyStore>, session: Arc<SessionContext>) -> Self {
        Self {
            store,
            session,
            state: SaveState::Unsaved,
        }
    }

    /// Saver resuming an already-created record.
    pub fn resumed(
        store: Arc<dyn CompanyStore>,
        session: Arc<SessionContext>,
        id: Uuid,
    ) -> Self {
        Self {
            store,
            session,
            state: SaveState::Saved(id),
        }
    }

    pub fn state(&self) -> SaveState {
        self.state
    }

    /// Persist the profile with the target step and completion flag.
    ///
    /// The first successful save creates the record and captures its id;
    /// every later save patches by that id. After each successful write the
    /// ambient session is refreshed so other surfaces observe the change on
    /// their next read.
    pub async fn save(
        &mut self,
        profile: &CompanyProfile,
        step: u8,
        completed: bool,
    ) -> Result<CompanyRecord, ApiError> {
        let payload = SavePayload {
            profile: profile.clone(),
            onboarding_step: step,
            onboarding_completed: completed,
        };

        let record = match self.state {
            SaveState::Unsaved => {
                let record = self.store.create_company(&payload).await?;
                self.state = SaveState::Saved(record.id);
                record
            }
            SaveState::Saved(id) => self.store.update_company(id, &payload).await?,
        };

        self.session.refresh().await;
        Ok(record)
    }
}
