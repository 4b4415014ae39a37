//! Backend-agnostic interface to the remote company resource.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ApiError;
use crate::onboarding::model::{CompanyRecord, SavePayload};

/// The remote company resource the wizard checkpoints against.
///
/// The wizard only ever works with the first record of `list_companies` —
/// a session owns at most one company.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// List the companies visible to the current session.
    async fn list_companies(&self) -> Result<Vec<CompanyRecord>, ApiError>;

    /// Create a company. Returns the created record, including its id.
    async fn create_company(&self, payload: &SavePayload) -> Result<CompanyRecord, ApiError>;

    /// Patch an existing company by id. Returns the updated record.
    async fn update_company(
        &self,
        id: Uuid,
        payload: &SavePayload,
    ) -> Result<CompanyRecord, ApiError>;
}
