//! Ambient session state shared across application surfaces.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::onboarding::model::CompanyRecord;
use crate::store::CompanyStore;

/// The current company as seen by the rest of the application.
///
/// Constructed once at startup and passed explicitly to whoever needs it, so
/// tests can build isolated instances. The wizard refreshes it after every
/// successful checkpoint write; other surfaces observe the change on their
/// next read.
pub struct SessionContext {
    store: Arc<dyn CompanyStore>,
    company: RwLock<Option<CompanyRecord>>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn CompanyStore>) -> Self {
        Self {
            store,
            company: RwLock::new(None),
        }
    }

    /// Snapshot of the current company, if one is known.
    pub async fn company(&self) -> Option<CompanyRecord> {
        self.company.read().await.clone()
    }

    /// Whether the session's company has finished onboarding.
    pub async fn onboarding_completed(&self) -> bool {
        self.company
            .read()
            .await
            .as_ref()
            .map(|c| c.onboarding_completed)
            .unwrap_or(false)
    }

    /// Re-fetch the current company from the store.
    ///
    /// Best effort: a failed fetch is logged and the previous snapshot kept.
    pub async fn refresh(&self) {
        match self.store.list_companies().await {
            Ok(companies) => {
                let mut guard = self.company.write().await;
                *guard = companies.into_iter().next();
            }
            Err(e) => {
                tracing::warn!("Session refresh failed: {}", e);
            }
        }
    }
}
