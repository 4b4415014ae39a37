//! Persistence layer — the remote company resource.

pub mod http;
pub mod traits;

pub use http::HttpCompanyStore;
pub use traits::CompanyStore;

#[cfg(test)]
pub(crate) mod testutil {
    //! Scripted in-memory store shared by the module tests.

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::error::ApiError;
    use crate::onboarding::model::{CompanyRecord, SavePayload};

    use super::traits::CompanyStore;

    #[derive(Default)]
    pub(crate) struct MockCompanyStore {
        pub records: Mutex<Vec<CompanyRecord>>,
        pub fail_list: AtomicBool,
        pub fail_save: AtomicBool,
        pub list_calls: AtomicUsize,
        pub create_calls: AtomicUsize,
        pub update_calls: AtomicUsize,
        pub saved_payloads: Mutex<Vec<SavePayload>>,
    }

    impl MockCompanyStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_record(record: CompanyRecord) -> Self {
            let store = Self::default();
            store.records.lock().unwrap().push(record);
            store
        }

        pub fn creates(&self) -> usize {
            self.create_calls.load(Ordering::SeqCst)
        }

        pub fn updates(&self) -> usize {
            self.update_calls.load(Ordering::SeqCst)
        }

        pub fn lists(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }

        pub fn save_calls(&self) -> usize {
            self.creates() + self.updates()
        }

        pub fn last_payload(&self) -> Option<SavePayload> {
            self.saved_payloads.lock().unwrap().last().cloned()
        }

        fn refused() -> ApiError {
            ApiError::Transport {
                url: "http://mock/companies/".to_string(),
                reason: "connection refused".to_string(),
            }
        }

        fn record_from(id: Uuid, payload: &SavePayload) -> CompanyRecord {
            CompanyRecord {
                id,
                profile: payload.profile.clone(),
                onboarding_step: payload.onboarding_step,
                onboarding_completed: payload.onboarding_completed,
            }
        }
    }

    #[async_trait]
    impl CompanyStore for MockCompanyStore {
        async fn list_companies(&self) -> Result<Vec<CompanyRecord>, ApiError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(Self::refused());
            }
            Ok(self.records.lock().unwrap().clone())
        }

        async fn create_company(&self, payload: &SavePayload) -> Result<CompanyRecord, ApiError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_save.load(Ordering::SeqCst) {
                return Err(Self::refused());
            }
            self.saved_payloads.lock().unwrap().push(payload.clone());
            let record = Self::record_from(Uuid::new_v4(), payload);
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn update_company(
            &self,
            id: Uuid,
            payload: &SavePayload,
        ) -> Result<CompanyRecord, ApiError> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_save.load(Ordering::SeqCst) {
                return Err(Self::refused());
            }
            self.saved_payloads.lock().unwrap().push(payload.clone());
            let record = Self::record_from(id, payload);
            let mut records = self.records.lock().unwrap();
            match records.iter_mut().find(|r| r.id == id) {
                Some(existing) => *existing = record.clone(),
                None => records.push(record.clone()),
            }
            Ok(record)
        }
    }
}
