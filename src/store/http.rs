//! HTTP implementation of the company store.
//!
//! The backend wraps every response in a `{"status": "success", "data": [..]}`
//! envelope; error bodies carry a `detail` field with a human-readable
//! message.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::onboarding::model::{CompanyRecord, SavePayload};

use super::traits::CompanyStore;

/// Company store speaking the backend's REST protocol.
pub struct HttpCompanyStore {
    config: ApiConfig,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    status: String,
    #[serde(default)]
    data: Vec<CompanyRecord>,
}

impl HttpCompanyStore {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.bearer_token {
            Some(token) => req.bearer_auth(token.expose_secret()),
            None => req,
        }
    }

    async fn send(
        &self,
        req: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<Vec<CompanyRecord>, ApiError> {
        let resp = self
            .authorize(req)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        let body = resp.text().await.map_err(|e| ApiError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        parse_company_list(&body)
    }
}

/// Extract the record list from a success envelope.
fn parse_company_list(body: &str) -> Result<Vec<CompanyRecord>, ApiError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    if envelope.status != "success" {
        return Err(ApiError::InvalidResponse {
            reason: format!("unexpected envelope status {:?}", envelope.status),
        });
    }
    Ok(envelope.data)
}

/// Pull the human-readable `detail` out of an error body, if present.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .unwrap_or_default()
}

fn first_record(records: Vec<CompanyRecord>, op: &str) -> Result<CompanyRecord, ApiError> {
    records
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::InvalidResponse {
            reason: format!("{op} returned no company record"),
        })
}

#[async_trait]
impl CompanyStore for HttpCompanyStore {
    async fn list_companies(&self) -> Result<Vec<CompanyRecord>, ApiError> {
        let url = self.url("/companies/");
        self.send(self.client.get(&url), &url).await
    }

    async fn create_company(&self, payload: &SavePayload) -> Result<CompanyRecord, ApiError> {
        let url = self.url("/companies/");
        let records = self.send(self.client.post(&url).json(payload), &url).await?;
        first_record(records, "create")
    }

    async fn update_company(
        &self,
        id: Uuid,
        payload: &SavePayload,
    ) -> Result<CompanyRecord, ApiError> {
        let url = self.url(&format!("/companies/{id}"));
        let records = self.send(self.client.patch(&url).json(payload), &url).await?;
        first_record(records, "update")
    }
}
