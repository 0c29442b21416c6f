use crate::domain::model::{CvResponse, Employee};
use crate::domain::ports::CvSource;
use crate::utils::error::{CvError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;

/// Page size of the user listing endpoint.
pub const USERS_PAGE_SIZE: usize = 100;

/// Base URL of an organisation's CV Partner instance.
pub fn org_base_url(org: &str) -> String {
    format!("https://{}.cvpartner.com", org)
}

/// Thin client for the CV Partner REST API.
#[derive(Clone)]
pub struct CvPartnerClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for CvPartnerClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CvPartnerClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl CvPartnerClient {
    pub fn new(org: &str, api_key: impl Into<String>) -> Self {
        Self::with_base_url(org_base_url(org), api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(CvError::ApiStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CvSource for CvPartnerClient {
    /// Every employee in the organisation, following the offset paging.
    async fn get_employees(&self) -> Result<Vec<Employee>> {
        let mut employees = Vec::new();
        loop {
            let page: Vec<Employee> = self
                .get_json(&format!("/api/v1/users?offset={}", employees.len()))
                .await?;
            let page_len = page.len();
            employees.extend(page);
            if page_len < USERS_PAGE_SIZE {
                break;
            }
        }
        tracing::debug!("Fetched {} employees", employees.len());
        Ok(employees)
    }

    async fn get_cv(&self, user_id: &str, cv_id: &str) -> Result<CvResponse> {
        self.get_json(&format!("/api/v3/cvs/{}/{}", user_id, cv_id))
            .await
    }
}
