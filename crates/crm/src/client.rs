//! GoHighLevel API client
//!
//! Wraps the two V2 endpoints the website uses: contact upsert and workflow
//! enrollment. Submissions are fire-and-forget from the caller's point of
//! view — there is no retry, and enrollment failures never fail the
//! submission that triggered them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CrmError;
use crate::forms::{CustomField, FormSubmission, FormType};

/// GoHighLevel V2 API base URL.
pub const DEFAULT_API_BASE: &str = "https://services.leadconnectorhq.com";

/// API version header required by the V2 endpoints.
const API_VERSION: &str = "2021-07-28";

/// Configuration for the GoHighLevel client
#[derive(Debug, Clone)]
pub struct GhlConfig {
    /// Private Integration Token
    pub api_token: String,
    /// Sub-account/location ID
    pub location_id: String,
    /// API base URL (overridable for tests)
    pub api_base: String,
}

impl GhlConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, CrmError> {
        Ok(Self {
            api_token: std::env::var("GHL_API_TOKEN")
                .map_err(|_| CrmError::Config("GHL_API_TOKEN not set".to_string()))?,
            location_id: std::env::var("GHL_LOCATION_ID")
                .map_err(|_| CrmError::Config("GHL_LOCATION_ID not set".to_string()))?,
            api_base: std::env::var("GHL_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        })
    }
}

/// Contact payload for `POST /contacts/upsert`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpsert {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location_id: String,
    pub tags: Vec<&'static str>,
    pub source: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,
}

#[derive(Debug, Deserialize)]
struct UpsertResponse {
    contact: Option<UpsertContact>,
}

#[derive(Debug, Deserialize)]
struct UpsertContact {
    id: String,
}

/// Outcome of a processed form submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmitOutcome {
    pub contact_id: String,
    pub form_type: FormType,
}

/// GoHighLevel API client
#[derive(Clone)]
pub struct GhlClient {
    config: GhlConfig,
    client: reqwest::Client,
}

impl GhlClient {
    /// Create a new client
    pub fn new(config: GhlConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, CrmError> {
        Ok(Self::new(GhlConfig::from_env()?))
    }

    /// Upsert a contact, returning the CRM contact id
    pub async fn upsert_contact(&self, contact: &ContactUpsert) -> Result<String, CrmError> {
        let url = format!("{}/contacts/upsert", self.config.api_base);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_token)
            .header("Version", API_VERSION)
            .json(contact)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status, body = %body, "GHL contact upsert failed");
            return Err(CrmError::Api { status, body });
        }

        let parsed: UpsertResponse = response.json().await?;
        parsed
            .contact
            .map(|contact| contact.id)
            .ok_or(CrmError::MissingContactId)
    }

    /// Enroll a contact in a workflow
    pub async fn enroll_workflow(
        &self,
        contact_id: &str,
        workflow_id: Uuid,
    ) -> Result<(), CrmError> {
        let url = format!(
            "{}/contacts/{}/workflow/{}",
            self.config.api_base, contact_id, workflow_id
        );
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_token)
            .header("Version", API_VERSION)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CrmError::Api { status, body });
        }

        Ok(())
    }

    /// Process a validated form submission.
    ///
    /// Upserts the contact with the form type's tag preset and source label,
    /// then enrolls it in the form type's workflow if one is wired.
    /// Enrollment is best-effort — the contact was already created, so a
    /// failure here is logged and the submission still succeeds.
    pub async fn submit_form(
        &self,
        submission: &FormSubmission,
    ) -> Result<SubmitOutcome, CrmError> {
        let form_type = submission.form_type;
        let contact = ContactUpsert {
            first_name: submission.first_name.clone(),
            last_name: submission.last_name.clone(),
            email: submission.email.clone(),
            phone: submission.phone.clone(),
            location_id: self.config.location_id.clone(),
            tags: form_type.tags().to_vec(),
            source: form_type.source(),
            custom_fields: submission.custom_fields(),
        };

        let contact_id = self.upsert_contact(&contact).await?;
        tracing::info!(
            contact_id = %contact_id,
            form_type = %form_type,
            "GHL contact upserted"
        );

        if let Some(workflow_id) = form_type.workflow_id() {
            match self.enroll_workflow(&contact_id, workflow_id).await {
                Ok(()) => {
                    tracing::info!(
                        contact_id = %contact_id,
                        workflow_id = %workflow_id,
                        "Enrolled contact in workflow"
                    );
                }
                Err(error) => {
                    tracing::warn!(
                        contact_id = %contact_id,
                        workflow_id = %workflow_id,
                        error = %error,
                        "Workflow enrollment failed"
                    );
                }
            }
        }

        Ok(SubmitOutcome {
            contact_id,
            form_type,
        })
    }
}
