//! Form submission relay
//!
//! Public endpoint that validates website form payloads and relays them to
//! the CRM. Field names are camelCase on the wire to match the front-end
//! form components.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use growthwave_crm::{FormSubmission, FormType, UnknownFormType};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitFormRequest {
    pub form_type: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub product_interest: Option<String>,
    pub message: Option<String>,
    pub funding_goal: Option<String>,
    pub credit_score: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFormResponse {
    pub success: bool,
    pub contact_id: String,
    pub form_type: FormType,
}

/// Accept a form submission and relay it to the CRM
pub async fn submit_form(
    State(state): State<AppState>,
    Json(request): Json<SubmitFormRequest>,
) -> ApiResult<Json<SubmitFormResponse>> {
    let form_type: FormType = request
        .form_type
        .parse()
        .map_err(|error: UnknownFormType| ApiError::Validation(error.to_string()))?;

    // A contact record needs at least one way to reach the submitter
    if request.email.trim().is_empty() && request.phone.trim().is_empty() {
        return Err(ApiError::Validation(
            "At least one of email or phone is required".to_string(),
        ));
    }

    let Some(crm) = &state.crm else {
        tracing::error!("GHL_API_TOKEN or GHL_LOCATION_ID not configured");
        return Err(ApiError::Configuration);
    };

    let submission = FormSubmission {
        form_type,
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
        phone: request.phone,
        product_interest: request.product_interest,
        message: request.message,
        funding_goal: request.funding_goal,
        credit_score: request.credit_score,
    };

    let outcome = crm.submit_form(&submission).await?;

    Ok(Json(SubmitFormResponse {
        success: true,
        contact_id: outcome.contact_id,
        form_type: outcome.form_type,
    }))
}
