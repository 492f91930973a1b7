//! CRM error types

use thiserror::Error;

/// Errors from the GoHighLevel client
#[derive(Debug, Error)]
pub enum CrmError {
    #[error("CRM configuration error: {0}")]
    Config(String),

    #[error("CRM request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CRM API returned {status}")]
    Api { status: u16, body: String },

    #[error("CRM response missing contact id")]
    MissingContactId,
}

/// A string that does not name any known form type.
#[derive(Debug, Error)]
#[error("Unknown form type: {0}. Expected: contact, prequal, or guide")]
pub struct UnknownFormType(pub String);
