//! GrowthWave CRM Integration
//!
//! This crate relays website form submissions to the GoHighLevel V2 API:
//! a contact upsert followed by best-effort workflow enrollment, with
//! per-form-type tag, source, and workflow lookup tables.

pub mod client;
pub mod error;
pub mod forms;

pub use client::{ContactUpsert, GhlClient, GhlConfig, SubmitOutcome, DEFAULT_API_BASE};
pub use error::{CrmError, UnknownFormType};
pub use forms::{CustomField, FormSubmission, FormType};
