//! Form type lookup tables
//!
//! Each website form type maps to a tag preset, a source label shown on the
//! CRM contact record, and an optional workflow the contact is enrolled in
//! after the upsert. The tables are static; adding a form type means
//! redeploying.

use serde::{Deserialize, Serialize};
use uuid::{uuid, Uuid};

use crate::error::UnknownFormType;

/// Capital — Unified Lead Nurture (All Entry Ramps)
const PREQUAL_WORKFLOW_ID: Uuid = uuid!("52c79b90-0897-4bed-8dbd-4dc94ce2735a");

// =============================================================================
// Form Types
// =============================================================================

/// The website forms the gateway accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    /// General contact form
    Contact,
    /// Pre-qualification form
    Prequal,
    /// Lead-magnet guide download
    Guide,
}

impl FormType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Contact => "contact",
            FormType::Prequal => "prequal",
            FormType::Guide => "guide",
        }
    }

    /// Tags applied to the contact record.
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            FormType::Contact => &[
                "source:website-organic",
                "brand:capital",
                "form:capital-contact",
            ],
            FormType::Prequal => &[
                "source:website-organic",
                "brand:capital",
                "form:capital-prequal",
                "engagement:prequal-submitted",
            ],
            FormType::Guide => &[
                "source:website-organic",
                "brand:capital",
                "form:capital-guide",
                "engagement:lead-magnet-downloaded",
            ],
        }
    }

    /// Source label shown on the CRM contact record.
    pub fn source(&self) -> &'static str {
        match self {
            FormType::Contact => "Website — Capital Contact",
            FormType::Prequal => "Website — Capital Pre-Qualification",
            FormType::Guide => "Website — Capital Guide Download",
        }
    }

    /// Workflow the contact is enrolled in after upsert.
    ///
    /// Only prequal is wired — contact and guide feed separate downstream
    /// paths. Add workflow ids here when those sequences are built.
    pub fn workflow_id(&self) -> Option<Uuid> {
        match self {
            FormType::Prequal => Some(PREQUAL_WORKFLOW_ID),
            FormType::Contact | FormType::Guide => None,
        }
    }
}

impl std::fmt::Display for FormType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FormType {
    type Err = UnknownFormType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contact" => Ok(FormType::Contact),
            "prequal" => Ok(FormType::Prequal),
            "guide" => Ok(FormType::Guide),
            other => Err(UnknownFormType(other.to_string())),
        }
    }
}

// =============================================================================
// Submission Payload
// =============================================================================

/// A validated form submission ready for relay to the CRM.
#[derive(Debug, Clone)]
pub struct FormSubmission {
    pub form_type: FormType,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Contact form: product interest dropdown
    pub product_interest: Option<String>,
    /// Contact form: free-text message
    pub message: Option<String>,
    /// Pre-qual form: funding amount needed
    pub funding_goal: Option<String>,
    /// Pre-qual form: estimated credit score range
    pub credit_score: Option<String>,
}

/// A custom field entry in the upsert payload.
///
/// The `id` values are the CRM's custom-field keys; `funding_amount_needed`
/// and `estimated_credit_score_range` are addressable as merge tags
/// (`{{ contact.funding_amount_needed }}`).
#[derive(Debug, Clone, Serialize)]
pub struct CustomField {
    pub id: &'static str,
    pub field_value: String,
}

impl FormSubmission {
    /// Map the form-specific fields that are present onto CRM custom fields.
    pub fn custom_fields(&self) -> Vec<CustomField> {
        let mut fields = Vec::new();

        if let Some(value) = &self.product_interest {
            fields.push(CustomField {
                id: "single_dropdown_89ki",
                field_value: value.clone(),
            });
        }
        if let Some(value) = &self.message {
            fields.push(CustomField {
                id: "multi_line_2fsn",
                field_value: value.clone(),
            });
        }
        if let Some(value) = &self.funding_goal {
            fields.push(CustomField {
                id: "funding_amount_needed",
                field_value: value.clone(),
            });
        }
        if let Some(value) = &self.credit_score {
            fields.push(CustomField {
                id: "estimated_credit_score_range",
                field_value: value.clone(),
            });
        }

        fields
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn empty_submission(form_type: FormType) -> FormSubmission {
        FormSubmission {
            form_type,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            product_interest: None,
            message: None,
            funding_goal: None,
            credit_score: None,
        }
    }

    #[test]
    fn test_form_type_parse() {
        assert_eq!("contact".parse::<FormType>().unwrap(), FormType::Contact);
        assert_eq!("prequal".parse::<FormType>().unwrap(), FormType::Prequal);
        assert_eq!("guide".parse::<FormType>().unwrap(), FormType::Guide);
        assert!("newsletter".parse::<FormType>().is_err());
        assert!("Contact".parse::<FormType>().is_err());
    }

    #[test]
    fn test_tag_presets() {
        assert!(FormType::Contact.tags().contains(&"form:capital-contact"));
        assert!(FormType::Prequal
            .tags()
            .contains(&"engagement:prequal-submitted"));
        assert!(FormType::Guide
            .tags()
            .contains(&"engagement:lead-magnet-downloaded"));

        // Every preset carries the shared source and brand tags
        for form_type in [FormType::Contact, FormType::Prequal, FormType::Guide] {
            assert!(form_type.tags().contains(&"source:website-organic"));
            assert!(form_type.tags().contains(&"brand:capital"));
        }
    }

    #[test]
    fn test_workflow_wiring() {
        assert!(FormType::Prequal.workflow_id().is_some());
        assert!(FormType::Contact.workflow_id().is_none());
        assert!(FormType::Guide.workflow_id().is_none());
    }

    #[test]
    fn test_custom_fields_only_present_values() {
        let mut submission = empty_submission(FormType::Prequal);
        assert!(submission.custom_fields().is_empty());

        submission.funding_goal = Some("$100K-$250K".to_string());
        submission.credit_score = Some("720-780".to_string());

        let fields = submission.custom_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].id, "funding_amount_needed");
        assert_eq!(fields[0].field_value, "$100K-$250K");
        assert_eq!(fields[1].id, "estimated_credit_score_range");
    }

    #[test]
    fn test_custom_fields_contact_form() {
        let mut submission = empty_submission(FormType::Contact);
        submission.product_interest = Some("Business Credit".to_string());
        submission.message = Some("Looking for funding options".to_string());

        let fields = submission.custom_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].id, "single_dropdown_89ki");
        assert_eq!(fields[1].id, "multi_line_2fsn");
    }
}
