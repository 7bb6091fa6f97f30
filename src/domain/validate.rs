use crate::domain::model::{CompanyDraft, CompanyStatus, NewCompany};
use crate::utils::error::FieldErrors;

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";
pub const DUPLICATE_NAME: &str = "company with this name already exists.";

/// Rejection message for an out-of-set `status`, echoing the literal input.
pub fn invalid_choice(value: &str) -> String {
    format!("\"{}\" is not a valid choice.", value)
}

/// Validation and default policy for a create payload.
///
/// `name` is the only required field. An omitted `status` defaults to
/// `Hiring`; omitted `application_link`/`notes` default to the empty string,
/// never null. Errors for independent fields are collected together so one
/// bad payload reports every failing field at once.
///
/// The uniqueness rule is not checked here: it needs the persisted state, so
/// the endpoint pre-checks it and the store enforces it on insert.
pub fn validate_draft(draft: &CompanyDraft) -> Result<NewCompany, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = match draft.name.as_deref() {
        None => {
            errors.push("name", REQUIRED);
            None
        }
        Some(name) if name.trim().is_empty() => {
            errors.push("name", BLANK);
            None
        }
        Some(name) => Some(name.to_string()),
    };

    let status = match draft.status.as_deref() {
        None => Some(CompanyStatus::default()),
        Some(value) => match CompanyStatus::parse(value) {
            Some(status) => Some(status),
            None => {
                errors.push("status", invalid_choice(value));
                None
            }
        },
    };

    match (name, status) {
        (Some(name), Some(status)) => Ok(NewCompany {
            name,
            status,
            application_link: draft.application_link.clone().unwrap_or_default(),
            notes: draft.notes.clone().unwrap_or_default(),
        }),
        _ => Err(errors),
    }
}
