use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of hiring states. The `CHOICES` list is the single source of
/// truth for validation and for the rejection message shown to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompanyStatus {
    #[default]
    Hiring,
    Layoffs,
}

impl CompanyStatus {
    pub const CHOICES: [CompanyStatus; 2] = [CompanyStatus::Hiring, CompanyStatus::Layoffs];

    pub fn as_str(self) -> &'static str {
        match self {
            CompanyStatus::Hiring => "Hiring",
            CompanyStatus::Layoffs => "Layoffs",
        }
    }

    /// Case-sensitive lookup against `CHOICES`; anything else is rejected.
    pub fn parse(value: &str) -> Option<CompanyStatus> {
        Self::CHOICES
            .into_iter()
            .find(|choice| choice.as_str() == value)
    }
}

impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted company record. `last_update` is assigned by the store at
/// insert time and is the ordering key of the list operation.
#[derive(Debug, Clone, Serialize)]
pub struct Company {
    pub name: String,
    pub status: CompanyStatus,
    pub application_link: String,
    pub notes: String,
    pub last_update: DateTime<Utc>,
}

/// A validated, normalized record ready for persistence. Optional fields have
/// already been defaulted, so they are plain strings here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub name: String,
    pub status: CompanyStatus,
    pub application_link: String,
    pub notes: String,
}

/// Raw create payload as submitted by a client. Any subset of fields may be
/// omitted; the validation policy decides what that means.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyDraft {
    pub name: Option<String>,
    pub status: Option<String>,
    pub application_link: Option<String>,
    pub notes: Option<String>,
}
