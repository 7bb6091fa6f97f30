use crate::domain::model::{Company, NewCompany};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence port for company records. Handlers only talk to this trait, so
/// the endpoint logic is testable against any adapter.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Case-sensitive exact match on `name`.
    async fn find_by_name(&self, name: &str) -> Result<Option<Company>>;

    /// Persists a validated record, assigning `last_update`. The uniqueness
    /// check and the insert happen in one atomic unit; a conflicting name
    /// fails with `BoardError::DuplicateName` without mutating storage.
    async fn insert(&self, company: NewCompany) -> Result<Company>;

    /// All records ordered by `last_update` ascending. The ordering is a
    /// documented contract of the list operation, not incidental.
    async fn list_ordered(&self) -> Result<Vec<Company>>;
}
