use crate::domain::model::{Company, NewCompany};
use crate::domain::ports::CompanyStore;
use crate::utils::error::{BoardError, Result};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

/// In-memory company store. Enough for the workloads this service sees, and
/// what keeps the endpoint logic testable without a real database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Company>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyStore for MemoryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Company>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|company| company.name == name).cloned())
    }

    async fn insert(&self, company: NewCompany) -> Result<Company> {
        // Uniqueness check and append under one write lock, so two concurrent
        // creates with the same name cannot both pass.
        let mut records = self.records.write().await;
        if records.iter().any(|existing| existing.name == company.name) {
            return Err(BoardError::DuplicateName { name: company.name });
        }

        let stored = Company {
            name: company.name,
            status: company.status,
            application_link: company.application_link,
            notes: company.notes,
            last_update: Utc::now(),
        };
        records.push(stored.clone());
        Ok(stored)
    }

    async fn list_ordered(&self) -> Result<Vec<Company>> {
        let records = self.records.read().await;
        let mut ordered = records.clone();
        // Stable sort: equal timestamps keep insertion order.
        ordered.sort_by_key(|company| company.last_update);
        Ok(ordered)
    }
}
