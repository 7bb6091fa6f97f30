pub mod extract;
pub mod handlers;
pub mod pagination;

use crate::domain::model::{Company, CompanyStatus};
use crate::domain::ports::CompanyStore;
use axum::{routing::get, Router};
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CompanyStore>,
    pub page_size: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn CompanyStore>, page_size: usize) -> Self {
        Self { store, page_size }
    }
}

/// Response shape of a company record: optional fields are always present as
/// strings, possibly empty, never null.
#[derive(Debug, Serialize)]
pub struct CompanyBody {
    pub name: String,
    pub status: CompanyStatus,
    pub application_link: String,
    pub notes: String,
}

impl From<&Company> for CompanyBody {
    fn from(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            status: company.status,
            application_link: company.application_link.clone(),
            notes: company.notes.clone(),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/companies/",
            get(handlers::list_companies).post(handlers::create_company),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
