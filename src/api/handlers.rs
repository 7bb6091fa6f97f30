use crate::api::extract::JsonOrForm;
use crate::api::pagination::{self, PageQuery};
use crate::api::{AppState, CompanyBody};
use crate::domain::model::CompanyDraft;
use crate::domain::validate::{self, validate_draft};
use crate::utils::error::{BoardError, FieldErrors};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, warn};

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /companies/ — all records ordered by `last_update` ascending, wrapped
/// in the page envelope.
pub async fn list_companies(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let companies = match state.store.list_ordered().await {
        Ok(companies) => companies,
        Err(e) => {
            warn!("Failed to list companies: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let bodies: Vec<CompanyBody> = companies.iter().map(CompanyBody::from).collect();
    match pagination::paginate(bodies, &query, state.page_size, "/companies/") {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": pagination::INVALID_PAGE_DETAIL })),
        )
            .into_response(),
    }
}

/// POST /companies/ — validate, then persist. Either the record is stored and
/// echoed back with 201, or nothing is written and the field errors come back
/// with 400.
pub async fn create_company(
    State(state): State<AppState>,
    JsonOrForm(draft): JsonOrForm<CompanyDraft>,
) -> Response {
    let candidate = match validate_draft(&draft) {
        Ok(candidate) => candidate,
        Err(errors) => return field_errors_response(errors),
    };

    // Friendly duplicate pre-check against persisted state. The store repeats
    // the check atomically on insert, so this is not the safety net.
    match state.store.find_by_name(&candidate.name).await {
        Ok(Some(_)) => {
            return field_errors_response(FieldErrors::single("name", validate::DUPLICATE_NAME));
        }
        Ok(None) => {}
        Err(e) => {
            warn!("Failed to check name uniqueness: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    }

    match state.store.insert(candidate).await {
        Ok(company) => {
            debug!("Created company {:?}", company.name);
            (StatusCode::CREATED, Json(CompanyBody::from(&company))).into_response()
        }
        Err(BoardError::DuplicateName { .. }) => {
            field_errors_response(FieldErrors::single("name", validate::DUPLICATE_NAME))
        }
        Err(e) => {
            warn!("Failed to insert company: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn field_errors_response(errors: FieldErrors) -> Response {
    (StatusCode::BAD_REQUEST, Json(errors)).into_response()
}
