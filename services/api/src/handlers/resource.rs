//! Generic CRUD handlers, instantiated once per resource in the router.

use std::sync::Arc;

use attendance_core::clock::Clock;
use attendance_domain::pagination::PageRequest;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::infra::resources::{DbResourceRepository, SeaResource};
use crate::state::AppState;
use crate::usecase::resource::ResourceUseCase;

type ResourceService<R> = ResourceUseCase<R, DbResourceRepository<R>, Arc<dyn Clock>>;

fn usecase<R: SeaResource>(state: &AppState) -> ResourceService<R> {
    ResourceUseCase::new(state.resource_repo::<R>(), Arc::clone(&state.clock))
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

// ── POST /api/{resource} ─────────────────────────────────────────────────────

pub async fn create_resource<R: SeaResource>(
    State(state): State<AppState>,
    JsonBody(new): JsonBody<R::Draft>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let usecase = usecase::<R>(&state);
    let id = usecase.create(new).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

// ── GET /api/{resource}/{id} ─────────────────────────────────────────────────

pub async fn get_resource<R: SeaResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<R::Record>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::InvalidId)?;
    let usecase = usecase::<R>(&state);
    Ok(Json(usecase.get(id).await?))
}

// ── GET /api/{resource} ──────────────────────────────────────────────────────

pub async fn list_resources<R: SeaResource>(
    State(state): State<AppState>,
    page: Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<Vec<R::Record>>, ApiError> {
    let Query(page) = page.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let usecase = usecase::<R>(&state);
    Ok(Json(usecase.list(page).await?))
}
