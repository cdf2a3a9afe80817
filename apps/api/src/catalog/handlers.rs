//! Axum route handlers for the Role API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::catalog::Role;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub roles: Vec<Role>,
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RoleListResponse> {
    Json(RoleListResponse {
        roles: state.catalog.roles().cloned().collect(),
    })
}

/// GET /api/v1/roles/:id
pub async fn handle_get_role(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> Result<Json<Role>, AppError> {
    let role = state.catalog.get(&role_id)?;
    Ok(Json(role.clone()))
}
