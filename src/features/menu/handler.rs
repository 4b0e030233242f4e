use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::core::error::AppError;
use crate::features::menu::dto::MenuItemDto;
use crate::server::AppState;

/// `GET /menu` — the whole menu grouped by category. Storage failures answer
/// 400 on this endpoint, a quirk of the documented contract kept as is.
pub async fn handle_list_menu(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Vec<MenuItemDto>>>, AppError> {
    match state.service.menu_by_category().await {
        Ok(grouped) => Ok(Json(grouped)),
        Err(AppError::Storage(message)) => {
            tracing::warn!(%message, "menu listing failed");
            Err(AppError::bad_request(message))
        }
        Err(other) => Err(other),
    }
}

/// `GET /menu/:category` — items in one category, exact case-sensitive match.
pub async fn handle_list_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<MenuItemDto>>, AppError> {
    match state.service.items_in_category(&category).await {
        Ok(items) => Ok(Json(items)),
        Err(err) => {
            tracing::warn!(%category, error = %err, "category listing failed");
            Err(err)
        }
    }
}

pub async fn handle_healthcheck() -> Result<Json<Value>, AppError> {
    Ok(Json(json!({ "status": "ok" })))
}
