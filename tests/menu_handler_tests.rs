use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;

use cafe_menu_api::core::error::AppError;
use cafe_menu_api::features::menu::{
    MenuItemRecord, MenuService, MenuStore, handle_healthcheck, handle_list_category,
    handle_list_menu,
};
use cafe_menu_api::server::AppState;

struct FixtureStore {
    rows: Vec<MenuItemRecord>,
    fail: bool,
}

#[async_trait]
impl MenuStore for FixtureStore {
    async fn fetch_all(&self) -> Result<Vec<MenuItemRecord>, AppError> {
        if self.fail {
            return Err(AppError::storage("boom".to_string()));
        }
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| (&a.category, &a.name).cmp(&(&b.category, &b.name)));
        Ok(rows)
    }

    async fn fetch_category(&self, category: &str) -> Result<Vec<MenuItemRecord>, AppError> {
        if self.fail {
            return Err(AppError::storage("boom".to_string()));
        }
        let mut rows: Vec<MenuItemRecord> = self
            .rows
            .iter()
            .filter(|row| row.category == category)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }
}

fn record(name: &str, category: &str, subcategory: &str, price: f64) -> MenuItemRecord {
    MenuItemRecord {
        name: name.to_string(),
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        price,
    }
}

fn fixture_state(fail: bool) -> AppState {
    let rows = vec![
        record("Blueberry Scone", "Bakery", "Scones", 3.50),
        record("Apple Muffin", "Bakery", "Muffins", 2.75),
        record("Latte", "Drinks", "Coffee", 4.00),
    ];
    let store: Arc<dyn MenuStore> = Arc::new(FixtureStore { rows, fail });
    AppState::new(Arc::new(MenuService::new(store)))
}

async fn response_parts(response: axum::response::Response) -> (StatusCode, Vec<u8>) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    (status, bytes.to_vec())
}

#[tokio::test]
async fn menu_endpoint_returns_grouped_json() {
    let state = fixture_state(false);

    let response = handle_list_menu(State(state)).await.into_response();
    let (status, body) = response_parts(response).await;

    assert_eq!(status, StatusCode::OK);
    let payload: Value = serde_json::from_slice(&body).expect("json body");
    let object = payload.as_object().expect("grouped object");
    assert_eq!(object.len(), 2);

    let bakery = object["Bakery"].as_array().expect("bakery array");
    assert_eq!(bakery[0]["name"], "Apple Muffin");
    assert_eq!(bakery[1]["name"], "Blueberry Scone");
    assert_eq!(object["Drinks"][0]["name"], "Latte");
}

#[tokio::test]
async fn menu_endpoint_answers_400_on_storage_failure() {
    let state = fixture_state(true);

    let response = handle_list_menu(State(state)).await.into_response();
    let (status, body) = response_parts(response).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"error");
}

#[tokio::test]
async fn category_endpoint_returns_sorted_array_with_exact_item_shape() {
    let state = fixture_state(false);

    let response = handle_list_category(State(state), Path("Bakery".to_string()))
        .await
        .into_response();
    let (status, body) = response_parts(response).await;

    assert_eq!(status, StatusCode::OK);
    let payload: Value = serde_json::from_slice(&body).expect("json body");
    let items = payload.as_array().expect("item array");
    assert_eq!(items.len(), 2);

    let first = items[0].as_object().expect("item object");
    assert_eq!(first.len(), 3);
    assert_eq!(first["name"], "Apple Muffin");
    assert_eq!(first["subcategory"], "Muffins");
    assert_eq!(first["price"], 2.75);
    assert_eq!(items[1]["name"], "Blueberry Scone");
}

#[tokio::test]
async fn unknown_category_answers_400_error_text() {
    let state = fixture_state(false);

    let response = handle_list_category(State(state), Path("Pastries".to_string()))
        .await
        .into_response();
    let (status, body) = response_parts(response).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"error");
}

#[tokio::test]
async fn empty_category_answers_400_error_text() {
    let state = fixture_state(false);

    let response = handle_list_category(State(state), Path(String::new()))
        .await
        .into_response();
    let (status, body) = response_parts(response).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"error");
}

#[tokio::test]
async fn category_endpoint_answers_500_on_storage_failure() {
    let state = fixture_state(true);

    let response = handle_list_category(State(state), Path("Bakery".to_string()))
        .await
        .into_response();
    let (status, body) = response_parts(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, b"error");
}

#[tokio::test]
async fn healthcheck_reports_ok() {
    let response = handle_healthcheck().await.into_response();
    let (status, body) = response_parts(response).await;

    assert_eq!(status, StatusCode::OK);
    let payload: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(payload["status"], "ok");
}
