use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use cafe_menu_api::config::load_config;
use cafe_menu_api::core::error::AppError;
use cafe_menu_api::features::menu::{
    MenuService, MenuStore, PostgresMenuStore, handle_healthcheck, handle_list_category,
    handle_list_menu,
};
use cafe_menu_api::server::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let config = load_config()?;

    let store: Arc<dyn MenuStore> = Arc::new(PostgresMenuStore::new(config.database_url.clone()));
    let menu_service = Arc::new(MenuService::new(store));
    let app_state = AppState::new(menu_service);

    let app = Router::new()
        .route("/health", get(handle_healthcheck))
        .route("/menu", get(handle_list_menu))
        .route("/menu/:category", get(handle_list_category))
        .with_state(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "starting server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with_target(false)
        .init();
}
