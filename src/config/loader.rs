use std::env;

use crate::config::dto::AppConfig;
use crate::core::error::AppError;

const DEFAULT_PORT: &str = "8000";
const DEFAULT_DATABASE_URL: &str = "host=localhost user=postgres dbname=cafe";

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let port = env::var("PORT")
        .or_else(|_| env::var("CAFE_API_PORT"))
        .unwrap_or_else(|_| DEFAULT_PORT.to_string())
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid port: {err}")))?;

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    Ok(AppConfig { port, database_url })
}
