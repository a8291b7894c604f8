//! Application constants and configuration

pub const API_BASE_URL: &str = "https://your-heroku-app.herokuapp.com";
pub const ANALYZE_PATH: &str = "/api/analyze";
/// Multipart field name the analysis service reads the upload from
pub const IMAGE_FIELD: &str = "image";
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Sports Photo Analyzer";

/// Overrides `Settings::endpoint` for the current session
pub const ENDPOINT_ENV: &str = "SPORTS_ANALYZER_ENDPOINT";
