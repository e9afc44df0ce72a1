use dotenvy::dotenv;
use std::env as stdenv;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Base-URL-only client factory for the storefront catalog API. No headers,
/// no retries, no auth.
#[derive(Clone)]
pub struct ApiClient {
    pub base_url: String,
    pub http: reqwest::Client,
}

impl ApiClient {
    pub fn new() -> Self {
        dotenv().ok();
        let base_url =
            stdenv::var("GOMARKET_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
