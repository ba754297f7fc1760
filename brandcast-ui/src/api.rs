//! Backend Endpoint
//!
//! The base URL can be overridden per browser through local storage; the
//! client itself lives in the core crate.

use brandcast::config::DEFAULT_API_BASE;
use brandcast::ApiClient;

/// Local storage key holding an alternate backend URL
const API_URL_KEY: &str = "brandcast_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Client for the configured backend
pub fn client() -> ApiClient {
    ApiClient::new(get_api_base())
}
