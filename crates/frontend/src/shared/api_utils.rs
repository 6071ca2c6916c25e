//! API utilities for frontend-backend communication

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location, using
/// port 5678 for the bills backend.
///
/// # Returns
/// - API base URL like "http://localhost:5678"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5678", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```no_run
/// let url = frontend::shared::api_utils::api_url("/bills");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
