//! Backend URL helpers
//!
//! The backend listens on its own port next to the page host (see `config.toml`).

pub const BACKEND_PORT: u16 = 3000;

/// Base URL of the backend for the current page, e.g. "http://localhost:3000"
///
/// Falls back to "http://127.0.0.1:3000" outside a browser window.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return base_url("http:", "127.0.0.1");
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_url(&protocol, &hostname)
}

fn base_url(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Absolute backend URL for `path`
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Joins `path` (starting with "/api/") onto `base`
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
