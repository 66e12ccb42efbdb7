//! Build-time configuration.
//!
//! Both values are baked in at compile time; there is no runtime config
//! surface in the browser bundle.

/// Base URL of the backend REST API. Defaults to the same-origin `/api`
/// mount used in development.
pub fn api_base_url() -> String {
    option_env!("LOREKEEPER_API_BASE")
        .unwrap_or("/api")
        .to_string()
}

/// Google OAuth client id the sign-in button is registered with.
pub fn google_client_id() -> &'static str {
    option_env!("LOREKEEPER_GOOGLE_CLIENT_ID").unwrap_or("")
}
