//! Credential persistence.
//!
//! The session manager is the sole writer of the access/refresh pair.
//! Readers go through the store on every request, so a token replaced by a
//! refresh is picked up immediately rather than from a stale copy.

use std::sync::{Arc, Mutex};

/// Storage key for the short-lived access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the long-lived refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Persistence seam for the credential pair.
pub trait TokenStore {
    fn access(&self) -> Option<String>;
    fn refresh(&self) -> Option<String>;

    /// Persist a freshly issued pair (login).
    fn store(&self, access: &str, refresh: &str);

    /// Replace only the access token. The backend does not rotate refresh
    /// tokens, so the refresh half of the pair stays as issued.
    fn set_access(&self, access: &str);

    /// Drop both tokens (logout, irrecoverable refresh failure).
    fn clear(&self);
}

/// In-memory store for tests and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokens {
    inner: Arc<Mutex<Pair>>,
}

#[derive(Debug, Default)]
struct Pair {
    access: Option<String>,
    refresh: Option<String>,
}

impl MemoryTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a pair, as after an earlier login.
    pub fn preloaded(access: &str, refresh: &str) -> Self {
        let tokens = Self::default();
        tokens.store(access, refresh);
        tokens
    }
}

impl TokenStore for MemoryTokens {
    fn access(&self) -> Option<String> {
        self.inner.lock().unwrap().access.clone()
    }

    fn refresh(&self) -> Option<String> {
        self.inner.lock().unwrap().refresh.clone()
    }

    fn store(&self, access: &str, refresh: &str) {
        let mut pair = self.inner.lock().unwrap();
        pair.access = Some(access.to_string());
        pair.refresh = Some(refresh.to_string());
    }

    fn set_access(&self, access: &str) {
        self.inner.lock().unwrap().access = Some(access.to_string());
    }

    fn clear(&self) {
        let mut pair = self.inner.lock().unwrap();
        pair.access = None;
        pair.refresh = None;
    }
}

/// localStorage-backed store, so a returning user survives a reload
/// without re-authenticating.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct BrowserTokens;

#[cfg(target_arch = "wasm32")]
impl BrowserTokens {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokens {
    fn access(&self) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(ACCESS_TOKEN_KEY).ok().flatten())
    }

    fn refresh(&self) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(REFRESH_TOKEN_KEY).ok().flatten())
    }

    fn store(&self, access: &str, refresh: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, access);
            let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh);
        }
    }

    fn set_access(&self, access: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, access);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_tokens_pair_lifecycle() {
        let tokens = MemoryTokens::new();
        assert!(tokens.access().is_none());
        assert!(tokens.refresh().is_none());

        tokens.store("a1", "r1");
        assert_eq!(tokens.access().as_deref(), Some("a1"));
        assert_eq!(tokens.refresh().as_deref(), Some("r1"));

        // Refresh replaces only the access half.
        tokens.set_access("a2");
        assert_eq!(tokens.access().as_deref(), Some("a2"));
        assert_eq!(tokens.refresh().as_deref(), Some("r1"));

        tokens.clear();
        assert!(tokens.access().is_none());
        assert!(tokens.refresh().is_none());
    }
}
