//! The authenticated-session lifecycle.
//!
//! [`Session`] owns the auth state, the credential pair, and the one
//! request path every authorized call goes through. A request that comes
//! back 401 triggers a token refresh and exactly one retry; concurrent
//! failures share a single refresh call. Callers never observe the 401
//! that was transparently recovered from.

use std::cell::RefCell;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::api_base_url;
use crate::error::ApiError;
use crate::http::{HttpClient, HttpRequest, HttpResponse, Method, Transport};
use crate::models::UserInfo;
use crate::tokens::TokenStore;

/// Authentication state owned by the session manager.
///
/// `loading` is true only until the initial startup check has resolved;
/// the UI must not branch on `is_authenticated` while it is set.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            loading: true,
        }
    }
}

impl SessionState {
    fn logged_out() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            loading: false,
        }
    }

    fn logged_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }
}

#[derive(Deserialize)]
struct LoginResponse {
    user: UserInfo,
    tokens: TokenPair,
}

#[derive(Deserialize)]
struct TokenPair {
    access: String,
    refresh: String,
}

#[derive(Deserialize)]
struct RefreshResponse {
    access: String,
}

/// The session context: one instance lives for the application lifetime
/// and is shared with everything that issues network calls.
///
/// It is generic over the [`Transport`] and [`TokenStore`] so tests can
/// construct isolated instances with a scripted transport and an
/// in-memory credential store; the running app uses [`make_session`].
pub struct Session<T: Transport, S: TokenStore> {
    base_url: String,
    transport: T,
    tokens: S,
    state: RefCell<SessionState>,
    /// Gate guaranteeing at most one in-flight refresh call.
    refresh_gate: Mutex<()>,
    expired_hook: RefCell<Option<Box<dyn Fn()>>>,
}

impl<T: Transport, S: TokenStore> Session<T, S> {
    pub fn new(base_url: impl Into<String>, transport: T, tokens: S) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            tokens,
            state: RefCell::new(SessionState::default()),
            refresh_gate: Mutex::new(()),
            expired_hook: RefCell::new(None),
        }
    }

    /// Install the hook fired when a mid-session refresh fails for good.
    /// The web app uses it to force navigation to the login page.
    pub fn on_session_expired(&self, hook: impl Fn() + 'static) {
        *self.expired_hook.borrow_mut() = Some(Box::new(hook));
    }

    /// Snapshot of the current authentication state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Startup restoration. Resolves to a definite logged-in or
    /// logged-out state and never returns an error; with no stored
    /// credential it does not touch the network at all.
    pub async fn restore(&self) -> SessionState {
        if self.tokens.access().is_none() {
            *self.state.borrow_mut() = SessionState::logged_out();
            return self.state();
        }

        match self.get::<UserInfo>("/auth/user/").await {
            Ok(user) => {
                let mut state = self.state.borrow_mut();
                let same_user = state.is_authenticated
                    && state.user.as_ref().is_some_and(|current| current.id == user.id);
                if same_user {
                    // Re-entry with an unchanged identity: skip the state
                    // write so nothing downstream re-renders.
                    state.loading = false;
                } else {
                    *state = SessionState::logged_in(user);
                }
            }
            Err(err) => {
                // A broken or expired session at startup is expected, not
                // exceptional; resolve silently to logged-out.
                tracing::debug!("session restore failed: {err}");
                self.tokens.clear();
                *self.state.borrow_mut() = SessionState::logged_out();
            }
        }

        self.state()
    }

    /// Exchange a Google ID credential for a backend session.
    ///
    /// On failure the current state is left untouched and the error is
    /// returned for the login page to display; the caller must not
    /// navigate forward.
    pub async fn login(&self, credential: &str) -> Result<UserInfo, ApiError> {
        if credential.is_empty() {
            return Err(ApiError::MissingCredential);
        }

        let request = HttpRequest::new(Method::Post, self.url("/auth/google/"))
            .with_body(serde_json::json!({ "id_token": credential }));
        let response = check_status(self.transport.execute(request).await?)?;
        let login: LoginResponse =
            serde_json::from_value(response.body).map_err(ApiError::decode)?;

        self.tokens.store(&login.tokens.access, &login.tokens.refresh);
        *self.state.borrow_mut() = SessionState::logged_in(login.user.clone());
        Ok(login.user)
    }

    /// Local-only logout: clears the credential pair and state without a
    /// network round-trip, so the user can always reach the logged-out UI
    /// even with the backend unreachable.
    pub fn logout(&self) {
        self.tokens.clear();
        *self.state.borrow_mut() = SessionState::logged_out();
    }

    /// Issue an authorized request: one attempt with the current access
    /// token, then on 401 a (possibly shared) refresh and exactly one
    /// retry. A 401 on the retried request passes through as an ordinary
    /// status error; a second retry is unrepresentable here.
    pub(crate) async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let access = self.tokens.access();
        let first = self
            .transport
            .execute(request.clone().with_bearer(access.clone()))
            .await?;
        if !first.is_unauthorized() {
            return check_status(first);
        }

        let fresh = self.refresh_access(access.as_deref()).await?;
        let second = self
            .transport
            .execute(request.with_bearer(Some(fresh)))
            .await?;
        check_status(second)
    }

    /// Obtain a usable access token after a 401, coalescing concurrent
    /// callers onto a single wire refresh. `stale` is the token the
    /// failing request carried.
    async fn refresh_access(&self, stale: Option<&str>) -> Result<String, ApiError> {
        let _gate = self.refresh_gate.lock().await;

        // Callers that waited on the gate observe the outcome of the
        // refresh that ran ahead of them instead of issuing their own.
        match self.tokens.access() {
            Some(current) if Some(current.as_str()) != stale => return Ok(current),
            None if stale.is_some() => return Err(ApiError::SessionExpired),
            _ => {}
        }

        let Some(refresh) = self.tokens.refresh() else {
            self.expire();
            return Err(ApiError::SessionExpired);
        };

        let request = HttpRequest::new(Method::Post, self.url("/auth/token/refresh/"))
            .with_body(serde_json::json!({ "refresh": refresh }));
        let outcome = match self.transport.execute(request).await {
            Ok(response) if response.is_success() => {
                serde_json::from_value::<RefreshResponse>(response.body)
                    .map_err(ApiError::decode)
            }
            Ok(response) => Err(ApiError::Status {
                status: response.status,
                detail: response.detail(),
            }),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(refreshed) => {
                self.tokens.set_access(&refreshed.access);
                Ok(refreshed.access)
            }
            Err(err) => {
                tracing::warn!("token refresh failed, ending session: {err}");
                self.expire();
                Err(ApiError::SessionExpired)
            }
        }
    }

    /// Irrecoverable refresh failure: wipe the credential pair, reset
    /// state, and fire the expiry hook.
    fn expire(&self) {
        self.tokens.clear();
        *self.state.borrow_mut() = SessionState::logged_out();
        if let Some(hook) = self.expired_hook.borrow().as_ref() {
            hook();
        }
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.send(HttpRequest::new(Method::Get, self.url(path))).await?;
        serde_json::from_value(response.body).map_err(ApiError::decode)
    }

    pub(crate) async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::decode)?;
        let response = self
            .send(HttpRequest::new(Method::Post, self.url(path)).with_body(body))
            .await?;
        serde_json::from_value(response.body).map_err(ApiError::decode)
    }

    pub(crate) async fn patch<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::decode)?;
        let response = self
            .send(HttpRequest::new(Method::Patch, self.url(path)).with_body(body))
            .await?;
        serde_json::from_value(response.body).map_err(ApiError::decode)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(HttpRequest::new(Method::Delete, self.url(path)))
            .await?;
        Ok(())
    }
}

fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status,
            detail: response.detail(),
        })
    }
}

/// The session type the running application uses: localStorage
/// persistence in the browser, in-memory elsewhere.
#[cfg(target_arch = "wasm32")]
pub type AppSession = Session<HttpClient, crate::tokens::BrowserTokens>;
#[cfg(not(target_arch = "wasm32"))]
pub type AppSession = Session<HttpClient, crate::tokens::MemoryTokens>;

/// Build the process-wide session for the current target.
pub fn make_session() -> AppSession {
    #[cfg(target_arch = "wasm32")]
    {
        Session::new(
            api_base_url(),
            HttpClient::new(),
            crate::tokens::BrowserTokens::new(),
        )
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Session::new(
            api_base_url(),
            HttpClient::new(),
            crate::tokens::MemoryTokens::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use serde_json::{json, Value};

    use super::*;
    use crate::tokens::MemoryTokens;

    /// Transport double: answers from a closure and records every request
    /// it executed. The initial `yield_now` gives concurrently issued
    /// requests a chance to interleave under a current-thread runtime.
    #[derive(Clone)]
    struct FakeTransport {
        respond: Rc<dyn Fn(&HttpRequest) -> Result<HttpResponse, ApiError>>,
        log: Rc<RefCell<Vec<HttpRequest>>>,
    }

    impl FakeTransport {
        fn new(
            respond: impl Fn(&HttpRequest) -> Result<HttpResponse, ApiError> + 'static,
        ) -> Self {
            Self {
                respond: Rc::new(respond),
                log: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.log.borrow().clone()
        }

        fn count(&self, path_fragment: &str) -> usize {
            self.log
                .borrow()
                .iter()
                .filter(|request| request.url.contains(path_fragment))
                .count()
        }
    }

    impl Transport for FakeTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            tokio::task::yield_now().await;
            self.log.borrow_mut().push(request.clone());
            (self.respond)(&request)
        }
    }

    fn ok(body: Value) -> Result<HttpResponse, ApiError> {
        Ok(HttpResponse { status: 200, body })
    }

    fn status(code: u16, body: Value) -> Result<HttpResponse, ApiError> {
        Ok(HttpResponse { status: code, body })
    }

    fn user_json(id: i64) -> Value {
        json!({
            "id": id,
            "email": "strider@bree.example",
            "first_name": "Aragorn",
            "last_name": "Elessar",
        })
    }

    fn login_json(id: i64) -> Value {
        json!({
            "user": user_json(id),
            "tokens": { "access": "fresh-access", "refresh": "fresh-refresh" },
        })
    }

    fn session_with(
        transport: FakeTransport,
        tokens: MemoryTokens,
    ) -> Session<FakeTransport, MemoryTokens> {
        Session::new("https://lore.test/api", transport, tokens)
    }

    #[tokio::test]
    async fn test_restore_without_credential_makes_no_request() {
        let transport = FakeTransport::new(|_| ok(Value::Null));
        let session = session_with(transport.clone(), MemoryTokens::new());

        let state = session.restore().await;

        assert_eq!(state, SessionState { user: None, is_authenticated: false, loading: false });
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_restore_with_valid_credential_queries_identity_once() {
        let transport = FakeTransport::new(|request| {
            assert!(request.url.ends_with("/auth/user/"));
            ok(user_json(7))
        });
        let session = session_with(transport.clone(), MemoryTokens::preloaded("t1", "r1"));

        let state = session.restore().await;

        assert!(state.is_authenticated);
        assert!(!state.loading);
        assert_eq!(state.user.as_ref().map(|user| user.id), Some(7));
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].bearer.as_deref(), Some("t1"));
    }

    #[tokio::test]
    async fn test_restore_is_idempotent_for_matching_identity() {
        let transport = FakeTransport::new(|_| ok(user_json(7)));
        let session = session_with(transport.clone(), MemoryTokens::preloaded("t1", "r1"));

        let first = session.restore().await;
        let second = session.restore().await;

        assert_eq!(first, second);
        assert!(!second.loading);
        assert_eq!(transport.count("/auth/user/"), 2);
    }

    #[tokio::test]
    async fn test_restore_failure_resolves_to_logged_out() {
        let transport =
            FakeTransport::new(|_| status(401, json!({ "detail": "token expired" })));
        let tokens = MemoryTokens::preloaded("t1", "r1");
        // The stale token drags the refresh path down with it.
        let session = session_with(transport.clone(), tokens.clone());

        let state = session.restore().await;

        assert_eq!(state, SessionState { user: None, is_authenticated: false, loading: false });
        assert!(tokens.access().is_none());
        assert!(tokens.refresh().is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_triggers_one_refresh_then_retry() {
        let transport = FakeTransport::new(|request| {
            if request.url.contains("/auth/token/refresh/") {
                assert_eq!(request.body.as_ref().unwrap()["refresh"], "r1");
                ok(json!({ "access": "t2" }))
            } else if request.bearer.as_deref() == Some("t1") {
                status(401, Value::Null)
            } else {
                ok(json!([]))
            }
        });
        let tokens = MemoryTokens::preloaded("t1", "r1");
        let session = session_with(transport.clone(), tokens.clone());

        let campaigns = session.list_campaigns().await.unwrap();

        // The caller sees the retried result, never the 401.
        assert!(campaigns.is_empty());
        assert_eq!(transport.count("/auth/token/refresh/"), 1);
        assert_eq!(tokens.access().as_deref(), Some("t2"));
        assert_eq!(tokens.refresh().as_deref(), Some("r1"));
        let last = transport.requests().pop().unwrap();
        assert_eq!(last.bearer.as_deref(), Some("t2"));
    }

    #[tokio::test]
    async fn test_refresh_failure_clears_credentials_and_fires_hook() {
        let transport = FakeTransport::new(|request| {
            if request.url.contains("/auth/token/refresh/") {
                status(401, json!({ "detail": "refresh expired" }))
            } else {
                status(401, Value::Null)
            }
        });
        let tokens = MemoryTokens::preloaded("t1", "r1");
        let session = session_with(transport.clone(), tokens.clone());
        let expired = Rc::new(Cell::new(0u32));
        let observed = expired.clone();
        session.on_session_expired(move || observed.set(observed.get() + 1));

        let result = session.list_campaigns().await;

        assert!(matches!(result, Err(ApiError::SessionExpired)));
        assert!(tokens.access().is_none());
        assert!(tokens.refresh().is_none());
        assert_eq!(expired.get(), 1);
        assert!(!session.state().is_authenticated);
    }

    #[tokio::test]
    async fn test_unauthorized_after_retry_is_not_retried_again() {
        let transport = FakeTransport::new(|request| {
            if request.url.contains("/auth/token/refresh/") {
                ok(json!({ "access": "t2" }))
            } else {
                status(401, Value::Null)
            }
        });
        let session = session_with(transport.clone(), MemoryTokens::preloaded("t1", "r1"));

        let result = session.list_campaigns().await;

        assert!(matches!(result, Err(ApiError::Status { status: 401, .. })));
        assert_eq!(transport.count("/lore/campaigns/"), 2);
        assert_eq!(transport.count("/auth/token/refresh/"), 1);
    }

    #[tokio::test]
    async fn test_missing_refresh_credential_is_irrecoverable() {
        let transport = FakeTransport::new(|_| status(401, Value::Null));
        let tokens = MemoryTokens::new();
        tokens.set_access("t1");
        let session = session_with(transport.clone(), tokens.clone());
        let expired = Rc::new(Cell::new(0u32));
        let observed = expired.clone();
        session.on_session_expired(move || observed.set(observed.get() + 1));

        let result = session.list_campaigns().await;

        assert!(matches!(result, Err(ApiError::SessionExpired)));
        assert_eq!(transport.count("/auth/token/refresh/"), 0);
        assert_eq!(expired.get(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_unauthorized_requests_share_one_refresh() {
        let transport = FakeTransport::new(|request| {
            if request.url.contains("/auth/token/refresh/") {
                ok(json!({ "access": "t2" }))
            } else if request.bearer.as_deref() == Some("t1") {
                status(401, Value::Null)
            } else {
                ok(json!([]))
            }
        });
        let session = session_with(transport.clone(), MemoryTokens::preloaded("t1", "r1"));

        let (first, second) = tokio::join!(session.list_campaigns(), session.list_campaigns());

        assert!(first.is_ok());
        assert!(second.is_ok());
        // Both originals, one shared refresh, both retried.
        assert_eq!(transport.count("/auth/token/refresh/"), 1);
        assert_eq!(transport.count("/lore/campaigns/"), 4);
    }

    #[tokio::test]
    async fn test_login_persists_pair_and_authenticates() {
        let transport = FakeTransport::new(|request| {
            assert!(request.url.ends_with("/auth/google/"));
            assert_eq!(request.body.as_ref().unwrap()["id_token"], "google-credential");
            ok(login_json(3))
        });
        let tokens = MemoryTokens::new();
        let session = session_with(transport, tokens.clone());

        let user = session.login("google-credential").await.unwrap();

        assert_eq!(user.id, 3);
        assert_eq!(tokens.access().as_deref(), Some("fresh-access"));
        assert_eq!(tokens.refresh().as_deref(), Some("fresh-refresh"));
        let state = session.state();
        assert!(state.is_authenticated);
        assert_eq!(state.user, Some(user));
    }

    #[tokio::test]
    async fn test_login_failure_leaves_state_untouched() {
        let transport =
            FakeTransport::new(|_| status(401, json!({ "error": "Invalid token: bad" })));
        let tokens = MemoryTokens::new();
        let session = session_with(transport, tokens.clone());
        let before = session.state();

        let result = session.login("not-a-credential").await;

        match result {
            Err(ApiError::Status { status: 401, detail }) => {
                assert_eq!(detail.as_deref(), Some("Invalid token: bad"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(session.state(), before);
        assert!(tokens.access().is_none());
    }

    #[tokio::test]
    async fn test_login_rejects_empty_credential_without_request() {
        let transport = FakeTransport::new(|_| ok(Value::Null));
        let session = session_with(transport.clone(), MemoryTokens::new());

        let result = session.login("").await;

        assert!(matches!(result, Err(ApiError::MissingCredential)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_logout_is_local_only() {
        let transport = FakeTransport::new(|_| ok(user_json(7)));
        let tokens = MemoryTokens::preloaded("t1", "r1");
        let session = session_with(transport.clone(), tokens.clone());
        session.restore().await;
        let requests_before = transport.requests().len();

        session.logout();

        assert!(tokens.access().is_none());
        assert!(tokens.refresh().is_none());
        assert_eq!(
            session.state(),
            SessionState { user: None, is_authenticated: false, loading: false }
        );
        assert_eq!(transport.requests().len(), requests_before);
    }
}
