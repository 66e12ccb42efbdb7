//! # API crate — REST client core for Lorekeeper
//!
//! Everything the UI needs to talk to the backend lives here: the HTTP
//! transport, credential persistence, the authenticated-session lifecycle
//! (restore / login / logout plus transparent token refresh), the typed
//! domain models, and the campaign/character endpoint surface.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`http`] | Request/response primitives, the [`Transport`](http::Transport) seam, and the reqwest-backed [`HttpClient`] |
//! | [`tokens`] | The access/refresh credential store (localStorage in the browser, in-memory elsewhere) |
//! | [`session`] | [`Session`]: auth state, login/logout, startup restore, and the refresh-on-401 request path |
//! | [`models`] | `UserInfo`, `Campaign`, `Character`, the character sheet, and the race/class/alignment vocabularies |
//! | [`campaigns`] | Campaign CRUD and player management endpoints |
//! | [`characters`] | Character CRUD endpoints, nested under a campaign |
//!
//! The crate has no Dioxus dependency and compiles for both wasm32 and
//! native targets, so the session and model logic is tested natively.

pub mod campaigns;
pub mod characters;
mod config;
mod error;
pub mod http;
pub mod models;
mod session;
pub mod tokens;

pub use config::{api_base_url, google_client_id};
pub use error::ApiError;
pub use http::HttpClient;
pub use models::{
    ability_modifier, format_modifier, Abilities, Alignment, Campaign, CampaignInput, Character,
    CharacterInput, CharacterSheet, Class, HitPoints, Race, UserInfo,
};
pub use session::{make_session, AppSession, Session, SessionState};
pub use tokens::{MemoryTokens, TokenStore};

#[cfg(target_arch = "wasm32")]
pub use tokens::BrowserTokens;
