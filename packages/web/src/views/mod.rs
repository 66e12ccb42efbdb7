//! Route views.

mod about;
mod campaign_characters;
mod campaign_detail;
mod campaigns;
mod dashboard;
mod login;

pub use about::About;
pub use campaign_characters::CampaignCharacters;
pub use campaign_detail::CampaignDetail;
pub use campaigns::Campaigns;
pub use dashboard::Dashboard;
pub use login::Login;

use dioxus::prelude::*;
use ui::{Navbar, use_auth};

use crate::Route;

/// Wraps authenticated pages: a splash while the startup check runs,
/// a bounce to the login page for logged-out visitors, and the shared
/// navbar chrome for everyone else.
#[component]
pub(crate) fn Shell(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth();
    if state.loading {
        return rsx! {
            div { class: "splash", "Loading..." }
        };
    }
    if !state.is_authenticated {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Navbar {
            Link { to: Route::Dashboard {}, "Dashboard" }
            Link { to: Route::Campaigns {}, "Campaigns" }
            Link { to: Route::About {}, "About" }
        }
        div {
            class: "page",
            {children}
        }
    }
}
