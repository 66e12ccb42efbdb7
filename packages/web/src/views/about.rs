//! About page.

use dioxus::prelude::*;

use crate::views::Shell;

#[component]
pub fn About() -> Element {
    rsx! {
        Shell {
            h1 { "About Lorekeeper" }
            div {
                class: "card",
                p {
                    "Lorekeeper keeps your tabletop campaigns, parties and "
                    "character sheets in one place, so session zero to the "
                    "final boss stays organized."
                }
                p {
                    class: "muted",
                    "Sign in with Google, create a campaign, and start rolling "
                    "up characters."
                }
            }
        }
    }
}
