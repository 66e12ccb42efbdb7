use dioxus::prelude::*;

use crate::character_basic_form::CharacterBasicForm;
use crate::character_sheet_form::CharacterSheetForm;
use crate::modal::ModalOverlay;
use crate::wizard::{use_character_wizard, WizardStep};

/// The two-step wizard dialog. Renders nothing while the wizard is
/// closed; closing from either step discards the draft.
#[component]
pub fn CharacterModal(on_saved: EventHandler<()>) -> Element {
    let mut wizard = use_character_wizard();
    let state = wizard.read().clone();

    if !state.is_open() {
        return rsx! {};
    }

    let title = state.title();

    rsx! {
        ModalOverlay {
            on_close: move |_| wizard.with_mut(|w| w.close()),
            div {
                class: "wizard-header",
                h2 { "{title}" }
                p { class: "wizard-description", {state.description()} }
            }
            {match state.step() {
                WizardStep::Basic => rsx! {
                    CharacterBasicForm {}
                },
                WizardStep::Sheet => rsx! {
                    CharacterSheetForm { on_saved }
                },
            }}
        }
    }
}
