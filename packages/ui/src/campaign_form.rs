use api::{Campaign, CampaignInput};
use dioxus::prelude::*;

use crate::auth::use_session;

/// Single-step create/edit form for a campaign.
#[component]
pub fn CampaignForm(
    campaign: Option<Campaign>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let session = use_session();
    let editing = campaign.as_ref().map(|campaign| campaign.id);
    let initial = campaign
        .as_ref()
        .map(CampaignInput::from)
        .unwrap_or_default();
    let mut form = use_signal(move || initial);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let submit_session = session.clone();
    let handle_submit = move |_| {
        let session = submit_session.clone();
        async move {
            let input = form();
            if input.name.trim().is_empty() {
                return;
            }

            saving.set(true);
            error.set(None);
            let outcome = match editing {
                Some(id) => session.update_campaign(id, &input).await.map(|_| ()),
                None => session.create_campaign(&input).await.map(|_| ()),
            };
            saving.set(false);

            match outcome {
                Ok(()) => on_saved.call(()),
                Err(err) => {
                    tracing::error!("failed to save campaign: {err}");
                    error.set(Some(err.user_message()));
                }
            }
        }
    };

    let current = form();

    rsx! {
        div {
            class: "wizard-form",

            div {
                class: "form-field",
                label { r#for: "campaign-name", "Name *" }
                input {
                    id: "campaign-name",
                    r#type: "text",
                    placeholder: "The Sunken Citadel",
                    value: "{current.name}",
                    oninput: move |evt: FormEvent| form.with_mut(|f| f.name = evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "campaign-system", "Game System" }
                input {
                    id: "campaign-system",
                    r#type: "text",
                    value: "{current.game_system}",
                    oninput: move |evt: FormEvent| form.with_mut(|f| f.game_system = evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "campaign-description", "Description" }
                textarea {
                    id: "campaign-description",
                    rows: "4",
                    placeholder: "What is this campaign about?",
                    value: "{current.description}",
                    oninput: move |evt: FormEvent| form.with_mut(|f| f.description = evt.value()),
                }
            }

            div {
                class: "form-field form-field-inline",
                input {
                    id: "campaign-active",
                    r#type: "checkbox",
                    checked: current.is_active,
                    onchange: move |evt: FormEvent| {
                        let active = evt.value() == "true";
                        form.with_mut(|f| f.is_active = active);
                    },
                }
                label { r#for: "campaign-active", "Active campaign" }
            }

            {error().map(|message| rsx! {
                p { class: "form-error", "{message}" }
            })}

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    disabled: saving() || current.name.trim().is_empty(),
                    onclick: handle_submit,
                    if saving() {
                        "Saving..."
                    } else if editing.is_some() {
                        "Update Campaign"
                    } else {
                        "Create Campaign"
                    }
                }
                button {
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
