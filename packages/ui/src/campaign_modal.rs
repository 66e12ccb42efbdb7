use api::Campaign;
use dioxus::prelude::*;

use crate::campaign_form::CampaignForm;
use crate::modal::ModalOverlay;

/// Campaign dialog state: closed, creating, or editing one campaign.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignModalState {
    open: bool,
    campaign: Option<Campaign>,
}

impl CampaignModalState {
    pub fn open_new(&mut self) {
        *self = Self {
            open: true,
            campaign: None,
        };
    }

    pub fn open_edit(&mut self, campaign: Campaign) {
        *self = Self {
            open: true,
            campaign: Some(campaign),
        };
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn campaign(&self) -> Option<&Campaign> {
        self.campaign.as_ref()
    }
}

/// Access the dialog state provided by the surrounding view.
pub fn use_campaign_modal() -> Signal<CampaignModalState> {
    use_context::<Signal<CampaignModalState>>()
}

#[component]
pub fn CampaignModal(on_saved: EventHandler<()>) -> Element {
    let mut modal = use_campaign_modal();
    let state = modal.read().clone();

    if !state.is_open() {
        return rsx! {};
    }

    // Key the form by target so switching between create and edit never
    // reuses the previous target's field state.
    let form_key = state.campaign().map(|campaign| campaign.id).unwrap_or(0);

    rsx! {
        ModalOverlay {
            on_close: move |_| modal.with_mut(|m| m.close()),
            div {
                class: "wizard-header",
                h2 {
                    if state.campaign().is_some() {
                        "Edit Campaign"
                    } else {
                        "New Campaign"
                    }
                }
            }
            CampaignForm {
                key: "{form_key}",
                campaign: state.campaign().cloned(),
                on_saved: move |_| {
                    modal.with_mut(|m| m.close());
                    on_saved.call(());
                },
                on_cancel: move |_| modal.with_mut(|m| m.close()),
            }
        }
    }
}
