use api::Campaign;
use dioxus::prelude::*;

/// Card grid of campaigns with view/edit/delete actions.
#[component]
pub fn CampaignList(
    campaigns: Vec<Campaign>,
    on_open: EventHandler<i64>,
    on_edit: EventHandler<Campaign>,
    on_delete: EventHandler<i64>,
) -> Element {
    if campaigns.is_empty() {
        return rsx! {
            div {
                class: "empty-state",
                h2 { "No campaigns yet" }
                p { "Create your first campaign to get started." }
            }
        };
    }

    rsx! {
        div {
            class: "card-grid",
            for campaign in campaigns {
                CampaignCard {
                    key: "{campaign.id}",
                    campaign: campaign.clone(),
                    on_open,
                    on_edit,
                    on_delete,
                }
            }
        }
    }
}

#[component]
fn CampaignCard(
    campaign: Campaign,
    on_open: EventHandler<i64>,
    on_edit: EventHandler<Campaign>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = campaign.id;
    let participants = campaign.participant_count();
    let created = campaign.created_at.format("%b %e, %Y").to_string();
    let description = if campaign.description.is_empty() {
        "No description provided.".to_string()
    } else {
        campaign.description.clone()
    };
    let campaign_for_edit = campaign.clone();

    rsx! {
        div {
            class: "card",
            div {
                class: "card-header",
                h3 { class: "card-title", "{campaign.name}" }
                span {
                    class: if campaign.is_active { "badge badge-active" } else { "badge" },
                    if campaign.is_active {
                        "Active"
                    } else {
                        "Archived"
                    }
                }
            }
            p { class: "card-subtitle", "{campaign.game_system}" }
            p { class: "card-body", "{description}" }
            p { class: "card-meta", "{participants} participants · created {created}" }
            div {
                class: "card-actions",
                button { class: "primary", onclick: move |_| on_open.call(id), "View" }
                button {
                    class: "secondary",
                    onclick: move |_| on_edit.call(campaign_for_edit.clone()),
                    "Edit"
                }
                button { class: "danger", onclick: move |_| on_delete.call(id), "Delete" }
            }
        }
    }
}
