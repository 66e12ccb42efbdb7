//! Single-campaign page: summary plus player management.

use api::Campaign;
use dioxus::prelude::*;
use ui::{use_auth, use_session};

use crate::views::Shell;
use crate::Route;

#[component]
pub fn CampaignDetail(id: i64) -> Element {
    let session = use_session();
    let auth = use_auth();
    let nav = use_navigator();
    let mut campaign = use_signal(|| Option::<Campaign>::None);
    let mut missing = use_signal(|| false);
    let mut reload = use_signal(|| 0u32);
    let mut player_id = use_signal(String::new);

    let fetch_session = session.clone();
    let _ = use_resource(move || {
        let session = fetch_session.clone();
        let ready = auth();
        let _tick = reload();
        async move {
            if !ready.is_authenticated {
                return;
            }
            match session.fetch_campaign(id).await {
                Ok(found) => campaign.set(Some(found)),
                Err(err) => {
                    tracing::error!("failed to load campaign {id}: {err}");
                    missing.set(true);
                }
            }
        }
    });

    let add_session = session.clone();
    let handle_add_player = move |_| {
        let session = add_session.clone();
        async move {
            let Ok(user_id) = player_id().trim().parse::<i64>() else {
                return;
            };
            match session.add_player(id, user_id).await {
                Ok(()) => {
                    player_id.set(String::new());
                    reload.set(reload() + 1);
                }
                Err(err) => tracing::error!("failed to add player: {err}"),
            }
        }
    };

    let remove_session = session.clone();
    // EventHandler so the same callback can feed every player row.
    let handle_remove_player = EventHandler::new(move |user_id: i64| {
        let session = remove_session.clone();
        spawn(async move {
            match session.remove_player(id, user_id).await {
                Ok(()) => reload.set(reload() + 1),
                Err(err) => tracing::error!("failed to remove player: {err}"),
            }
        });
    });

    rsx! {
        Shell {
            button {
                class: "link",
                onclick: move |_| {
                    nav.push(Route::Campaigns {});
                },
                "← Back to Campaigns"
            }

            if missing() {
                div {
                    class: "empty-state",
                    p { class: "form-error", "Campaign not found" }
                }
            }

            {campaign().map(|campaign| {
                let participants = campaign.participant_count();
                let created = campaign.created_at.format("%b %e, %Y").to_string();
                let description = if campaign.description.is_empty() {
                    "No description provided.".to_string()
                } else {
                    campaign.description.clone()
                };
                let owner = campaign.owner.display_name();
                rsx! {
                    div {
                        class: "card",
                        div {
                            class: "card-header",
                            div {
                                h1 { class: "card-title", "{campaign.name}" }
                                p { class: "card-subtitle", "{campaign.game_system}" }
                            }
                            button {
                                class: "primary",
                                onclick: move |_| {
                                    nav.push(Route::CampaignCharacters { id });
                                },
                                "Manage Characters"
                            }
                        }
                        p { class: "card-body", "{description}" }
                        p { class: "card-meta", "{participants} participants · created {created}" }

                        h3 { class: "section-heading", "Players" }
                        ul {
                            class: "player-list",
                            li { class: "player-row", "{owner} (game master)" }
                            for player in campaign.players.clone() {
                                PlayerRow {
                                    key: "{player.id}",
                                    player_id: player.id,
                                    name: player.display_name(),
                                    on_remove: handle_remove_player,
                                }
                            }
                        }
                        div {
                            class: "form-row form-row-end",
                            input {
                                r#type: "number",
                                placeholder: "User id",
                                value: "{player_id}",
                                oninput: move |evt: FormEvent| player_id.set(evt.value()),
                            }
                            button { class: "secondary", onclick: handle_add_player, "Add player" }
                        }
                    }
                }
            })}
        }
    }
}

#[component]
fn PlayerRow(player_id: i64, name: String, on_remove: EventHandler<i64>) -> Element {
    rsx! {
        li {
            class: "player-row",
            span { "{name}" }
            button {
                class: "danger",
                onclick: move |_| on_remove.call(player_id),
                "Remove"
            }
        }
    }
}
