use api::Character;
use dioxus::prelude::*;

/// Card grid of a campaign's characters.
#[component]
pub fn CharacterList(
    characters: Vec<Character>,
    on_edit: EventHandler<Character>,
    on_delete: EventHandler<i64>,
) -> Element {
    if characters.is_empty() {
        return rsx! {
            div {
                class: "empty-state",
                h2 { "No characters yet" }
                p { "Roll up the party's first character." }
            }
        };
    }

    rsx! {
        div {
            class: "card-grid",
            for character in characters {
                CharacterCard {
                    key: "{character.id}",
                    character: character.clone(),
                    on_edit,
                    on_delete,
                }
            }
        }
    }
}

#[component]
fn CharacterCard(
    character: Character,
    on_edit: EventHandler<Character>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = character.id;
    let identity = format!(
        "Level {} {} {}",
        character.sheet.level, character.race, character.character_class
    );
    let alignment = character.alignment.label();
    let vitals = format!(
        "HP {}/{} · AC {}",
        character.sheet.hit_points.current,
        character.sheet.hit_points.max,
        character.sheet.armor_class
    );
    let character_for_edit = character.clone();

    rsx! {
        div {
            class: "card",
            div {
                class: "card-header",
                h3 { class: "card-title", "{character.name}" }
                span { class: "badge", "{alignment}" }
            }
            p { class: "card-subtitle", "{identity}" }
            p { class: "card-meta", "{vitals}" }
            if !character.bio.is_empty() {
                p { class: "card-body", "{character.bio}" }
            }
            div {
                class: "card-actions",
                button {
                    class: "secondary",
                    onclick: move |_| on_edit.call(character_for_edit.clone()),
                    "Edit"
                }
                button { class: "danger", onclick: move |_| on_delete.call(id), "Delete" }
            }
        }
    }
}
