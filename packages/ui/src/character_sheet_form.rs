use api::{ability_modifier, format_modifier, Abilities};
use dioxus::prelude::*;

use crate::auth::use_session;
use crate::wizard::use_character_wizard;

/// Ability tags with their typed accessors, in sheet order.
const ABILITIES: [(&str, fn(&Abilities) -> i32, fn(&mut Abilities, i32)); 6] = [
    ("STR", |a| a.strength, |a, v| a.strength = v),
    ("DEX", |a| a.dexterity, |a, v| a.dexterity = v),
    ("CON", |a| a.constitution, |a, v| a.constitution = v),
    ("INT", |a| a.intelligence, |a, v| a.intelligence = v),
    ("WIS", |a| a.wisdom, |a, v| a.wisdom = v),
    ("CHA", |a| a.charisma, |a, v| a.charisma = v),
];

/// Step two of the wizard: abilities, combat stats, equipment and
/// features. Owns submission; the wizard only supplies the draft and the
/// create-vs-edit target.
#[component]
pub fn CharacterSheetForm(on_saved: EventHandler<()>) -> Element {
    let session = use_session();
    let mut wizard = use_character_wizard();
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let draft = wizard.read().draft().clone();
    let editing = wizard.read().editing().is_some();
    let identity = format!("{} {}", draft.race, draft.character_class);
    let ability_rows = ABILITIES.map(|(tag, read, write)| {
        let score = read(&draft.sheet.abilities);
        (tag, score, format_modifier(ability_modifier(score)), write)
    });

    let submit_session = session.clone();
    let handle_submit = move |_| {
        let session = submit_session.clone();
        async move {
            let (campaign_id, editing, draft) = {
                let current = wizard.read();
                let Some(campaign_id) = current.campaign_id() else {
                    return;
                };
                (campaign_id, current.editing(), current.draft().clone())
            };

            saving.set(true);
            error.set(None);
            let outcome = match editing {
                Some(character_id) => session
                    .update_character(campaign_id, character_id, &draft)
                    .await
                    .map(|_| ()),
                None => session
                    .create_character(campaign_id, &draft)
                    .await
                    .map(|_| ()),
            };
            saving.set(false);

            match outcome {
                Ok(()) => {
                    wizard.with_mut(|w| w.close());
                    on_saved.call(());
                }
                Err(err) => {
                    tracing::error!("failed to save character: {err}");
                    error.set(Some(err.user_message()));
                }
            }
        }
    };

    rsx! {
        div {
            class: "wizard-form",

            div {
                class: "sheet-summary",
                div {
                    h3 { class: "sheet-name", "{draft.name}" }
                    p { class: "sheet-identity", "{identity}" }
                }
                div {
                    class: "form-field form-field-narrow",
                    label { r#for: "sheet-level", "Level" }
                    input {
                        id: "sheet-level",
                        r#type: "number",
                        min: "1",
                        max: "20",
                        value: "{draft.sheet.level}",
                        oninput: move |evt: FormEvent| {
                            let level = evt.value().parse::<u8>().unwrap_or(1).clamp(1, 20);
                            wizard.with_mut(|w| w.update(|draft| draft.sheet.level = level));
                        },
                    }
                }
            }

            h4 { class: "section-heading", "Ability Scores" }
            div {
                class: "ability-grid",
                for (tag, score, modifier, write) in ability_rows {
                    div {
                        key: "{tag}",
                        class: "ability-box",
                        label { class: "ability-tag", "{tag}" }
                        input {
                            r#type: "number",
                            min: "1",
                            max: "30",
                            value: "{score}",
                            oninput: move |evt: FormEvent| {
                                let score = evt.value().parse::<i32>().unwrap_or(10);
                                wizard.with_mut(|w| {
                                    w.update(|draft| write(&mut draft.sheet.abilities, score))
                                });
                            },
                        }
                        span { class: "ability-modifier", "{modifier}" }
                    }
                }
            }

            h4 { class: "section-heading", "Combat" }
            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { r#for: "sheet-hp-max", "Max HP" }
                    input {
                        id: "sheet-hp-max",
                        r#type: "number",
                        value: "{draft.sheet.hit_points.max}",
                        oninput: move |evt: FormEvent| {
                            let max = evt.value().parse::<i32>().unwrap_or(0);
                            wizard.with_mut(|w| w.update(|draft| draft.sheet.hit_points.max = max));
                        },
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "sheet-hp-current", "Current HP" }
                    input {
                        id: "sheet-hp-current",
                        r#type: "number",
                        value: "{draft.sheet.hit_points.current}",
                        oninput: move |evt: FormEvent| {
                            let current = evt.value().parse::<i32>().unwrap_or(0);
                            wizard.with_mut(|w| {
                                w.update(|draft| draft.sheet.hit_points.current = current)
                            });
                        },
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "sheet-armor-class", "Armor Class" }
                    input {
                        id: "sheet-armor-class",
                        r#type: "number",
                        value: "{draft.sheet.armor_class}",
                        oninput: move |evt: FormEvent| {
                            let armor_class = evt.value().parse::<i32>().unwrap_or(10);
                            wizard.with_mut(|w| {
                                w.update(|draft| draft.sheet.armor_class = armor_class)
                            });
                        },
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "sheet-initiative", "Initiative" }
                    input {
                        id: "sheet-initiative",
                        r#type: "number",
                        value: "{draft.sheet.initiative}",
                        oninput: move |evt: FormEvent| {
                            let initiative = evt.value().parse::<i32>().unwrap_or(0);
                            wizard.with_mut(|w| {
                                w.update(|draft| draft.sheet.initiative = initiative)
                            });
                        },
                    }
                }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { r#for: "sheet-equipment", "Equipment" }
                    textarea {
                        id: "sheet-equipment",
                        rows: "3",
                        placeholder: "Weapons, armor, and items...",
                        value: "{draft.sheet.equipment}",
                        oninput: move |evt: FormEvent| {
                            wizard.with_mut(|w| w.update(|draft| draft.sheet.equipment = evt.value()));
                        },
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "sheet-features", "Features & Traits" }
                    textarea {
                        id: "sheet-features",
                        rows: "3",
                        placeholder: "Class features, racial traits, etc...",
                        value: "{draft.sheet.features}",
                        oninput: move |evt: FormEvent| {
                            wizard.with_mut(|w| w.update(|draft| draft.sheet.features = evt.value()));
                        },
                    }
                }
            }

            {error().map(|message| rsx! {
                p { class: "form-error", "{message}" }
            })}

            div {
                class: "form-actions form-actions-between",
                button {
                    class: "secondary",
                    onclick: move |_| wizard.with_mut(|w| w.retreat()),
                    "Back to Basics"
                }
                button {
                    class: "primary",
                    disabled: saving(),
                    onclick: handle_submit,
                    if saving() {
                        "Saving..."
                    } else if editing {
                        "Update Character"
                    } else {
                        "Create Character"
                    }
                }
            }
        }
    }
}
