use api::{Alignment, Class, Race};
use dioxus::prelude::*;

use crate::wizard::use_character_wizard;

/// Step one of the wizard: identity fields.
#[component]
pub fn CharacterBasicForm() -> Element {
    let mut wizard = use_character_wizard();
    let draft = wizard.read().draft().clone();
    let can_advance = wizard.read().basic_step_complete();
    let race_options = Race::ALL.map(|race| (race.value(), race.label()));
    let class_options = Class::ALL.map(|class| (class.value(), class.label()));
    let alignment_options = Alignment::ALL.map(|alignment| (alignment.value(), alignment.label()));

    rsx! {
        div {
            class: "wizard-form",

            div {
                class: "form-field",
                label { r#for: "character-name", "Character Name *" }
                input {
                    id: "character-name",
                    r#type: "text",
                    placeholder: "Enter character name",
                    value: "{draft.name}",
                    oninput: move |evt: FormEvent| {
                        wizard.with_mut(|w| w.update(|draft| draft.name = evt.value()));
                    },
                }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { r#for: "character-race", "Race *" }
                    select {
                        id: "character-race",
                        value: draft.race.value(),
                        onchange: move |evt| {
                            if let Some(race) = Race::from_value(&evt.value()) {
                                wizard.with_mut(|w| w.update(|draft| draft.race = race));
                            }
                        },
                        for (value, label) in race_options {
                            option { key: "{value}", value: value, "{label}" }
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "character-class", "Class *" }
                    select {
                        id: "character-class",
                        value: draft.character_class.value(),
                        onchange: move |evt| {
                            if let Some(class) = Class::from_value(&evt.value()) {
                                wizard.with_mut(|w| w.update(|draft| draft.character_class = class));
                            }
                        },
                        for (value, label) in class_options {
                            option { key: "{value}", value: value, "{label}" }
                        }
                    }
                }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { r#for: "character-age", "Age" }
                    input {
                        id: "character-age",
                        r#type: "number",
                        min: "0",
                        placeholder: "Enter age",
                        value: draft.age.map(|age| age.to_string()).unwrap_or_default(),
                        oninput: move |evt: FormEvent| {
                            let age = evt.value().parse::<u32>().ok();
                            wizard.with_mut(|w| w.update(|draft| draft.age = age));
                        },
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "character-alignment", "Alignment *" }
                    select {
                        id: "character-alignment",
                        value: draft.alignment.value(),
                        onchange: move |evt| {
                            if let Some(alignment) = Alignment::from_value(&evt.value()) {
                                wizard.with_mut(|w| w.update(|draft| draft.alignment = alignment));
                            }
                        },
                        for (value, label) in alignment_options {
                            option { key: "{value}", value: value, "{label}" }
                        }
                    }
                }
            }

            div {
                class: "form-field",
                label { r#for: "character-bio", "Background/Bio" }
                textarea {
                    id: "character-bio",
                    rows: "4",
                    placeholder: "Character background and personality",
                    value: "{draft.bio}",
                    oninput: move |evt: FormEvent| {
                        wizard.with_mut(|w| w.update(|draft| draft.bio = evt.value()));
                    },
                }
            }

            div {
                class: "form-actions form-actions-end",
                button {
                    class: "primary",
                    disabled: !can_advance,
                    onclick: move |_| wizard.with_mut(|w| w.advance()),
                    "Next: Character Sheet"
                }
            }
        }
    }
}
