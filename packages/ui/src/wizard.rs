//! The two-step character wizard.
//!
//! The machine is a plain value held in a [`Signal`]; the modal and step
//! forms read and mutate it through [`use_character_wizard`]. Submission
//! is not part of the machine: the sheet form issues the create or update
//! call based on [`CharacterWizard::editing`].

use api::{Character, CharacterInput};
use dioxus::prelude::*;

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Basic,
    Sheet,
}

/// State of the character wizard.
///
/// One live draft at a time: opening the wizard for a different target
/// replaces the draft wholesale, so sheet values never leak from one
/// character into another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterWizard {
    open: bool,
    step: WizardStep,
    campaign_id: Option<i64>,
    editing: Option<i64>,
    draft: CharacterInput,
}

impl CharacterWizard {
    /// Open with a fresh default draft for a new character in the given
    /// campaign.
    pub fn open_for_create(&mut self, campaign_id: i64) {
        *self = Self {
            open: true,
            step: WizardStep::Basic,
            campaign_id: Some(campaign_id),
            editing: None,
            draft: CharacterInput::default(),
        };
    }

    /// Open with the existing character's fields copied into the draft.
    pub fn open_for_edit(&mut self, campaign_id: i64, character: &Character) {
        *self = Self {
            open: true,
            step: WizardStep::Basic,
            campaign_id: Some(campaign_id),
            editing: Some(character.id),
            draft: CharacterInput::from(character),
        };
    }

    /// Basic → Sheet. A no-op from any other step.
    pub fn advance(&mut self) {
        if self.step == WizardStep::Basic {
            self.step = WizardStep::Sheet;
        }
    }

    /// Sheet → Basic, keeping everything already entered.
    pub fn retreat(&mut self) {
        if self.step == WizardStep::Sheet {
            self.step = WizardStep::Basic;
        }
    }

    /// Apply an edit to the draft. Mutating individual fields replaces
    /// the nested-merge dance: touching one ability score cannot clobber
    /// the other five.
    pub fn update(&mut self, edit: impl FnOnce(&mut CharacterInput)) {
        edit(&mut self.draft);
    }

    /// Discard the draft and close, whatever the step. No confirmation,
    /// no autosave.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn campaign_id(&self) -> Option<i64> {
        self.campaign_id
    }

    /// Id of the character being edited; `None` while creating.
    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    pub fn draft(&self) -> &CharacterInput {
        &self.draft
    }

    /// Name, race, class and alignment must be present before the basic
    /// step may advance; the selects always hold a value, so in practice
    /// this gates on the name.
    pub fn basic_step_complete(&self) -> bool {
        !self.draft.name.trim().is_empty()
    }

    /// Modal heading for the current step and target.
    pub fn title(&self) -> String {
        match (self.editing.is_some(), self.step) {
            (true, WizardStep::Basic) => "Edit Character".to_string(),
            (true, WizardStep::Sheet) => format!("Edit {}'s Sheet", self.draft.name),
            (false, WizardStep::Basic) => "Create New Character".to_string(),
            (false, WizardStep::Sheet) => "Complete Character Sheet".to_string(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self.step {
            WizardStep::Basic if self.editing.is_some() => "Update your character details",
            WizardStep::Basic => "Enter your character details",
            WizardStep::Sheet => "Fill out your character abilities and stats",
        }
    }
}

/// Access the wizard provided by the surrounding view.
pub fn use_character_wizard() -> Signal<CharacterWizard> {
    use_context::<Signal<CharacterWizard>>()
}

#[cfg(test)]
mod tests {
    use api::{Class, Race};

    use super::*;

    fn sample_character() -> Character {
        serde_json::from_value(serde_json::json!({
            "id": 42,
            "name": "Mirelle",
            "character_class": "wizard",
            "race": "elf",
            "age": 120,
            "alignment": "ng",
            "bio": "Scholar of the old tongue",
            "character_data": {
                "abilities": { "STR": 8, "INT": 18 },
                "hitPoints": { "max": 14, "current": 12 },
                "armorClass": 12,
                "equipment": "Staff, spellbook"
            },
            "created_at": "2025-03-01T10:00:00Z",
            "updated_at": "2025-03-02T09:30:00Z",
        }))
        .unwrap()
    }

    #[test]
    fn test_step_ordering_and_noop_transitions() {
        let mut wizard = CharacterWizard::default();
        wizard.open_for_create(1);
        assert_eq!(wizard.step(), WizardStep::Basic);

        wizard.retreat();
        assert_eq!(wizard.step(), WizardStep::Basic);

        wizard.advance();
        assert_eq!(wizard.step(), WizardStep::Sheet);

        wizard.advance();
        assert_eq!(wizard.step(), WizardStep::Sheet);

        wizard.retreat();
        assert_eq!(wizard.step(), WizardStep::Basic);
    }

    #[test]
    fn test_round_trip_preserves_entered_fields() {
        let mut wizard = CharacterWizard::default();
        wizard.open_for_create(1);
        wizard.update(|draft| {
            draft.name = "Borin".to_string();
            draft.race = Race::Dwarf;
        });
        wizard.advance();
        wizard.update(|draft| {
            draft.sheet.abilities.strength = 16;
            draft.sheet.hit_points.max = 24;
        });
        wizard.retreat();
        wizard.advance();

        let draft = wizard.draft();
        assert_eq!(draft.name, "Borin");
        assert_eq!(draft.race, Race::Dwarf);
        assert_eq!(draft.sheet.abilities.strength, 16);
        assert_eq!(draft.sheet.hit_points.max, 24);
        // Untouched scores keep their defaults.
        assert_eq!(draft.sheet.abilities.dexterity, 10);
    }

    #[test]
    fn test_updating_one_ability_leaves_the_others_alone() {
        let mut wizard = CharacterWizard::default();
        wizard.open_for_create(1);
        wizard.update(|draft| draft.sheet.abilities.charisma = 17);
        wizard.update(|draft| draft.sheet.abilities.strength = 6);

        let abilities = &wizard.draft().sheet.abilities;
        assert_eq!(abilities.charisma, 17);
        assert_eq!(abilities.strength, 6);
        assert_eq!(abilities.constitution, 10);
        assert_eq!(abilities.intelligence, 10);
    }

    #[test]
    fn test_open_for_edit_copies_existing_character() {
        let character = sample_character();
        let mut wizard = CharacterWizard::default();
        wizard.open_for_edit(7, &character);

        assert!(wizard.is_open());
        assert_eq!(wizard.editing(), Some(42));
        assert_eq!(wizard.campaign_id(), Some(7));
        assert_eq!(wizard.step(), WizardStep::Basic);

        let draft = wizard.draft();
        assert_eq!(draft.name, "Mirelle");
        assert_eq!(draft.character_class, Class::Wizard);
        assert_eq!(draft.age, Some(120));
        assert_eq!(draft.sheet.abilities.intelligence, 18);
        assert_eq!(draft.sheet.hit_points.current, 12);
        // Scores the record never set come back as sheet defaults.
        assert_eq!(draft.sheet.abilities.wisdom, 10);
    }

    #[test]
    fn test_create_after_edit_does_not_leak_sheet_values() {
        let character = sample_character();
        let mut wizard = CharacterWizard::default();
        wizard.open_for_edit(7, &character);
        wizard.open_for_create(7);

        assert_eq!(wizard.editing(), None);
        assert_eq!(wizard.draft(), &CharacterInput::default());
    }

    #[test]
    fn test_close_discards_draft() {
        let mut wizard = CharacterWizard::default();
        wizard.open_for_create(3);
        wizard.update(|draft| draft.name = "Doomed".to_string());
        wizard.advance();

        wizard.close();

        assert!(!wizard.is_open());
        assert_eq!(wizard, CharacterWizard::default());
    }

    #[test]
    fn test_basic_step_gate_requires_name() {
        let mut wizard = CharacterWizard::default();
        wizard.open_for_create(1);
        assert!(!wizard.basic_step_complete());

        wizard.update(|draft| draft.name = "   ".to_string());
        assert!(!wizard.basic_step_complete());

        wizard.update(|draft| draft.name = "Borin".to_string());
        assert!(wizard.basic_step_complete());
    }
}
