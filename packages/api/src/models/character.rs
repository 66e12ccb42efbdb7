//! Character records, the nested sheet payload, and the closed
//! race/class/alignment vocabularies with their backend wire codes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::character_sheet::CharacterSheet;

/// A character as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub character_class: Class,
    pub race: Race,
    #[serde(default)]
    pub age: Option<u32>,
    pub alignment: Alignment,
    #[serde(default)]
    pub bio: String,
    #[serde(rename = "character_data", default)]
    pub sheet: CharacterSheet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload. Doubles as the wizard's working draft.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CharacterInput {
    pub name: String,
    pub character_class: Class,
    pub race: Race,
    pub age: Option<u32>,
    pub alignment: Alignment,
    pub bio: String,
    #[serde(rename = "character_data")]
    pub sheet: CharacterSheet,
}

impl From<&Character> for CharacterInput {
    fn from(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            character_class: character.character_class,
            race: character.race,
            age: character.age,
            alignment: character.alignment,
            bio: character.bio.clone(),
            sheet: character.sheet.clone(),
        }
    }
}

/// D&D ability modifier: `floor((score - 10) / 2)`. Display-only; the
/// backend never stores it.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Render a modifier with its sign (`+2`, `-1`).
pub fn format_modifier(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{modifier}")
    } else {
        modifier.to_string()
    }
}

/// Playable races, carrying the backend's wire codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    Dragonborn,
    Dwarf,
    Elf,
    Gnome,
    HalfElf,
    HalfOrc,
    Halfling,
    #[default]
    Human,
    Tiefling,
    Orc,
    Leonin,
    Satyr,
    Aasimar,
    Fairy,
    Harengon,
    Tabaxi,
    Tortle,
    Genasi,
    Goliath,
    Other,
}

impl Race {
    pub const ALL: [Race; 20] = [
        Race::Dragonborn,
        Race::Dwarf,
        Race::Elf,
        Race::Gnome,
        Race::HalfElf,
        Race::HalfOrc,
        Race::Halfling,
        Race::Human,
        Race::Tiefling,
        Race::Orc,
        Race::Leonin,
        Race::Satyr,
        Race::Aasimar,
        Race::Fairy,
        Race::Harengon,
        Race::Tabaxi,
        Race::Tortle,
        Race::Genasi,
        Race::Goliath,
        Race::Other,
    ];

    /// Wire value sent to the backend.
    pub fn value(self) -> &'static str {
        match self {
            Race::Dragonborn => "dragonborn",
            Race::Dwarf => "dwarf",
            Race::Elf => "elf",
            Race::Gnome => "gnome",
            Race::HalfElf => "half_elf",
            Race::HalfOrc => "half_orc",
            Race::Halfling => "halfling",
            Race::Human => "human",
            Race::Tiefling => "tiefling",
            Race::Orc => "orc",
            Race::Leonin => "leonin",
            Race::Satyr => "satyr",
            Race::Aasimar => "aasimar",
            Race::Fairy => "fairy",
            Race::Harengon => "harengon",
            Race::Tabaxi => "tabaxi",
            Race::Tortle => "tortle",
            Race::Genasi => "genasi",
            Race::Goliath => "goliath",
            Race::Other => "other",
        }
    }

    /// Label shown in select options.
    pub fn label(self) -> &'static str {
        match self {
            Race::Dragonborn => "Dragonborn",
            Race::Dwarf => "Dwarf",
            Race::Elf => "Elf",
            Race::Gnome => "Gnome",
            Race::HalfElf => "Half-Elf",
            Race::HalfOrc => "Half-Orc",
            Race::Halfling => "Halfling",
            Race::Human => "Human",
            Race::Tiefling => "Tiefling",
            Race::Orc => "Orc",
            Race::Leonin => "Leonin",
            Race::Satyr => "Satyr",
            Race::Aasimar => "Aasimar",
            Race::Fairy => "Fairy",
            Race::Harengon => "Harengon",
            Race::Tabaxi => "Tabaxi",
            Race::Tortle => "Tortle",
            Race::Genasi => "Genasi",
            Race::Goliath => "Goliath",
            Race::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Race> {
        Race::ALL.into_iter().find(|race| race.value() == value)
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Character classes, carrying the backend's wire codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Class {
    Barbarian,
    Bard,
    Cleric,
    Druid,
    #[default]
    Fighter,
    Monk,
    Paladin,
    Ranger,
    Rogue,
    Sorcerer,
    Warlock,
    Wizard,
    Artificer,
    BloodHunter,
}

impl Class {
    pub const ALL: [Class; 14] = [
        Class::Barbarian,
        Class::Bard,
        Class::Cleric,
        Class::Druid,
        Class::Fighter,
        Class::Monk,
        Class::Paladin,
        Class::Ranger,
        Class::Rogue,
        Class::Sorcerer,
        Class::Warlock,
        Class::Wizard,
        Class::Artificer,
        Class::BloodHunter,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Class::Barbarian => "barbarian",
            Class::Bard => "bard",
            Class::Cleric => "cleric",
            Class::Druid => "druid",
            Class::Fighter => "fighter",
            Class::Monk => "monk",
            Class::Paladin => "paladin",
            Class::Ranger => "ranger",
            Class::Rogue => "rogue",
            Class::Sorcerer => "sorcerer",
            Class::Warlock => "warlock",
            Class::Wizard => "wizard",
            Class::Artificer => "artificer",
            Class::BloodHunter => "blood_hunter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Class::Barbarian => "Barbarian",
            Class::Bard => "Bard",
            Class::Cleric => "Cleric",
            Class::Druid => "Druid",
            Class::Fighter => "Fighter",
            Class::Monk => "Monk",
            Class::Paladin => "Paladin",
            Class::Ranger => "Ranger",
            Class::Rogue => "Rogue",
            Class::Sorcerer => "Sorcerer",
            Class::Warlock => "Warlock",
            Class::Wizard => "Wizard",
            Class::Artificer => "Artificer",
            Class::BloodHunter => "Blood Hunter",
        }
    }

    pub fn from_value(value: &str) -> Option<Class> {
        Class::ALL.into_iter().find(|class| class.value() == value)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The nine alignments. The backend stores two-letter codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    #[serde(rename = "lg")]
    LawfulGood,
    #[serde(rename = "ng")]
    NeutralGood,
    #[serde(rename = "cg")]
    ChaoticGood,
    #[serde(rename = "ln")]
    LawfulNeutral,
    #[default]
    #[serde(rename = "nn")]
    TrueNeutral,
    #[serde(rename = "cn")]
    ChaoticNeutral,
    #[serde(rename = "le")]
    LawfulEvil,
    #[serde(rename = "ne")]
    NeutralEvil,
    #[serde(rename = "ce")]
    ChaoticEvil,
}

impl Alignment {
    pub const ALL: [Alignment; 9] = [
        Alignment::LawfulGood,
        Alignment::NeutralGood,
        Alignment::ChaoticGood,
        Alignment::LawfulNeutral,
        Alignment::TrueNeutral,
        Alignment::ChaoticNeutral,
        Alignment::LawfulEvil,
        Alignment::NeutralEvil,
        Alignment::ChaoticEvil,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Alignment::LawfulGood => "lg",
            Alignment::NeutralGood => "ng",
            Alignment::ChaoticGood => "cg",
            Alignment::LawfulNeutral => "ln",
            Alignment::TrueNeutral => "nn",
            Alignment::ChaoticNeutral => "cn",
            Alignment::LawfulEvil => "le",
            Alignment::NeutralEvil => "ne",
            Alignment::ChaoticEvil => "ce",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Alignment::LawfulGood => "Lawful Good",
            Alignment::NeutralGood => "Neutral Good",
            Alignment::ChaoticGood => "Chaotic Good",
            Alignment::LawfulNeutral => "Lawful Neutral",
            Alignment::TrueNeutral => "True Neutral",
            Alignment::ChaoticNeutral => "Chaotic Neutral",
            Alignment::LawfulEvil => "Lawful Evil",
            Alignment::NeutralEvil => "Neutral Evil",
            Alignment::ChaoticEvil => "Chaotic Evil",
        }
    }

    pub fn from_value(value: &str) -> Option<Alignment> {
        Alignment::ALL
            .into_iter()
            .find(|alignment| alignment.value() == value)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_modifier_table() {
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(20), 5);
        assert_eq!(ability_modifier(1), -5);
        assert_eq!(ability_modifier(30), 10);
    }

    #[test]
    fn test_format_modifier_signs() {
        assert_eq!(format_modifier(0), "+0");
        assert_eq!(format_modifier(3), "+3");
        assert_eq!(format_modifier(-2), "-2");
    }

    #[test]
    fn test_wire_codes_for_closed_vocabularies() {
        assert_eq!(serde_json::to_value(Race::HalfElf).unwrap(), "half_elf");
        assert_eq!(
            serde_json::to_value(Class::BloodHunter).unwrap(),
            "blood_hunter"
        );
        assert_eq!(serde_json::to_value(Alignment::TrueNeutral).unwrap(), "nn");

        let race: Race = serde_json::from_value("tabaxi".into()).unwrap();
        assert_eq!(race, Race::Tabaxi);
        assert_eq!(Alignment::from_value("ce"), Some(Alignment::ChaoticEvil));
        assert_eq!(Class::from_value("bananamancer"), None);
    }

    #[test]
    fn test_serde_codes_match_value_strings() {
        for race in Race::ALL {
            assert_eq!(serde_json::to_value(race).unwrap(), race.value());
        }
        for class in Class::ALL {
            assert_eq!(serde_json::to_value(class).unwrap(), class.value());
        }
        for alignment in Alignment::ALL {
            assert_eq!(serde_json::to_value(alignment).unwrap(), alignment.value());
        }
    }

    #[test]
    fn test_character_input_defaults() {
        let input = CharacterInput::default();
        assert_eq!(input.character_class, Class::Fighter);
        assert_eq!(input.race, Race::Human);
        assert_eq!(input.alignment, Alignment::TrueNeutral);
        assert!(input.age.is_none());
        assert_eq!(input.sheet, CharacterSheet::default());
    }

    #[test]
    fn test_character_input_serializes_sheet_under_character_data() {
        let mut input = CharacterInput::default();
        input.name = "Borin".to_string();
        input.sheet.abilities.strength = 16;
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["character_data"]["abilities"]["STR"], 16);
        assert_eq!(value["character_class"], "fighter");
        assert_eq!(value["alignment"], "nn");
    }
}
