//! The nested sheet payload stored in the backend's `character_data` JSON
//! column. Wire keys are camelCase and the ability scores use their
//! uppercase tags; an empty object deserializes to the documented
//! defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CharacterSheet {
    pub level: u8,
    pub proficiency_bonus: i32,
    pub speed: u32,
    pub abilities: Abilities,
    pub hit_points: HitPoints,
    pub armor_class: i32,
    pub initiative: i32,
    pub equipment: String,
    pub spells: String,
    pub features: String,
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self {
            level: 1,
            proficiency_bonus: 2,
            speed: 30,
            abilities: Abilities::default(),
            hit_points: HitPoints::default(),
            armor_class: 10,
            initiative: 0,
            equipment: String::new(),
            spells: String::new(),
            features: String::new(),
        }
    }
}

/// The six ability scores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Abilities {
    #[serde(rename = "STR")]
    pub strength: i32,
    #[serde(rename = "DEX")]
    pub dexterity: i32,
    #[serde(rename = "CON")]
    pub constitution: i32,
    #[serde(rename = "INT")]
    pub intelligence: i32,
    #[serde(rename = "WIS")]
    pub wisdom: i32,
    #[serde(rename = "CHA")]
    pub charisma: i32,
}

impl Default for Abilities {
    fn default() -> Self {
        Self {
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HitPoints {
    pub max: i32,
    pub current: i32,
}

impl Default for HitPoints {
    fn default() -> Self {
        Self { max: 10, current: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_character_data_uses_defaults() {
        let sheet: CharacterSheet = serde_json::from_str("{}").unwrap();
        assert_eq!(sheet, CharacterSheet::default());
        assert_eq!(sheet.level, 1);
        assert_eq!(sheet.proficiency_bonus, 2);
        assert_eq!(sheet.speed, 30);
        assert_eq!(sheet.abilities.strength, 10);
        assert_eq!(sheet.hit_points.max, 10);
        assert_eq!(sheet.armor_class, 10);
        assert_eq!(sheet.initiative, 0);
    }

    #[test]
    fn test_sheet_round_trips_camel_case_keys() {
        let mut sheet = CharacterSheet::default();
        sheet.abilities.dexterity = 14;
        sheet.hit_points.current = 7;
        sheet.armor_class = 15;
        sheet.equipment = "Longsword, shield".to_string();

        let value = serde_json::to_value(&sheet).unwrap();
        assert_eq!(value["abilities"]["DEX"], 14);
        assert_eq!(value["hitPoints"]["current"], 7);
        assert_eq!(value["armorClass"], 15);
        assert_eq!(value["proficiencyBonus"], 2);

        let back: CharacterSheet = serde_json::from_value(value).unwrap();
        assert_eq!(back, sheet);
    }

    #[test]
    fn test_partial_sheet_keeps_defaults_for_missing_fields() {
        let sheet: CharacterSheet =
            serde_json::from_str(r#"{"abilities": {"STR": 18}, "armorClass": 17}"#).unwrap();
        assert_eq!(sheet.abilities.strength, 18);
        assert_eq!(sheet.abilities.dexterity, 10);
        assert_eq!(sheet.armor_class, 17);
        assert_eq!(sheet.level, 1);
    }
}
