//! Typed domain models shared by the client.

pub mod campaign;
pub mod character;
pub mod character_sheet;
pub mod user;

pub use campaign::{Campaign, CampaignInput};
pub use character::{
    ability_modifier, format_modifier, Alignment, Character, CharacterInput, Class, Race,
};
pub use character_sheet::{Abilities, CharacterSheet, HitPoints};
pub use user::UserInfo;
