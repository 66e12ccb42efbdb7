//! Campaign records and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserInfo;

/// A campaign as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub game_system: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner: UserInfo,
    #[serde(default)]
    pub players: Vec<UserInfo>,
    pub is_active: bool,
}

impl Campaign {
    /// Owner plus invited players.
    pub fn participant_count(&self) -> usize {
        self.players.len() + 1
    }
}

/// Create/update payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CampaignInput {
    pub name: String,
    pub description: String,
    pub game_system: String,
    pub is_active: bool,
}

impl Default for CampaignInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            game_system: "D&D 5e".to_string(),
            is_active: true,
        }
    }
}

impl From<&Campaign> for CampaignInput {
    fn from(campaign: &Campaign) -> Self {
        Self {
            name: campaign.name.clone(),
            description: campaign.description.clone(),
            game_system: campaign.game_system.clone(),
            is_active: campaign.is_active,
        }
    }
}
