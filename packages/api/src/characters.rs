//! Character endpoints, nested under their campaign.

use crate::error::ApiError;
use crate::http::Transport;
use crate::models::{Character, CharacterInput};
use crate::session::Session;
use crate::tokens::TokenStore;

impl<T: Transport, S: TokenStore> Session<T, S> {
    pub async fn list_characters(&self, campaign_id: i64) -> Result<Vec<Character>, ApiError> {
        self.get(&format!("/lore/campaigns/{campaign_id}/characters/"))
            .await
    }

    pub async fn fetch_character(
        &self,
        campaign_id: i64,
        character_id: i64,
    ) -> Result<Character, ApiError> {
        self.get(&format!(
            "/lore/campaigns/{campaign_id}/characters/{character_id}/"
        ))
        .await
    }

    pub async fn create_character(
        &self,
        campaign_id: i64,
        input: &CharacterInput,
    ) -> Result<Character, ApiError> {
        self.post(&format!("/lore/campaigns/{campaign_id}/characters/"), input)
            .await
    }

    pub async fn update_character(
        &self,
        campaign_id: i64,
        character_id: i64,
        input: &CharacterInput,
    ) -> Result<Character, ApiError> {
        self.patch(
            &format!("/lore/campaigns/{campaign_id}/characters/{character_id}/"),
            input,
        )
        .await
    }

    pub async fn delete_character(
        &self,
        campaign_id: i64,
        character_id: i64,
    ) -> Result<(), ApiError> {
        self.delete(&format!(
            "/lore/campaigns/{campaign_id}/characters/{character_id}/"
        ))
        .await
    }
}
