//! Campaign endpoints.
//!
//! Everything here goes through [`Session::send`]'s authorized path, so a
//! stale access token is refreshed transparently.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::Transport;
use crate::models::{Campaign, CampaignInput};
use crate::session::Session;
use crate::tokens::TokenStore;

impl<T: Transport, S: TokenStore> Session<T, S> {
    /// All campaigns visible to the current user.
    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        self.get("/lore/campaigns/").await
    }

    pub async fn fetch_campaign(&self, id: i64) -> Result<Campaign, ApiError> {
        self.get(&format!("/lore/campaigns/{id}/")).await
    }

    pub async fn create_campaign(&self, input: &CampaignInput) -> Result<Campaign, ApiError> {
        self.post("/lore/campaigns/", input).await
    }

    pub async fn update_campaign(
        &self,
        id: i64,
        input: &CampaignInput,
    ) -> Result<Campaign, ApiError> {
        self.patch(&format!("/lore/campaigns/{id}/"), input).await
    }

    pub async fn delete_campaign(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/lore/campaigns/{id}/")).await
    }

    /// Invite a user into the campaign's player list.
    pub async fn add_player(&self, campaign_id: i64, user_id: i64) -> Result<(), ApiError> {
        let _: Value = self
            .post(
                &format!("/lore/campaigns/{campaign_id}/add_player/"),
                &serde_json::json!({ "user_id": user_id }),
            )
            .await?;
        Ok(())
    }

    pub async fn remove_player(&self, campaign_id: i64, user_id: i64) -> Result<(), ApiError> {
        let _: Value = self
            .post(
                &format!("/lore/campaigns/{campaign_id}/remove_player/"),
                &serde_json::json!({ "user_id": user_id }),
            )
            .await?;
        Ok(())
    }
}
