//! Move endpoints

use rotom_model::{Move, ResourcePage};

use crate::{Client, FetchError};

impl Client {
    /// Fetch a move by name.
    pub async fn poke_move(&self, name: &str) -> Result<Move, FetchError> {
        self.get_json(&format!("moves/{}", name.trim().to_lowercase()), &[])
            .await
    }

    /// Fetch a move by numeric id.
    pub async fn move_by_id(&self, id: u32) -> Result<Move, FetchError> {
        self.get_json(&format!("moves/id/{id}"), &[]).await
    }

    /// Fetch one page of the move listing.
    pub async fn move_list(&self, limit: u32, offset: u32) -> Result<ResourcePage, FetchError> {
        self.get_json(
            "moves",
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
        )
        .await
    }
}
