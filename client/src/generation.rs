//! Generation endpoints

use rotom_model::{Generation, ResourcePage};

use crate::{Client, FetchError};

impl Client {
    /// Fetch a generation by name (e.g. "generation-i").
    pub async fn generation(&self, name: &str) -> Result<Generation, FetchError> {
        self.get_json(&format!("generations/{}", name.to_lowercase()), &[])
            .await
    }

    /// Fetch the generation listing.
    pub async fn generation_list(&self) -> Result<ResourcePage, FetchError> {
        self.get_json("generations", &[]).await
    }
}
