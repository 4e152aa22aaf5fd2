//! Search endpoints

use rotom_model::Pokemon;

use crate::{Client, FetchError};

impl Client {
    /// Fetch every Pokemon matching all of the given type names.
    pub async fn search_by_types(&self, types: &[&str]) -> Result<Vec<Pokemon>, FetchError> {
        let joined = types
            .iter()
            .map(|t| t.to_lowercase())
            .collect::<Vec<_>>()
            .join(",");
        self.get_json("search/types", &[("types", joined)]).await
    }

    /// Fetch Pokemon sorted by a numeric attribute
    /// ("height", "weight", or "baseExperience").
    pub async fn sorted_by(
        &self,
        attribute: &str,
        ascending: bool,
    ) -> Result<Vec<Pokemon>, FetchError> {
        self.get_json(
            "search/sort",
            &[
                ("attribute", attribute.to_string()),
                ("ascending", ascending.to_string()),
            ],
        )
        .await
    }

    /// Fetch a random Pokemon with id at most `max_id`.
    pub async fn random_pokemon(&self, max_id: u32) -> Result<Pokemon, FetchError> {
        self.get_json("search/random", &[("maxId", max_id.to_string())])
            .await
    }
}
