//! Pokemon, species, evolution, and comparison endpoints

use rotom_model::{
    ComparisonRequest, EvolutionChain, Pokemon, PokemonComparison, PokemonId, PokemonSpecies,
    ResourcePage, TypeRecord,
};

use crate::{Client, FetchError};

impl Client {
    /// Fetch a Pokemon by name. Names are lowercased before the request.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon, FetchError> {
        self.get_json(&format!("pokemon/{}", name.trim().to_lowercase()), &[])
            .await
    }

    /// Fetch a Pokemon by numeric id.
    pub async fn pokemon_by_id(&self, id: PokemonId) -> Result<Pokemon, FetchError> {
        self.get_json(&format!("pokemon/id/{id}"), &[]).await
    }

    /// Fetch a Pokemon by name or numeric id, whichever the token parses
    /// as. Convenient for user-typed lookups.
    pub async fn pokemon_by_name_or_id(&self, id_or_name: &str) -> Result<Pokemon, FetchError> {
        match id_or_name.trim().parse::<PokemonId>() {
            Ok(id) => self.pokemon_by_id(id).await,
            Err(_) => self.pokemon(id_or_name).await,
        }
    }

    /// Fetch one page of the Pokemon listing.
    pub async fn pokemon_list(&self, limit: u32, offset: u32) -> Result<ResourcePage, FetchError> {
        self.get_json(
            "pokemon/list",
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
        )
        .await
    }

    /// Fetch every Pokemon of the given type.
    pub async fn pokemon_by_type(&self, type_name: &str) -> Result<Vec<Pokemon>, FetchError> {
        self.get_json(&format!("pokemon/type/{}", type_name.to_lowercase()), &[])
            .await
    }

    /// Fetch species-level data (flavor text, genus, chain reference).
    pub async fn species(&self, name: &str) -> Result<PokemonSpecies, FetchError> {
        self.get_json(&format!("pokemon/{}/species", name.to_lowercase()), &[])
            .await
    }

    /// Fetch the evolution chain a Pokemon belongs to.
    pub async fn evolution_chain(&self, name: &str) -> Result<EvolutionChain, FetchError> {
        self.get_json(
            &format!("pokemon/{}/evolution-chain", name.to_lowercase()),
            &[],
        )
        .await
    }

    /// Fetch a type record with its damage relations.
    pub async fn type_record(&self, name: &str) -> Result<TypeRecord, FetchError> {
        self.get_json(&format!("type/{}", name.to_lowercase()), &[])
            .await
    }

    /// Fetch the server-computed detailed comparison for 2-3 ids.
    pub async fn compare_detailed(&self, ids: &[PokemonId]) -> Result<PokemonComparison, FetchError> {
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.get_json("pokemon/compare/detailed", &[("ids", joined)])
            .await
    }

    /// Fetch a detailed comparison with per-section toggles.
    pub async fn compare_detailed_with(
        &self,
        request: &ComparisonRequest,
    ) -> Result<PokemonComparison, FetchError> {
        self.post_json("pokemon/compare/detailed", request).await
    }

    /// Fetch several Pokemon concurrently, one independent request per
    /// name. Each result is keyed by the name that produced it, so partial
    /// completion is safe: a failure in one slot leaves the others intact.
    pub async fn pokemon_many(&self, names: &[&str]) -> Vec<(String, Result<Pokemon, FetchError>)> {
        let fetches = names
            .iter()
            .map(|name| async move { (name.to_string(), self.pokemon(name).await) });

        futures_util::future::join_all(fetches).await
    }
}
