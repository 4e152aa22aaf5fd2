//! Derived comparison payloads
//!
//! These are the shapes produced locally by the dex crate and served by the
//! detailed-comparison endpoint. The comparison wire format is camelCase;
//! integer-keyed maps serialize their keys as JSON strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::PokemonId;
use crate::pokemon::Pokemon;

/// Per-attribute rankings and normalized values for a compared set.
///
/// For each tracked attribute there is an id-to-raw-value map, exactly one
/// highest and one lowest id (keyed by attribute name), and an
/// id-to-normalized-value map in [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatComparison {
    pub height: BTreeMap<PokemonId, u32>,
    pub weight: BTreeMap<PokemonId, u32>,
    pub base_experience: BTreeMap<PokemonId, u32>,
    pub highest: BTreeMap<String, PokemonId>,
    pub lowest: BTreeMap<String, PokemonId>,
    pub normalized_values: NormalizedValues,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedValues {
    pub height: BTreeMap<PokemonId, f64>,
    pub weight: BTreeMap<PokemonId, f64>,
    pub base_experience: BTreeMap<PokemonId, f64>,
}

/// What a Pokemon's own types are strong or weak against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeEffectiveness {
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub strong_against: Vec<String>,
    pub weak_against: Vec<String>,
    pub resistant_to: Vec<String>,
    pub immune_to: Vec<String>,
}

/// Full comparison of 2-3 Pokemon.
///
/// `pokemons` keeps input order (significant for tie-break display). Every
/// id referenced by the maps appears in `pokemons`; there are no orphan
/// entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonComparison {
    pub pokemons: Vec<Pokemon>,
    pub stat_comparison: StatComparison,
    pub type_effectiveness: BTreeMap<PokemonId, TypeEffectiveness>,
    pub abilities: BTreeMap<PokemonId, Vec<String>>,
    pub sprite_urls: BTreeMap<PokemonId, String>,
}

/// Body for the detailed-comparison POST endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRequest {
    pub pokemon_ids: Vec<PokemonId>,
    pub include_type_effectiveness: bool,
    pub include_stat_comparison: bool,
    pub include_abilities: bool,
    pub include_sprites: bool,
}

impl ComparisonRequest {
    /// Request everything for the given ids.
    pub fn full(pokemon_ids: Vec<PokemonId>) -> Self {
        Self {
            pokemon_ids,
            include_type_effectiveness: true,
            include_stat_comparison: true,
            include_abilities: true,
            include_sprites: true,
        }
    }
}
