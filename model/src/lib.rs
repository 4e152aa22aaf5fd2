//! Data model for the Pokemon REST API consumed by the rotom workspace.
//!
//! Every endpoint the client talks to has an explicit serde shape here, and
//! response bodies are decoded at the boundary through [`decode`] so a
//! malformed or mismatched payload fails fast with a [`DecodeError`] instead
//! of leaking partial data into the rest of the system.

use serde::de::DeserializeOwned;
use thiserror::Error;


mod comparison;
mod content;
mod generation;
mod moves;
mod page;
mod pokemon;
mod relations;
mod resource;
mod species;

pub use comparison::{
    ComparisonRequest, NormalizedValues, PokemonComparison, StatComparison, TypeEffectiveness,
};
pub use content::{ContentMetadata, GeneratedContent, RecommendationResult};
pub use generation::Generation;
pub use moves::Move;
pub use page::ResourcePage;
pub use pokemon::{AbilitySlot, Pokemon, Sprites, TypeSlot};
pub use relations::{TypeRecord, TypeRelations};
pub use resource::{NamedResource, ResourceUrl};
pub use species::{
    ChainLink, EvolutionChain, EvolutionDetail, FlavorTextEntry, Genus, PokemonSpecies,
};

/// Pokemon ids are positive, stable, and unique.
pub type PokemonId = u32;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a JSON response body into a typed record.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, DecodeError> {
    Ok(serde_json::from_str(body)?)
}
