//! Generated content and recommendations

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::PokemonId;
use crate::pokemon::Pokemon;

/// AI-generated content (story, Pokedex entry, or strategy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub id: String,
    pub title: String,
    pub content: String,
    pub content_type: String,
    #[serde(default)]
    pub featured_pokemon: Option<Pokemon>,
    pub generated_date: String,
    #[serde(default)]
    pub image_prompt: Option<String>,
    #[serde(default)]
    pub metadata: ContentMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetadata {
    pub target_audience: Option<String>,
    pub word_count: Option<u32>,
    pub language: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub format: Option<String>,
    pub tone: Option<String>,
}

/// Result of a similarity recommendation query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub base_pokemon: Pokemon,
    pub similar_pokemon: Vec<Pokemon>,
    #[serde(default)]
    pub explanations: BTreeMap<PokemonId, String>,
    #[serde(default)]
    pub match_reasons: Vec<String>,
    pub average_similarity_score: f64,
}
