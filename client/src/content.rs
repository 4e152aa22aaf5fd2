//! Generated content and recommendation endpoints

use rotom_model::{GeneratedContent, RecommendationResult};

use crate::{Client, FetchError};

/// Which kind of content to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Story,
    Pokedex,
    Strategy,
}

impl ContentKind {
    pub fn path_segment(&self) -> &'static str {
        match self {
            ContentKind::Story => "story",
            ContentKind::Pokedex => "pokedex",
            ContentKind::Strategy => "strategy",
        }
    }
}

/// Optional knobs for content generation. Unset fields are omitted from
/// the query string and the server applies its defaults.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub tone: Option<String>,
    pub target_audience: Option<String>,
    pub max_length: Option<u32>,
    pub format: Option<String>,
}

impl GenerateOptions {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(tone) = &self.tone {
            query.push(("tone", tone.clone()));
        }
        if let Some(audience) = &self.target_audience {
            query.push(("targetAudience", audience.clone()));
        }
        if let Some(max_length) = self.max_length {
            query.push(("maxLength", max_length.to_string()));
        }
        if let Some(format) = &self.format {
            query.push(("format", format.clone()));
        }
        query
    }
}

/// How the recommender weighs similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityStrategy {
    Type,
    Stats,
    Balanced,
}

impl SimilarityStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityStrategy::Type => "type",
            SimilarityStrategy::Stats => "stats",
            SimilarityStrategy::Balanced => "balanced",
        }
    }
}

/// Query for the similar-Pokemon recommender.
#[derive(Debug, Clone)]
pub struct SimilarQuery {
    pub pokemon_name: String,
    pub limit: Option<u32>,
    pub similarity_strategy: Option<SimilarityStrategy>,
}

impl SimilarQuery {
    pub fn new(pokemon_name: impl Into<String>) -> Self {
        Self {
            pokemon_name: pokemon_name.into(),
            limit: None,
            similarity_strategy: None,
        }
    }
}

impl Client {
    /// Generate content (story, Pokedex entry, or strategy) for a Pokemon.
    pub async fn generate(
        &self,
        kind: ContentKind,
        pokemon: &str,
        options: &GenerateOptions,
    ) -> Result<GeneratedContent, FetchError> {
        let mut query = vec![("pokemon", pokemon.trim().to_lowercase())];
        query.extend(options.query());

        self.get_json(&format!("generate/{}", kind.path_segment()), &query)
            .await
    }

    /// Fetch Pokemon similar to the given one.
    pub async fn similar(&self, query: &SimilarQuery) -> Result<RecommendationResult, FetchError> {
        let mut params = vec![("pokemonName", query.pokemon_name.to_lowercase())];
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(strategy) = query.similarity_strategy {
            params.push(("similarityStrategy", strategy.as_str().to_string()));
        }

        self.get_json("recommend/similar", &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kind_path_segments() {
        assert_eq!(ContentKind::Story.path_segment(), "story");
        assert_eq!(ContentKind::Pokedex.path_segment(), "pokedex");
        assert_eq!(ContentKind::Strategy.path_segment(), "strategy");
    }

    #[test]
    fn test_generate_options_query_omits_unset() {
        let options = GenerateOptions {
            tone: Some("playful".to_string()),
            max_length: Some(300),
            ..GenerateOptions::default()
        };
        let query = options.query();

        assert_eq!(
            query,
            vec![
                ("tone", "playful".to_string()),
                ("maxLength", "300".to_string())
            ]
        );
    }

    #[test]
    fn test_empty_options_empty_query() {
        assert!(GenerateOptions::default().query().is_empty());
    }

    #[test]
    fn test_similarity_strategy_names() {
        assert_eq!(SimilarityStrategy::Type.as_str(), "type");
        assert_eq!(SimilarityStrategy::Stats.as_str(), "stats");
        assert_eq!(SimilarityStrategy::Balanced.as_str(), "balanced");
    }
}
