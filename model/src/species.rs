//! Species records and evolution chains

use serde::{Deserialize, Serialize};

use crate::PokemonId;
use crate::resource::{NamedResource, ResourceUrl};

/// Species-level data (flavor text, genus, evolution chain reference).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub id: PokemonId,
    pub name: String,
    pub is_baby: bool,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub evolution_chain: ResourceUrl,
    pub color: NamedResource,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub genera: Vec<Genus>,
    pub generation: NamedResource,
    pub growth_rate: NamedResource,
    pub habitat: Option<NamedResource>,
}

impl PokemonSpecies {
    /// First flavor text in the given language, cleaned of control
    /// characters the games embed in entries.
    pub fn flavor_text(&self, language: &str) -> Option<String> {
        self.flavor_text_entries
            .iter()
            .find(|e| e.language.name == language)
            .map(|e| {
                e.flavor_text
                    .chars()
                    .map(|c| if c.is_control() { ' ' } else { c })
                    .collect()
            })
    }

    /// Genus ("Seed Pokémon") in the given language.
    pub fn genus(&self, language: &str) -> Option<&str> {
        self.genera
            .iter()
            .find(|g| g.language.name == language)
            .map(|g| g.genus.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    pub version: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}

/// A tree of species linked by evolution triggers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}

impl EvolutionChain {
    /// Species names in evolution order (preorder walk of the tree).
    ///
    /// Branching chains (e.g. Eevee) list the base form first, then each
    /// branch in declaration order.
    pub fn species_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.chain.collect_names(&mut names);
        names
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    pub is_baby: bool,
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    fn collect_names<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(self.species.name.as_str());
        for link in &self.evolves_to {
            link.collect_names(out);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    pub trigger: NamedResource,
    pub min_level: Option<u32>,
    pub min_happiness: Option<u32>,
    pub min_beauty: Option<u32>,
    pub min_affection: Option<u32>,
    #[serde(default)]
    pub needs_overworld_rain: bool,
    #[serde(default)]
    pub time_of_day: String,
    pub item: Option<NamedResource>,
}
