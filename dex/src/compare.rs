//! Stat comparison assembly
//!
//! Takes 2-3 fetched Pokemon records and derives per-attribute rankings
//! (highest/lowest holder) plus normalized progress-bar values.

use std::collections::BTreeMap;

use rotom_model::{NormalizedValues, Pokemon, PokemonComparison, PokemonId, StatComparison};

use crate::CompareError;
use crate::effectiveness;

/// Comparison is undefined for fewer than 2 subjects.
pub const MIN_SUBJECTS: usize = 2;
/// At most 3 Pokemon can be compared side by side.
pub const MAX_SUBJECTS: usize = 3;

/// The fixed attribute set every comparison ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatAttribute {
    Height,
    Weight,
    BaseExperience,
}

impl StatAttribute {
    pub const ALL: [StatAttribute; 3] = [
        StatAttribute::Height,
        StatAttribute::Weight,
        StatAttribute::BaseExperience,
    ];

    /// Wire key used in the `highest`/`lowest` maps
    pub fn key(&self) -> &'static str {
        match self {
            StatAttribute::Height => "height",
            StatAttribute::Weight => "weight",
            StatAttribute::BaseExperience => "baseExperience",
        }
    }

    /// Human-readable row label
    pub fn label(&self) -> &'static str {
        match self {
            StatAttribute::Height => "Height",
            StatAttribute::Weight => "Weight",
            StatAttribute::BaseExperience => "Base Exp",
        }
    }

    /// Raw value of this attribute on a record
    pub fn value_of(&self, pokemon: &Pokemon) -> u32 {
        match self {
            StatAttribute::Height => pokemon.height,
            StatAttribute::Weight => pokemon.weight,
            StatAttribute::BaseExperience => pokemon.base_experience,
        }
    }
}

fn check_cardinality(got: usize) -> Result<(), CompareError> {
    if got < MIN_SUBJECTS {
        return Err(CompareError::NotEnoughSubjects { got });
    }
    if got > MAX_SUBJECTS {
        return Err(CompareError::TooManySubjects { got });
    }
    Ok(())
}

/// Derive per-attribute rankings and normalized values for 2-3 Pokemon.
///
/// Per attribute: exactly one highest and one lowest id, ties resolving to
/// the first Pokemon in input order reaching the extreme. Normalization
/// maps the minimum to 0.0 and the maximum to 1.0; when every value is
/// equal the range is zero and every id normalizes to 1.0 (full bar, never
/// NaN).
pub fn assemble(pokemons: &[Pokemon]) -> Result<StatComparison, CompareError> {
    check_cardinality(pokemons.len())?;

    let mut comparison = StatComparison::default();

    for attr in StatAttribute::ALL {
        let values: Vec<(PokemonId, u32)> =
            pokemons.iter().map(|p| (p.id, attr.value_of(p))).collect();

        // Strict comparisons keep the first-encountered id on ties
        let (mut highest, mut max) = values[0];
        let (mut lowest, mut min) = values[0];
        for &(id, value) in &values[1..] {
            if value > max {
                max = value;
                highest = id;
            }
            if value < min {
                min = value;
                lowest = id;
            }
        }
        let range = max - min;

        let raw = raw_values_mut(&mut comparison, attr);
        for &(id, value) in &values {
            raw.insert(id, value);
        }

        let normalized = normalized_values_mut(&mut comparison.normalized_values, attr);
        for &(id, value) in &values {
            let bar = if range == 0 {
                1.0
            } else {
                (value - min) as f64 / range as f64
            };
            normalized.insert(id, bar);
        }

        comparison.highest.insert(attr.key().to_string(), highest);
        comparison.lowest.insert(attr.key().to_string(), lowest);
    }

    Ok(comparison)
}

/// Build the full comparison for 2-3 fetched records: stat rankings,
/// per-Pokemon type effectiveness, ability names, and sprite URLs.
///
/// Every id in the output maps appears in `pokemons`; a Pokemon without a
/// front sprite simply has no `sprite_urls` entry.
pub fn compare(pokemons: &[Pokemon]) -> Result<PokemonComparison, CompareError> {
    let stat_comparison = assemble(pokemons)?;

    let mut type_effectiveness = BTreeMap::new();
    let mut abilities = BTreeMap::new();
    let mut sprite_urls = BTreeMap::new();

    for pokemon in pokemons {
        type_effectiveness.insert(pokemon.id, effectiveness::summarize_pokemon(pokemon)?);
        abilities.insert(pokemon.id, pokemon.ability_names());
        if let Some(url) = &pokemon.sprites.front_default {
            sprite_urls.insert(pokemon.id, url.clone());
        }
    }

    Ok(PokemonComparison {
        pokemons: pokemons.to_vec(),
        stat_comparison,
        type_effectiveness,
        abilities,
        sprite_urls,
    })
}

fn raw_values_mut<'a>(
    comparison: &'a mut StatComparison,
    attr: StatAttribute,
) -> &'a mut BTreeMap<PokemonId, u32> {
    match attr {
        StatAttribute::Height => &mut comparison.height,
        StatAttribute::Weight => &mut comparison.weight,
        StatAttribute::BaseExperience => &mut comparison.base_experience,
    }
}

fn normalized_values_mut<'a>(
    normalized: &'a mut NormalizedValues,
    attr: StatAttribute,
) -> &'a mut BTreeMap<PokemonId, f64> {
    match attr {
        StatAttribute::Height => &mut normalized.height,
        StatAttribute::Weight => &mut normalized.weight,
        StatAttribute::BaseExperience => &mut normalized.base_experience,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotom_model::{AbilitySlot, NamedResource, Sprites, TypeSlot};

    fn subject(
        id: PokemonId,
        name: &str,
        height: u32,
        weight: u32,
        base_experience: u32,
        types: &[&str],
    ) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            height,
            weight,
            base_experience,
            types: types
                .iter()
                .enumerate()
                .map(|(i, t)| TypeSlot {
                    slot: i as u8 + 1,
                    type_ref: NamedResource {
                        name: t.to_string(),
                        url: String::new(),
                    },
                })
                .collect(),
            sprites: Sprites {
                front_default: Some(format!("https://sprites/{id}/front.png")),
                ..Sprites::default()
            },
            abilities: vec![AbilitySlot {
                ability: NamedResource {
                    name: format!("{name}-ability"),
                    url: String::new(),
                },
                is_hidden: false,
                slot: 1,
            }],
        }
    }

    fn bulbasaur() -> Pokemon {
        subject(1, "bulbasaur", 7, 69, 64, &["grass", "poison"])
    }

    fn charmander() -> Pokemon {
        subject(4, "charmander", 6, 85, 62, &["fire"])
    }

    #[test]
    fn test_assemble_rankings() {
        let comparison = assemble(&[bulbasaur(), charmander()]).unwrap();

        assert_eq!(comparison.highest["height"], 1);
        assert_eq!(comparison.lowest["height"], 4);
        assert_eq!(comparison.highest["weight"], 4);
        assert_eq!(comparison.lowest["weight"], 1);
        assert_eq!(comparison.highest["baseExperience"], 1);
        assert_eq!(comparison.lowest["baseExperience"], 4);

        assert_eq!(comparison.height[&1], 7);
        assert_eq!(comparison.weight[&4], 85);
    }

    #[test]
    fn test_assemble_normalizes_extremes() {
        let comparison = assemble(&[bulbasaur(), charmander()]).unwrap();

        assert_eq!(comparison.normalized_values.height[&1], 1.0);
        assert_eq!(comparison.normalized_values.height[&4], 0.0);
        assert_eq!(comparison.normalized_values.weight[&1], 0.0);
        assert_eq!(comparison.normalized_values.weight[&4], 1.0);
    }

    #[test]
    fn test_assemble_equal_values_full_bar() {
        // Identical base experience: zero range normalizes everyone to 1.0
        let a = subject(1, "a", 7, 69, 64, &["grass"]);
        let b = subject(2, "b", 6, 85, 64, &["fire"]);
        let comparison = assemble(&[a, b]).unwrap();

        assert_eq!(comparison.normalized_values.base_experience[&1], 1.0);
        assert_eq!(comparison.normalized_values.base_experience[&2], 1.0);
    }

    #[test]
    fn test_assemble_ties_resolve_to_input_order() {
        let a = subject(10, "a", 12, 40, 80, &["water"]);
        let b = subject(20, "b", 12, 40, 80, &["fire"]);
        let c = subject(30, "c", 5, 40, 90, &["grass"]);
        let comparison = assemble(&[a, b, c]).unwrap();

        // a and b tie for max height; the first in input order wins
        assert_eq!(comparison.highest["height"], 10);
        assert_eq!(comparison.lowest["height"], 30);
        // all three tie on weight; first wins both ends
        assert_eq!(comparison.highest["weight"], 10);
        assert_eq!(comparison.lowest["weight"], 10);

        assert_eq!(comparison.normalized_values.height[&10], 1.0);
        assert_eq!(comparison.normalized_values.height[&20], 1.0);
        assert_eq!(comparison.normalized_values.height[&30], 0.0);
    }

    #[test]
    fn test_assemble_intermediate_values() {
        let a = subject(1, "a", 5, 10, 0, &["normal"]);
        let b = subject(2, "b", 10, 10, 0, &["normal"]);
        let c = subject(3, "c", 25, 10, 0, &["normal"]);
        let comparison = assemble(&[a, b, c]).unwrap();

        assert_eq!(comparison.normalized_values.height[&1], 0.0);
        assert_eq!(comparison.normalized_values.height[&2], 0.25);
        assert_eq!(comparison.normalized_values.height[&3], 1.0);
    }

    #[test]
    fn test_assemble_rejects_single_subject() {
        let result = assemble(&[bulbasaur()]);

        assert_eq!(result, Err(CompareError::NotEnoughSubjects { got: 1 }));
    }

    #[test]
    fn test_assemble_rejects_too_many_subjects() {
        let squad: Vec<Pokemon> = (1..=4)
            .map(|i| subject(i, "n", 1, 1, 1, &["normal"]))
            .collect();
        let result = assemble(&squad);

        assert_eq!(result, Err(CompareError::TooManySubjects { got: 4 }));
    }

    #[test]
    fn test_compare_full_payload() {
        let comparison = compare(&[bulbasaur(), charmander()]).unwrap();

        assert_eq!(comparison.pokemons.len(), 2);
        assert_eq!(comparison.pokemons[0].name, "bulbasaur");

        let ids: Vec<PokemonId> = comparison.pokemons.iter().map(|p| p.id).collect();
        for id in comparison.type_effectiveness.keys() {
            assert!(ids.contains(id));
        }
        for id in comparison.abilities.keys() {
            assert!(ids.contains(id));
        }
        for id in comparison.sprite_urls.keys() {
            assert!(ids.contains(id));
        }

        assert_eq!(comparison.type_effectiveness[&1].primary_type, "grass");
        assert_eq!(comparison.type_effectiveness[&4].primary_type, "fire");
        assert_eq!(comparison.abilities[&1], vec!["bulbasaur-ability"]);
        assert_eq!(
            comparison.sprite_urls[&4],
            "https://sprites/4/front.png"
        );
    }

    #[test]
    fn test_compare_omits_missing_sprite() {
        let mut a = bulbasaur();
        a.sprites = Sprites::default();
        let comparison = compare(&[a, charmander()]).unwrap();

        assert!(!comparison.sprite_urls.contains_key(&1));
        assert!(comparison.sprite_urls.contains_key(&4));
    }
}
