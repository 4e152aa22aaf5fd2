//! Type effectiveness summaries

use rotom_model::{Pokemon, TypeEffectiveness};

use crate::CompareError;
use crate::matchup;
use crate::poke_type::Type;

/// Summarize what a type pair is strong and weak against.
///
/// Strong-against is offensive (what the Pokemon's own types combine to
/// hit super effectively); weak-against, resistant-to, and immune-to are
/// defensive. Pure function of its input: identical types always yield an
/// identical summary. Name lists are sorted alphabetically.
pub fn summarize(primary: Type, secondary: Option<Type>) -> TypeEffectiveness {
    let own: Vec<Type> = std::iter::once(primary).chain(secondary).collect();

    TypeEffectiveness {
        primary_type: primary.name().to_string(),
        secondary_type: secondary.map(|t| t.name().to_string()),
        strong_against: names(matchup::advantages(&own)),
        weak_against: names(matchup::weaknesses(&own)),
        resistant_to: names(matchup::resistances(&own)),
        immune_to: names(matchup::immunities(&own)),
    }
}

/// Summarize a fetched Pokemon record from its declared type slots.
///
/// A record with no slot-1 type, or with a type name outside the 18 known
/// types, is rejected before any computation.
pub fn summarize_pokemon(pokemon: &Pokemon) -> Result<TypeEffectiveness, CompareError> {
    let primary = resolve(pokemon.primary_type().ok_or(CompareError::MissingType)?)?;
    let secondary = pokemon.secondary_type().map(resolve).transpose()?;

    Ok(summarize(primary, secondary))
}

fn resolve(name: &str) -> Result<Type, CompareError> {
    Type::from_name(name).ok_or_else(|| CompareError::UnknownType(name.to_string()))
}

fn names(types: Vec<Type>) -> Vec<String> {
    let mut names: Vec<String> = types.into_iter().map(|t| t.name().to_string()).collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_grass_poison() {
        let summary = summarize(Type::Grass, Some(Type::Poison));

        assert_eq!(summary.primary_type, "grass");
        assert_eq!(summary.secondary_type.as_deref(), Some("poison"));
        assert_eq!(summary.strong_against, vec!["fairy", "water"]);
        assert_eq!(summary.weak_against, vec!["fire", "flying", "ice", "psychic"]);
        assert_eq!(
            summary.resistant_to,
            vec!["electric", "fairy", "fighting", "grass", "water"]
        );
        assert!(summary.immune_to.is_empty());
    }

    #[test]
    fn test_summarize_mono_type() {
        let summary = summarize(Type::Electric, None);

        assert_eq!(summary.secondary_type, None);
        assert_eq!(summary.strong_against, vec!["flying", "water"]);
        assert_eq!(summary.weak_against, vec!["ground"]);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let a = summarize(Type::Water, Some(Type::Ground));
        let b = summarize(Type::Water, Some(Type::Ground));

        assert_eq!(a, b);
    }

    #[test]
    fn test_summarize_neutral_product_excluded() {
        // Fire/Water takes 2.0 x 0.5 = 1.0 from Water: neither weak nor resistant
        let summary = summarize(Type::Fire, Some(Type::Water));

        assert!(!summary.weak_against.contains(&"water".to_string()));
        assert!(!summary.resistant_to.contains(&"water".to_string()));
    }

    #[test]
    fn test_summarize_pokemon_rejects_unknown_type() {
        let pokemon: Pokemon = serde_json::from_str(
            r#"{
                "id": 999,
                "name": "glitch",
                "height": 1,
                "weight": 1,
                "base_experience": 1,
                "types": [{"slot": 1, "type": {"name": "shadow", "url": "u"}}]
            }"#,
        )
        .unwrap();

        assert_eq!(
            summarize_pokemon(&pokemon),
            Err(CompareError::UnknownType("shadow".to_string()))
        );
    }

    #[test]
    fn test_summarize_pokemon_rejects_missing_type() {
        let pokemon: Pokemon = serde_json::from_str(
            r#"{
                "id": 999,
                "name": "typeless",
                "height": 1,
                "weight": 1,
                "base_experience": 1,
                "types": []
            }"#,
        )
        .unwrap();

        assert_eq!(summarize_pokemon(&pokemon), Err(CompareError::MissingType));
    }
}
