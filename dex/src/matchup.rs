//! Type matchup bucket queries
//!
//! All queries combine dual types by multiplying the per-type multipliers,
//! so a 2.0 x 0.5 pairing is neutral and lands in no bucket rather than
//! being misread as a weakness or a resistance.

use crate::poke_type::Type;

/// Combined multiplier of an attack of `attacker` type against a defender
/// with the given type list.
pub fn defense_multiplier(defender_types: &[Type], attacker: Type) -> f32 {
    attacker.effectiveness_against(defender_types)
}

/// Combined multiplier of a Pokemon with the given types attacking a
/// defender of a single type, multiplying across the attacker's own types.
pub fn offense_multiplier(attacker_types: &[Type], defender: Type) -> f32 {
    attacker_types
        .iter()
        .map(|t| t.effectiveness(defender))
        .product()
}

/// All types that are super effective (>1x) against the defender
pub fn weaknesses(defender_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| defense_multiplier(defender_types, *t) > 1.0)
        .collect()
}

/// All types the defender resists (0 < multiplier < 1)
pub fn resistances(defender_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| {
            let eff = defense_multiplier(defender_types, *t);
            eff > 0.0 && eff < 1.0
        })
        .collect()
}

/// All types the defender is immune to (0x)
pub fn immunities(defender_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| defense_multiplier(defender_types, *t) == 0.0)
        .collect()
}

/// All types the attacker's own types combine to hit super effectively
pub fn advantages(attacker_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|d| offense_multiplier(attacker_types, *d) > 1.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weaknesses_single_type() {
        // Steel is weak to Fire, Fighting, Ground
        let steel = vec![Type::Steel];
        let weak = weaknesses(&steel);
        assert!(weak.contains(&Type::Fire));
        assert!(weak.contains(&Type::Fighting));
        assert!(weak.contains(&Type::Ground));
        assert_eq!(weak.len(), 3);
    }

    #[test]
    fn test_weaknesses_dual_type() {
        // Water/Ground (Swampert) is only weak to Grass (4x)
        let swampert = vec![Type::Water, Type::Ground];
        let weak = weaknesses(&swampert);
        assert_eq!(weak, vec![Type::Grass]);
    }

    #[test]
    fn test_neutral_product_in_no_bucket() {
        // Fire/Water takes 2.0 x 0.5 = 1.0 from Water
        let pair = vec![Type::Fire, Type::Water];
        assert_eq!(defense_multiplier(&pair, Type::Water), 1.0);
        assert!(!weaknesses(&pair).contains(&Type::Water));
        assert!(!resistances(&pair).contains(&Type::Water));
    }

    #[test]
    fn test_resistances() {
        let steel = vec![Type::Steel];
        let resists = resistances(&steel);
        assert!(resists.contains(&Type::Normal));
        assert!(resists.contains(&Type::Ice));
        assert!(resists.contains(&Type::Fairy));
        // Fire is a weakness, not a resistance
        assert!(!resists.contains(&Type::Fire));
    }

    #[test]
    fn test_immunities() {
        // Ghost is immune to Normal and Fighting
        let ghost = vec![Type::Ghost];
        let immune = immunities(&ghost);
        assert!(immune.contains(&Type::Normal));
        assert!(immune.contains(&Type::Fighting));
        assert_eq!(immune.len(), 2);

        // Water/Ground is immune to Electric (2.0 x 0.0)
        let swampert = vec![Type::Water, Type::Ground];
        assert_eq!(immunities(&swampert), vec![Type::Electric]);
    }

    #[test]
    fn test_advantages_single_type() {
        // Electric only hits Water and Flying super effectively
        let electric = vec![Type::Electric];
        let strong = advantages(&electric);
        assert_eq!(strong, vec![Type::Water, Type::Flying]);
    }

    #[test]
    fn test_advantages_dual_type_cancellation() {
        // Grass hits Ground for 2.0 but Poison hits it for 0.5; the
        // product is neutral so Ground is not an advantage
        let bulbasaur = vec![Type::Grass, Type::Poison];
        let strong = advantages(&bulbasaur);
        assert!(strong.contains(&Type::Water));
        assert!(strong.contains(&Type::Fairy));
        assert!(!strong.contains(&Type::Ground));
        assert!(!strong.contains(&Type::Rock));
        assert_eq!(strong.len(), 2);
    }
}
