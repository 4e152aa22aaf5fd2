//! The core Pokemon record

use serde::{Deserialize, Serialize};

use crate::PokemonId;
use crate::resource::NamedResource;

/// A Pokemon species record as served by the API.
///
/// `height` and `weight` are in game-engine units (tenths of a meter and
/// tenths of a kilogram respectively). Records are fetched fresh per
/// request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    /// Lowercase, hyphen-separated token (e.g. "mr-mime").
    pub name: String,
    pub height: u32,
    pub weight: u32,
    /// Absent for some species in newer generations; treated as 0.
    #[serde(default)]
    pub base_experience: u32,
    /// 1-2 entries; slot 1 is the primary type.
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
}

impl Pokemon {
    /// Name of the type in the given slot, if declared.
    pub fn type_name(&self, slot: u8) -> Option<&str> {
        self.types
            .iter()
            .find(|t| t.slot == slot)
            .map(|t| t.type_ref.name.as_str())
    }

    /// Primary type name (slot 1).
    pub fn primary_type(&self) -> Option<&str> {
        self.type_name(1)
    }

    /// Secondary type name (slot 2), if the Pokemon is dual-typed.
    pub fn secondary_type(&self) -> Option<&str> {
        self.type_name(2)
    }

    /// Ability names in slot order.
    pub fn ability_names(&self) -> Vec<String> {
        self.abilities
            .iter()
            .map(|a| a.ability.name.clone())
            .collect()
    }
}

/// One of a Pokemon's type slots. At most one slot=1 and one slot=2 per
/// Pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

/// Named sprite URLs. Every entry is optional; the API serves `null` for
/// missing artwork.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_shiny: Option<String>,
}

/// An ability held by a Pokemon, unique by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    pub is_hidden: bool,
    pub slot: u8,
}
