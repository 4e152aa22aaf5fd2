use serde::{Deserialize, Serialize};

use crate::resource::NamedResource;

/// Damage relations for one of the 18 types, as served by the type
/// endpoint. This is the wire shape of the external type-damage lookup;
/// the dex crate carries the combined 18x18 chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRelations {
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
}

/// A type record with its damage relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub id: u32,
    pub name: String,
    pub damage_relations: TypeRelations,
}
