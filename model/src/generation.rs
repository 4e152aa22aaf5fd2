use serde::{Deserialize, Serialize};

use crate::resource::NamedResource;

/// A game generation and the species it introduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub id: u32,
    pub name: String,
    pub main_region: NamedResource,
    #[serde(default)]
    pub pokemon_species: Vec<NamedResource>,
}
