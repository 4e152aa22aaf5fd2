use serde::{Deserialize, Serialize};

use crate::resource::NamedResource;

/// A move record. Power, pp, and accuracy can all be null (status moves,
/// one-hit KO moves).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub id: u32,
    pub name: String,
    pub power: Option<u32>,
    pub pp: Option<u32>,
    pub accuracy: Option<u32>,
    pub damage_class: NamedResource,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}
