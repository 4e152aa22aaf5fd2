use serde::{Deserialize, Serialize};

/// The ubiquitous `{name, url}` pair used to reference another record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// A bare `{url}` reference (e.g. a species' evolution chain).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceUrl {
    pub url: String,
}
