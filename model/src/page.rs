use serde::{Deserialize, Serialize};

use crate::resource::NamedResource;

/// One page of a paginated listing (`?limit=&offset=`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}
