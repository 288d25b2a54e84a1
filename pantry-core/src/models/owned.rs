use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a user's owned-ingredient set, joined with the catalog name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OwnedIngredient {
    pub user_id: String,
    pub ingredient_id: String,
    pub name: String,
}

impl fmt::Display for OwnedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.ingredient_id, self.name)
    }
}
