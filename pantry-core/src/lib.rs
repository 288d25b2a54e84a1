//! Pantrysync Core Library
//!
//! Shared types for resolving free-text pantry entries against the
//! ingredient catalog: the data model, name normalization, deduplication
//! and the error taxonomy.

pub mod dedup;
pub mod error;
pub mod models;
pub mod normalize;

pub use dedup::{dedupe_items, NormalizedItem};
pub use error::{Collaborator, PantryError};
pub use models::{
    Ingredient, IngredientMatch, IngredientNameVariant, OwnedIngredient, RawItem, Synonym,
    MAX_ACCEPTED_SYNONYM_RANK,
};
pub use normalize::{normalize_name, singularize};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
