mod ingredient;
mod owned;
mod raw_item;
mod synonym;

pub use ingredient::{Ingredient, IngredientMatch, IngredientNameVariant};
pub use owned::OwnedIngredient;
pub use raw_item::RawItem;
pub use synonym::{Synonym, MAX_ACCEPTED_SYNONYM_RANK};
