use serde::{Deserialize, Serialize};
use std::fmt;

/// A canonical ingredient from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
}

impl Ingredient {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Catalog-maintained name forms for one ingredient.
///
/// `curated_name` is the join key between an ingredient and its synonyms,
/// and groups sibling ingredients that share the same label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientNameVariant {
    pub ingredient_id: String,
    pub original_name: String,
    pub last_noun: String,
    pub curated_name: String,
    pub extended_name: String,
}

impl IngredientNameVariant {
    pub fn new(
        ingredient_id: impl Into<String>,
        original_name: impl Into<String>,
        curated_name: impl Into<String>,
    ) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            original_name: original_name.into(),
            last_noun: String::new(),
            curated_name: curated_name.into(),
            extended_name: String::new(),
        }
    }

    pub fn with_last_noun(mut self, last_noun: impl Into<String>) -> Self {
        self.last_noun = last_noun.into();
        self
    }

    pub fn with_extended_name(mut self, extended_name: impl Into<String>) -> Self {
        self.extended_name = extended_name.into();
        self
    }
}

/// A resolved ingredient identity produced by a match strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct IngredientMatch {
    pub ingredient_id: String,
    pub name: String,
}

impl IngredientMatch {
    pub fn new(ingredient_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for IngredientMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.ingredient_id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_display() {
        let ingredient = Ingredient::new("ing-1", "Onion");
        assert_eq!(format!("{}", ingredient), "Onion (ing-1)");
    }

    #[test]
    fn test_name_variant_builder() {
        let variant = IngredientNameVariant::new("ing-1", "Red Onions", "onion")
            .with_last_noun("onion")
            .with_extended_name("red onion");
        assert_eq!(variant.curated_name, "onion");
        assert_eq!(variant.last_noun, "onion");
        assert_eq!(variant.extended_name, "red onion");
    }

    #[test]
    fn test_match_serializes_snake_case_fields() {
        let m = IngredientMatch::new("ing-7", "Garlic");
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["ingredient_id"], "ing-7");
        assert_eq!(json["name"], "Garlic");
    }
}
