use serde::{Deserialize, Serialize};

use crate::normalize::normalize_name;

/// A pantry entry as typed or scanned by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RawItem {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "originalName")]
    pub original_name: Option<String>,
}

impl RawItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            original_name: None,
        }
    }

    pub fn with_original_name(mut self, original_name: impl Into<String>) -> Self {
        self.original_name = Some(original_name.into());
        self
    }

    /// The text the user originally entered, falling back to `name`.
    pub fn original(&self) -> &str {
        self.original_name.as_deref().unwrap_or(&self.name)
    }

    /// Key used to look this item up in the catalog.
    ///
    /// A blank `name` falls back to the original text, lower-cased but
    /// otherwise unmodified.
    pub fn lookup_key(&self) -> String {
        if self.name.trim().is_empty() {
            self.original().to_lowercase()
        } else {
            normalize_name(&self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_key_singularizes_name() {
        assert_eq!(RawItem::new("Tomatoes").lookup_key(), "tomato");
    }

    #[test]
    fn test_blank_name_uses_original_unmodified() {
        let item = RawItem::new("  ").with_original_name("Green Onions");
        assert_eq!(item.lookup_key(), "green onions");
    }

    #[test]
    fn test_original_falls_back_to_name() {
        assert_eq!(RawItem::new("Milk").original(), "Milk");
        let item = RawItem::new("milk").with_original_name("2% Milk");
        assert_eq!(item.original(), "2% Milk");
    }

    #[test]
    fn test_deserialize_without_original_name() {
        let item: RawItem = serde_json::from_str(r#"{"name": "Basil"}"#).unwrap();
        assert_eq!(item.name, "Basil");
        assert!(item.original_name.is_none());

        let item: RawItem =
            serde_json::from_str(r#"{"name": "basil", "originalName": "Fresh Basil"}"#).unwrap();
        assert_eq!(item.original_name.as_deref(), Some("Fresh Basil"));
    }
}
