use serde::{Deserialize, Serialize};

/// Highest synonym rank still accepted for fuzzy resolution.
pub const MAX_ACCEPTED_SYNONYM_RANK: i64 = 3;

/// A synonym edge between two curated names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Synonym {
    pub name: String,
    pub synonym: String,
    pub rank: i64,
    pub is_misspelling: bool,
    pub region: Option<String>,
    pub note: Option<String>,
}

impl Synonym {
    pub fn new(name: impl Into<String>, synonym: impl Into<String>, rank: i64) -> Self {
        Self {
            name: name.into(),
            synonym: synonym.into(),
            rank,
            is_misspelling: false,
            region: None,
            note: None,
        }
    }

    pub fn misspelling(mut self) -> Self {
        self.is_misspelling = true;
        self
    }

    /// Whether this synonym may be used to resolve a term.
    ///
    /// Mirrors the filter the catalog queries apply in SQL.
    pub fn is_accepted(&self) -> bool {
        self.rank <= MAX_ACCEPTED_SYNONYM_RANK || self.is_misspelling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_rank_is_accepted() {
        assert!(Synonym::new("onion", "scallion", 1).is_accepted());
        assert!(Synonym::new("onion", "shallot", 3).is_accepted());
    }

    #[test]
    fn test_high_rank_is_rejected() {
        assert!(!Synonym::new("onion", "leek", 4).is_accepted());
    }

    #[test]
    fn test_misspelling_is_accepted_at_any_rank() {
        assert!(Synonym::new("onion", "onoin", 9).misspelling().is_accepted());
    }
}
