use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven number categories a player can classify into.
///
/// The lowercase string form (`"complex"`, `"imaginary"`, ...) is the id used
/// in static data and in persisted leaderboard-adjacent records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Complex,
    Imaginary,
    Rational,
    Irrational,
    Integer,
    Whole,
    Natural,
}

impl CategoryId {
    /// All categories in display order.
    pub const ALL: [CategoryId; 7] = [
        CategoryId::Complex,
        CategoryId::Imaginary,
        CategoryId::Rational,
        CategoryId::Irrational,
        CategoryId::Integer,
        CategoryId::Whole,
        CategoryId::Natural,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Complex => "complex",
            CategoryId::Imaginary => "imaginary",
            CategoryId::Rational => "rational",
            CategoryId::Irrational => "irrational",
            CategoryId::Integer => "integer",
            CategoryId::Whole => "whole",
            CategoryId::Natural => "natural",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for parsing a `CategoryId` from its string id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    raw: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category id: {}", self.raw)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for CategoryId {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complex" => Ok(CategoryId::Complex),
            "imaginary" => Ok(CategoryId::Imaginary),
            "rational" => Ok(CategoryId::Rational),
            "irrational" => Ok(CategoryId::Irrational),
            "integer" => Ok(CategoryId::Integer),
            "whole" => Ok(CategoryId::Whole),
            "natural" => Ok(CategoryId::Natural),
            _ => Err(ParseCategoryError { raw: s.to_string() }),
        }
    }
}

/// A category as shown to the player: id plus display name and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
}

impl Category {
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Read-only collection of categories, injected at startup so the session
/// logic never depends on the static data directly.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    #[must_use]
    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_id_round_trips_through_str() {
        for id in CategoryId::ALL {
            let parsed: CategoryId = id.as_str().parse().unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn unknown_category_id_fails_to_parse() {
        assert!("real numbers".parse::<CategoryId>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&CategoryId::Irrational).unwrap();
        assert_eq!(json, "\"irrational\"");
    }

    #[test]
    fn registry_lookup_by_id() {
        let registry = CategoryRegistry::new(vec![
            Category::new(CategoryId::Whole, "Whole Numbers", "Non-negative integers"),
            Category::new(CategoryId::Natural, "Natural Numbers", "Positive integers"),
        ]);
        assert_eq!(
            registry.get(CategoryId::Natural).unwrap().name(),
            "Natural Numbers"
        );
        assert!(registry.get(CategoryId::Complex).is_none());
    }
}
