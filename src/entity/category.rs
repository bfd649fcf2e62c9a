// src/entity/category.rs
use serde::{Deserialize, Serialize};

use crate::error::JotterError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Category {
    #[default]
    General,
    Work,
    Personal,
    Ideas,
    #[serde(rename = "To-Do")]
    ToDo,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::General,
        Category::Work,
        Category::Personal,
        Category::Ideas,
        Category::ToDo,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::General => write!(f, "General"),
            Category::Work => write!(f, "Work"),
            Category::Personal => write!(f, "Personal"),
            Category::Ideas => write!(f, "Ideas"),
            Category::ToDo => write!(f, "To-Do"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = JotterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "general" => Ok(Category::General),
            "work" => Ok(Category::Work),
            "personal" => Ok(Category::Personal),
            "ideas" | "idea" => Ok(Category::Ideas),
            "to-do" | "todo" => Ok(Category::ToDo),
            _ => Err(JotterError::InvalidCategory(s.to_string())),
        }
    }
}

/// Selector used when listing notes: either every note or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = JotterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!("work".parse::<Category>().unwrap(), Category::Work);
        assert_eq!("Personal".parse::<Category>().unwrap(), Category::Personal);
        assert_eq!("To-Do".parse::<Category>().unwrap(), Category::ToDo);
        assert_eq!("todo".parse::<Category>().unwrap(), Category::ToDo);
        assert_eq!("to_do".parse::<Category>().unwrap(), Category::ToDo);
        assert!(matches!(
            "groceries".parse::<Category>(),
            Err(JotterError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_category_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::ToDo).unwrap();
        assert_eq!(json, "\"To-Do\"");
        let parsed: Category = serde_json::from_str("\"Ideas\"").unwrap();
        assert_eq!(parsed, Category::Ideas);
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for c in Category::ALL {
            assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "work".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Work)
        );
        assert!("nope".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Ideas));
        assert!(CategoryFilter::Only(Category::Ideas).matches(Category::Ideas));
        assert!(!CategoryFilter::Only(Category::Work).matches(Category::Ideas));
    }
}
