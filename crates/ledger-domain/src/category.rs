//! Spending categories a transaction can be filed under.

use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Fixed set of spending categories.
///
/// The first member is the default used when a submission does not name one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Default)]
pub enum Category {
    #[default]
    Food,
    Travel,
    Shopping,
    Entertainment,
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }

    /// Zero-based position of the category within [`Category::ALL`].
    pub fn ordinal(self) -> usize {
        match self {
            Category::Food => 0,
            Category::Travel => 1,
            Category::Shopping => 2,
            Category::Entertainment => 3,
            Category::Other => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseCategoryError {
                input: needle.to_string(),
            })
    }
}

/// Returned when text does not name a known [`Category`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    input: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category `{}`", self.input)
    }
}

impl Error for ParseCategoryError {}
