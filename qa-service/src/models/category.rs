//! Topical categories produced by the classifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Topical domain of a question, used to select a knowledge base entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Networking,
    Security,
    Storage,
    Virtualization,
}

/// Classifier output order. Index `n % CATEGORIES.len()` selects the category.
pub const CATEGORIES: [Category; 4] = [
    Category::Networking,
    Category::Security,
    Category::Storage,
    Category::Virtualization,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Networking => "networking",
            Category::Security => "security",
            Category::Storage => "storage",
            Category::Virtualization => "virtualization",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "networking" => Ok(Category::Networking),
            "security" => Ok(Category::Security),
            "storage" => Ok(Category::Storage),
            "virtualization" => Ok(Category::Virtualization),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}
