use serde::{Deserialize, Serialize};

/// Product category.
///
/// Three categories are known to the catalog; any other label is carried
/// verbatim in [`Category::Other`]. Serialized as its plain label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Other(String),
}

impl Category {
    /// Categories with a dedicated constructor.
    pub const KNOWN: [Category; 3] = [Category::Electronics, Category::Clothing, Category::Food];

    /// Map a label to a category (exact, case-sensitive).
    ///
    /// Unrecognized labels, including the empty string, become `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Electronics" => Category::Electronics,
            "Clothing" => Category::Clothing,
            "Food" => Category::Food,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Food => "Food",
            Category::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::from_label(value)
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match Self::from_label(&value) {
            Category::Other(_) => Category::Other(value),
            known => known,
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}
