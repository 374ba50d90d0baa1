use std::fmt;

use serde::Deserialize;

/// A normalized attribute that source columns are resolved into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalField {
    /// Product label.
    Name,
    /// Monetary value.
    Price,
    /// Unit mass or volume.
    Weight,
}

impl CanonicalField {
    /// All canonical fields in resolution order.
    pub const ALL: [CanonicalField; 3] = [Self::Name, Self::Price, Self::Weight];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Weight => "weight",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
