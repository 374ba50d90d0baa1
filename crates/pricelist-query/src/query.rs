/// Inclusive numeric range with optional ends.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    /// Range with no limits.
    pub const UNBOUNDED: Bounds = Bounds {
        min: None,
        max: None,
    };

    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: f64) -> Self {
        Self::new(Some(min), None)
    }

    pub fn at_most(max: f64) -> Self {
        Self::new(None, Some(max))
    }

    /// True when at least one end is set.
    pub fn is_bounded(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// Search criteria for [`search`](crate::search).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Case-insensitive substring of the product name; empty matches everything.
    pub name_fragment: String,
    pub price: Bounds,
    pub weight: Bounds,
}

impl SearchQuery {
    pub fn new(name_fragment: impl Into<String>) -> Self {
        Self {
            name_fragment: name_fragment.into(),
            ..Self::default()
        }
    }

    /// Query matching every record.
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_price(mut self, price: Bounds) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: Bounds) -> Self {
        self.weight = weight;
        self
    }
}
