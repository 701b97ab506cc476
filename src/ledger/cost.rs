use serde::{Deserialize, Serialize};

/// A single named spend. Entries carry no identifier and are never edited once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    pub name: String,
    pub cost: f64,
}

impl CostEntry {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}
