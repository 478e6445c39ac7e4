use serde::{Deserialize, Serialize};

/// A named, enumerable facet used to narrow a resource list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDefinition {
    /// Parameter name the facet filters under (e.g. "subjects")
    pub name: String,
    /// Display title for the facet group
    pub human_name: String,
    /// Candidate values, in the order the backend ranked them
    pub values: Vec<FilterValue>,
}

/// One selectable value of a facet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterValue {
    /// Stable key carried in the parameter bag
    pub key: String,
    /// Display label
    pub human_name: String,
    /// Number of results carrying this value under the current params.
    /// Zero-count values are rendered disabled; that gating is a
    /// presentation concern, not enforced here.
    pub count: u64,
}
