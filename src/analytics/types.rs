use serde::{Deserialize, Serialize};

/// A user-interaction event reported to the configured analytics provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    /// Event grouping (e.g. "courseProducts")
    pub category: String,
    /// What happened (e.g. "select", "purchase")
    pub action: String,
    /// Free-form qualifier, usually the resource identifier
    pub label: String,
}

impl AnalyticsEvent {
    pub fn new(
        category: impl Into<String>,
        action: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: label.into(),
        }
    }
}
