use serde::{Deserialize, Serialize};

/// Action descriptor applied to [`super::SearchParams`] by its reducer.
///
/// Produced by UI-side logic (notably the filter toggle); the parameter bag
/// itself lives wherever the surrounding application keeps its store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchAction {
    /// Add a filter value; `payload` is the value key
    FilterAdd { filter: String, payload: String },
    /// Remove a filter value; `payload` is the value key
    FilterRemove { filter: String, payload: String },
    /// Drop all filters and the full-text query
    FilterReset,
    /// Replace the full-text query
    QueryUpdate { query: Option<String> },
    /// Move to another page of results
    PageChange { offset: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_actions_serialize_with_type_tags() {
        let action = SearchAction::FilterAdd {
            filter: "subjects".to_string(),
            payload: "L-0001".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"type": "FILTER_ADD", "filter": "subjects", "payload": "L-0001"})
        );

        let action = SearchAction::PageChange { offset: 40 };
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"type": "PAGE_CHANGE", "offset": 40})
        );
    }
}
