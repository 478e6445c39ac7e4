use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::actions::SearchAction;
use crate::constants::DEFAULT_PAGE_SIZE;

/// The active search parameter bag: pagination, full-text query, and the
/// selected value keys of each facet filter, keyed by filter name.
///
/// Filters with no selected values have no entry at all; the reducer keeps
/// that invariant so membership checks never see an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub limit: u32,
    pub offset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(flatten)]
    pub filters: BTreeMap<String, Vec<String>>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
            query: None,
            filters: BTreeMap::new(),
        }
    }
}

impl SearchParams {
    /// The selected value keys for a filter, empty when none are active
    pub fn filter_values(&self, name: &str) -> &[String] {
        self.filters.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Reducer: apply one action to the bag.
    ///
    /// Any change to the search criteria (filters or query) returns the user
    /// to the first page; only `PageChange` moves the offset elsewhere.
    pub fn apply(&mut self, action: SearchAction) {
        match action {
            SearchAction::FilterAdd { filter, payload } => {
                let values = self.filters.entry(filter).or_default();
                if !values.contains(&payload) {
                    values.push(payload);
                }
                self.offset = 0;
            }
            SearchAction::FilterRemove { filter, payload } => {
                if let Some(values) = self.filters.get_mut(&filter) {
                    values.retain(|key| key != &payload);
                    if values.is_empty() {
                        self.filters.remove(&filter);
                    }
                }
                self.offset = 0;
            }
            SearchAction::FilterReset => {
                self.filters.clear();
                self.query = None;
                self.offset = 0;
            }
            SearchAction::QueryUpdate { query } => {
                self.query = query.filter(|q| !q.is_empty());
                self.offset = 0;
            }
            SearchAction::PageChange { offset } => {
                self.offset = offset;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn add(filter: &str, payload: &str) -> SearchAction {
        SearchAction::FilterAdd {
            filter: filter.to_string(),
            payload: payload.to_string(),
        }
    }

    fn remove(filter: &str, payload: &str) -> SearchAction {
        SearchAction::FilterRemove {
            filter: filter.to_string(),
            payload: payload.to_string(),
        }
    }

    #[test]
    fn test_filter_add_is_idempotent_per_key() {
        let mut params = SearchParams::default();
        params.apply(add("subjects", "L-0001"));
        params.apply(add("subjects", "L-0001"));
        params.apply(add("subjects", "L-0002"));

        assert_eq!(params.filter_values("subjects"), ["L-0001", "L-0002"]);
    }

    #[test]
    fn test_filter_changes_reset_pagination() {
        let mut params = SearchParams::default();
        params.apply(SearchAction::PageChange { offset: 40 });
        assert_eq!(params.offset, 40);

        params.apply(add("subjects", "L-0001"));
        assert_eq!(params.offset, 0);

        params.apply(SearchAction::PageChange { offset: 60 });
        params.apply(remove("subjects", "L-0001"));
        assert_eq!(params.offset, 0);
    }

    #[test]
    fn test_removing_last_value_drops_the_entry() {
        let mut params = SearchParams::default();
        params.apply(add("organizations", "O-0003"));
        params.apply(remove("organizations", "O-0003"));

        assert!(!params.filters.contains_key("organizations"));
    }

    #[test]
    fn test_removing_an_absent_value_is_a_no_op() {
        let mut params = SearchParams::default();
        params.apply(remove("subjects", "never-added"));
        assert_eq!(params, SearchParams::default());
    }

    #[test]
    fn test_query_update_resets_offset_and_blank_clears() {
        let mut params = SearchParams::default();
        params.apply(SearchAction::PageChange { offset: 20 });
        params.apply(SearchAction::QueryUpdate {
            query: Some("philosophy".to_string()),
        });
        assert_eq!(params.query.as_deref(), Some("philosophy"));
        assert_eq!(params.offset, 0);

        params.apply(SearchAction::QueryUpdate {
            query: Some(String::new()),
        });
        assert_eq!(params.query, None);
    }

    #[test]
    fn test_filter_reset_clears_everything_but_limit() {
        let mut params = SearchParams {
            limit: 50,
            ..Default::default()
        };
        params.apply(add("subjects", "L-0001"));
        params.apply(SearchAction::QueryUpdate {
            query: Some("math".to_string()),
        });
        params.apply(SearchAction::FilterReset);

        assert_eq!(params.limit, 50);
        assert!(params.filters.is_empty());
        assert_eq!(params.query, None);
        assert_eq!(params.offset, 0);
    }
}
