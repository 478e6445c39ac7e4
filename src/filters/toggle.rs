use super::types::{FilterDefinition, FilterValue};
use crate::params::{SearchAction, SearchParams};

/// Whether `value` is currently selected under `filter` in the parameter bag.
///
/// Active state is derived, never stored: it is pure membership of the value
/// key in the bag's entry for the filter name. Absent entries are inactive.
pub fn is_active(params: &SearchParams, filter: &FilterDefinition, value: &FilterValue) -> bool {
    params
        .filter_values(&filter.name)
        .iter()
        .any(|key| key == &value.key)
}

/// Compute the action that flips `value` under `filter`.
///
/// Returns a remove action when the value is active, an add action when it
/// is not; the bag itself is only mutated when the surrounding store applies
/// the action through the reducer.
pub fn toggle(params: &SearchParams, filter: &FilterDefinition, value: &FilterValue) -> SearchAction {
    if is_active(params, filter, value) {
        SearchAction::FilterRemove {
            filter: filter.name.clone(),
            payload: value.key.clone(),
        }
    } else {
        SearchAction::FilterAdd {
            filter: filter.name.clone(),
            payload: value.key.clone(),
        }
    }
}
