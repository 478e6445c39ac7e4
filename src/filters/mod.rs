// Gateway module for filters - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod toggle;
mod types;

// Public re-exports - the ONLY way to access filters functionality
pub use toggle::{is_active, toggle};
pub use types::{FilterDefinition, FilterValue};
