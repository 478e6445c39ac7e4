// Gateway module for query - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod keys;

// Public re-exports - the ONLY way to access query functionality
pub use keys::QueryKey;
