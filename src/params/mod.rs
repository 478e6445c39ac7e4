// Gateway module for params - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod actions;
mod state;

// Public re-exports - the ONLY way to access params functionality
pub use actions::SearchAction;
pub use state::SearchParams;
