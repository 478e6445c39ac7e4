// Gateway module for analytics - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod factory;
mod providers;
mod traits;
mod types;

// Public re-exports - the ONLY way to access analytics functionality
pub use factory::AnalyticsFactory;
pub use providers::{GoogleAnalytics, GoogleTagManager};
pub use traits::AnalyticsBackend;
pub use types::AnalyticsEvent;
