pub mod analytics;
pub mod app;
pub mod cache;
pub mod constants;
pub mod filters;
pub mod params;
pub mod query;
pub mod utils;

pub use analytics::{AnalyticsBackend, AnalyticsEvent, AnalyticsFactory};
pub use app::{load_config, Config};
pub use cache::{FileStore, MemoryStore, SessionCache, SessionStore};
pub use filters::{is_active, toggle, FilterDefinition, FilterValue};
pub use params::{SearchAction, SearchParams};
pub use query::QueryKey;
pub use utils::{Result, SyllabusError};
