/// Constants module to avoid magic numbers in the codebase

// Cache Configuration
pub const DEFAULT_CACHE_LIFETIME_MS: i64 = 300_000; // 5 minutes
pub const DEFAULT_CACHE_NAMESPACE: &str = "syllabus";

// Query Keys
pub const SESSION_SCOPE_TOKEN: &str = "user";

// Search Parameters
pub const DEFAULT_PAGE_SIZE: u32 = 20;

// API Configuration
pub const DEFAULT_API_ROOT: &str = "http://localhost:8000/api/v1.0";
pub const DEFAULT_LOCALE: &str = "en-us";

// Analytics Providers
pub const PROVIDER_GOOGLE_ANALYTICS: &str = "google_analytics";
pub const PROVIDER_GOOGLE_TAG_MANAGER: &str = "google_tag_manager";
