use tracing::warn;

use super::providers::{GoogleAnalytics, GoogleTagManager};
use super::traits::AnalyticsBackend;
use crate::constants::{PROVIDER_GOOGLE_ANALYTICS, PROVIDER_GOOGLE_TAG_MANAGER};

/// Factory for creating analytics backends from a configuration string
pub struct AnalyticsFactory;

impl AnalyticsFactory {
    /// Map a configured provider name to a backend.
    ///
    /// Unknown names are not an error: analytics is simply disabled and the
    /// caller gets `None`.
    pub fn create(provider: &str) -> Option<Box<dyn AnalyticsBackend>> {
        match provider {
            PROVIDER_GOOGLE_ANALYTICS => Some(Box::new(GoogleAnalytics)),
            PROVIDER_GOOGLE_TAG_MANAGER => Some(Box::new(GoogleTagManager)),
            other => {
                warn!("unknown analytics provider '{}', analytics disabled", other);
                None
            }
        }
    }
}
