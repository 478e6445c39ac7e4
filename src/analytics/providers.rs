use serde_json::{json, Value};

use super::traits::AnalyticsBackend;
use super::types::AnalyticsEvent;
use crate::constants::{PROVIDER_GOOGLE_ANALYTICS, PROVIDER_GOOGLE_TAG_MANAGER};

/// Google Analytics backend: events go out as `ga` command-queue calls
#[derive(Debug, Default)]
pub struct GoogleAnalytics;

impl AnalyticsBackend for GoogleAnalytics {
    fn provider(&self) -> &'static str {
        PROVIDER_GOOGLE_ANALYTICS
    }

    fn payload(&self, event: &AnalyticsEvent) -> Value {
        json!(["send", "event", event.category, event.action, event.label])
    }
}

/// Google Tag Manager backend: events are pushed onto the data layer
#[derive(Debug, Default)]
pub struct GoogleTagManager;

impl AnalyticsBackend for GoogleTagManager {
    fn provider(&self) -> &'static str {
        PROVIDER_GOOGLE_TAG_MANAGER
    }

    fn payload(&self, event: &AnalyticsEvent) -> Value {
        json!({
            "event": event.action,
            "eventProps": {
                "category": event.category,
                "label": event.label,
            },
        })
    }
}
