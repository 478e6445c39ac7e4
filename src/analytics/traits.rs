use serde_json::Value;
use tracing::debug;

use super::types::AnalyticsEvent;

/// Core trait that all analytics backends must implement
pub trait AnalyticsBackend: Send + Sync {
    /// The configuration name of this backend
    fn provider(&self) -> &'static str;

    /// Build the provider-specific payload for an event
    fn payload(&self, event: &AnalyticsEvent) -> Value;

    /// Report an event.
    ///
    /// The actual browser/network bridge is an external collaborator; the
    /// built payload is handed to the tracing sink for the host to forward.
    fn send_event(&self, event: &AnalyticsEvent) {
        let payload = self.payload(event);
        debug!(provider = self.provider(), %payload, "analytics event");
    }
}
