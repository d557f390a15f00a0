//! Observability subsystem
//!
//! - Structured logging (JSON lines)
//! - Counter-only metrics
//! - Typed lifecycle and request events
//!
//! Observability is read-only: nothing here can fail a request.
//!
//! # Usage
//!
//! ```ignore
//! use restbox::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::RecordCreated, &[("collection", "users"), ("id", "4")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_created();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Severity an event is logged at
pub fn severity_of(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event == Event::InternalError {
        Severity::Error
    } else if event.is_failure() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(severity_of(event), event.as_str(), &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_of(event), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_of() {
        assert_eq!(severity_of(Event::BootFailed), Severity::Fatal);
        assert_eq!(severity_of(Event::InternalError), Severity::Error);
        assert_eq!(severity_of(Event::RecordNotFound), Severity::Warn);
        assert_eq!(severity_of(Event::RecordCreated), Severity::Info);
    }

    #[test]
    fn test_log_event() {
        log_event(Event::BootStart);
        log_event_with_fields(Event::ConfigLoaded, &[("path", "/tmp/restbox.json")]);
    }
}
