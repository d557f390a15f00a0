//! Observable events
//!
//! Every log line the server writes names one of these events.

use std::fmt;

/// Observable events in restbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Seed records inserted into a collection
    CollectionSeeded,
    /// Listener bound, ready for requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped
    ShutdownComplete,
    /// Startup failed
    BootFailed,

    // Record operations
    /// Record inserted
    RecordCreated,
    /// Record fully replaced
    RecordReplaced,
    /// Record partially updated
    RecordMerged,
    /// Record removed
    RecordDeleted,
    /// Operation referenced an absent id
    RecordNotFound,
    /// Request body rejected before reaching the store
    RequestRejected,
    /// Unexpected server-side failure
    InternalError,
}

impl Event {
    /// Returns the event name as logged
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CollectionSeeded => "COLLECTION_SEEDED",
            Event::Serving => "SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::BootFailed => "BOOT_FAILED",
            Event::RecordCreated => "RECORD_CREATED",
            Event::RecordReplaced => "RECORD_REPLACED",
            Event::RecordMerged => "RECORD_MERGED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::RecordNotFound => "RECORD_NOT_FOUND",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Whether this event terminates the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }

    /// Whether this event reports a failed request
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Event::RecordNotFound | Event::RequestRejected | Event::InternalError
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
