//! Observability for exportdir
//!
//! Structured JSON logging and typed events. Observability is read-only:
//! it never changes what the engine computes.
//!
//! ```ignore
//! use exportdir::observability::{log_event_with_fields, Event, ObservationScope};
//!
//! log_event_with_fields(Event::CriteriaChanged, &[("field", "company")]);
//!
//! let scope = ObservationScope::new("SNAPSHOT_LOAD");
//! // ... fetch ...
//! scope.complete();
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::{ObservationScope, Timer};

/// Log an event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
