//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events in a directory session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Snapshot
    /// Snapshot fetch failed, no directory will be shown
    SnapshotUnavailable,
    /// A product list fell back to its raw text
    ProductListFallback,

    // Engine
    /// One or more criteria fields replaced
    CriteriaChanged,
    /// All criteria cleared at once
    FiltersCleared,
    /// Reveal count back to one page
    DisclosureReset,
    /// One more page revealed
    DisclosureExpanded,

    // Presentation
    /// A browse action could not be parsed
    ActionRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SnapshotUnavailable => "SNAPSHOT_UNAVAILABLE",
            Event::ProductListFallback => "PRODUCT_LIST_FALLBACK",
            Event::CriteriaChanged => "CRITERIA_CHANGED",
            Event::FiltersCleared => "FILTERS_CLEARED",
            Event::DisclosureReset => "DISCLOSURE_RESET",
            Event::DisclosureExpanded => "DISCLOSURE_EXPANDED",
            Event::ActionRejected => "ACTION_REJECTED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::SnapshotUnavailable => Severity::Error,
            Event::ActionRejected => Severity::Warn,
            Event::DisclosureReset | Event::DisclosureExpanded | Event::ProductListFallback => {
                Severity::Trace
            }
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::ConfigLoaded,
            Event::SnapshotUnavailable,
            Event::ProductListFallback,
            Event::CriteriaChanged,
            Event::FiltersCleared,
            Event::DisclosureReset,
            Event::DisclosureExpanded,
            Event::ActionRejected,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(Event::SnapshotUnavailable.severity(), Severity::Error);
        assert_eq!(Event::ConfigLoaded.severity(), Severity::Info);
        assert_eq!(Event::DisclosureExpanded.severity(), Severity::Trace);
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::CriteriaChanged), "CRITERIA_CHANGED");
    }
}
