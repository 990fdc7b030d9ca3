//! Telemetry boundary
//!
//! Events are fire-and-forget. A sink may fail; callers log the error and move
//! on, nothing is retried.

use std::cell::RefCell;
use std::rc::Rc;
use strum::{Display, IntoStaticStr};
use thiserror::Error;

/// Category of a telemetry event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum EventCategory {
    #[strum(serialize = "pageview")]
    PageView,
    #[strum(serialize = "generic")]
    Generic,
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Telemetry backend unavailable: {0}")]
    Unavailable(String),

    #[error("Telemetry event rejected: {0}")]
    Rejected(String),
}

/// Destination for telemetry events
pub trait TelemetrySink {
    fn send_event(&self, category: EventCategory, payload: &str) -> Result<(), TelemetryError>;
}

/// Send an event, logging and swallowing any failure
pub fn send_best_effort(sink: &dyn TelemetrySink, category: EventCategory, payload: &str) {
    if let Err(e) = sink.send_event(category, payload) {
        log::warn!("Telemetry: dropped {} event {:?}: {}", category, payload, e);
    }
}

/// Sink that writes events to the log
///
/// Page views are reported against `page_path`, the path the dashboard is
/// served under.
#[derive(Debug, Clone)]
pub struct LogTelemetry {
    page_path: String,
}

impl LogTelemetry {
    pub fn new(page_path: impl Into<String>) -> Self {
        Self {
            page_path: page_path.into(),
        }
    }
}

impl TelemetrySink for LogTelemetry {
    fn send_event(&self, category: EventCategory, payload: &str) -> Result<(), TelemetryError> {
        match category {
            EventCategory::PageView => log::info!(
                "Telemetry: send page view: {}",
                page_view_path(&self.page_path, payload)
            ),
            EventCategory::Generic => log::info!("Telemetry: send generic event: {}", payload),
        }
        Ok(())
    }
}

/// Path a page view is reported under: `{page_path}/{plugin}`
fn page_view_path(page_path: &str, plugin: &str) -> String {
    format!("{}/{}", page_path.trim_end_matches('/'), plugin)
}

/// Sink used when telemetry is disabled
#[derive(Debug, Default)]
pub struct NoopTelemetry;

impl TelemetrySink for NoopTelemetry {
    fn send_event(&self, _category: EventCategory, _payload: &str) -> Result<(), TelemetryError> {
        Ok(())
    }
}

/// One recorded event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryEvent {
    pub category: EventCategory,
    pub payload: String,
}

/// Sink that keeps every event in memory
///
/// Clones share the same buffer, so a caller can keep one handle and pass
/// another to the meta-reducer.
#[derive(Debug, Clone, Default)]
pub struct MemoryTelemetry {
    events: Rc<RefCell<Vec<TelemetryEvent>>>,
}

impl MemoryTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events.borrow().clone()
    }

    /// Payloads of events in one category, in emission order
    pub fn payloads(&self, category: EventCategory) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.category == category)
            .map(|event| event.payload.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl TelemetrySink for MemoryTelemetry {
    fn send_event(&self, category: EventCategory, payload: &str) -> Result<(), TelemetryError> {
        self.events.borrow_mut().push(TelemetryEvent {
            category,
            payload: payload.to_string(),
        });
        Ok(())
    }
}
