// SPDX-License-Identifier: MPL-2.0
//! Event collection and the shared logging handle.
//!
//! The [`DiagnosticsCollector`] owns the bounded event buffer; components hold
//! a [`DiagnosticsHandle`] clone and log through it without caring where the
//! events end up.

use super::buffer::CircularBuffer;
use super::events::DiagnosticEvent;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Number of events retained in memory before the oldest are evicted.
const EVENT_BUFFER_CAPACITY: usize = 1000;

/// A diagnostic event with the moment it was captured.
#[derive(Debug, Clone)]
pub struct TimestampedEvent {
    pub at: Instant,
    pub event: DiagnosticEvent,
}

/// Owns the event buffer and hands out logging handles.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    shared: Arc<Mutex<CircularBuffer<TimestampedEvent>>>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(CircularBuffer::new(EVENT_BUFFER_CAPACITY))),
        }
    }

    /// Returns a cloneable handle components can log through.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Returns the captured events in chronological order.
    #[must_use]
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        match self.shared.lock() {
            Ok(buffer) => buffer.iter().map(|entry| entry.event.clone()).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Number of events currently retained.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.shared.lock().map(|buffer| buffer.len()).unwrap_or(0)
    }
}

/// Cheap cloneable handle for logging diagnostic events.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    shared: Arc<Mutex<CircularBuffer<TimestampedEvent>>>,
}

impl DiagnosticsHandle {
    /// Records an event and mirrors it to stderr.
    ///
    /// Logging never fails: if the buffer lock is poisoned the event is
    /// dropped and only the stderr line remains.
    pub fn log(&self, event: DiagnosticEvent) {
        eprintln!("[faktura_lens] {}", event);
        if let Ok(mut buffer) = self.shared.lock() {
            buffer.push(TimestampedEvent {
                at: Instant::now(),
                event,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_events_are_retained_in_order() {
        let collector = DiagnosticsCollector::new();
        let handle = collector.handle();

        handle.log(DiagnosticEvent::RequestStarted {
            operation: "upload",
        });
        handle.log(DiagnosticEvent::RequestCompleted {
            operation: "upload",
            status: 200,
        });

        let events = collector.events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            DiagnosticEvent::RequestStarted {
                operation: "upload"
            }
        );
        assert_eq!(
            events[1],
            DiagnosticEvent::RequestCompleted {
                operation: "upload",
                status: 200
            }
        );
    }

    #[test]
    fn cloned_handles_share_the_buffer() {
        let collector = DiagnosticsCollector::new();
        let first = collector.handle();
        let second = first.clone();

        first.log(DiagnosticEvent::FileSelected {
            name: "a.pdf".to_string(),
        });
        second.log(DiagnosticEvent::FileSelected {
            name: "b.pdf".to_string(),
        });

        assert_eq!(collector.event_count(), 2);
    }
}
