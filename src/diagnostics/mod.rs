// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for capturing advisory activity events.
//!
//! Components log what they are about to do (requests starting, files picked,
//! polling beginning) through a cheap cloneable [`DiagnosticsHandle`]. Events
//! land in a memory-bounded circular buffer and are mirrored to stderr.
//!
//! Nothing in application logic reads these events back; they exist for
//! troubleshooting and are not part of any functional contract.

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle, TimestampedEvent};
pub use events::DiagnosticEvent;
