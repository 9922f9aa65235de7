// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configurable settings.

/// Server the client talks to when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Upper bound on a single HTTP exchange.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// How often the result endpoint is polled while processing runs.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 2;

pub const MIN_POLL_INTERVAL_SECS: u64 = 1;
pub const MAX_POLL_INTERVAL_SECS: u64 = 60;
