// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two periodic sources drive the app: a fast tick that sweeps expired
//! notifications, and the result poll that follows server-side processing.
//! Both are conditional so an idle app schedules nothing.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// Only active while notifications are visible; the sweep itself is cheap
/// but there is no reason to wake an idle event loop.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the result-poll subscription.
///
/// Active while an upload is being processed server-side. Each firing asks
/// the request layer for the current result; cadence comes from the
/// `[server]` config section.
pub fn create_poll_subscription(is_polling: bool, interval: Duration) -> Subscription<Message> {
    if is_polling {
        time::every(interval).map(Message::PollTick)
    } else {
        Subscription::none()
    }
}
