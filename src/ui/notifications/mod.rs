// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (upload success, request failures, etc.) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Lifecycle
//!
//! Every notification has two removal paths: the dismiss button and the
//! auto-dismiss timer sweep. Whichever fires first wins; the other finds the
//! notification already gone and does nothing. Concurrent notifications stack
//! independently; pushing never replaces or deduplicates.
//!
//! # Design Considerations
//!
//! - Toast duration: ~3s for success/info, 5s for warnings and errors
//! - Position: bottom-right corner, newest on top

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
