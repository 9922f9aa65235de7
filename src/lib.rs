// SPDX-License-Identifier: MPL-2.0
//! `faktura_lens` is a small desktop client for an invoice OCR service,
//! built with the Iced GUI framework.
//!
//! It uploads invoice documents, follows their background processing on the
//! server, and presents the extracted fields with Czech display formatting.
//! It also demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

pub mod api;
pub mod app;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;
