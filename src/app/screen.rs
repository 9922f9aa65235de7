// SPDX-License-Identifier: MPL-2.0
//! Screens the user can navigate between.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Upload,
    Result,
}
