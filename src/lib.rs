// SPDX-License-Identifier: MPL-2.0
//! `iced_avatar` is a small profile-picture chooser built with the Iced GUI framework.
//!
//! It validates and previews a selected avatar image before upload and surfaces
//! status messages through a transient toast notification system, including
//! one-shot flash messages handed over by the launcher. It also demonstrates
//! internationalization with Fluent and user preference management.

#![doc(html_root_url = "https://docs.rs/iced_avatar/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod flash;
pub mod i18n;
pub mod profile;
pub mod ui;
