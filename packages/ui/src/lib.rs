//! This crate contains all shared UI for the workspace.
//!
//! - [`app`]: root component and route table
//! - [`auth`]: session context holding the API client and signed-in user
//! - [`board`]: async flows behind the dashboard (load, review)
//! - [`cards`]: card, badge, stats and create-form components
//! - [`layout`]: sidebar and responsive shell
//! - [`pages`]: one component per route

// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

pub mod app;
pub mod auth;
pub mod board;
pub mod cards;
pub mod layout;
pub mod pages;

pub use app::{App, Route};
pub use auth::{AuthContext, default_client, use_auth, use_auth_provider};
pub use layout::{Layout, Sidebar};

/// Stylesheet for every component in this crate.
pub const APPROVAL_CSS: Asset = asset!("/assets/approval.css");
