//! Core domain types for the content approval dashboard.
//!
//! This crate contains shared types used across all packages:
//! - ContentCard, CardStatus and ContentType for the workflow items
//! - User, Role and capability resolution
//! - Comments
//! - Stats, filters and the dashboard state machine
//! - Presentation tables (badges, labels, dates) and sidebar navigation

mod card;
mod comment;
mod dashboard;
mod filter;
mod id;
mod nav;
mod presentation;
mod stats;
mod user;

#[cfg(test)]
mod test_support;

pub use card::{
    Attachment, CardStatus, ContentCard, ContentCardUpdate, ContentType, NewContentCard,
    UserRef, UserSummary,
};
pub use comment::{Comment, NewComment};
pub use dashboard::{DashboardState, LOAD_ERROR_PREFIX, LoadTicket, ReviewDecision};
pub use filter::{
    ALL, CardFilters, CardQuery, Selection, StatusFilter, TypeFilter, filter_cards,
    matches_search,
};
pub use id::{CardId, CommentId, UserId};
pub use nav::{NAVIGATION, NavItem, visible_nav_items};
pub use presentation::{BadgeStyle, format_date, format_date_in};
pub use stats::CardStats;
pub use user::{
    Capabilities, PasswordChange, RegisterRequest, Role, User, UserQuery, UserUpdate,
    capabilities_for, show_review_actions,
};
