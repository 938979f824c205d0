//! Content card components.

mod content_card;
mod create_card_form;
mod stats_grid;
mod status_badge;

pub use content_card::ContentCardView;
pub use create_card_form::{CreateCardForm, build_draft};
pub use stats_grid::StatsGrid;
pub use status_badge::StatusBadge;
