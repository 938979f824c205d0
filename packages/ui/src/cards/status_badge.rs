//! Status badge component.

use approval_core::CardStatus;
use dioxus::prelude::*;

/// Colored pill with the status label. Unknown statuses render as pending.
#[component]
pub fn StatusBadge(status: CardStatus) -> Element {
    let badge = status.badge();

    rsx! {
        span {
            class: "status-badge {badge.class}",
            {badge.label}
        }
    }
}
