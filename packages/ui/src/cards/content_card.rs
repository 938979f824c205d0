//! Card component for a single piece of content.

use approval_core::{ContentCard, ReviewDecision, format_date, show_review_actions};
use dioxus::prelude::*;

use super::StatusBadge;

/// Props for ContentCardView component.
#[derive(Props, Clone, PartialEq)]
pub struct ContentCardViewProps {
    /// The card to display.
    pub card: ContentCard,
    /// Whether the viewer may review cards. Actions still only show on
    /// pending cards.
    #[props(default = true)]
    pub show_actions: bool,
    /// Callback when the card body is clicked.
    pub on_view: EventHandler<ContentCard>,
    /// Callback when approve is clicked.
    pub on_approve: EventHandler<ContentCard>,
    /// Callback when reject is clicked.
    pub on_reject: EventHandler<ContentCard>,
}

#[component]
pub fn ContentCardView(props: ContentCardViewProps) -> Element {
    let card = props.card.clone();
    let type_label = card.content_type.label().to_string();
    let created = format_date(&card.created_at);
    let due = card.due_date.as_ref().map(format_date);
    let author = card.author_name().map(str::to_string);
    let attachments = card.attachments.len();
    let actions = show_review_actions(props.show_actions, &card.status);
    let approve_label = ReviewDecision::Approve.label();
    let reject_label = ReviewDecision::Reject.label();

    let card_for_view = card.clone();
    let card_for_approve = card.clone();
    let card_for_reject = card.clone();

    rsx! {
        div {
            class: "content-card",
            onclick: move |_| props.on_view.call(card_for_view.clone()),

            div { class: "content-card-header",
                div { class: "content-card-heading",
                    h3 { class: "content-card-title", "{card.title}" }
                    p { class: "content-card-type", "{type_label}" }
                }
                StatusBadge { status: card.status.clone() }
            }

            p { class: "content-card-description", "{card.description}" }

            div { class: "content-card-meta",
                if let Some(ref author) = author {
                    span { class: "meta-item",
                        span { class: "meta-icon", "👤" }
                        "{author}"
                    }
                }
                span { class: "meta-item",
                    span { class: "meta-icon", "📅" }
                    "{created}"
                }
                if card.comments_count > 0 {
                    span { class: "meta-item",
                        span { class: "meta-icon", "💬" }
                        "{card.comments_count}"
                    }
                }
                if attachments > 0 {
                    span { class: "meta-item",
                        span { class: "meta-icon", "📎" }
                        "{attachments}"
                    }
                }
            }

            if actions {
                div { class: "content-card-actions",
                    button {
                        class: "btn btn-approve",
                        onclick: move |e| {
                            e.stop_propagation();
                            props.on_approve.call(card_for_approve.clone());
                        },
                        "✓ {approve_label}"
                    }
                    button {
                        class: "btn btn-reject",
                        onclick: move |e| {
                            e.stop_propagation();
                            props.on_reject.call(card_for_reject.clone());
                        },
                        "✕ {reject_label}"
                    }
                }
            }

            if let Some(ref due) = due {
                div { class: "content-card-due", "Vencimento: {due}" }
            }
        }
    }
}
