//! Dashboard page: stats, filters and the card grid.

use approval_core::{
    ALL, CardFilters, CardStatus, ContentCard, ContentType, DashboardState, ReviewDecision,
    StatusFilter, TypeFilter,
};
use dioxus::prelude::*;

use crate::board::{reload, review};
use crate::cards::{ContentCardView, CreateCardForm, StatsGrid};
use crate::use_auth;

/// Number of placeholder cards shown while loading.
const SKELETON_CARDS: usize = 6;

/// Props for DashboardPage component.
#[derive(Props, Clone, PartialEq)]
pub struct DashboardPageProps {
    /// Callback when a card is opened.
    pub on_view: EventHandler<ContentCard>,
}

#[component]
pub fn DashboardPage(props: DashboardPageProps) -> Element {
    let auth = use_auth();
    let mut board = use_signal(DashboardState::new);
    let mut filters = use_signal(CardFilters::default);
    let mut show_create_form = use_signal(|| false);

    // Only status and type go to the server; search is applied locally.
    let query = use_memo(move || filters.read().server_query());

    // Load on mount and whenever the server-side filters change
    let client = auth.client.clone();
    use_effect(move || {
        let query = query();
        let client = client.clone();
        spawn(async move {
            reload(&mut board, &client, &query).await;
        });
    });

    let client = auth.client.clone();
    let on_review = move |card: ContentCard, decision: ReviewDecision| {
        let client = client.clone();
        spawn(async move {
            review(&mut board, &client, &card.id, decision, move || query()).await;
        });
    };
    let on_approve = {
        let on_review = on_review.clone();
        move |card: ContentCard| on_review(card, ReviewDecision::Approve)
    };
    let on_reject = move |card: ContentCard| on_review(card, ReviewDecision::Reject);

    let client = auth.client.clone();
    let on_created = move |_card: ContentCard| {
        show_create_form.set(false);
        let client = client.clone();
        let query = query();
        spawn(async move {
            reload(&mut board, &client, &query).await;
        });
    };

    let capabilities = auth.capabilities();
    let user_name = auth
        .current_user()
        .map(|user| user.name)
        .unwrap_or_default();

    let current = filters();
    let narrowed = current.is_narrowed();
    let status_value = current.status.value().to_string();
    let type_value = current.content_type.value().to_string();

    let (loading, error, stats, visible) = {
        let state = board.read();
        let visible: Vec<ContentCard> = state
            .visible_cards(&current.search)
            .into_iter()
            .cloned()
            .collect();
        (state.loading, state.error.clone(), state.stats, visible)
    };

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-description",
                        "Bem-vindo, {user_name}! Gerencie seus cards de conteúdo."
                    }
                }
                if capabilities.can_create {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create_form.set(true),
                        "+ Novo Card"
                    }
                }
            }

            StatsGrid { stats }

            div { class: "card filters-card",
                div { class: "filters",
                    input {
                        class: "search-input",
                        r#type: "search",
                        placeholder: "Buscar cards...",
                        value: "{current.search}",
                        oninput: move |e| filters.write().search = e.value(),
                    }
                    select {
                        class: "filter-select",
                        value: "{status_value}",
                        onchange: move |e| filters.write().status = StatusFilter::parse(&e.value()),
                        option { value: ALL, "Todos os Status" }
                        for status in CardStatus::KNOWN {
                            option { key: "{status}", value: "{status}", {status.badge().label} }
                        }
                    }
                    select {
                        class: "filter-select",
                        value: "{type_value}",
                        onchange: move |e| filters.write().content_type = TypeFilter::parse(&e.value()),
                        option { value: ALL, "Todos os Tipos" }
                        for kind in ContentType::KNOWN {
                            option { key: "{kind}", value: "{kind}", {kind.short_label().to_string()} }
                        }
                    }
                }
            }

            if show_create_form() {
                CreateCardForm {
                    on_created: on_created,
                    on_cancel: move |_| show_create_form.set(false),
                }
            }

            if let Some(err) = error {
                div { class: "error-banner",
                    span { "{err}" }
                    button {
                        onclick: move |_| board.write().dismiss_error(),
                        "×"
                    }
                }
            }

            if loading {
                div { class: "cards-grid",
                    for i in 0..SKELETON_CARDS {
                        div { key: "{i}", class: "content-card skeleton",
                            div { class: "skeleton-line" }
                            div { class: "skeleton-line short" }
                            div { class: "skeleton-block" }
                        }
                    }
                }
            } else if visible.is_empty() {
                div { class: "card empty-state",
                    div { class: "empty-state-icon", "▤" }
                    h3 { "Nenhum card encontrado" }
                    p { class: "hint",
                        if narrowed {
                            "Tente ajustar os filtros de busca."
                        } else {
                            "Comece criando seu primeiro card de conteúdo."
                        }
                    }
                }
            } else {
                div { class: "cards-grid",
                    for card in visible {
                        ContentCardView {
                            key: "{card.id}",
                            card: card.clone(),
                            show_actions: capabilities.can_approve,
                            on_view: props.on_view,
                            on_approve: on_approve.clone(),
                            on_reject: on_reject.clone(),
                        }
                    }
                }
            }
        }
    }
}
