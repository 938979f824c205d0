//! Card detail page: full card, review actions and the comment thread.

use approval_core::{
    CardId, Comment, ContentCard, NewComment, ReviewDecision, format_date, show_review_actions,
};
use dioxus::prelude::*;

use crate::cards::StatusBadge;
use crate::use_auth;

#[component]
pub fn CardDetailPage(card_id: String) -> Element {
    let auth = use_auth();
    let mut card = use_signal(|| None::<ContentCard>);
    let mut comments = use_signal(Vec::<Comment>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut draft = use_signal(String::new);
    let mut internal = use_signal(|| false);
    let mut posting = use_signal(|| false);

    // Load card and comments, again whenever the route points at another card
    let client = auth.client.clone();
    use_effect(use_reactive!(|card_id| {
        let client = client.clone();
        let id = CardId::new(card_id);
        loading.set(true);
        error.set(None);
        spawn(async move {
            match client.get_content_card(&id).await {
                Ok(c) => card.set(Some(c)),
                Err(e) => {
                    card.set(None);
                    error.set(Some(format!("Erro ao carregar card: {e}")));
                }
            }
            match client.list_comments(&id).await {
                Ok(c) => comments.set(c),
                Err(e) => tracing::warn!(card = %id, error = %e, "Failed to load comments"),
            }
            loading.set(false);
        });
    }));

    let id = CardId::new(card_id);
    let client = auth.client.clone();
    let review_id = id.clone();
    let on_review = move |decision: ReviewDecision| {
        let client = client.clone();
        let id = review_id.clone();
        spawn(async move {
            match client
                .approve_content_card(&id, &decision.target_status(), "")
                .await
            {
                Ok(outcome) => {
                    tracing::info!(card = %id, ?decision, "Card reviewed");
                    match outcome.card {
                        Some(updated) => card.set(Some(updated)),
                        None => match client.get_content_card(&id).await {
                            Ok(updated) => card.set(Some(updated)),
                            Err(e) => {
                                tracing::warn!(card = %id, error = %e, "Failed to refresh reviewed card");
                                error.set(Some(format!("Erro ao carregar card: {e}")));
                            }
                        },
                    }
                }
                Err(e) => error.set(Some(format!("{}{e}", decision.error_prefix()))),
            }
        });
    };
    let on_approve = on_review.clone();
    let on_reject = on_review;

    let client = auth.client.clone();
    let comment_id = id.clone();
    let submit_comment = move |_| {
        let text = draft().trim().to_string();
        if text.is_empty() {
            return;
        }
        let comment = NewComment::new(text).internal(internal());
        let client = client.clone();
        let id = comment_id.clone();
        spawn(async move {
            posting.set(true);
            match client.add_comment(&id, &comment).await {
                Ok(_) => {
                    draft.set(String::new());
                    internal.set(false);
                    match client.list_comments(&id).await {
                        Ok(c) => comments.set(c),
                        Err(e) => error.set(Some(format!("Erro ao carregar comentários: {e}"))),
                    }
                }
                Err(e) => error.set(Some(format!("Erro ao adicionar comentário: {e}"))),
            }
            posting.set(false);
        });
    };

    let capabilities = auth.capabilities();
    let approve_label = ReviewDecision::Approve.label();
    let reject_label = ReviewDecision::Reject.label();
    let can_mark_internal = auth.current_user().is_some_and(|user| !user.is_client());

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                Link { to: "/", class: "btn btn-ghost", "← Voltar" }
            }

            if let Some(err) = error() {
                div { class: "error-banner",
                    span { "{err}" }
                    button {
                        onclick: move |_| error.set(None),
                        "×"
                    }
                }
            }

            if loading() {
                div { class: "card loading", "Carregando..." }
            } else if let Some(c) = card() {
                div { class: "card card-detail",
                    div { class: "card-detail-header",
                        div {
                            h1 { class: "page-title", "{c.title}" }
                            p { class: "content-card-type", {c.content_type.label().to_string()} }
                        }
                        StatusBadge { status: c.status.clone() }
                    }

                    p { class: "card-detail-description", "{c.description}" }

                    dl { class: "detail-grid",
                        if let Some(author) = c.author_name() {
                            dt { "Autor" }
                            dd { "{author}" }
                        }
                        dt { "Criado em" }
                        dd { {format_date(&c.created_at)} }
                        if let Some(ref due) = c.due_date {
                            dt { "Vencimento" }
                            dd { {format_date(due)} }
                        }
                    }

                    if !c.attachments.is_empty() {
                        div { class: "attachments",
                            h3 { "Anexos" }
                            ul {
                                for attachment in c.attachments.iter() {
                                    li { key: "{attachment.url}",
                                        a {
                                            href: "{attachment.url}",
                                            target: "_blank",
                                            {attachment.original_name.clone().unwrap_or_else(|| attachment.filename.clone())}
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if show_review_actions(capabilities.can_approve, &c.status) {
                        div { class: "content-card-actions",
                            button {
                                class: "btn btn-approve",
                                onclick: move |_| on_approve(ReviewDecision::Approve),
                                "✓ {approve_label}"
                            }
                            button {
                                class: "btn btn-reject",
                                onclick: move |_| on_reject(ReviewDecision::Reject),
                                "✕ {reject_label}"
                            }
                        }
                    }
                }

                div { class: "card comments",
                    h2 { "Comentários ({comments.read().len()})" }

                    if comments.read().is_empty() {
                        p { class: "hint", "Nenhum comentário ainda." }
                    }

                    for comment in comments() {
                        div {
                            key: "{comment.id}",
                            class: if comment.is_internal { "comment comment-internal" } else { "comment" },
                            div { class: "comment-header",
                                span { class: "comment-author",
                                    {comment.author.as_ref().and_then(|a| a.name()).unwrap_or("Anônimo").to_string()}
                                }
                                span { class: "comment-date",
                                    {comment.created_at.as_ref().map(format_date).unwrap_or_default()}
                                }
                                if comment.is_internal {
                                    span { class: "comment-tag", "Interno" }
                                }
                            }
                            p { class: "comment-text", "{comment.text}" }
                        }
                    }

                    div { class: "form-group",
                        textarea {
                            rows: 3,
                            placeholder: "Escreva um comentário...",
                            value: "{draft}",
                            oninput: move |e| draft.set(e.value()),
                        }
                    }
                    div { class: "form-actions",
                        if can_mark_internal {
                            label { class: "checkbox",
                                input {
                                    r#type: "checkbox",
                                    checked: internal(),
                                    onchange: move |e| internal.set(e.checked()),
                                }
                                "Comentário interno"
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: posting(),
                            onclick: submit_comment,
                            if posting() { "Enviando..." } else { "Comentar" }
                        }
                    }
                }
            } else {
                div { class: "card empty-state",
                    h3 { "Card não encontrado" }
                }
            }
        }
    }
}
