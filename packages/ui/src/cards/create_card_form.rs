//! Create card form component.

use approval_core::{ContentCard, ContentType, NewContentCard};
use chrono::{Local, NaiveDate, TimeZone, Utc};
use dioxus::prelude::*;

use crate::use_auth;

/// Props for CreateCardForm component.
#[derive(Props, Clone, PartialEq)]
pub struct CreateCardFormProps {
    /// Callback with the card the server created.
    pub on_created: EventHandler<ContentCard>,
    /// Callback when form is cancelled.
    pub on_cancel: EventHandler<()>,
}

/// Validate the raw form fields into a create request.
///
/// `due_date` is the `yyyy-mm-dd` value of a date input, taken as local
/// midnight; empty means none.
pub fn build_draft(
    title: &str,
    description: &str,
    content_type: &str,
    due_date: &str,
) -> Result<NewContentCard, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Informe o título do card.".to_string());
    }

    let draft = NewContentCard::new(
        title,
        description.trim(),
        ContentType::from(content_type),
    );

    let due_date = due_date.trim();
    if due_date.is_empty() {
        return Ok(draft);
    }
    let date = NaiveDate::parse_from_str(due_date, "%Y-%m-%d")
        .map_err(|_| format!("Data de vencimento inválida: {due_date}"))?;
    let midnight = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    let due = Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc());
    Ok(draft.with_due_date(due))
}

#[component]
pub fn CreateCardForm(props: CreateCardFormProps) -> Element {
    let auth = use_auth();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut content_type = use_signal(|| ContentType::DailyPosting.as_str().to_string());
    let mut due_date = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        let client = auth.client.clone();
        let draft = build_draft(&title(), &description(), &content_type(), &due_date());

        spawn(async move {
            let draft = match draft {
                Ok(draft) => draft,
                Err(msg) => {
                    error.set(Some(msg));
                    return;
                }
            };

            submitting.set(true);
            error.set(None);

            match client.create_content_card(&draft).await {
                Ok(card) => {
                    tracing::info!(card = %card.id, kind = %card.content_type, "Card created");
                    props.on_created.call(card);
                }
                Err(e) => {
                    error.set(Some(format!("Erro ao criar card: {e}")));
                }
            }

            submitting.set(false);
        });
    };

    rsx! {
        div { class: "card create-card-form",
            h3 { "Novo Card" }

            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            div { class: "form-group",
                label { "Título" }
                input {
                    r#type: "text",
                    value: "{title}",
                    oninput: move |e| title.set(e.value()),
                }
            }

            div { class: "form-group",
                label { "Descrição" }
                textarea {
                    rows: 4,
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                }
            }

            div { class: "form-row",
                div { class: "form-group",
                    label { "Tipo" }
                    select {
                        value: "{content_type}",
                        onchange: move |e| content_type.set(e.value()),
                        for kind in ContentType::KNOWN {
                            option { key: "{kind}", value: "{kind}", {kind.label().to_string()} }
                        }
                    }
                }

                div { class: "form-group",
                    label { "Vencimento" }
                    input {
                        r#type: "date",
                        value: "{due_date}",
                        oninput: move |e| due_date.set(e.value()),
                    }
                }
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    disabled: submitting(),
                    onclick: submit,
                    if submitting() { "Criando..." } else { "Criar Card" }
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| props.on_cancel.call(()),
                    "Cancelar"
                }
            }
        }
    }
}
