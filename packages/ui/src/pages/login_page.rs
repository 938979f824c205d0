//! Sign-in page shown while nobody is logged in.

use dioxus::prelude::*;

use crate::use_auth;

#[component]
pub fn LoginPage() -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        let auth = auth.clone();
        let email_val = email().trim().to_string();
        let password_val = password();

        spawn(async move {
            if email_val.is_empty() || password_val.is_empty() {
                error.set(Some("Informe e-mail e senha.".to_string()));
                return;
            }

            submitting.set(true);
            error.set(None);

            if let Err(e) = auth.login(&email_val, &password_val).await {
                tracing::warn!(email = %email_val, error = %e, "Sign-in failed");
                error.set(Some(e.to_string()));
            }

            submitting.set(false);
        });
    };

    rsx! {
        div { class: "login-screen",
            div { class: "card login-card",
                h1 { class: "login-title", "Sistema de Aprovação" }
                p { class: "login-subtitle", "Entre com sua conta para continuar" }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                div { class: "form-group",
                    label { "E-mail" }
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }

                div { class: "form-group",
                    label { "Senha" }
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    disabled: submitting(),
                    onclick: submit,
                    if submitting() { "Entrando..." } else { "Entrar" }
                }
            }
        }
    }
}
