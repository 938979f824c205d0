//! Account settings: profile and password.

use approval_core::UserUpdate;
use dioxus::prelude::*;

use crate::use_auth;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Check a password change before it is sent.
pub(crate) fn validate_password(new: &str, confirm: &str) -> Result<(), String> {
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "A nova senha deve ter pelo menos {MIN_PASSWORD_LEN} caracteres."
        ));
    }
    if new != confirm {
        return Err("As senhas não conferem.".to_string());
    }
    Ok(())
}

#[component]
pub fn SettingsPage() -> Element {
    let auth = use_auth();
    let user = auth.current_user();

    let initial_name = user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let initial_email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();
    let mut name = use_signal(move || initial_name);
    let mut email = use_signal(move || initial_email);
    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut notice = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);

    let profile_auth = auth.clone();
    let save_profile = move |_| {
        let auth = profile_auth.clone();
        let Some(user) = auth.current_user() else {
            return;
        };
        let update = UserUpdate {
            name: Some(name().trim().to_string()),
            email: Some(email().trim().to_string()),
            ..UserUpdate::default()
        };
        spawn(async move {
            error.set(None);
            notice.set(None);
            match auth.client.update_user(&user.id, &update).await {
                Ok(updated) => {
                    tracing::info!(user = %updated.id, "Profile updated");
                    auth.set_user(Some(updated));
                    notice.set(Some("Perfil atualizado.".to_string()));
                }
                Err(e) => error.set(Some(format!("Erro ao atualizar perfil: {e}"))),
            }
        });
    };

    let password_auth = auth.clone();
    let save_password = move |_| {
        let auth = password_auth.clone();
        let Some(user) = auth.current_user() else {
            return;
        };
        let current = current_password();
        let new = new_password();
        if let Err(msg) = validate_password(&new, &confirm_password()) {
            notice.set(None);
            error.set(Some(msg));
            return;
        }
        spawn(async move {
            error.set(None);
            notice.set(None);
            match auth.client.change_password(&user.id, &current, &new).await {
                Ok(response) => {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                    notice.set(Some(
                        response
                            .message
                            .unwrap_or_else(|| "Senha alterada.".to_string()),
                    ));
                }
                Err(e) => error.set(Some(format!("Erro ao alterar senha: {e}"))),
            }
        });
    };

    let role_label = user
        .as_ref()
        .map(|u| u.role.label().to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Configurações" }
                    p { class: "page-description", "Perfil: {role_label}" }
                }
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

            if let Some(msg) = notice() {
                div { class: "notice-banner", "{msg}" }
            }

            div { class: "card settings-section",
                h2 { "Perfil" }
                div { class: "form-group",
                    label { "Nome" }
                    input {
                        r#type: "text",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "E-mail" }
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: save_profile,
                        "Salvar perfil"
                    }
                }
            }

            div { class: "card settings-section",
                h2 { "Alterar senha" }
                div { class: "form-group",
                    label { "Senha atual" }
                    input {
                        r#type: "password",
                        value: "{current_password}",
                        oninput: move |e| current_password.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Nova senha" }
                    input {
                        r#type: "password",
                        value: "{new_password}",
                        oninput: move |e| new_password.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Confirmar nova senha" }
                    input {
                        r#type: "password",
                        value: "{confirm_password}",
                        oninput: move |e| confirm_password.set(e.value()),
                    }
                }
                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: save_password,
                        "Alterar senha"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_rules() {
        assert!(validate_password("abc", "abc").is_err());
        assert_eq!(
            validate_password("segredo1", "segredo2"),
            Err("As senhas não conferem.".to_string())
        );
        assert_eq!(validate_password("segredo1", "segredo1"), Ok(()));
    }
}
