//! User administration page.

use approval_core::{Role, User, UserQuery, UserUpdate};
use dioxus::prelude::*;

use crate::use_auth;

#[component]
pub fn UsersPage() -> Element {
    let auth = use_auth();
    let mut users = use_signal(Vec::<User>::new);
    let mut search = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    let client = auth.client.clone();
    let load = move |term: String| {
        let client = client.clone();
        spawn(async move {
            loading.set(true);
            let result = if term.trim().is_empty() {
                client.list_users(&UserQuery::default()).await
            } else {
                client.search_users(term.trim()).await
            };
            match result {
                Ok(found) => users.set(found),
                Err(e) => error.set(Some(format!("Erro ao carregar usuários: {e}"))),
            }
            loading.set(false);
        });
    };

    // Only administrators may list users
    let initial_load = load.clone();
    let session_user = auth.user;
    use_effect(move || {
        if session_user.read().as_ref().is_some_and(User::is_admin) {
            initial_load(String::new());
        }
    });

    let client = auth.client.clone();
    let on_role_change = move |(user, role): (User, Role)| {
        let client = client.clone();
        spawn(async move {
            let update = UserUpdate {
                role: Some(role),
                ..UserUpdate::default()
            };
            match client.update_user(&user.id, &update).await {
                Ok(updated) => {
                    tracing::info!(user = %updated.id, role = %updated.role, "User role changed");
                    let mut list = users.write();
                    if let Some(slot) = list.iter_mut().find(|u| u.id == updated.id) {
                        *slot = updated;
                    }
                }
                Err(e) => error.set(Some(format!("Erro ao atualizar usuário: {e}"))),
            }
        });
    };

    if !auth.is_admin() {
        return rsx! {
            div { class: "page-container",
                div { class: "card empty-state",
                    h3 { "Acesso restrito" }
                    p { class: "hint", "Apenas administradores podem gerenciar usuários." }
                }
            }
        };
    }

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Usuários" }
                    p { class: "page-description", "Gerencie os usuários e seus perfis de acesso" }
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

            div { class: "card filters-card",
                div { class: "filters",
                    input {
                        class: "search-input",
                        r#type: "search",
                        placeholder: "Buscar por nome ou e-mail...",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| load(search()),
                        "Buscar"
                    }
                }
            }

            if loading() {
                div { class: "card loading", "Carregando..." }
            } else if users.read().is_empty() {
                div { class: "card empty-state",
                    h3 { "Nenhum usuário encontrado" }
                }
            } else {
                div { class: "card",
                    table { class: "users-table",
                        thead {
                            tr {
                                th { "Nome" }
                                th { "E-mail" }
                                th { "Perfil" }
                            }
                        }
                        tbody {
                            for user in users() {
                                {
                                    let row_user = user.clone();
                                    let on_role_change = on_role_change.clone();
                                    rsx! {
                                        tr { key: "{user.id}",
                                            td { "{user.name}" }
                                            td { "{user.email}" }
                                            td {
                                                select {
                                                    class: "filter-select",
                                                    value: "{user.role}",
                                                    onchange: move |e| {
                                                        on_role_change((row_user.clone(), Role::from(e.value())));
                                                    },
                                                    for role in [Role::Client, Role::Approver, Role::Admin] {
                                                        option { key: "{role}", value: "{role}", {role.label().to_string()} }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
