//! Sidebar with the user block, navigation and logout.

use approval_core::visible_nav_items;
use dioxus::prelude::*;

use crate::use_auth;

#[component]
pub fn Sidebar(current_path: String, on_navigate: EventHandler<()>) -> Element {
    let auth = use_auth();
    let user = auth.current_user();
    let is_admin = auth.is_admin();

    let logout = move |_| {
        let auth = auth.clone();
        spawn(async move {
            auth.logout().await;
        });
    };

    rsx! {
        div { class: "sidebar",
            div { class: "sidebar-header",
                h1 { class: "sidebar-logo", "Sistema de Aprovação" }
                p { class: "sidebar-subtitle", "Gestão de Conteúdo" }
            }

            if let Some(user) = user {
                div { class: "sidebar-user",
                    div { class: "avatar", "{user.initial()}" }
                    div { class: "sidebar-user-info",
                        p { class: "sidebar-user-name", "{user.name}" }
                        p { class: "sidebar-user-email", "{user.email}" }
                    }
                }
            }

            nav { class: "sidebar-nav",
                for item in visible_nav_items(is_admin) {
                    {
                        let class = if current_path == item.href { "nav-link active" } else { "nav-link" };
                        rsx! {
                            Link {
                                key: "{item.href}",
                                to: item.href,
                                class: class,
                                onclick: move |_| on_navigate.call(()),
                                span { class: "nav-icon", "{item.icon}" }
                                span { "{item.name}" }
                            }
                        }
                    }
                }
            }

            div { class: "sidebar-footer",
                button {
                    class: "nav-link nav-link-muted",
                    onclick: logout,
                    span { class: "nav-icon", "⎋" }
                    span { "Sair" }
                }
            }
        }
    }
}
