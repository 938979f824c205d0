//! Root component and route table shared by every launcher.

use approval_core::ContentCard;
use dioxus::prelude::*;

use crate::pages::{CardDetailPage, DashboardPage, LoginPage, SettingsPage, UsersPage};
use crate::{APPROVAL_CSS, Layout, default_client, use_auth, use_auth_provider};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Every page needs a session; the shell shows the login screen otherwise
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/cards")]
        Cards {},
        #[route("/cards/:id")]
        CardDetail { id: String },
        #[route("/users")]
        Users {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Application root: provides the session and mounts the router.
#[component]
pub fn App() -> Element {
    use_auth_provider(default_client);

    rsx! {
        document::Link { rel: "stylesheet", href: APPROVAL_CSS }

        Router::<Route> {}
    }
}

/// Wraps every page in the shared layout once the session is known.
#[component]
fn AppShell() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();

    if auth.is_checking() {
        return rsx! {
            div { class: "loading-screen", "Carregando..." }
        };
    }

    if auth.current_user().is_none() {
        return rsx! {
            LoginPage {}
        };
    }

    rsx! {
        Layout { current_path: route.to_string(),
            Outlet::<Route> {}
        }
    }
}

/// Dashboard with navigation to the detail page.
#[component]
fn CardBoard() -> Element {
    let nav = use_navigator();

    rsx! {
        DashboardPage {
            on_view: move |card: ContentCard| {
                nav.push(Route::CardDetail { id: card.id.to_string() });
            },
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        CardBoard {}
    }
}

#[component]
fn Cards() -> Element {
    rsx! {
        CardBoard {}
    }
}

#[component]
fn CardDetail(id: String) -> Element {
    rsx! {
        CardDetailPage { card_id: id }
    }
}

#[component]
fn Users() -> Element {
    rsx! {
        UsersPage {}
    }
}

#[component]
fn Settings() -> Element {
    rsx! {
        SettingsPage {}
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "Unknown route");

    rsx! {
        div { class: "page-container",
            div { class: "card empty-state",
                h3 { "Página não encontrada" }
                Link { to: Route::Home {}, class: "btn btn-primary", "Voltar ao Dashboard" }
            }
        }
    }
}
