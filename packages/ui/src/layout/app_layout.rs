//! Responsive frame with a collapsible sidebar.

use dioxus::prelude::*;

use super::Sidebar;

/// Props for Layout component.
#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Path of the current route, used to highlight the active link.
    pub current_path: String,
    pub children: Element,
}

/// On narrow screens the sidebar starts hidden and slides in over an overlay.
/// Clicking the overlay or following a link closes it again.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let mut sidebar_open = use_signal(|| false);
    let open_class = if sidebar_open() { "open" } else { "" };

    rsx! {
        div { class: "app-layout",
            if sidebar_open() {
                div {
                    class: "sidebar-overlay",
                    onclick: move |_| sidebar_open.set(false),
                }
            }

            aside { class: "sidebar-panel {open_class}",
                Sidebar {
                    current_path: props.current_path.clone(),
                    on_navigate: move |_| sidebar_open.set(false),
                }
            }

            div { class: "app-main",
                header { class: "mobile-header",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| sidebar_open.set(true),
                        "☰"
                    }
                    h1 { class: "mobile-title", "Sistema de Aprovação" }
                    div { class: "mobile-spacer" }
                }

                main { class: "app-content", {props.children} }
            }
        }
    }
}
