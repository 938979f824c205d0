//! Summary counters above the card list.

use approval_core::CardStats;
use dioxus::prelude::*;

#[component]
pub fn StatsGrid(stats: CardStats) -> Element {
    let tiles = [
        ("Total de Cards", stats.total, "stat-card-total", "▤"),
        ("Pendentes", stats.pending, "stat-card-pending", "◷"),
        ("Aprovados", stats.approved, "stat-card-approved", "✓"),
        ("Rejeitados", stats.rejected, "stat-card-rejected", "✕"),
    ];

    rsx! {
        div { class: "stats-grid",
            for (title, value, accent, icon) in tiles {
                div { key: "{title}", class: "stat-card {accent}",
                    div { class: "stat-card-body",
                        div {
                            div { class: "stat-card-label", "{title}" }
                            div { class: "stat-card-value", "{value}" }
                        }
                        div { class: "stat-card-icon", "{icon}" }
                    }
                }
            }
        }
    }
}
