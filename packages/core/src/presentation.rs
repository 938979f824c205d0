//! Display labels and badge styles for statuses and content types.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::{CardStatus, ContentType, Role};

/// Label and CSS class of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub label: &'static str,
    pub class: &'static str,
}

const PENDING_BADGE: BadgeStyle = BadgeStyle {
    label: "Pendente",
    class: "badge-pending",
};

impl CardStatus {
    /// Badge for this status; unknown statuses borrow the pending badge.
    pub fn badge(&self) -> BadgeStyle {
        match self {
            CardStatus::Pending | CardStatus::Other(_) => PENDING_BADGE,
            CardStatus::Approved => BadgeStyle {
                label: "Aprovado",
                class: "badge-approved",
            },
            CardStatus::Rejected => BadgeStyle {
                label: "Rejeitado",
                class: "badge-rejected",
            },
            CardStatus::InReview => BadgeStyle {
                label: "Em Revisão",
                class: "badge-in-review",
            },
        }
    }
}

impl ContentType {
    /// Full label shown on cards; unknown types show their raw value.
    pub fn label(&self) -> &str {
        match self {
            ContentType::MonthlyMacroSchedule => "Cronograma Macro Mensal",
            ContentType::MonthlyArtPosting => "Postagem de Arte Mensal",
            ContentType::DailyPosting => "Postagem Diária",
            ContentType::Other(raw) => raw,
        }
    }

    /// Compact label used in the type filter.
    pub fn short_label(&self) -> &str {
        match self {
            ContentType::MonthlyMacroSchedule => "Cronograma Macro",
            ContentType::MonthlyArtPosting => "Arte Mensal",
            other => other.label(),
        }
    }
}

impl Role {
    /// Label shown in user lists.
    pub fn label(&self) -> &str {
        match self {
            Role::Client => "Cliente",
            Role::Approver => "Aprovador",
            Role::Admin => "Administrador",
            Role::Other(raw) => raw,
        }
    }
}

/// Format a timestamp as `dd/mm/yyyy` in the viewer's local time.
pub fn format_date(date: &DateTime<Utc>) -> String {
    format_date_in(date, &Local)
}

/// Format a timestamp as `dd/mm/yyyy` in the given time zone.
pub fn format_date_in<Tz: TimeZone>(date: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.with_timezone(tz).format("%d/%m/%Y").to_string()
}
