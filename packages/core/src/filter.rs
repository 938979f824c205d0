//! Dashboard filters: server-side status/type selection and client-side search.

use crate::{CardStatus, ContentCard, ContentType};

/// Value of a select box that is either "all" or one concrete option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

/// Select value meaning "no filter".
pub const ALL: &str = "all";

impl<T> Selection<T>
where
    T: From<String>,
{
    /// Parse the raw value of a select element.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL {
            Selection::All
        } else {
            Selection::Only(T::from(value.to_string()))
        }
    }
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value),
        }
    }
}

pub type StatusFilter = Selection<CardStatus>;
pub type TypeFilter = Selection<ContentType>;

impl StatusFilter {
    /// Value to put back into the select element.
    pub fn value(&self) -> &str {
        self.as_option().map(CardStatus::as_str).unwrap_or(ALL)
    }
}

impl TypeFilter {
    pub fn value(&self) -> &str {
        self.as_option().map(ContentType::as_str).unwrap_or(ALL)
    }
}

/// Server-side part of the filters; a change here means a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CardQuery {
    pub status: StatusFilter,
    pub content_type: TypeFilter,
}

impl CardQuery {
    /// Query parameters for `GET /content-cards`, omitting "all" filters.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(status) = self.status.as_option() {
            params.push(("status", status.to_string()));
        }
        if let Some(kind) = self.content_type.as_option() {
            params.push(("type", kind.to_string()));
        }
        params
    }
}

/// Every filter shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFilters {
    pub search: String,
    pub status: StatusFilter,
    pub content_type: TypeFilter,
}

impl CardFilters {
    pub fn server_query(&self) -> CardQuery {
        CardQuery {
            status: self.status.clone(),
            content_type: self.content_type.clone(),
        }
    }

    /// Whether any filter narrows the list.
    pub fn is_narrowed(&self) -> bool {
        !self.search.is_empty() || !self.status.is_all() || !self.content_type.is_all()
    }
}

/// Whether a card matches a free-text search term.
pub fn matches_search(card: &ContentCard, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    card.title.to_lowercase().contains(&needle)
        || card.description.to_lowercase().contains(&needle)
}

/// Apply a free-text search to an already loaded list.
pub fn filter_cards<'a>(cards: &'a [ContentCard], term: &str) -> Vec<&'a ContentCard> {
    cards.iter().filter(|card| matches_search(card, term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::titled;

    #[test]
    fn search_is_case_insensitive_over_title_or_description() {
        let cards = vec![
            titled("1", "Campanha de Verão", "posts diários"),
            titled("2", "Arte institucional", "Logo em VERÃO"),
            titled("3", "Cronograma", "junho"),
        ];

        let ids: Vec<_> = filter_cards(&cards, "verão")
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "2"]);

        assert_eq!(filter_cards(&cards, "CRONO").len(), 1);
        assert!(filter_cards(&cards, "inexistente").is_empty());
    }

    #[test]
    fn empty_search_returns_everything() {
        let cards = vec![titled("1", "a", "b"), titled("2", "c", "d")];
        assert_eq!(filter_cards(&cards, "").len(), 2);
    }

    #[test]
    fn all_filters_are_omitted_from_params() {
        assert!(CardQuery::default().params().is_empty());

        let query = CardQuery {
            status: StatusFilter::parse("pendente"),
            content_type: TypeFilter::parse("postagem_diaria"),
        };
        assert_eq!(
            query.params(),
            vec![
                ("status", "pendente".to_string()),
                ("type", "postagem_diaria".to_string())
            ]
        );
    }

    #[test]
    fn select_values_round_trip() {
        let status = StatusFilter::parse("em_revisao");
        assert_eq!(status, Selection::Only(CardStatus::InReview));
        assert_eq!(status.value(), "em_revisao");
        assert_eq!(StatusFilter::parse("all").value(), ALL);
    }

    #[test]
    fn search_alone_does_not_change_server_query() {
        let mut filters = CardFilters::default();
        let before = filters.server_query();
        filters.search = "abc".into();
        assert_eq!(filters.server_query(), before);
        assert!(filters.is_narrowed());
    }
}
