//! Dashboard state machine: loading, error, loaded cards and their stats.
//!
//! Loads are stamped with a generation number. Only the response belonging
//! to the most recent load is applied, so a slow response for an old filter
//! can never overwrite the list for the current one.

use crate::{CardStats, CardStatus, ContentCard, filter_cards};

/// Error prefix for a failed list load.
pub const LOAD_ERROR_PREFIX: &str = "Erro ao carregar cards: ";

/// Handle for one dispatched load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// A reviewer's decision on a pending card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    /// Status the card moves to.
    pub fn target_status(self) -> CardStatus {
        match self {
            ReviewDecision::Approve => CardStatus::Approved,
            ReviewDecision::Reject => CardStatus::Rejected,
        }
    }

    /// Prefix for error messages when the decision fails.
    pub fn error_prefix(self) -> &'static str {
        match self {
            ReviewDecision::Approve => "Erro ao aprovar card: ",
            ReviewDecision::Reject => "Erro ao rejeitar card: ",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            ReviewDecision::Approve => "Aprovar",
            ReviewDecision::Reject => "Rejeitar",
        }
    }
}

/// Everything the dashboard shows besides the filters.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub loading: bool,
    pub error: Option<String>,
    pub cards: Vec<ContentCard>,
    pub stats: CardStats,
    generation: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            // The first load starts on mount.
            loading: true,
            error: None,
            cards: Vec::new(),
            stats: CardStats::default(),
            generation: 0,
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the loading state and stamp a new load.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    /// Whether a ticket belongs to the most recent load.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply the outcome of a load.
    ///
    /// Returns `false` when the ticket is stale; the state is left untouched.
    /// A failed load keeps the previously loaded cards.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<ContentCard>, String>,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "Discarding stale card list response"
            );
            return false;
        }

        match result {
            Ok(cards) => {
                self.stats = CardStats::tally(&cards);
                self.cards = cards;
            }
            Err(message) => {
                self.error = Some(format!("{LOAD_ERROR_PREFIX}{message}"));
            }
        }
        self.loading = false;
        true
    }

    /// Record a failed approve/reject. Nothing is rolled back.
    pub fn fail_review(&mut self, decision: ReviewDecision, message: impl std::fmt::Display) {
        self.error = Some(format!("{}{}", decision.error_prefix(), message));
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Loaded cards matching the free-text search.
    pub fn visible_cards(&self, term: &str) -> Vec<&ContentCard> {
        filter_cards(&self.cards, term)
    }
}
