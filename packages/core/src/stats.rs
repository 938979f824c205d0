//! Per-status card counts for the dashboard header.

use serde::{Deserialize, Serialize};

use crate::{CardStatus, ContentCard};

/// Counts of cards per status in the currently loaded set.
///
/// Always rebuilt from the full list with [`CardStats::tally`]; `total`
/// equals the sum of the four buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStats {
    pub total: u64,
    #[serde(rename = "pendente")]
    pub pending: u64,
    #[serde(rename = "aprovado")]
    pub approved: u64,
    #[serde(rename = "rejeitado")]
    pub rejected: u64,
    #[serde(rename = "em_revisao")]
    pub in_review: u64,
}

impl CardStats {
    /// Count cards in a single pass.
    ///
    /// Unrecognised statuses land in the pending bucket, matching how their
    /// badge is rendered.
    pub fn tally<'a>(cards: impl IntoIterator<Item = &'a ContentCard>) -> Self {
        cards.into_iter().fold(Self::default(), |mut acc, card| {
            acc.total += 1;
            match card.status {
                CardStatus::Pending | CardStatus::Other(_) => acc.pending += 1,
                CardStatus::Approved => acc.approved += 1,
                CardStatus::Rejected => acc.rejected += 1,
                CardStatus::InReview => acc.in_review += 1,
            }
            acc
        })
    }

    /// Sum of the per-status buckets.
    pub fn bucket_sum(&self) -> u64 {
        self.pending + self.approved + self.rejected + self.in_review
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::card;

    #[test]
    fn tallies_example_load() {
        let cards = vec![
            card("1", "pendente"),
            card("2", "aprovado"),
            card("3", "pendente"),
        ];
        let stats = CardStats::tally(&cards);
        assert_eq!(
            stats,
            CardStats {
                total: 3,
                pending: 2,
                approved: 1,
                rejected: 0,
                in_review: 0,
            }
        );
        assert_eq!(
            serde_json::to_value(stats).unwrap(),
            serde_json::json!({
                "total": 3, "pendente": 2, "aprovado": 1, "rejeitado": 0, "em_revisao": 0
            })
        );
    }

    #[test]
    fn total_matches_bucket_sum_for_any_mix() {
        let statuses = ["pendente", "aprovado", "rejeitado", "em_revisao", "arquivado"];
        for len in 0..=12 {
            let cards: Vec<_> = (0..len)
                .map(|i| card(&i.to_string(), statuses[(i * 7 + len) % statuses.len()]))
                .collect();
            let stats = CardStats::tally(&cards);
            assert_eq!(stats.total, len as u64);
            assert_eq!(stats.total, stats.bucket_sum());
        }
    }

    #[test]
    fn empty_list_is_all_zero() {
        assert_eq!(CardStats::tally(&Vec::<ContentCard>::new()), CardStats::default());
    }
}
