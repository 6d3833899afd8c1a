//! Summaries shown above the member tables.

use mandli_models::{Dividend, Notice, ShareHolding};

/// Aggregate share capital across members.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShareTotals {
    /// Number of members listed.
    pub members: usize,
    /// Total shares held.
    pub shares: u64,
    /// Total value in rupees.
    pub value: f64,
}

/// Sum the share capital table.
#[must_use]
pub fn share_totals(holdings: &[ShareHolding]) -> ShareTotals {
    holdings
        .iter()
        .fold(ShareTotals::default(), |acc, holding| ShareTotals {
            members: acc.members + 1,
            shares: acc.shares.saturating_add(holding.shares),
            value: acc.value + holding.value,
        })
}

/// Dividends with the most recent year first.
#[must_use]
pub fn dividends_newest_first(dividends: &[Dividend]) -> Vec<Dividend> {
    let mut sorted = dividends.to_vec();
    sorted.sort_by(|a, b| b.year.cmp(&a.year));
    sorted
}

/// Notices with the most recent date first.
#[must_use]
pub fn notices_newest_first(notices: &[Notice]) -> Vec<Notice> {
    let mut sorted = notices.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::fixtures;

    #[test]
    fn totals_sum_the_fixture_table() {
        let holdings = vec![
            ShareHolding {
                member_id: "M-1".into(),
                name: "A".into(),
                shares: 10,
                value: 1_000.0,
            },
            ShareHolding {
                member_id: "M-2".into(),
                name: "B".into(),
                shares: 5,
                value: 500.0,
            },
        ];
        let totals = share_totals(&holdings);
        assert_eq!(totals.members, 2);
        assert_eq!(totals.shares, 15);
        assert!((totals.value - 1_500.0).abs() < f64::EPSILON);
        assert_eq!(share_totals(&[]), ShareTotals::default());
    }

    #[test]
    fn newest_entries_lead() {
        let data = fixtures();
        let dividends = dividends_newest_first(&data.dividends);
        assert!(dividends.windows(2).all(|w| w[0].year >= w[1].year));
        let notices = notices_newest_first(&data.notices);
        assert!(notices.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(notices.len(), data.notices.len());
    }
}
