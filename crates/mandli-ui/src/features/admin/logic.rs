//! Report series scaling for the admin charts.

use crate::core::theme::series_color;
use mandli_models::{ChartPoint, LoanStatus};

/// One bar of a proportional chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartBar {
    /// Series label.
    pub name: String,
    /// Raw value.
    pub value: f64,
    /// Width of the bar, 0..=100.
    pub percent: f64,
    /// Fill color.
    pub color: &'static str,
}

/// Share of the total per point, as a pie chart would slice it.
#[must_use]
pub fn chart_shares(points: &[ChartPoint]) -> Vec<ChartBar> {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    scale(points, total)
}

/// Value relative to the largest point, as a bar chart would draw it.
#[must_use]
pub fn chart_relative(points: &[ChartPoint]) -> Vec<ChartBar> {
    let max = points.iter().map(|p| p.value.max(0.0)).fold(0.0, f64::max);
    scale(points, max)
}

fn scale(points: &[ChartPoint], denominator: f64) -> Vec<ChartBar> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| ChartBar {
            name: point.name.clone(),
            value: point.value,
            percent: if denominator > 0.0 {
                (point.value.max(0.0) / denominator * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            },
            color: series_color(index),
        })
        .collect()
}

/// Badge classes for a loan status.
#[must_use]
pub const fn status_badge_class(status: LoanStatus) -> &'static str {
    match status {
        LoanStatus::Approved => "badge-success",
        LoanStatus::Rejected => "badge-error",
        LoanStatus::Pending => "badge-warning",
    }
}

/// Translation key of a loan status label.
#[must_use]
pub const fn status_label_key(status: LoanStatus) -> &'static str {
    match status {
        LoanStatus::Pending => "statusPending",
        LoanStatus::Approved => "statusApproved",
        LoanStatus::Rejected => "statusRejected",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[f64]) -> Vec<ChartPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| ChartPoint {
                name: format!("p{i}"),
                value: *v,
            })
            .collect()
    }

    #[test]
    fn shares_sum_to_one_hundred() {
        let bars = chart_shares(&points(&[62.0, 23.0, 15.0]));
        let total: f64 = bars.iter().map(|b| b.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!((bars[0].percent - 62.0).abs() < 1e-9);
        assert_eq!(bars[1].color, "#a855f7");
    }

    #[test]
    fn zero_totals_yield_empty_bars() {
        let bars = chart_shares(&points(&[0.0, 0.0]));
        assert!(bars.iter().all(|b| b.percent == 0.0));
        assert!(chart_relative(&[]).is_empty());
    }

    #[test]
    fn relative_bars_scale_to_the_maximum() {
        let bars = chart_relative(&points(&[50.0, 100.0, -5.0]));
        assert!((bars[0].percent - 50.0).abs() < 1e-9);
        assert!((bars[1].percent - 100.0).abs() < 1e-9);
        assert!(bars[2].percent == 0.0);
    }

    #[test]
    fn statuses_map_to_badges() {
        assert_eq!(status_badge_class(LoanStatus::Approved), "badge-success");
        assert_eq!(status_label_key(LoanStatus::Rejected), "statusRejected");
    }
}
