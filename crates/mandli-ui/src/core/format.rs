//! Currency, count and date formatting shared by the portals.
//!
//! # Design
//! - Amounts use Indian digit grouping (`12,34,567`) with at most two decimals.
//! - Day counts are calendar-day differences so they do not drift with the clock.
//! - Helpers are pure; callers supply "today".

use chrono::NaiveDate;

/// Deposits maturing within this many days are highlighted.
pub const NEAR_MATURITY_DAYS: i64 = 30;

/// Group digits the way `en-IN` does: last three, then pairs.
#[must_use]
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Format an amount with Indian grouping and up to two decimals.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    let paise = (amount.abs() * 100.0).round() as u64;
    let whole = group_indian(paise / 100);
    let fraction = paise % 100;
    let sign = if amount < 0.0 && paise > 0 { "-" } else { "" };
    match fraction {
        0 => format!("{sign}{whole}"),
        f if f % 10 == 0 => format!("{sign}{whole}.{}", f / 10),
        f => format!("{sign}{whole}.{f:02}"),
    }
}

/// Amount with the rupee sign, e.g. `₹2,45,780.5`.
#[must_use]
pub fn rupees(amount: f64) -> String {
    format!("₹{}", format_inr(amount))
}

/// Ledger rendering with an explicit sign, e.g. `+₹52,000` or `-₹2,340`.
#[must_use]
pub fn signed_rupees(amount: f64) -> String {
    let sign = if amount >= 0.0 { '+' } else { '-' };
    format!("{sign}₹{}", format_inr(amount.abs()))
}

/// Percentage as written in the fixtures, e.g. `7.1%`.
#[must_use]
pub fn percent(rate: f64) -> String {
    format!("{rate}%")
}

/// Whole days from `today` until `maturity`; negative once matured.
#[must_use]
pub fn days_until(maturity: NaiveDate, today: NaiveDate) -> i64 {
    (maturity - today).num_days()
}

/// Whether a deposit `days` from maturity should be highlighted.
#[must_use]
pub const fn is_near_maturity(days: i64) -> bool {
    days <= NEAR_MATURITY_DAYS
}

/// Short date display, e.g. `5/11/2026`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

/// First eight characters of an identifier.
#[must_use]
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// Current local date.
#[cfg(target_arch = "wasm32")]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Current local date.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    #[test]
    fn indian_grouping_matches_en_in() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1_000), "1,000");
        assert_eq!(group_indian(100_000), "1,00,000");
        assert_eq!(group_indian(1_234_567), "12,34,567");
        assert_eq!(group_indian(123_456_789), "12,34,56,789");
    }

    #[test]
    fn amounts_keep_significant_decimals_only() {
        assert_eq!(format_inr(245_780.5), "2,45,780.5");
        assert_eq!(format_inr(18_450.75), "18,450.75");
        assert_eq!(format_inr(52_000.0), "52,000");
        assert_eq!(format_inr(0.004), "0");
        assert_eq!(format_inr(-1_500.0), "-1,500");
        assert_eq!(format_inr(f64::NAN), "0");
    }

    #[test]
    fn signed_rupees_marks_direction() {
        assert_eq!(signed_rupees(52_000.0), "+₹52,000");
        assert_eq!(signed_rupees(-2_340.0), "-₹2,340");
        assert_eq!(rupees(100.0), "₹100");
        assert_eq!(percent(7.1), "7.1%");
        assert_eq!(percent(10.0), "10%");
    }

    #[test]
    fn days_until_counts_calendar_days() {
        let today = date(2026, 10, 18);
        assert_eq!(days_until(date(2026, 10, 18), today), 0);
        assert_eq!(days_until(date(2026, 11, 5), today), 18);
        assert_eq!(days_until(date(2026, 10, 1), today), -17);
        assert_eq!(days_until(date(2027, 10, 18), today), 365);
    }

    #[test]
    fn near_maturity_threshold_is_inclusive() {
        assert!(is_near_maturity(30));
        assert!(is_near_maturity(-2));
        assert!(!is_near_maturity(31));
    }

    #[test]
    fn dates_and_ids_render_compactly() {
        assert_eq!(format_date(date(2026, 3, 7)), "7/3/2026");
        assert_eq!(short_id("3f2b8c1e-6d4a-4b7e"), "3f2b8c1e");
        assert_eq!(short_id("abc"), "abc");
    }
}
