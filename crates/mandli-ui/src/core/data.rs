//! Process-wide access to the embedded fixtures.

use mandli_models::FixtureSet;
use std::sync::LazyLock;

static FIXTURES: LazyLock<FixtureSet> = LazyLock::new(|| {
    FixtureSet::load().unwrap_or_else(|err| {
        report_fixture_error(&err);
        FixtureSet::default()
    })
});

/// Decoded fixtures; an empty set when a document fails to decode.
#[must_use]
pub fn fixtures() -> &'static FixtureSet {
    &FIXTURES
}

#[cfg(target_arch = "wasm32")]
fn report_fixture_error(err: &mandli_models::FixtureError) {
    gloo::console::warn!("fixtures failed to load; rendering empty portals", err.to_string());
}

#[cfg(not(target_arch = "wasm32"))]
const fn report_fixture_error(_err: &mandli_models::FixtureError) {}

#[cfg(test)]
mod tests {
    use super::fixtures;

    #[test]
    fn fixtures_are_shared_and_populated() {
        let first = fixtures();
        let second = fixtures();
        assert!(std::ptr::eq(first, second));
        assert!(!first.customers.is_empty());
        assert!(first.account.balance > 0.0);
    }
}
