//! Landing page with entry points into each portal.

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

/// Portal the landing cards link into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortalTarget {
    /// Customer self-service.
    Customer,
    /// Society members.
    Member,
    /// Bank staff.
    Admin,
}

/// One landing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortalCard {
    /// Link target.
    pub target: PortalTarget,
    /// Translation key of the card title.
    pub title_key: &'static str,
    /// Translation key of the card body.
    pub desc_key: &'static str,
}

/// Landing cards in display order.
pub const PORTALS: [PortalCard; 3] = [
    PortalCard {
        target: PortalTarget::Customer,
        title_key: "customerPortal",
        desc_key: "customerPortalDesc",
    },
    PortalCard {
        target: PortalTarget::Member,
        title_key: "memberPortal",
        desc_key: "memberPortalDesc",
    },
    PortalCard {
        target: PortalTarget::Admin,
        title_key: "adminPortal",
        desc_key: "adminPortalDesc",
    },
];

#[cfg(test)]
mod tests {
    use super::PORTALS;
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn every_card_is_translated_in_both_locales() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            for card in PORTALS {
                assert_ne!(bundle.text(card.title_key), card.title_key);
                assert_ne!(bundle.text(card.desc_key), card.desc_key);
            }
        }
    }
}
