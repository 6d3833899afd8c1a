//! Root locale provider and the hook components use to translate.
//!
//! # Design
//! - The resolver lives in one `use_mut_ref` at the root; a state handle mirrors
//!   the active locale so changes re-render the tree.
//! - Storage is read once in a mount effect, so the first paint shows the default.
//! - The document `lang` attribute tracks the active locale.

use crate::app::preferences::{BrowserStore, log_storage_error};
use crate::i18n::{
    DEFAULT_LOCALE, Hydration, LOCALE_STORAGE_KEY, LocaleCode, LocaleResolver, PersistOutcome,
    TranslationBundle,
};
use gloo::console;
use gloo::utils::document;
use yew::prelude::*;

/// Locale state shared with every component.
#[derive(Clone, PartialEq)]
pub(crate) struct LocaleContext {
    pub locale: LocaleCode,
    pub bundle: TranslationBundle,
    pub set_locale: Callback<LocaleCode>,
}

impl LocaleContext {
    pub(crate) fn t(&self, key: &str) -> String {
        self.bundle.text(key)
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct LocaleProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LocaleProvider)]
pub(crate) fn locale_provider(props: &LocaleProviderProps) -> Html {
    let resolver = use_mut_ref(|| LocaleResolver::new(BrowserStore));
    let locale = use_state(|| DEFAULT_LOCALE);

    {
        let resolver = resolver.clone();
        let locale = locale.clone();
        use_effect_with_deps(
            move |_| {
                match resolver.borrow_mut().hydrate() {
                    Hydration::Restored(restored) => locale.set(restored),
                    Hydration::Ignored(raw) => {
                        console::warn!("ignoring unsupported stored locale", raw);
                    }
                    Hydration::Unreadable(err) => {
                        log_storage_error("get", LOCALE_STORAGE_KEY, &err.to_string());
                    }
                    Hydration::NothingStored | Hydration::AlreadyHydrated => {}
                }
                || ()
            },
            (),
        );
    }
    use_effect_with_deps(
        move |locale| {
            apply_lang(*locale);
            || ()
        },
        *locale,
    );

    let set_locale = {
        let resolver = resolver.clone();
        let locale = locale.clone();
        Callback::from(move |next: LocaleCode| {
            if let PersistOutcome::Failed(err) = resolver.borrow_mut().set_locale(next) {
                log_storage_error("set", LOCALE_STORAGE_KEY, &err.to_string());
            }
            locale.set(next);
        })
    };

    let context = LocaleContext {
        locale: *locale,
        bundle: TranslationBundle::new(*locale),
        set_locale,
    };

    html! {
        <ContextProvider<LocaleContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<LocaleContext>>
    }
}

/// Locale context, or a default-locale context outside the provider.
#[hook]
pub(crate) fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().unwrap_or_else(|| LocaleContext {
        locale: DEFAULT_LOCALE,
        bundle: TranslationBundle::default(),
        set_locale: Callback::from(|_| ()),
    })
}

fn apply_lang(locale: LocaleCode) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute("lang", locale.html_lang());
    }
}
