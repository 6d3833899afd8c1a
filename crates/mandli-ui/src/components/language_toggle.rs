//! Two-state language switch shown in the navbar.
//!
//! The button names the locale it switches *to*, in that locale's own script.

use crate::app::use_locale;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LanguageToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LanguageToggle)]
pub(crate) fn language_toggle(props: &LanguageToggleProps) -> Html {
    let locale = use_locale();
    let next = locale.locale.toggled();
    let onclick = {
        let set_locale = locale.set_locale.clone();
        Callback::from(move |_: MouseEvent| set_locale.emit(next))
    };

    html! {
        <button
            type="button"
            class={classes!("btn", "btn-outline", "btn-sm", props.class.clone())}
            aria-label={locale.t("toggleLanguage")}
            lang={next.code()}
            onclick={onclick}
        >
            {next.label()}
        </button>
    }
}
