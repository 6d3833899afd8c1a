//! Top navigation bar with brand, portal links and the language toggle.
//!
//! # Design
//! - Desktop links render inline; narrow screens get a collapsible sheet.
//! - The sheet closes whenever the route changes.

use crate::app::{Route, use_locale};
use crate::components::language_toggle::LanguageToggle;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Navbar)]
pub(crate) fn navbar() -> Html {
    let locale = use_locale();
    let active = use_route::<Route>().unwrap_or(Route::NotFound);
    let menu_open = use_state(|| false);

    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            active,
        );
    }
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let links = Route::nav()
        .into_iter()
        .map(|(route, key)| nav_item(route, &locale.t(key), active))
        .collect::<Html>();

    html! {
        <header class="navbar bg-base-200 shadow-sm sticky top-0 z-40">
            <div class="navbar-start">
                <Link<Route> to={Route::Home} classes={classes!("btn", "btn-ghost", "text-xl")}>
                    {locale.t("brand")}
                </Link<Route>>
            </div>
            <nav class="navbar-center hidden md:flex">
                <ul class="menu menu-horizontal gap-1">{links.clone()}</ul>
            </nav>
            <div class="navbar-end gap-2">
                <LanguageToggle />
                <Link<Route> to={Route::Customer} classes={classes!("btn", "btn-primary", "btn-sm", "hidden", "md:inline-flex")}>
                    {locale.t("getStarted")}
                </Link<Route>>
                <button
                    type="button"
                    class="btn btn-ghost btn-sm md:hidden"
                    aria-label={locale.t("openMenu")}
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    {"☰"}
                </button>
            </div>
            {if *menu_open {
                html! {
                    <div class="absolute top-full inset-x-0 bg-base-200 shadow md:hidden">
                        <ul class="menu p-4">
                            {links}
                            <li>
                                <Link<Route> to={Route::Customer} classes={classes!("btn", "btn-primary", "btn-sm")}>
                                    {locale.t("getStarted")}
                                </Link<Route>>
                            </li>
                        </ul>
                    </div>
                }
            } else {
                html! {}
            }}
        </header>
    }
}

fn nav_item(route: Route, label: &str, active: Route) -> Html {
    let classes = classes!((active == route).then_some("active"));
    html! {
        <li>
            <Link<Route> to={route} classes={classes}>{label.to_string()}</Link<Route>>
        </li>
    }
}
