use crate::app::{Route, use_locale};
use crate::components::daisy::Card;
use crate::features::home::{PORTALS, PortalTarget};
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let locale = use_locale();
    html! {
        <div class="space-y-12">
            <section class="hero py-12">
                <div class="hero-content text-center flex-col">
                    <h1 class="text-4xl font-bold md:text-5xl">{locale.t("landingTitle")}</h1>
                    <p class="max-w-2xl text-lg opacity-80">{locale.t("landingSubtitle")}</p>
                </div>
            </section>
            <section class="grid grid-cols-1 gap-6 md:grid-cols-3">
                {for PORTALS.iter().map(|card| {
                    let actions = html! {
                        <Link<Route> to={route_for(card.target)} classes={classes!("btn", "btn-primary")}>
                            {locale.t("enterPortal")}
                        </Link<Route>>
                    };
                    html! {
                        <Card title={locale.t(card.title_key)} actions={Some(actions)}>
                            <p class="opacity-80">{locale.t(card.desc_key)}</p>
                        </Card>
                    }
                })}
            </section>
        </div>
    }
}

const fn route_for(target: PortalTarget) -> Route {
    match target {
        PortalTarget::Customer => Route::Customer,
        PortalTarget::Member => Route::Member,
        PortalTarget::Admin => Route::Admin,
    }
}
