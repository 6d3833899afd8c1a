use crate::components::navbar::Navbar;
use crate::components::toast::ToastHost;
use crate::features::admin::view::AdminPage;
use crate::features::customer::view::CustomerPage;
use crate::features::home::view::HomePage;
use crate::features::member::view::MemberPage;
use crate::features::payment::view::PaymentPage;
use crate::models::{Toast, ToastKind, push_capped};
pub(crate) use locale::{LocaleContext, LocaleProvider, use_locale};
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

mod locale;
pub(crate) mod preferences;
mod routes;

/// Toast sink shared with the pages.
#[derive(Clone, PartialEq)]
pub(crate) struct ToastCtx {
    pub notify: Callback<(ToastKind, String)>,
}

impl ToastCtx {
    pub(crate) fn success(&self, message: String) {
        self.notify.emit((ToastKind::Success, message));
    }

    pub(crate) fn error(&self, message: String) {
        self.notify.emit((ToastKind::Error, message));
    }
}

#[hook]
pub(crate) fn use_toasts() -> ToastCtx {
    use_context::<ToastCtx>().unwrap_or_else(|| ToastCtx {
        notify: Callback::from(|_| ()),
    })
}

#[function_component(MandliApp)]
pub(crate) fn mandli_app() -> Html {
    let toasts = use_state(Vec::<Toast>::new);
    let toast_id = use_state(|| 0u64);

    let dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| {
            toasts.set(
                (*toasts)
                    .iter()
                    .filter(|toast| toast.id != id)
                    .cloned()
                    .collect(),
            );
        })
    };
    let toast_ctx = {
        let toasts = toasts.clone();
        let toast_id = toast_id.clone();
        ToastCtx {
            notify: Callback::from(move |(kind, message): (ToastKind, String)| {
                push_toast(&toasts, &toast_id, kind, message);
            }),
        }
    };

    html! {
        <LocaleProvider>
            <ContextProvider<ToastCtx> context={toast_ctx}>
                <BrowserRouter>
                    <div class="min-h-screen bg-base-100">
                        <Navbar />
                        <main class="container mx-auto px-4 py-8">
                            <Switch<Route> render={switch} />
                        </main>
                    </div>
                    <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
                </BrowserRouter>
            </ContextProvider<ToastCtx>>
        </LocaleProvider>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Customer => html! { <CustomerPage /> },
        Route::Member => html! { <MemberPage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::Payment => html! { <PaymentPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    let locale = use_locale();
    html! {
        <div class="hero py-16">
            <div class="hero-content text-center flex-col">
                <h2 class="text-2xl font-bold">{locale.t("notFoundTitle")}</h2>
                <p class="opacity-70">{locale.t("notFoundBody")}</p>
                <Link<Route> to={Route::Home} classes={classes!("btn", "btn-primary")}>{locale.t("home")}</Link<Route>>
            </div>
        </div>
    }
}

fn push_toast(
    toasts: &UseStateHandle<Vec<Toast>>,
    next_id: &UseStateHandle<u64>,
    kind: ToastKind,
    message: String,
) {
    let id = **next_id + 1;
    next_id.set(id);
    let mut list = (**toasts).clone();
    push_capped(&mut list, Toast { id, message, kind });
    toasts.set(list);
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<MandliApp>::with_root(root).render();
    } else {
        yew::Renderer::<MandliApp>::new().render();
    }
}
