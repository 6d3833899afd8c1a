use crate::app::preferences::api_base_url;
use crate::app::{use_locale, use_toasts};
use crate::components::daisy::Card;
use crate::core::config::AppConfig;
use crate::core::format::rupees;
use crate::features::payment::state::{CheckoutOptions, PaymentState};
use crate::services::checkout::{create_order, ensure_script, open_checkout};
use gloo::console;
use yew::platform::spawn_local;
use yew::prelude::*;

#[function_component(PaymentPage)]
pub(crate) fn payment_page() -> Html {
    let locale = use_locale();
    let toasts = use_toasts();
    let config = use_memo(|_| AppConfig::from_build_env(), ());
    let state = use_state(PaymentState::default);

    {
        let src = config.checkout_script_url;
        use_effect_with_deps(
            move |_| {
                if let Err(err) = ensure_script(src) {
                    console::error!("checkout script injection failed", err.to_string());
                }
                || ()
            },
            (),
        );
    }

    let on_pay = {
        let state = state.clone();
        let config = config.clone();
        let success_label = locale.t("paymentSuccess");
        Callback::from(move |_: MouseEvent| {
            if state.processing {
                return;
            }
            state.set(PaymentState { processing: true });
            let state = state.clone();
            let config = config.clone();
            let success_label = success_label.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let result = match create_order(&api_base_url(), &config).await {
                    Ok(order_id) => {
                        open_checkout(&CheckoutOptions::for_order(&config, order_id), success_label)
                    }
                    Err(err) => Err(err),
                };
                if let Err(err) = result {
                    console::error!("checkout failed", format!("{err:#}"));
                    toasts.error(err.to_string());
                }
                state.set(PaymentState::default());
            });
        })
    };

    html! {
        <div class="flex justify-center py-12">
            <Card class="w-full max-w-md text-center" title={locale.t("paymentPortal")}>
                <p class="opacity-80">{locale.t("amountToPay")}</p>
                <p class="text-4xl font-bold">{rupees(f64::from(config.amount_rupees))}</p>
                <button
                    type="button"
                    class="btn btn-primary w-full"
                    disabled={state.processing}
                    onclick={on_pay}
                >
                    {locale.t(state.button_key())}
                </button>
            </Card>
        </div>
    }
}
