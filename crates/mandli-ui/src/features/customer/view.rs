use crate::app::{use_locale, use_toasts};
use crate::components::daisy::Card;
use crate::core::data::fixtures;
use crate::core::format::{format_date, percent, rupees, signed_rupees, today};
use crate::core::store::AppStore;
use crate::features::customer::logic::deposit_countdowns;
use crate::features::customer::state::{
    LoanKind, RequestKind, ServiceRequest, ServiceRequestDraft,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(CustomerPage)]
pub(crate) fn customer_page() -> Html {
    let logged_in = use_selector(|store: &AppStore| store.customer.logged_in);
    let dispatch = Dispatch::<AppStore>::new();

    if *logged_in {
        let on_logout = Callback::from(move |()| dispatch.reduce_mut(|store| store.customer.logout()));
        html! { <Dashboard {on_logout} /> }
    } else {
        let on_login = Callback::from(move |()| dispatch.reduce_mut(|store| store.customer.login()));
        html! { <Login {on_login} /> }
    }
}

#[derive(Properties, PartialEq)]
struct LoginProps {
    on_login: Callback<()>,
}

#[function_component(Login)]
fn login(props: &LoginProps) -> Html {
    let locale = use_locale();
    let email = use_state(String::new);
    let password = use_state(String::new);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    // Any credentials are accepted.
    let onsubmit = {
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_login.emit(());
        })
    };

    html! {
        <div class="mx-auto max-w-md">
            <Card title={locale.t("customerLoginTitle")} subtitle={locale.t("landingSubtitle")}>
                <form class="grid gap-4" {onsubmit}>
                    <label class="form-control">
                        <span class="label-text">{locale.t("email")}</span>
                        <input id="email" class="input input-bordered" value={(*email).clone()} oninput={on_email} />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{locale.t("password")}</span>
                        <input id="password" type="password" class="input input-bordered" value={(*password).clone()} oninput={on_password} />
                    </label>
                    <button type="submit" class="btn btn-primary w-full">{locale.t("login")}</button>
                </form>
            </Card>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DashboardProps {
    on_logout: Callback<()>,
}

#[function_component(Dashboard)]
fn dashboard(props: &DashboardProps) -> Html {
    let locale = use_locale();
    let toasts = use_toasts();
    let data = fixtures();
    let deposits = use_memo(|_| deposit_countdowns(&data.fixed_deposits, today()), ());
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };
    let on_loan_applied = {
        let toasts = toasts.clone();
        let message = locale.t("toastLoanApplied");
        Callback::from(move |_: LoanKind| toasts.success(message.clone()))
    };
    let on_service_sent = {
        let message = locale.t("toastServiceSent");
        Callback::from(move |_: ServiceRequest| toasts.success(message.clone()))
    };

    html! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <h2 class="text-3xl font-bold">{locale.t("dashboard")}</h2>
                <button class="btn btn-outline" onclick={on_logout}>{locale.t("logout")}</button>
            </div>
            <div class="grid grid-cols-1 gap-8 md:grid-cols-2">
                <Card
                    title={locale.t("accountInfo")}
                    subtitle={format!("{}: {}", locale.t("balance"), rupees(data.account.balance))}
                >
                    <h4 class="font-semibold">{locale.t("transactions")}</h4>
                    <ul class="space-y-3 text-sm">
                        {for data.transactions.iter().map(|tx| html! {
                            <li key={tx.id.clone()} class="flex items-center justify-between rounded-box border border-base-300 p-3">
                                <div>
                                    <div class="font-medium">{tx.desc.clone()}</div>
                                    <div class="opacity-70">{format_date(tx.date)}</div>
                                </div>
                                <div class={classes!("font-semibold", if tx.is_credit() { "text-success" } else { "text-error" })}>
                                    {signed_rupees(tx.amount)}
                                </div>
                            </li>
                        })}
                    </ul>
                </Card>
                <Card title={locale.t("loanApplication")} subtitle={locale.t("loanType")}>
                    <LoanApplicationForm on_applied={on_loan_applied} />
                </Card>
            </div>
            <div class="grid grid-cols-1 gap-8 md:grid-cols-2">
                <Card title={locale.t("fixedDeposits")}>
                    {for deposits.iter().map(|row| html! {
                        <div key={row.deposit.id.clone()} class="flex items-center justify-between rounded-box border border-base-300 p-4 text-sm">
                            <div>
                                <div class="font-semibold text-base">
                                    {format!("{} @ {}", rupees(row.deposit.amount), percent(row.deposit.rate))}
                                </div>
                                <div class="opacity-70">
                                    {format!("{}: {}", locale.t("maturity"), format_date(row.deposit.maturity_date))}
                                </div>
                            </div>
                            <div class={if row.near_maturity { "badge badge-warning font-bold" } else { "opacity-80" }}>
                                {format!("{} {}", row.days_left, locale.t("daysLeft"))}
                            </div>
                        </div>
                    })}
                </Card>
                <Card title={locale.t("serviceRequests")}>
                    <ServiceRequestForm on_sent={on_service_sent} />
                </Card>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LoanFormProps {
    on_applied: Callback<LoanKind>,
}

#[function_component(LoanApplicationForm)]
fn loan_application_form(props: &LoanFormProps) -> Html {
    let locale = use_locale();
    let kind = use_state(LoanKind::default);
    let onchange = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            kind.set(LoanKind::from_value(
                &e.target_unchecked_into::<HtmlSelectElement>().value(),
            ));
        })
    };
    let onclick = {
        let kind = kind.clone();
        let on_applied = props.on_applied.clone();
        Callback::from(move |_: MouseEvent| on_applied.emit(*kind))
    };

    html! {
        <div class="grid gap-4">
            <label class="form-control">
                <span class="label-text">{locale.t("loanType")}</span>
                <select class="select select-bordered" {onchange}>
                    {for LoanKind::all().into_iter().map(|option| html! {
                        <option value={option.as_value()} selected={option == *kind}>{locale.t(option.label_key())}</option>
                    })}
                </select>
            </label>
            <button type="button" class="btn btn-primary" {onclick}>{locale.t("loanApply")}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceFormProps {
    on_sent: Callback<ServiceRequest>,
}

#[function_component(ServiceRequestForm)]
fn service_request_form(props: &ServiceFormProps) -> Html {
    let locale = use_locale();
    let draft = use_state(ServiceRequestDraft::default);

    let on_kind = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let mut next = (*draft).clone();
            next.kind = RequestKind::from_value(&e.target_unchecked_into::<HtmlSelectElement>().value());
            draft.set(next);
        })
    };
    let on_comments = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.comments = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            draft.set(next);
        })
    };
    let onsubmit = {
        let draft = draft.clone();
        let on_sent = props.on_sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*draft).clone();
            let request = next.submit();
            draft.set(next);
            on_sent.emit(request);
        })
    };

    html! {
        <form class="grid gap-4" {onsubmit}>
            <label class="form-control">
                <span class="label-text">{locale.t("requestType")}</span>
                <select class="select select-bordered" onchange={on_kind}>
                    {for RequestKind::all().into_iter().map(|option| html! {
                        <option value={option.as_value()} selected={option == draft.kind}>{locale.t(option.label_key())}</option>
                    })}
                </select>
            </label>
            <label class="form-control">
                <span class="label-text">{locale.t("comments")}</span>
                <textarea class="textarea textarea-bordered" value={draft.comments.clone()} oninput={on_comments} />
            </label>
            <button type="submit" class="btn btn-primary">{locale.t("submit")}</button>
        </form>
    }
}
