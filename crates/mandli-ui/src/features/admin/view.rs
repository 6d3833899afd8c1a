use crate::app::{LocaleContext, use_locale, use_toasts};
use crate::components::daisy::{Badge, Card, DaisyColor};
use crate::core::data::fixtures;
use crate::core::format::{rupees, short_id};
use crate::core::store::AppStore;
use crate::features::admin::logic::{
    ChartBar, chart_relative, chart_shares, status_badge_class, status_label_key,
};
use crate::features::admin::state::{
    StaffRole, add_customer, delete_customer, edit_customer, set_loan_status, toggle_role,
};
use gloo::dialogs::prompt;
use mandli_models::LoanStatus;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(AdminPage)]
pub(crate) fn admin_page() -> Html {
    let locale = use_locale();
    html! {
        <div class="space-y-10">
            <section class="space-y-4">
                <h2 class="text-3xl font-bold">{locale.t("adminManageCustomers")}</h2>
                <CustomerManager />
            </section>
            <section class="space-y-4">
                <h2 class="text-3xl font-bold">{locale.t("adminLoanWorkflow")}</h2>
                <LoanWorkflow />
            </section>
            <section class="space-y-4">
                <h2 class="text-3xl font-bold">{locale.t("adminReports")}</h2>
                <Reports />
            </section>
            <section class="space-y-4">
                <h2 class="text-3xl font-bold">{locale.t("adminUserManagement")}</h2>
                <StaffRoles />
            </section>
        </div>
    }
}

#[function_component(CustomerManager)]
fn customer_manager() -> Html {
    let locale = use_locale();
    let toasts = use_toasts();
    let customers = use_selector(|store: &AppStore| store.admin.customers.clone());
    let dispatch = Dispatch::<AppStore>::new();
    let new_name = use_state(String::new);
    let new_email = use_state(String::new);

    let on_name = {
        let new_name = new_name.clone();
        Callback::from(move |e: InputEvent| new_name.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let new_email = new_email.clone();
        Callback::from(move |e: InputEvent| new_email.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_add = {
        let dispatch = dispatch.clone();
        let new_name = new_name.clone();
        let new_email = new_email.clone();
        let toasts = toasts.clone();
        let saved = locale.t("toastSaved");
        Callback::from(move |_: MouseEvent| {
            let mut added = false;
            dispatch.reduce_mut(|store| {
                added = add_customer(&mut store.admin, &new_name, &new_email).is_ok();
            });
            if added {
                new_name.set(String::new());
                new_email.set(String::new());
                toasts.success(saved.clone());
            }
        })
    };

    html! {
        <Card>
            <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                <label class="form-control">
                    <span class="label-text">{locale.t("name")}</span>
                    <input class="input input-bordered" placeholder="Jane Doe" value={(*new_name).clone()} oninput={on_name} />
                </label>
                <label class="form-control">
                    <span class="label-text">{locale.t("email")}</span>
                    <input class="input input-bordered" placeholder="jane@example.com" value={(*new_email).clone()} oninput={on_email} />
                </label>
            </div>
            <div>
                <button type="button" class="btn btn-primary" onclick={on_add}>{locale.t("add")}</button>
            </div>
            <div class="overflow-x-auto rounded-box border border-base-300">
                <table class="table table-zebra text-sm">
                    <thead>
                        <tr>
                            <th>{locale.t("id")}</th>
                            <th>{locale.t("name")}</th>
                            <th>{locale.t("email")}</th>
                            <th class="text-right">{locale.t("actions")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for customers.iter().map(|customer| {
                            let id = customer.id.clone();
                            let on_edit = {
                                let dispatch = dispatch.clone();
                                let toasts = toasts.clone();
                                let locale = locale.clone();
                                let id = id.clone();
                                let name = customer.name.clone();
                                let email = customer.email.clone();
                                Callback::from(move |_: MouseEvent| {
                                    // A cancelled or blank prompt keeps the current value.
                                    let next_name = prompt(&locale.t("promptNewName"), Some(name.as_str()));
                                    let next_email = prompt(&locale.t("promptNewEmail"), Some(email.as_str()));
                                    dispatch.reduce_mut(|store| {
                                        edit_customer(&mut store.admin, &id, next_name.as_deref(), next_email.as_deref());
                                    });
                                    toasts.success(locale.t("toastSaved"));
                                })
                            };
                            let on_delete = {
                                let dispatch = dispatch.clone();
                                let id = id.clone();
                                Callback::from(move |_: MouseEvent| {
                                    dispatch.reduce_mut(|store| {
                                        delete_customer(&mut store.admin, &id);
                                    });
                                })
                            };
                            html! {
                                <tr key={id}>
                                    <td class="font-mono">{short_id(&customer.id)}</td>
                                    <td>{customer.name.clone()}</td>
                                    <td>{customer.email.clone()}</td>
                                    <td class="text-right space-x-2">
                                        <button class="btn btn-outline btn-sm" onclick={on_edit}>{locale.t("edit")}</button>
                                        <button class="btn btn-error btn-sm" onclick={on_delete}>{locale.t("delete")}</button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </Card>
    }
}

#[function_component(LoanWorkflow)]
fn loan_workflow() -> Html {
    let locale = use_locale();
    let loans = use_selector(|store: &AppStore| store.admin.loans.clone());
    let dispatch = Dispatch::<AppStore>::new();

    let decide = |id: &str, status: LoanStatus| {
        let dispatch = dispatch.clone();
        let id = id.to_string();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|store| {
                set_loan_status(&mut store.admin, &id, status);
            });
        })
    };

    html! {
        <Card>
            <div class="overflow-x-auto rounded-box border border-base-300">
                <table class="table table-zebra text-sm">
                    <thead>
                        <tr>
                            <th>{locale.t("id")}</th>
                            <th>{locale.t("customer")}</th>
                            <th>{locale.t("loanType")}</th>
                            <th class="text-right">{locale.t("amount")}</th>
                            <th class="text-right">{locale.t("status")}</th>
                            <th class="text-right">{locale.t("actions")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for loans.iter().map(|loan| html! {
                            <tr key={loan.id.clone()}>
                                <td class="font-mono">{short_id(&loan.id)}</td>
                                <td>{loan.customer.clone()}</td>
                                <td class="capitalize">{loan.kind.clone()}</td>
                                <td class="text-right font-semibold">{rupees(loan.amount)}</td>
                                <td class="text-right">
                                    <span class={classes!("badge", status_badge_class(loan.status))}>
                                        {locale.t(status_label_key(loan.status))}
                                    </span>
                                </td>
                                <td class="text-right space-x-2">
                                    <button class="btn btn-outline btn-sm" onclick={decide(&loan.id, LoanStatus::Approved)}>{locale.t("approve")}</button>
                                    <button class="btn btn-error btn-sm" onclick={decide(&loan.id, LoanStatus::Rejected)}>{locale.t("reject")}</button>
                                </td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </Card>
    }
}

#[function_component(Reports)]
fn reports() -> Html {
    let locale = use_locale();
    let reports = &fixtures().reports;
    let audit = chart_shares(&reports.audit);
    let compliance = chart_relative(&reports.compliance);

    html! {
        <div class="grid grid-cols-1 gap-8 md:grid-cols-2">
            <Card title={locale.t("auditBreakdown")}>
                {bar_list(&audit, |bar| format!("{:.0}%", bar.percent))}
            </Card>
            <Card title={locale.t("complianceStats")}>
                {bar_list(&compliance, |bar| bar.value.to_string())}
            </Card>
        </div>
    }
}

fn bar_list(bars: &[ChartBar], caption: impl Fn(&ChartBar) -> String) -> Html {
    html! {
        <ul class="space-y-3">
            {for bars.iter().map(|bar| html! {
                <li key={bar.name.clone()} class="space-y-1">
                    <div class="flex justify-between text-sm">
                        <span>{bar.name.clone()}</span>
                        <span class="font-semibold">{caption(bar)}</span>
                    </div>
                    <div class="h-3 w-full rounded-full bg-base-300">
                        <div
                            class="h-3 rounded-full"
                            style={format!("width: {:.1}%; background-color: {};", bar.percent, bar.color)}
                        />
                    </div>
                </li>
            })}
        </ul>
    }
}

#[function_component(StaffRoles)]
fn staff_roles() -> Html {
    let locale = use_locale();
    let staff = use_selector(|store: &AppStore| store.admin.staff.clone());
    let dispatch = Dispatch::<AppStore>::new();

    html! {
        <Card>
            <table class="table text-sm">
                <thead>
                    <tr>
                        <th>{locale.t("user")}</th>
                        <th>{locale.t("role")}</th>
                        <th class="text-right">{locale.t("actions")}</th>
                    </tr>
                </thead>
                <tbody>
                    {for staff.iter().map(|member| {
                        let dispatch = dispatch.clone();
                        let name = member.name.clone();
                        let on_toggle = Callback::from(move |_: MouseEvent| {
                            dispatch.reduce_mut(|store| {
                                toggle_role(&mut store.admin, &name);
                            });
                        });
                        role_row(&locale, &member.name, member.role, on_toggle)
                    })}
                </tbody>
            </table>
        </Card>
    }
}

fn role_row(locale: &LocaleContext, name: &str, role: StaffRole, on_toggle: Callback<MouseEvent>) -> Html {
    let tone = match role {
        StaffRole::Admin => DaisyColor::Primary,
        StaffRole::Staff => DaisyColor::Neutral,
    };
    html! {
        <tr key={name.to_string()}>
            <td>{name.to_string()}</td>
            <td><Badge tone={tone}>{locale.t(role.label_key())}</Badge></td>
            <td class="text-right">
                <button class="btn btn-outline btn-sm" onclick={on_toggle}>{locale.t("toggleRole")}</button>
            </td>
        </tr>
    }
}
