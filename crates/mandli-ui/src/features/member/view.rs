use crate::app::use_locale;
use crate::components::daisy::Card;
use crate::core::data::fixtures;
use crate::core::format::{format_date, format_inr, group_indian, percent, rupees};
use crate::features::member::logic::{dividends_newest_first, notices_newest_first, share_totals};
use yew::prelude::*;

#[function_component(MemberPage)]
pub(crate) fn member_page() -> Html {
    let locale = use_locale();
    let data = fixtures();
    let totals = share_totals(&data.share_capital);
    let dividends = dividends_newest_first(&data.dividends);
    let notices = notices_newest_first(&data.notices);

    html! {
        <div class="space-y-10">
            <section class="space-y-4">
                <h2 class="text-3xl font-bold">{locale.t("memberShareCapital")}</h2>
                <div class="overflow-x-auto rounded-box border border-base-300">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                <th>{locale.t("memberId")}</th>
                                <th>{locale.t("name")}</th>
                                <th class="text-right">{locale.t("shares")}</th>
                                <th class="text-right">{locale.t("valueInr")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for data.share_capital.iter().map(|row| html! {
                                <tr key={row.member_id.clone()}>
                                    <td class="font-mono">{row.member_id.clone()}</td>
                                    <td>{row.name.clone()}</td>
                                    <td class="text-right">{group_indian(row.shares)}</td>
                                    <td class="text-right">{format_inr(row.value)}</td>
                                </tr>
                            })}
                        </tbody>
                        <tfoot>
                            <tr>
                                <td colspan="2">{totals.members.to_string()}</td>
                                <td class="text-right">{group_indian(totals.shares)}</td>
                                <td class="text-right">{format_inr(totals.value)}</td>
                            </tr>
                        </tfoot>
                    </table>
                </div>
            </section>
            <section class="space-y-4">
                <h3 class="text-2xl font-bold">{locale.t("memberDividends")}</h3>
                <div class="grid grid-cols-1 gap-6 md:grid-cols-3">
                    {for dividends.iter().map(|dividend| html! {
                        <Card key={dividend.id.clone()} title={dividend.year.to_string()} subtitle={format!("{}: {}", locale.t("rate"), percent(dividend.rate))}>
                            <div class="text-3xl font-bold">{rupees(dividend.amount)}</div>
                        </Card>
                    })}
                </div>
            </section>
            <section class="space-y-4">
                <h3 class="text-2xl font-bold">{locale.t("memberNotices")}</h3>
                <div class="grid gap-6">
                    {for notices.iter().map(|notice| html! {
                        <Card key={notice.id.clone()} title={notice.title.clone()} subtitle={format_date(notice.date)}>
                            <p>{notice.details.clone()}</p>
                        </Card>
                    })}
                </div>
            </section>
        </div>
    }
}
