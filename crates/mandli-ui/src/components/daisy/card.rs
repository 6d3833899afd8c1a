use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub actions: Option<Html>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Portal section card with an optional heading and action row.
#[function_component(Card)]
pub(crate) fn card(props: &CardProps) -> Html {
    let classes = classes!("card", "shadow", "bg-base-200", props.class.clone());
    html! {
        <section class={classes}>
            <div class="card-body">
                {props.title.clone().map(|title| html! { <h3 class="card-title">{title}</h3> }).unwrap_or_default()}
                {props.subtitle.clone().map(|subtitle| html! { <p class="text-sm opacity-70">{subtitle}</p> }).unwrap_or_default()}
                { for props.children.iter() }
                {props.actions.clone().map(|actions| html! {
                    <div class="card-actions justify-end">{actions}</div>
                }).unwrap_or_default()}
            </div>
        </section>
    }
}
