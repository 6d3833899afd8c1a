use super::foundations::DaisyColor;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BadgeProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Badge)]
pub(crate) fn badge(props: &BadgeProps) -> Html {
    let classes = classes!(
        "badge",
        props.tone.map(|tone| tone.with_prefix("badge")),
        props.class.clone()
    );
    html! {
        <span class={classes}>
            { for props.children.iter() }
        </span>
    }
}
