use dioxus::prelude::*;

use common::reveal::{RevealGroup, RevealTarget, Revealer};

use crate::shared::scroll::reveal_pass;

#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    group: RevealGroup,
    // stable per element within its group
    #[props(default = String::from("0"), into)]
    item: String,
    #[props(default, into)]
    class: String,
    children: Element,
}

// wraps children in a div that fades in the first time it is scrolled into view
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let mut revealer = use_context::<Signal<Revealer>>();
    let target = RevealTarget::new(props.group, props.item);

    // register after mount so the element can be measured right away
    let registered = target.clone();
    use_effect(move || {
        revealer.with_mut(|rev| rev.register(registered.clone()));
        reveal_pass(revealer);
    });

    let style = revealer.read().style(&target);

    rsx! {
        div {
            id: target.dom_id(),
            class: "{props.class}",
            style: "{style}",
            {props.children}
        }
    }
}
