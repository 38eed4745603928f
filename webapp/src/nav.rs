use dioxus::prelude::*;

use common::nav::NavController;

use crate::shared::dom;

// (section id, label) in page order
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("hero", "首頁"),
    ("about", "關於我"),
    ("projects", "專案作品"),
    ("skills", "技能"),
    ("contact", "聯絡我"),
];

#[derive(Clone, PartialEq, Props)]
pub struct AnchorLinkProps {
    #[props(into)]
    target: String,
    #[props(default, into)]
    class: String,
    #[props(default)]
    closes_menu: bool,
    children: Element,
}

// in-page link that smooth scrolls to its section, clearing the fixed header
#[component]
pub fn AnchorLink(props: AnchorLinkProps) -> Element {
    let mut nav = use_context::<Signal<NavController>>();
    let target = props.target.clone();
    let closes_menu = props.closes_menu;

    rsx! {
        a {
            class: "{props.class}",
            href: "#{props.target}",
            onclick: move |evt| {
                evt.prevent_default();
                if closes_menu {
                    nav.with_mut(|n| n.close_menu());
                }
                dom::smooth_scroll_to(&target);
            },
            {props.children}
        }
    }
}

#[component]
pub fn Header() -> Element {
    let mut nav = use_context::<Signal<NavController>>();
    let (scrolled, menu_open) = {
        let n = nav.read();
        (n.scrolled(), n.menu_open())
    };

    rsx! {
        header { id: "header", class: if scrolled { "header scrolled" } else { "header" },
            div { class: "nav-container",
                AnchorLink { target: "hero", class: "logo", "Portfolio" }

                nav { id: "nav", class: if menu_open { "nav active" } else { "nav" },
                    ul { class: "nav-list",
                        for (id, label) in NAV_LINKS {
                            li { key: "{id}",
                                AnchorLink {
                                    target: id,
                                    class: if nav.read().is_active(id) { "nav-link active" } else { "nav-link" },
                                    closes_menu: true,
                                    "{label}"
                                }
                            }
                        }
                    }
                }

                button {
                    id: "hamburger",
                    class: if menu_open { "hamburger active" } else { "hamburger" },
                    "aria-label": "menu",
                    onclick: move |_| {
                        nav.with_mut(|n| n.toggle_menu());
                    },
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}
