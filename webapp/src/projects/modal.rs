use dioxus::prelude::*;

use common::{
    catalog::{Catalog, ModalAction, NO_RESOURCES_MESSAGE},
    video::VideoEmbed,
};

use crate::{components::carousel::ModalCarousel, projects::card::GITHUB_ICON};

const YOUTUBE_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[derive(Clone, PartialEq, Props)]
struct ActionLinkProps {
    action: ModalAction,
}

#[component]
fn ActionLink(props: ActionLinkProps) -> Element {
    let action = props.action;
    let class = if action.is_primary() { "btn btn-primary" } else { "btn btn-secondary" };

    let icon = match action {
        ModalAction::GitHub(_) => rsx! {
            svg {
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "currentColor",
                style: "margin-right: 8px;",
                path { d: GITHUB_ICON }
            }
        },
        ModalAction::Workflow(_) => rsx! {
            svg {
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                style: "margin-right: 8px;",
                path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
                polyline { points: "7 10 12 15 17 10" }
                line { x1: "12", x2: "12", y1: "15", y2: "3" }
            }
        },
        ModalAction::Resource(_) => rsx! {
            svg {
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                style: "margin-right: 8px;",
                path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
                polyline { points: "15 3 21 3 21 9" }
                line { x1: "10", x2: "21", y1: "14", y2: "3" }
            }
        },
    };

    if action.is_download() {
        rsx! {
            a { href: "{action.href()}", download: "", class: "{class}", {icon} "{action.label()}" }
        }
    } else {
        rsx! {
            a {
                href: "{action.href()}",
                target: "_blank",
                rel: "noopener noreferrer",
                class: "{class}",
                {icon}
                "{action.label()}"
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct VideoProps {
    video: Option<VideoEmbed>,
}

#[component]
fn ModalVideo(props: VideoProps) -> Element {
    let display = if props.video.is_some() { "display: block;" } else { "display: none;" };

    rsx! {
        div { id: "modal-video-container", class: "modal-video-container", style: display,
            div { id: "modal-video",
                match props.video {
                    Some(embed @ VideoEmbed::YouTube { .. }) => rsx! {
                        iframe {
                            src: embed.src(),
                            "frameborder": "0",
                            "allow": YOUTUBE_ALLOW,
                            "allowfullscreen": "true",
                        }
                    },
                    Some(embed @ VideoEmbed::File { .. }) => rsx! {
                        video { src: embed.src(), controls: true }
                    },
                    None => rsx! {},
                }
            }
        }
    }
}

// project detail dialog
//
// the content stays mounted after closing so it can fade out; closing only
// clears the video and drops the carousel
#[component]
pub fn ProjectModal() -> Element {
    let mut catalog = use_context::<Signal<Catalog>>();

    let close = move |_: MouseEvent| catalog.with_mut(|c| c.close_modal());

    let (open, view) = {
        let c = catalog.read();
        (c.modal_open(), c.modal().cloned())
    };

    rsx! {
        div { id: "project-modal", class: if open { "modal active" } else { "modal" },
            div { id: "modal-overlay", class: "modal-overlay", onclick: close }
            if let Some(view) = view {
                div { class: "modal-content",
                    button { id: "modal-close", class: "modal-close", onclick: close, "×" }

                    h2 { id: "modal-title", class: "modal-title", "{view.title}" }
                    span {
                        id: "modal-category",
                        class: "modal-category project-category {view.category_class}",
                        "{view.category_label}"
                    }

                    ModalCarousel { key: "{view.project_id}", slides: view.slides.clone(), alt: view.title.clone() }

                    ModalVideo { video: view.video.clone() }

                    div {
                        id: "modal-details",
                        class: "modal-details",
                        dangerous_inner_html: "{view.details_html}",
                    }

                    div { id: "modal-actions", class: "modal-actions",
                        if view.actions.is_empty() {
                            p { class: "no-resources", "{NO_RESOURCES_MESSAGE}" }
                        } else {
                            for action in view.actions.iter() {
                                ActionLink { key: "{action.href()}", action: action.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
