use dioxus::prelude::*;

use api::Project;
use common::{catalog::Catalog, config::SiteConfig};

pub const GITHUB_ICON: &str = "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z";

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    project: Project,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let config = use_context::<SiteConfig>();
    let mut catalog = use_context::<Signal<Catalog>>();

    let project = props.project;
    let id = project.id.clone();
    let category = project.category;
    let cover = project.cover().map(|c| config.assets.image(c));

    rsx! {
        article {
            class: "project-card",
            "data-category": category.key(),
            "data-id": "{project.id}",
            onclick: move |_| {
                catalog.write().open_modal(&id);
            },

            div { class: "project-card-header",
                span { class: "project-category {category.class()}", "{category.label()}" }
                if let Some(github) = project.github() {
                    a {
                        class: "project-github-link",
                        href: "{github}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        title: "GitHub",
                        // following the link must not open the modal
                        onclick: move |evt| evt.stop_propagation(),
                        svg {
                            width: "18",
                            height: "18",
                            view_box: "0 0 24 24",
                            fill: "currentColor",
                            path { d: GITHUB_ICON }
                        }
                    }
                }
            }

            div { class: "project-image",
                match cover {
                    Some(src) => rsx! {
                        img { src: "{src}", alt: "{project.name}", loading: "lazy" }
                    },
                    None => rsx! {
                        span { class: "project-image-placeholder", "No Image" }
                    },
                }
            }

            div { class: "project-card-body",
                h3 { class: "project-name", "{project.name}" }
                p { class: "project-desc", "{project.desc}" }
                div { class: "project-metrics",
                    for metric in project.metrics.iter() {
                        span { class: "metric-tag", "{metric}" }
                    }
                }
                div { class: "project-tags",
                    for tag in project.tags.iter() {
                        span { class: "tech-tag", "{tag}" }
                    }
                }
            }

            div { class: "project-card-footer",
                button { class: "project-btn", "data-id": "{project.id}", "查看詳情" }
            }
        }
    }
}
