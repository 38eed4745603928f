use dioxus::prelude::*;

use api::HttpProjectSource;
use common::{
    catalog::{Catalog, Filter, LoadState, load_projects},
    config::SiteConfig,
    reveal::RevealGroup,
};

use crate::components::reveal::Reveal;

pub mod card;
use card::ProjectCard;

pub mod modal;
use modal::ProjectModal;

#[component]
fn FilterBar() -> Element {
    let mut catalog = use_context::<Signal<Catalog>>();
    let active = catalog.read().filter();

    rsx! {
        Reveal { group: RevealGroup::Filters, class: "filter-container",
            for (filter, lit) in Filter::buttons(active) {
                button {
                    key: "{filter.key()}",
                    class: if lit { "filter-btn active" } else { "filter-btn" },
                    "data-filter": filter.key(),
                    onclick: move |_| catalog.with_mut(|c| c.set_filter(filter)),
                    "{filter.label()}"
                }
            }
        }
    }
}

#[component]
fn ProjectGrid() -> Element {
    let catalog = use_context::<Signal<Catalog>>();
    let catalog = catalog.read();

    rsx! {
        div { id: "projects-grid", class: "projects-grid",
            match catalog.load_state() {
                LoadState::Loading => rsx! {},
                LoadState::Failed(msg) => rsx! {
                    p { class: "projects-message", "{msg}" }
                },
                LoadState::Loaded => rsx! {
                    for project in catalog.visible() {
                        Reveal {
                            key: "{project.id}",
                            group: RevealGroup::Projects,
                            item: project.id.clone(),
                            ProjectCard { project: project.clone() }
                        }
                    }
                },
            }
        }
    }
}

// the projects section: filter buttons, the card grid, and the detail modal
// and lightbox they open
#[component]
pub fn Projects() -> Element {
    let config = use_context::<SiteConfig>();
    let mut catalog = use_context::<Signal<Catalog>>();

    // fetched once per page load, no retry
    use_future(move || {
        let source = HttpProjectSource::new(config.data_url.clone());
        async move {
            let res = load_projects(&source).await;
            catalog.with_mut(|c| c.apply_load(res));
        }
    });

    rsx! {
        section { id: "projects", class: "projects",
            div { class: "container",
                h2 { class: "section-title", "專案作品" }
                FilterBar {}
                ProjectGrid {}
            }
        }
        ProjectModal {}
    }
}
