use dioxus::prelude::*;

use common::catalog::Catalog;

#[component]
pub fn Lightbox() -> Element {
    let mut catalog = use_context::<Signal<Catalog>>();
    let src = catalog.read().lightbox().map(str::to_owned);
    let active = src.is_some();

    rsx! {
        div {
            id: "lightbox",
            class: if active { "lightbox active" } else { "lightbox" },
            // the overlay itself closes, the image does not
            onclick: move |_| catalog.with_mut(|c| c.close_lightbox()),
            button {
                class: "lightbox-close",
                onclick: move |evt| {
                    evt.stop_propagation();
                    catalog.with_mut(|c| c.close_lightbox());
                },
                "×"
            }
            img {
                id: "lightbox-img",
                src: src.unwrap_or_default(),
                alt: "",
                onclick: move |evt| evt.stop_propagation(),
            }
        }
    }
}
