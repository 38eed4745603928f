use dioxus::prelude::*;

use common::catalog::Catalog;

#[derive(Clone, PartialEq, Props)]
pub struct ModalCarouselProps {
    slides: Vec<String>,
    alt: String,
}

// the image strip inside the project modal
//
// the widget state lives on the catalog so it is rebuilt per open and dropped on
// close; this component only renders it and forwards clicks
#[component]
pub fn ModalCarousel(props: ModalCarouselProps) -> Element {
    let mut catalog = use_context::<Signal<Catalog>>();

    let Some(carousel) = catalog.read().carousel().cloned() else {
        return rsx! {
            div { class: "carousel",
                div { class: "carousel-slide",
                    span { class: "project-image-placeholder", "No Images" }
                }
            }
        };
    };

    let offset = carousel.index() * 100;

    rsx! {
        div { class: "carousel",
            div {
                class: "carousel-track",
                style: "transform: translateX(-{offset}%);",
                for (idx, src) in props.slides.iter().enumerate() {
                    div { key: "{idx}", class: "carousel-slide",
                        img {
                            src: "{src}",
                            alt: "{props.alt}",
                            loading: "lazy",
                            onclick: move |_| {
                                catalog.with_mut(|c| {
                                    c.open_slide(idx);
                                });
                            },
                        }
                    }
                }
            }

            if carousel.len() > 1 {
                button {
                    class: "carousel-button prev",
                    disabled: !carousel.has_prev(),
                    onclick: move |_| {
                        if let Some(widget) = catalog.write().carousel_mut() {
                            widget.prev();
                        }
                    },
                    "‹"
                }
                button {
                    class: "carousel-button next",
                    disabled: !carousel.has_next(),
                    onclick: move |_| {
                        if let Some(widget) = catalog.write().carousel_mut() {
                            widget.next();
                        }
                    },
                    "›"
                }
                div { class: "carousel-pagination",
                    for idx in 0..carousel.len() {
                        button {
                            key: "{idx}",
                            class: if idx == carousel.index() { "carousel-bullet active" } else { "carousel-bullet" },
                            onclick: move |_| {
                                if let Some(widget) = catalog.write().carousel_mut() {
                                    widget.go_to(idx);
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
