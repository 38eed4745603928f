#![allow(non_snake_case)]
use dioxus::prelude::*;
use tracing::{Level, debug};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use common::{
    catalog::Catalog,
    config::{SiteConfig, read_config},
    nav::{NavController, page_locked},
    reveal::Revealer,
};

mod shared;
use shared::{dom, scroll::use_scroll_effects, style};

mod components;
use components::lightbox::Lightbox;

mod home;
use home::{About, Contact, Footer, Hero, Skills, skill_bars};

mod nav;
use nav::Header;

mod projects;
use projects::Projects;

const SITE_CONFIG: &str = include_str!("../site.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    let config = read_config(SITE_CONFIG).expect("failed to parse site config");
    debug!(data_url = %config.data_url, "starting portfolio");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
pub fn App() -> Element {
    let config = use_context::<SiteConfig>();

    let scroll = config.scroll.clone();
    let nav = use_context_provider(move || Signal::new(NavController::new(scroll)));

    let assets = config.assets.clone();
    let mut catalog = use_context_provider(move || Signal::new(Catalog::new(assets)));

    let reveal = config.reveal.clone();
    use_context_provider(move || Signal::new(Revealer::new(reveal)));

    use_context_provider(|| Signal::new(skill_bars()));

    use_scroll_effects();

    // the menu and the modal share the body scroll lock
    let locked = use_memo(move || page_locked(&nav.read(), &catalog.read()));
    use_effect(move || dom::set_body_scroll_lock(locked()));

    // escape closes the lightbox first, then the modal
    dom::use_window_listener("keydown", move |evt| {
        let Some(key) = evt.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if key.key() != "Escape" {
            return;
        }

        let outcome = catalog.with_mut(|c| c.escape());
        debug!(?outcome, "escape pressed");
    });

    rsx! {
        style { "{style::SITE_STYLES}" }
        Header {}
        main {
            Hero {}
            About {}
            Projects {}
            Skills {}
            Contact {}
        }
        Footer {}
        Lightbox {}
    }
}
