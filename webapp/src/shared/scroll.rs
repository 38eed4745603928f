use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use common::{
    config::SiteConfig,
    nav::NavController,
    reveal::{RevealTarget, Revealer},
    skills::{self, SkillBar, in_viewport},
};

use crate::shared::dom;

pub fn skill_bar_id(idx: usize) -> String {
    format!("skill-bar-{idx}")
}

fn visible(id: &str, viewport_height: f64) -> bool {
    dom::rect(id)
        .map(|(top, bottom)| in_viewport(top, bottom, viewport_height))
        .unwrap_or(false)
}

fn nav_pass(mut nav: Signal<NavController>) {
    let scroll_y = dom::scroll_y();
    let header_height = dom::header_height();
    let sections = dom::measure_sections();

    let before = nav.peek().clone();
    let mut after = before.clone();
    after.on_scroll(scroll_y, header_height, &sections);

    if after != before {
        nav.set(after);
    }
}

fn skills_pass(skills: Signal<Vec<SkillBar>>, delay_ms: u32) {
    let viewport_height = dom::viewport_height();
    let count = skills.peek().len();
    let seen: Vec<bool> = (0..count)
        .map(|idx| visible(&skill_bar_id(idx), viewport_height))
        .collect();

    for idx in skills::pending(&skills.peek(), &seen) {
        let mut skills = skills;
        Timeout::new(delay_ms, move || {
            skills.with_mut(|bars| skills::apply(bars, idx));
        })
        .forget();
    }
}

// targets are fed in registration order, so cards entering together stagger
// top to bottom
pub fn reveal_pass(mut revealer: Signal<Revealer>) {
    let viewport_height = dom::viewport_height();

    let pass: Vec<(RevealTarget, bool)> = {
        let rev = revealer.peek();
        rev.targets()
            .iter()
            .map(|target| (target.clone(), visible(&target.dom_id(), viewport_height)))
            .filter(|(target, seen)| *seen != rev.is_revealed(target))
            .collect()
    };

    if !pass.is_empty() {
        revealer.with_mut(|rev| rev.observe(pass.iter().map(|(target, seen)| (target, *seen))));
    }
}

// all of the scroll-driven behavior, in the order the page registers it:
// header style and active link, skill bars, then reveal animations
pub fn use_scroll_effects() {
    let config = use_context::<SiteConfig>();
    let nav = use_context::<Signal<NavController>>();
    let skills = use_context::<Signal<Vec<SkillBar>>>();
    let revealer = use_context::<Signal<Revealer>>();
    let delay_ms = config.scroll.skill_delay_ms;

    dom::use_window_listener("scroll", move |_| {
        nav_pass(nav);
        skills_pass(skills, delay_ms);
        reveal_pass(revealer);
    });

    // one pass at load, before any scrolling
    use_effect(move || {
        nav_pass(nav);
        skills_pass(skills, delay_ms);
        reveal_pass(revealer);
    });
}
