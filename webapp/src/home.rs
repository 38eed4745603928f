use dioxus::prelude::*;

use common::{
    config::SiteConfig,
    footer::{current_year, substitute_year},
    reveal::RevealGroup,
    skills::SkillBar,
};

use crate::{components::reveal::Reveal, nav::AnchorLink, shared::scroll::skill_bar_id};

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("流程自動化", "用 n8n 串接表單、信箱與試算表，把重複的手動作業交給排程。"),
    ("AI 應用", "把語言模型接進日常工具，做摘要、分類與草稿產生。"),
    ("開源工具", "把常用的腳本整理成可重複使用的小工具，放在 GitHub 上。"),
];

pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [(&'static str, u8)],
}

pub const SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        name: "自動化",
        skills: &[("n8n", 90), ("Google Apps Script", 80), ("Zapier", 65)],
    },
    SkillGroup {
        name: "程式開發",
        skills: &[("JavaScript", 85), ("Python", 75), ("Rust", 60)],
    },
    SkillGroup {
        name: "AI 與資料",
        skills: &[("Prompt Engineering", 85), ("OpenAI API", 80), ("SQL", 70)],
    },
];

const FOOTER_TEXT: &str = "© 2026 Portfolio. All rights reserved.";

// one bar per skill, flattened in display order
pub fn skill_bars() -> Vec<SkillBar> {
    SKILL_GROUPS
        .iter()
        .flat_map(|group| group.skills.iter())
        .map(|&(_, progress)| SkillBar::new(progress))
        .collect()
}

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "hero", class: "hero",
            div { class: "container",
                Reveal { group: RevealGroup::Hero, class: "hero-content",
                    h1 { class: "hero-title", "把重複的工作交給自動化" }
                    p { class: "hero-subtitle",
                        "n8n 工作流程、AI 應用與小工具的作品集"
                    }
                    div { class: "hero-actions",
                        AnchorLink { target: "projects", class: "btn btn-primary", "查看作品" }
                        AnchorLink { target: "contact", class: "btn btn-secondary", "聯絡我" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "about",
            div { class: "container",
                h2 { class: "section-title", "關於我" }
                Reveal { group: RevealGroup::About, class: "about-content",
                    p {
                        "專注在把零散的流程串起來：從資料收集、整理到通知，"
                        "盡量讓每一個步驟都能自己跑。"
                    }
                }
                div { class: "highlights",
                    for (idx, (title, text)) in HIGHLIGHTS.iter().enumerate() {
                        Reveal { key: "{idx}", group: RevealGroup::Highlight, item: "{idx}", class: "highlight-card",
                            h3 { "{title}" }
                            p { "{text}" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SkillItemProps {
    name: &'static str,
    idx: usize,
}

#[component]
fn SkillItem(props: SkillItemProps) -> Element {
    let skills = use_context::<Signal<Vec<SkillBar>>>();
    let bar = skills.read().get(props.idx).cloned();

    let Some(bar) = bar else {
        return rsx! {};
    };
    let style = if bar.width.is_empty() { String::new() } else { format!("width: {};", bar.width) };

    rsx! {
        div { class: "skill-item",
            div { class: "skill-info",
                span { "{props.name}" }
                span { "{bar.progress}%" }
            }
            div { class: "skill-bar",
                div {
                    id: skill_bar_id(props.idx),
                    class: "skill-progress",
                    "data-progress": "{bar.progress}",
                    style: "{style}",
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    // bar indices run across groups
    let offsets: Vec<usize> = SKILL_GROUPS
        .iter()
        .scan(0, |acc, group| {
            let start = *acc;
            *acc += group.skills.len();
            Some(start)
        })
        .collect();

    rsx! {
        section { id: "skills", class: "skills",
            div { class: "container",
                h2 { class: "section-title", "技能" }
                div { class: "skills-grid",
                    for (gidx, group) in SKILL_GROUPS.iter().enumerate() {
                        Reveal { key: "{gidx}", group: RevealGroup::Skills, item: "{gidx}", class: "skill-category",
                            h3 { "{group.name}" }
                            for (sidx, (name, _)) in group.skills.iter().enumerate() {
                                SkillItem { key: "{sidx}", name: *name, idx: offsets[gidx] + sidx }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: "contact", class: "contact",
            div { class: "container",
                h2 { class: "section-title", "聯絡我" }
                Reveal { group: RevealGroup::Contact, class: "contact-content",
                    p { "有流程想自動化，或想聊聊合作，歡迎來信。" }
                    div { class: "contact-links",
                        a { class: "btn btn-primary", href: "mailto:hello@example.com", "Email" }
                        a {
                            class: "btn btn-secondary",
                            href: "https://github.com/",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "GitHub"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();

    // substituted once at load
    let text = use_hook(move || substitute_year(FOOTER_TEXT, &config.footer_year_token, current_year()));

    rsx! {
        footer { class: "footer",
            div { class: "container",
                p { "{text}" }
            }
        }
    }
}
