use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// scroll reveal
//
// elements start offset and transparent, then transition into place the first
// time they enter the viewport.  with reset disabled (the default) a revealed
// element is never hidden again

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct RevealOptions {
    pub origin: Origin,
    // px
    pub distance: u32,
    // ms
    pub duration: u32,
    pub delay: u32,
    pub interval: u32,
    pub easing: String,
    pub reset: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        RevealOptions {
            origin: Origin::Bottom,
            distance: 30,
            duration: 600,
            delay: 100,
            interval: 0,
            easing: String::from("ease-out"),
            reset: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealGroup {
    Hero,
    Highlight,
    About,
    Filters,
    Projects,
    Skills,
    Contact,
}

// per-group tweaks on top of the site defaults
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Tweak {
    origin: Option<Origin>,
    delay: Option<u32>,
    interval: Option<u32>,
}

impl RevealGroup {
    // dom id prefix for targets in this group
    pub fn key(self) -> &'static str {
        match self {
            RevealGroup::Hero => "hero-content",
            RevealGroup::Highlight => "highlight-card",
            RevealGroup::About => "about-content",
            RevealGroup::Filters => "filter-container",
            RevealGroup::Projects => "project-card",
            RevealGroup::Skills => "skill-category",
            RevealGroup::Contact => "contact-content",
        }
    }

    fn tweak(self) -> Tweak {
        match self {
            RevealGroup::Hero => Tweak {
                origin: Some(Origin::Left),
                ..Tweak::default()
            },
            RevealGroup::About => Tweak {
                delay: Some(200),
                ..Tweak::default()
            },
            RevealGroup::Highlight | RevealGroup::Projects | RevealGroup::Skills => Tweak {
                interval: Some(100),
                ..Tweak::default()
            },
            RevealGroup::Filters | RevealGroup::Contact => Tweak::default(),
        }
    }
}

// one revealable element.  the item is stable for the element's lifetime
// (a project id for cards, a position for fixed markup), so reordering a
// list never hands one element's state to another
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RevealTarget {
    pub group: RevealGroup,
    pub item: String,
}

impl RevealTarget {
    pub fn new(group: RevealGroup, item: impl Into<String>) -> Self {
        RevealTarget {
            group,
            item: item.into(),
        }
    }

    pub fn dom_id(&self) -> String {
        format!("reveal-{}-{}", self.group.key(), self.item)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Revealer {
    options: RevealOptions,
    targets: Vec<RevealTarget>,
    // revealed targets and the delay they were revealed with
    revealed: HashMap<RevealTarget, u32>,
}

impl Revealer {
    pub fn new(options: RevealOptions) -> Self {
        Revealer {
            options,
            targets: Vec::new(),
            revealed: HashMap::new(),
        }
    }

    // called once per rendered target; repeated registration is harmless
    pub fn register(&mut self, target: RevealTarget) {
        if !self.targets.contains(&target) {
            self.targets.push(target);
        }
    }

    pub fn targets(&self) -> &[RevealTarget] {
        &self.targets
    }

    pub fn is_revealed(&self, target: &RevealTarget) -> bool {
        self.revealed.contains_key(target)
    }

    // feed one pass worth of visibility, returns true if anything changed
    //
    // targets of a group that come into view in the same pass are staggered by
    // the group interval in the order given; a target revealed on its own only
    // waits the base delay
    pub fn observe<'a, I>(&mut self, pass: I) -> bool
    where
        I: IntoIterator<Item = (&'a RevealTarget, bool)>,
    {
        let mut order: HashMap<RevealGroup, u32> = HashMap::new();
        let mut changed = false;

        for (target, visible) in pass {
            if visible {
                if self.revealed.contains_key(target) {
                    continue;
                }
                let (_, delay, interval) = self.resolved(target.group);
                let slot = order.entry(target.group).or_default();
                self.revealed.insert(target.clone(), delay + interval * *slot);
                *slot += 1;
                changed = true;
            } else if self.options.reset && self.revealed.remove(target).is_some() {
                changed = true;
            }
        }

        changed
    }

    fn resolved(&self, group: RevealGroup) -> (Origin, u32, u32) {
        let tweak = group.tweak();
        (
            tweak.origin.unwrap_or(self.options.origin),
            tweak.delay.unwrap_or(self.options.delay),
            tweak.interval.unwrap_or(self.options.interval),
        )
    }

    pub fn delay_for(&self, target: &RevealTarget) -> u32 {
        match self.revealed.get(target) {
            Some(&delay) => delay,
            None => self.resolved(target.group).1,
        }
    }

    // inline style for a target in its current state
    pub fn style(&self, target: &RevealTarget) -> String {
        let (origin, _, _) = self.resolved(target.group);
        let opts = &self.options;
        let delay = self.delay_for(target);
        let transition = format!(
            "transition: opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms;",
            d = opts.duration,
            e = opts.easing,
        );

        if self.is_revealed(target) {
            return format!("opacity: 1; transform: none; {transition}");
        }

        let dist = opts.distance as i64;
        let offset = match origin {
            Origin::Bottom => format!("translateY({dist}px)"),
            Origin::Top => format!("translateY({}px)", -dist),
            Origin::Left => format!("translateX({}px)", -dist),
            Origin::Right => format!("translateX({dist}px)"),
        };
        format!("opacity: 0; transform: {offset}; {transition}")
    }
}
