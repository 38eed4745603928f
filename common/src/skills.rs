// skill progress bars
//
// each bar carries a target percentage and its current inline width, which
// starts out empty.  the bar is widened from a timer once the guard below
// passes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillBar {
    pub progress: u8,
    pub width: String,
}

impl SkillBar {
    pub fn new(progress: u8) -> Self {
        SkillBar {
            progress,
            width: String::new(),
        }
    }

    pub fn target_width(&self) -> String {
        format!("{}%", self.progress)
    }
}

pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

// the published page groups this as (visible && width == "0%") || width == "",
// so a bar with no inline width is animated whether or not it is on screen.
// kept as-is: bars get filled on first evaluation and never again
pub fn should_animate(visible: bool, width: &str) -> bool {
    (visible && width == "0%") || width.is_empty()
}

// indices of bars to widen, given per-bar visibility
pub fn pending(bars: &[SkillBar], visible: &[bool]) -> Vec<usize> {
    bars.iter()
        .zip(visible.iter())
        .enumerate()
        .filter(|(_, (bar, vis))| should_animate(**vis, &bar.width))
        .map(|(idx, _)| idx)
        .collect()
}

pub fn apply(bars: &mut [SkillBar], idx: usize) {
    if let Some(bar) = bars.get_mut(idx) {
        bar.width = bar.target_width();
    }
}
