use crate::{catalog::Catalog, config::ScrollConfig};

// layout of a page section as measured from the dom
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
    // sections without a matching nav link never become active
    pub has_link: bool,
}

// navigation/scroll state
//
// the menu flag drives the hamburger, the nav drawer and the body scroll lock
// together.  the active section sticks until another one matches, so scrolling
// into a gap between sections keeps the previous link highlighted
#[derive(Clone, Debug, PartialEq)]
pub struct NavController {
    config: ScrollConfig,
    menu_open: bool,
    scrolled: bool,
    active: Option<String>,
}

impl NavController {
    pub fn new(config: ScrollConfig) -> Self {
        NavController {
            config,
            menu_open: false,
            scrolled: false,
            active: None,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn body_locked(&self) -> bool {
        self.menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    // any nav link click
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn on_scroll(&mut self, scroll_y: f64, header_height: f64, sections: &[SectionBox]) {
        self.update_header(scroll_y);
        self.update_active(scroll_y, header_height, sections);
    }

    pub fn update_header(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > self.config.header_threshold;
    }

    // last section in document order whose band contains the scroll position
    pub fn update_active(&mut self, scroll_y: f64, header_height: f64, sections: &[SectionBox]) {
        let offset = header_height + self.config.section_offset;

        let hit = sections.iter().rev().find(|section| {
            let top = section.offset_top - offset;
            section.has_link && scroll_y >= top && scroll_y < top + section.height
        });

        if let Some(section) = hit {
            self.active = Some(section.id.clone());
        }
    }
}

// the body stops scrolling while either the mobile menu or the project modal
// is open; closing one keeps the lock if the other is still up
pub fn page_locked(nav: &NavController, catalog: &Catalog) -> bool {
    nav.body_locked() || catalog.body_locked()
}

// document offset to scroll to so the target lands just under the header
pub fn anchor_scroll_top(rect_top: f64, page_y: f64, header_height: f64) -> f64 {
    rect_top + page_y - header_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssetConfig;

    fn sections() -> Vec<SectionBox> {
        vec![
            SectionBox {
                id: String::from("hero"),
                offset_top: 0.0,
                height: 700.0,
                has_link: true,
            },
            SectionBox {
                id: String::from("about"),
                offset_top: 700.0,
                height: 600.0,
                has_link: true,
            },
            SectionBox {
                id: String::from("projects"),
                offset_top: 1300.0,
                height: 900.0,
                has_link: true,
            },
        ]
    }

    #[test]
    fn menu_toggle_and_close() {
        let mut nav = NavController::new(ScrollConfig::default());
        assert!(nav.toggle_menu());
        assert!(nav.body_locked());
        assert!(!nav.toggle_menu());

        nav.toggle_menu();
        nav.close_menu();
        assert!(!nav.menu_open());
        assert!(!nav.body_locked());
    }

    #[test]
    fn header_threshold_is_exclusive() {
        let mut nav = NavController::new(ScrollConfig::default());
        nav.update_header(50.0);
        assert!(!nav.scrolled());
        nav.update_header(50.5);
        assert!(nav.scrolled());
        nav.update_header(0.0);
        assert!(!nav.scrolled());
    }

    #[test]
    fn boundary_marks_section_active() {
        // about starts at 700 - 80 - 100 = 520
        let mut nav = NavController::new(ScrollConfig::default());

        nav.update_active(519.0, 80.0, &sections());
        assert!(nav.is_active("hero"));

        nav.update_active(520.0, 80.0, &sections());
        assert!(nav.is_active("about"));
        assert!(!nav.is_active("hero"));
    }

    #[test]
    fn last_match_wins() {
        let mut overlapping = sections();
        overlapping[1].height = 2000.0;

        let mut nav = NavController::new(ScrollConfig::default());
        nav.update_active(1200.0, 80.0, &overlapping);
        assert!(nav.is_active("projects"));
    }

    #[test]
    fn unlinked_sections_and_gaps_keep_previous() {
        let mut secs = sections();
        secs[2].has_link = false;

        let mut nav = NavController::new(ScrollConfig::default());
        nav.update_active(600.0, 80.0, &secs);
        assert!(nav.is_active("about"));

        nav.update_active(1500.0, 80.0, &secs);
        assert!(nav.is_active("about"));

        nav.update_active(99999.0, 80.0, &sections());
        assert!(nav.is_active("about"));
    }

    #[test]
    fn anchor_lands_under_header() {
        assert_eq!(anchor_scroll_top(300.0, 1000.0, 80.0), 1220.0);
    }

    #[test]
    fn page_lock_covers_menu_and_modal() {
        let mut nav = NavController::new(ScrollConfig::default());
        let mut catalog = Catalog::new(AssetConfig::default());
        catalog.apply_load(api::parse_projects(r#"[{"id": "a", "name": "A", "desc": "", "category": "tool"}]"#));
        assert!(!page_locked(&nav, &catalog));

        nav.toggle_menu();
        assert!(catalog.open_modal("a"));
        assert!(page_locked(&nav, &catalog));

        // a nav link closes the menu, the modal still holds the lock
        nav.close_menu();
        assert!(page_locked(&nav, &catalog));

        catalog.close_modal();
        assert!(!page_locked(&nav, &catalog));
    }
}
