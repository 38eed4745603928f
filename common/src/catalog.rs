use anyhow::Result;
use tracing::{Level, debug, error, instrument};

use api::{Category, Project, ProjectSource};

use crate::{carousel::Carousel, config::AssetConfig, details::format_details, video::VideoEmbed};

pub const LOAD_ERROR_MESSAGE: &str = "載入專案時發生錯誤";
pub const NO_RESOURCES_MESSAGE: &str = "無額外資源";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    // filter buttons, in display order
    pub const BUTTONS: [Filter; 5] = [
        Filter::All,
        Filter::Category(Category::N8n),
        Filter::Category(Category::Github),
        Filter::Category(Category::Ai),
        Filter::Category(Category::Tool),
    ];

    // every button paired with whether it shows as active; exactly one is
    pub fn buttons(active: Filter) -> [(Filter, bool); 5] {
        Filter::BUTTONS.map(|filter| (filter, filter == active))
    }

    pub fn key(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Category(category) => category.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "全部",
            Filter::Category(category) => category.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(category) => project.category == category,
        }
    }
}

// read-only view, original relative order preserved
pub fn filter_projects(projects: &[Project], filter: Filter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalAction {
    GitHub(String),
    Workflow(String),
    Resource(String),
}

impl ModalAction {
    pub fn href(&self) -> &str {
        match self {
            ModalAction::GitHub(href) | ModalAction::Workflow(href) | ModalAction::Resource(href) => {
                href.as_str()
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModalAction::GitHub(_) => "GitHub",
            ModalAction::Workflow(_) => "下載 JSON",
            ModalAction::Resource(_) => "相關資源",
        }
    }

    // workflows are same-origin downloads, everything else opens a new tab
    pub fn is_download(&self) -> bool {
        matches!(self, ModalAction::Workflow(_))
    }

    pub fn is_primary(&self) -> bool {
        !matches!(self, ModalAction::GitHub(_))
    }
}

// everything the modal needs, resolved from a single project
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalView {
    pub project_id: String,
    pub title: String,
    pub category_label: &'static str,
    pub category_class: &'static str,
    // full urls, empty means the placeholder slide
    pub slides: Vec<String>,
    pub video: Option<VideoEmbed>,
    pub details_html: String,
    pub actions: Vec<ModalAction>,
}

impl ModalView {
    pub fn build(project: &Project, assets: &AssetConfig) -> ModalView {
        let mut actions = Vec::new();
        if let Some(github) = project.github() {
            actions.push(ModalAction::GitHub(github.to_owned()));
        }
        if let Some(workflow) = project.workflow() {
            actions.push(ModalAction::Workflow(assets.workflow(workflow)));
        }
        if let Some(resource) = project.resource() {
            actions.push(ModalAction::Resource(resource.to_owned()));
        }

        ModalView {
            project_id: project.id.clone(),
            title: project.name.clone(),
            category_label: project.category.label(),
            category_class: project.category.class(),
            slides: project.images.iter().map(|img| assets.image(img)).collect(),
            video: project.video().map(|v| VideoEmbed::classify(v, assets)),
            details_html: format_details(&project.details),
            actions,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Escape {
    ClosedLightbox,
    ClosedModal,
    Ignored,
}

// project catalog controller
//
// holds the loaded list plus all of the transient ui state for the projects
// section.  the list is only ever replaced wholesale by a load, filtering and
// lookups borrow from it
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    assets: AssetConfig,
    projects: Vec<Project>,
    load: LoadState,
    filter: Filter,
    modal: Option<ModalView>,
    modal_open: bool,
    carousel: Option<Carousel>,
    lightbox: Option<String>,
}

pub async fn load_projects<S: ProjectSource + ?Sized>(source: &S) -> Result<Vec<Project>> {
    source.fetch_projects().await
}

impl Catalog {
    pub fn new(assets: AssetConfig) -> Self {
        Catalog {
            assets,
            projects: Vec::new(),
            load: LoadState::Loading,
            filter: Filter::All,
            modal: None,
            modal_open: false,
            carousel: None,
            lightbox: None,
        }
    }

    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn apply_load(&mut self, res: Result<Vec<Project>>) {
        match res {
            Ok(projects) => {
                debug!(count = projects.len(), "loaded projects");
                self.projects = projects;
                self.load = LoadState::Loaded;
            }
            Err(err) => {
                error!("error loading projects: {err:#}");
                self.projects.clear();
                self.load = LoadState::Failed(String::from(LOAD_ERROR_MESSAGE));
            }
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn visible(&self) -> Vec<&Project> {
        filter_projects(&self.projects, self.filter)
    }

    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn modal(&self) -> Option<&ModalView> {
        self.modal.as_ref()
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn body_locked(&self) -> bool {
        self.modal_open
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn carousel_mut(&mut self) -> Option<&mut Carousel> {
        self.carousel.as_mut()
    }

    // returns false, and changes nothing, for an unknown id
    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn open_modal(&mut self, id: &str) -> bool {
        let Some(project) = self.find(id) else {
            debug!("no project with this id");
            return false;
        };
        let view = ModalView::build(project, &self.assets);

        // a fresh widget per open, the previous one is torn down first
        if self.carousel.take().is_some() {
            debug!("released previous carousel");
        }
        self.carousel = Carousel::new(view.slides.len());

        self.modal = Some(view);
        self.modal_open = true;
        true
    }

    // the view is kept so the modal can fade out with its content, but the
    // video is cleared to stop playback
    pub fn close_modal(&mut self) {
        self.modal_open = false;

        if let Some(view) = self.modal.as_mut() {
            view.video = None;
        }
        self.carousel = None;
    }

    pub fn lightbox(&self) -> Option<&str> {
        self.lightbox.as_deref()
    }

    pub fn open_lightbox(&mut self, src: impl Into<String>) {
        self.lightbox = Some(src.into());
    }

    // open the lightbox on one of the current modal slides
    pub fn open_slide(&mut self, index: usize) -> bool {
        let Some(src) = self.modal.as_ref().and_then(|v| v.slides.get(index)).cloned() else {
            return false;
        };
        self.open_lightbox(src);
        true
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    // the lightbox sits above the modal, so it closes first
    pub fn escape(&mut self) -> Escape {
        if self.lightbox.is_some() {
            self.close_lightbox();
            Escape::ClosedLightbox
        } else if self.modal_open {
            self.close_modal();
            Escape::ClosedModal
        } else {
            Escape::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    const FIXTURE: &str = r#"[
        {
            "id": "invoice-bot",
            "category": "n8n",
            "name": "Invoice Bot",
            "desc": "collects invoices",
            "cover": "invoice.png",
            "images": ["invoice-1.png", "invoice-2.png"],
            "metrics": ["-80% manual work"],
            "tags": ["n8n", "Gmail"],
            "workflow": "invoice-bot.json",
            "video": "https://youtu.be/dQw4w9WgXcQ",
            "details": "痛點：手動\n• 每週兩小時"
        },
        {
            "id": "dotfiles",
            "category": "github",
            "name": "Dotfiles",
            "desc": "my setup",
            "images": [],
            "metrics": [],
            "tags": ["shell"],
            "github": "https://github.com/someone/dotfiles"
        },
        {
            "id": "summarizer",
            "category": "ai",
            "name": "Summarizer",
            "desc": "summaries",
            "images": ["sum.png"],
            "metrics": [],
            "tags": [],
            "video": "summarizer.mp4",
            "resource": "https://example.com/notes"
        },
        {
            "id": "flow-sync",
            "category": "n8n",
            "name": "Flow Sync",
            "desc": "syncs sheets",
            "images": [],
            "metrics": [],
            "tags": []
        }
    ]"#;

    struct FixedSource(Vec<Project>);

    #[async_trait(?Send)]
    impl ProjectSource for FixedSource {
        async fn fetch_projects(&self) -> Result<Vec<Project>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait(?Send)]
    impl ProjectSource for FailingSource {
        async fn fetch_projects(&self) -> Result<Vec<Project>> {
            Err(anyhow::Error::msg("failed to load projects: 404 Not Found"))
        }
    }

    fn fixture() -> Vec<Project> {
        api::parse_projects(FIXTURE).unwrap()
    }

    fn loaded() -> Catalog {
        let mut catalog = Catalog::new(AssetConfig::default());
        catalog.apply_load(Ok(fixture()));
        catalog
    }

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    #[tokio::test]
    async fn load_from_source() {
        let mut catalog = Catalog::new(AssetConfig::default());
        assert_eq!(catalog.load_state(), &LoadState::Loading);

        catalog.apply_load(load_projects(&FixedSource(fixture())).await);
        assert_eq!(catalog.load_state(), &LoadState::Loaded);
        assert_eq!(catalog.projects().len(), 4);
        assert_eq!(catalog.visible().len(), 4);
    }

    #[tokio::test]
    async fn failed_load_shows_message_and_stays_empty() {
        let mut catalog = Catalog::new(AssetConfig::default());
        catalog.apply_load(load_projects(&FailingSource).await);

        match catalog.load_state() {
            LoadState::Failed(msg) => assert!(!msg.is_empty()),
            other => panic!("unexpected state {other:?}"),
        }
        assert!(catalog.projects().is_empty());
        assert!(catalog.visible().is_empty());
    }

    #[test]
    fn filter_keeps_relative_order() {
        let projects = fixture();

        let n8n = filter_projects(&projects, Filter::Category(Category::N8n));
        assert_eq!(ids(&n8n), vec!["invoice-bot", "flow-sync"]);

        let all = filter_projects(&projects, Filter::All);
        assert_eq!(all.len(), projects.len());
        assert!(all.iter().zip(projects.iter()).all(|(a, b)| *a == b));

        assert!(filter_projects(&projects, Filter::Category(Category::Tool)).is_empty());
    }

    #[test]
    fn set_filter_changes_visible() {
        let mut catalog = loaded();
        catalog.set_filter(Filter::Category(Category::Ai));
        assert_eq!(ids(&catalog.visible()), vec!["summarizer"]);
        assert_eq!(catalog.filter().key(), "ai");

        catalog.set_filter(Filter::All);
        assert_eq!(catalog.visible().len(), 4);
    }

    #[test]
    fn exactly_one_button_active() {
        for active in Filter::BUTTONS {
            let buttons = Filter::buttons(active);
            let lit: Vec<_> = buttons.iter().filter(|(_, on)| *on).collect();
            assert_eq!(lit, vec![&(active, true)]);
        }

        let keys: Vec<_> = Filter::buttons(Filter::All).iter().map(|(f, _)| f.key()).collect();
        assert_eq!(keys, vec!["all", "n8n", "github", "ai", "tool"]);
    }

    #[test]
    fn open_modal_populates_view() {
        let mut catalog = loaded();
        assert!(catalog.open_modal("invoice-bot"));
        assert!(catalog.modal_open());
        assert!(catalog.body_locked());

        let view = catalog.modal().unwrap();
        assert_eq!(view.title, "Invoice Bot");
        assert_eq!(view.category_label, "n8n 自動化");
        assert_eq!(view.category_class, "n8n");
        assert_eq!(
            view.slides,
            vec!["assets/images/projects/invoice-1.png", "assets/images/projects/invoice-2.png"]
        );
        assert_eq!(
            view.video,
            Some(VideoEmbed::YouTube {
                id: Some(String::from("dQw4w9WgXcQ"))
            })
        );
        assert!(view.details_html.contains("<strong"));
        assert!(view.details_html.contains("  • 每週兩小時"));
        assert_eq!(
            view.actions,
            vec![ModalAction::Workflow(String::from("assets/workflows/invoice-bot.json"))]
        );

        let carousel = catalog.carousel().unwrap();
        assert_eq!(carousel.len(), 2);
        assert!(carousel.is_looping());
    }

    #[test]
    fn single_image_carousel_does_not_loop() {
        let mut catalog = loaded();
        catalog.open_modal("summarizer");

        assert!(!catalog.carousel().unwrap().is_looping());
        let view = catalog.modal().unwrap();
        assert_eq!(
            view.video,
            Some(VideoEmbed::File {
                src: String::from("assets/videos/summarizer.mp4")
            })
        );
        assert_eq!(view.actions[0].label(), "相關資源");
        assert!(!view.actions[0].is_download());
    }

    #[test]
    fn no_images_means_no_carousel() {
        let mut catalog = loaded();
        catalog.open_modal("invoice-bot");
        catalog.carousel_mut().unwrap().next();

        catalog.open_modal("flow-sync");
        assert!(catalog.carousel().is_none());

        let view = catalog.modal().unwrap();
        assert!(view.slides.is_empty());
        assert!(view.actions.is_empty());
        assert_eq!(view.video, None);
    }

    #[test]
    fn reopening_rebuilds_carousel() {
        let mut catalog = loaded();
        catalog.open_modal("invoice-bot");
        catalog.carousel_mut().unwrap().next();
        assert_eq!(catalog.carousel().unwrap().index(), 1);

        catalog.open_modal("invoice-bot");
        assert_eq!(catalog.carousel().unwrap().index(), 0);
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let mut catalog = loaded();
        catalog.open_modal("dotfiles");
        let before = catalog.clone();

        assert!(!catalog.open_modal("missing"));
        assert_eq!(catalog, before);
        assert_eq!(catalog.modal().unwrap().title, "Dotfiles");
    }

    #[test]
    fn close_clears_video_and_carousel() {
        let mut catalog = loaded();
        catalog.open_modal("invoice-bot");
        catalog.close_modal();

        assert!(!catalog.modal_open());
        assert!(!catalog.body_locked());
        assert!(catalog.carousel().is_none());
        assert_eq!(catalog.modal().unwrap().video, None);

        // also fine with nothing open
        let mut fresh = loaded();
        fresh.close_modal();
        assert!(fresh.carousel().is_none());
        assert!(fresh.modal().is_none());
    }

    #[test]
    fn lightbox_from_slide() {
        let mut catalog = loaded();
        assert!(!catalog.open_slide(0));

        catalog.open_modal("invoice-bot");
        assert!(catalog.open_slide(1));
        assert_eq!(catalog.lightbox(), Some("assets/images/projects/invoice-2.png"));
        assert!(!catalog.open_slide(7));

        catalog.close_lightbox();
        assert_eq!(catalog.lightbox(), None);
    }

    #[test]
    fn escape_prefers_lightbox() {
        let mut catalog = loaded();
        assert_eq!(catalog.escape(), Escape::Ignored);

        catalog.open_modal("invoice-bot");
        catalog.open_slide(0);

        assert_eq!(catalog.escape(), Escape::ClosedLightbox);
        assert!(catalog.modal_open());
        assert_eq!(catalog.escape(), Escape::ClosedModal);
        assert!(!catalog.modal_open());
        assert_eq!(catalog.escape(), Escape::Ignored);
    }
}
