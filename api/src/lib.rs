use anyhow::{Context, Result};
use async_trait::async_trait;
use constcat::concat;
use gloo_net::http::Request;
use tracing::{Level, debug, instrument};

pub mod project;
pub use project::{CATEGORIES, Category, CategoryInfo, Project};

// static asset layout
//
// everything is served relative to the page, so these are plain prefixes that
// get the filenames from the project records appended
pub const ASSET_ROOT: &str = "assets/";
pub const PROJECTS_URL: &str = concat!(ASSET_ROOT, "data/projects.json");
pub const PROJECT_IMAGES: &str = concat!(ASSET_ROOT, "images/projects/");
pub const WORKFLOWS: &str = concat!(ASSET_ROOT, "workflows/");
pub const VIDEOS: &str = concat!(ASSET_ROOT, "videos/");

// where the project list comes from
//
// the page only ever awaits this once, so the trait is the single suspension
// point and tests swap in fixed datasets.  futures from gloo are not Send,
// hence ?Send
#[async_trait(?Send)]
pub trait ProjectSource {
    async fn fetch_projects(&self) -> Result<Vec<Project>>;
}

#[derive(Clone, Debug)]
pub struct HttpProjectSource {
    url: String,
}

impl HttpProjectSource {
    pub fn new(url: impl Into<String>) -> Self {
        HttpProjectSource { url: url.into() }
    }
}

#[async_trait(?Send)]
impl ProjectSource for HttpProjectSource {
    #[instrument(level=Level::DEBUG, skip(self), fields(url = %self.url))]
    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        let resp = Request::get(&self.url).send().await?;

        if !resp.ok() {
            return Err(anyhow::Error::msg(format!(
                "failed to load projects: {} {}",
                resp.status(),
                resp.status_text()
            )));
        }

        let doc = resp.text().await?;
        let projects = parse_projects(&doc)?;

        debug!(count = projects.len(), "fetched project list");
        Ok(projects)
    }
}

pub fn parse_projects(doc: &str) -> Result<Vec<Project>> {
    serde_json::from_str(doc).context("failed to parse project list")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_prefixes_share_root() {
        assert_eq!(PROJECTS_URL, "assets/data/projects.json");
        assert_eq!(PROJECT_IMAGES, "assets/images/projects/");
        assert_eq!(WORKFLOWS, "assets/workflows/");
        assert_eq!(VIDEOS, "assets/videos/");
    }

    #[test]
    fn parse_keeps_document_order() {
        let projects = parse_projects(
            r#"[
                {"id": "b", "category": "ai", "name": "B", "desc": ""},
                {"id": "a", "category": "n8n", "name": "A", "desc": ""}
            ]"#,
        )
        .unwrap();

        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn parse_error_carries_context() {
        let err = parse_projects("{not json").unwrap_err();
        assert!(format!("{err:#}").starts_with("failed to parse project list"));
    }
}
