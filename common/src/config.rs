use serde::{Deserialize, Serialize};
use toml;
use tracing::{Level, debug, instrument};

use crate::reveal::RevealOptions;

// site configuration
//
// this struct contains the handful of knobs the page needs at runtime.  every
// field has a default matching the published site, so an empty [config] table
// is a valid document
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    // relative url of the project list
    pub data_url: String,

    pub assets: AssetConfig,
    pub scroll: ScrollConfig,
    pub reveal: RevealOptions,

    // literal text in the footer that gets swapped for the current year
    pub footer_year_token: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            data_url: String::from(api::PROJECTS_URL),
            assets: AssetConfig::default(),
            scroll: ScrollConfig::default(),
            reveal: RevealOptions::default(),
            footer_year_token: String::from("2026"),
        }
    }
}

// path prefixes that project filenames are appended to
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct AssetConfig {
    pub images: String,
    pub workflows: String,
    pub videos: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        AssetConfig {
            images: String::from(api::PROJECT_IMAGES),
            workflows: String::from(api::WORKFLOWS),
            videos: String::from(api::VIDEOS),
        }
    }
}

impl AssetConfig {
    pub fn image(&self, file: &str) -> String {
        format!("{}{file}", self.images)
    }

    pub fn workflow(&self, file: &str) -> String {
        format!("{}{file}", self.workflows)
    }

    pub fn video(&self, file: &str) -> String {
        format!("{}{file}", self.videos)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    // pixels scrolled before the header switches to its compact style
    pub header_threshold: f64,

    // extra slack above each section, on top of the header height, used when
    // deciding which nav link is active
    pub section_offset: f64,

    // delay before a skill bar receives its target width
    pub skill_delay_ms: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            header_threshold: 50.0,
            section_offset: 100.0,
            skill_delay_ms: 100,
        }
    }
}

// the config table is a subtable of the root node so that the same file can
// carry other sections later without confusing the parser
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> anyhow::Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc)
        .map_err(|err| anyhow::Error::msg(format!("failed to parse site config: {err}")))?;

    debug!("successfully parsed site config");
    Ok(data.config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::Origin;

    #[test]
    fn empty_document_uses_defaults() {
        let config = read_config("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.data_url, "assets/data/projects.json");
        assert_eq!(config.scroll.header_threshold, 50.0);
        assert_eq!(config.footer_year_token, "2026");
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = read_config(
            r#"
            [config]
            data_url = "data/p.json"

            [config.scroll]
            section_offset = 80.0

            [config.reveal]
            origin = "left"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_url, "data/p.json");
        assert_eq!(config.scroll.section_offset, 80.0);
        assert_eq!(config.scroll.skill_delay_ms, 100);
        assert_eq!(config.reveal.origin, Origin::Left);
        assert_eq!(config.reveal.duration, 600);
        assert_eq!(config.assets, AssetConfig::default());
    }

    #[test]
    fn asset_paths_are_prefixed() {
        let assets = AssetConfig::default();
        assert_eq!(assets.image("a.png"), "assets/images/projects/a.png");
        assert_eq!(assets.workflow("w.json"), "assets/workflows/w.json");
        assert_eq!(assets.video("demo.mp4"), "assets/videos/demo.mp4");
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = read_config("[config\n").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse site config"));
    }
}
