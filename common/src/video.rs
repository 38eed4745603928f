use std::sync::LazyLock;

use regex::Regex;

use crate::config::AssetConfig;

pub const YOUTUBE_EMBED: &str = "https://www.youtube.com/embed/";

// matches the id after any of the usual youtube url shapes: youtu.be/, v/,
// /u/x/, embed/ or watch?v=.  the id itself is group 7
const YOUTUBE_REGEX: &str = r"^.*((youtu.be/)|(v/)|(/u/\w/)|(embed/)|(watch\?))\??v?=?([^#&?]*).*";

static YOUTUBE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(YOUTUBE_REGEX).expect("youtube pattern is valid"));

pub fn youtube_id(url: &str) -> Option<String> {
    let caps = YOUTUBE.captures(url)?;
    let id = caps.get(7)?.as_str();

    (id.chars().count() == 11).then(|| id.to_owned())
}

pub fn is_youtube(video: &str) -> bool {
    video.contains("youtube.com") || video.contains("youtu.be")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VideoEmbed {
    // an unparseable url still produces an embed, it just points nowhere
    YouTube { id: Option<String> },
    File { src: String },
}

impl VideoEmbed {
    pub fn classify(video: &str, assets: &AssetConfig) -> VideoEmbed {
        if is_youtube(video) {
            VideoEmbed::YouTube {
                id: youtube_id(video),
            }
        } else {
            VideoEmbed::File {
                src: assets.video(video),
            }
        }
    }

    pub fn src(&self) -> String {
        match self {
            VideoEmbed::YouTube { id } => {
                format!("{YOUTUBE_EMBED}{}", id.as_deref().unwrap_or_default())
            }
            VideoEmbed::File { src } => src.clone(),
        }
    }
}
