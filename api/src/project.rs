use serde::{Deserialize, Serialize};

// project categories
//
// the json data uses the lowercase keys below; anything else is an authoring
// error and fails the whole document rather than rendering a blank badge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    N8n,
    Github,
    Ai,
    Tool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryInfo {
    pub category: Category,
    pub key: &'static str,
    pub label: &'static str,
    pub class: &'static str,
}

// display table, indexed by the enum discriminant
pub const CATEGORIES: [CategoryInfo; 4] = [
    CategoryInfo {
        category: Category::N8n,
        key: "n8n",
        label: "n8n 自動化",
        class: "n8n",
    },
    CategoryInfo {
        category: Category::Github,
        key: "github",
        label: "GitHub",
        class: "github",
    },
    CategoryInfo {
        category: Category::Ai,
        key: "ai",
        label: "AI 應用",
        class: "ai",
    },
    CategoryInfo {
        category: Category::Tool,
        key: "tool",
        label: "工具/腳本",
        class: "tool",
    },
];

impl Category {
    pub fn info(self) -> &'static CategoryInfo {
        &CATEGORIES[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn class(self) -> &'static str {
        self.info().class
    }
}

// a single portfolio entry, read-only once loaded
//
// optional strings follow the page's truthiness rules: a missing field and an
// empty string both mean "absent", so callers should go through the accessors
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub category: Category,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub workflow: Option<String>,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub details: String,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

impl Project {
    pub fn cover(&self) -> Option<&str> {
        present(&self.cover)
    }

    pub fn github(&self) -> Option<&str> {
        present(&self.github)
    }

    pub fn workflow(&self) -> Option<&str> {
        present(&self.workflow)
    }

    pub fn resource(&self) -> Option<&str> {
        present(&self.resource)
    }

    pub fn video(&self) -> Option<&str> {
        present(&self.video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_discriminant() {
        for (idx, info) in CATEGORIES.iter().enumerate() {
            assert_eq!(info.category as usize, idx);
            assert_eq!(info.category.key(), info.key);
        }
        assert_eq!(Category::Ai.label(), "AI 應用");
    }

    #[test]
    fn category_keys_match_serde_names() {
        for info in CATEGORIES.iter() {
            let encoded = serde_json::to_string(&info.category).unwrap();
            assert_eq!(encoded, format!("\"{}\"", info.key));
        }
    }

    #[test]
    fn minimal_record_fills_defaults() {
        let project: Project = serde_json::from_str(
            r#"{"id": "p1", "category": "tool", "name": "Sync", "desc": "syncs things"}"#,
        )
        .unwrap();

        assert_eq!(project.category, Category::Tool);
        assert!(project.images.is_empty());
        assert!(project.metrics.is_empty());
        assert_eq!(project.cover(), None);
        assert_eq!(project.details, "");
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let project: Project = serde_json::from_str(
            r#"{"id": "p2", "category": "github", "name": "n", "desc": "d",
                "cover": "", "github": "https://github.com/x/y", "video": ""}"#,
        )
        .unwrap();

        assert_eq!(project.cover(), None);
        assert_eq!(project.video(), None);
        assert_eq!(project.github(), Some("https://github.com/x/y"));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let res: Result<Project, _> = serde_json::from_str(
            r#"{"id": "p3", "category": "design", "name": "n", "desc": "d"}"#,
        );
        assert!(res.is_err());
    }
}
