//! Content registry - the read-only table of articles behind every page.
//!
//! The table is JSON (`content/blog.json` is compiled in; a file on disk can
//! replace it) and is validated once at startup:
//! - article ids and slugs are unique
//! - slugs are lowercase ASCII, digits and `-`
//! - categories come from the fixed [`Category`] set (enforced by serde)

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Table compiled into the binary
const BUILTIN_TABLE: &str = include_str!("../../content/blog.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid content table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate article id: {0}")]
    DuplicateId(String),
    #[error("duplicate article slug: {0}")]
    DuplicateSlug(String),
    #[error("invalid article slug: {0:?}")]
    InvalidSlug(String),
    #[error("article {0} has an empty title")]
    EmptyTitle(String),
}

/// Fixed set of tech categories (display order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    Cloud,
    Blockchain,
    Cybersecurity,
    Gadgets,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Ai,
        Category::WebDevelopment,
        Category::Cloud,
        Category::Blockchain,
        Category::Cybersecurity,
        Category::Gadgets,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Ai => "AI",
            Category::WebDevelopment => "Web Development",
            Category::Cloud => "Cloud",
            Category::Blockchain => "Blockchain",
            Category::Cybersecurity => "Cybersecurity",
            Category::Gadgets => "Gadgets",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Card-level description of one post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    /// Teaser shown on cards
    pub summary: String,
    pub category: Category,
    pub date: NaiveDate,
    /// Card image, relative to the asset root
    pub image: String,
    pub slug: String,
}

/// One item of a bulleted list; `term` renders bold in front of the text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String },
    Heading { text: String },
    Subheading { text: String },
    List { items: Vec<ListItem> },
    OrderedList { items: Vec<String> },
    Code { code: String },
}

/// Full article for the detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(flatten)]
    pub summary: ArticleSummary,
    /// Banner image on the detail page
    pub hero_image: String,
    pub body: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Author details shown on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub blog_title: String,
    pub author: String,
    /// Hero line, revealed letter by letter
    pub greeting: String,
    pub intro: String,
    pub about: Vec<String>,
    pub portrait: String,
    pub links: Vec<SocialLink>,
}

/// Serialized form of the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTable {
    pub profile: Profile,
    pub articles: Vec<Article>,
}

/// Validated, immutable content. Shared behind an `Arc` for the process lifetime.
#[derive(Debug)]
pub struct ContentRegistry {
    profile: Profile,
    articles: Vec<Article>,
}

impl ContentRegistry {
    /// Registry from the compiled-in table
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_TABLE)
    }

    /// Registry from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Use `path` when given, otherwise the builtin table
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => {
                tracing::info!("Loading content table from {}", path.display());
                Self::load(path)
            }
            None => Self::builtin(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let table: ContentTable = serde_json::from_str(raw)?;
        Self::from_table(table)
    }

    pub fn from_table(table: ContentTable) -> Result<Self, ContentError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();

        for article in &table.articles {
            let summary = &article.summary;
            if summary.title.trim().is_empty() {
                return Err(ContentError::EmptyTitle(summary.id.clone()));
            }
            if !is_valid_slug(&summary.slug) {
                return Err(ContentError::InvalidSlug(summary.slug.clone()));
            }
            if !ids.insert(summary.id.as_str()) {
                return Err(ContentError::DuplicateId(summary.id.clone()));
            }
            if !slugs.insert(summary.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(summary.slug.clone()));
            }
        }

        Ok(Self {
            profile: table.profile,
            articles: table.articles,
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// All summaries in authored order
    pub fn featured(&self) -> impl Iterator<Item = &ArticleSummary> {
        self.articles.iter().map(|a| &a.summary)
    }

    /// Newest first, truncated to `n`. Equal dates keep authored order.
    pub fn select_latest(&self, n: usize) -> Vec<&ArticleSummary> {
        let mut sorted: Vec<&ArticleSummary> = self.featured().collect();
        // sort_by is stable
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(n);
        sorted
    }

    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    pub fn article(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.summary.slug == slug)
    }
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, slug: &str, date: &str) -> ArticleSummary {
        ArticleSummary {
            id: id.to_string(),
            title: format!("Post {id}"),
            summary: "teaser".to_string(),
            category: Category::Cloud,
            date: date.parse().unwrap(),
            image: "x.svg".to_string(),
            slug: slug.to_string(),
        }
    }

    fn article(id: &str, slug: &str, date: &str) -> Article {
        Article {
            summary: summary(id, slug, date),
            hero_image: "x.svg".to_string(),
            body: vec![Block::Paragraph {
                text: "hello".to_string(),
            }],
        }
    }

    fn registry(articles: Vec<Article>) -> ContentRegistry {
        let profile = ContentRegistry::builtin().unwrap().profile().clone();
        ContentRegistry::from_table(ContentTable { profile, articles }).unwrap()
    }

    fn three() -> ContentRegistry {
        registry(vec![
            article("1", "a", "2025-02-10"),
            article("2", "b", "2025-03-25"),
            article("3", "c", "2025-04-21"),
        ])
    }

    fn dates(list: &[&ArticleSummary]) -> Vec<String> {
        list.iter().map(|s| s.date.to_string()).collect()
    }

    #[test]
    fn latest_is_newest_first() {
        let reg = three();
        assert_eq!(
            dates(&reg.select_latest(3)),
            vec!["2025-04-21", "2025-03-25", "2025-02-10"]
        );
    }

    #[test]
    fn latest_truncates() {
        let reg = three();
        assert_eq!(dates(&reg.select_latest(2)), vec!["2025-04-21", "2025-03-25"]);
        assert!(reg.select_latest(0).is_empty());
        assert_eq!(reg.select_latest(10).len(), 3);
    }

    #[test]
    fn selection_leaves_registry_untouched() {
        let reg = three();
        let _ = reg.select_latest(1);
        assert_eq!(reg.select_latest(3).len(), 3);
        let authored: Vec<_> = reg.featured().map(|s| s.id.as_str()).collect();
        assert_eq!(authored, vec!["1", "2", "3"]);
    }

    #[test]
    fn equal_dates_keep_authored_order() {
        let reg = registry(vec![
            article("1", "a", "2025-01-01"),
            article("2", "b", "2025-05-05"),
            article("3", "c", "2025-01-01"),
        ]);
        let ids: Vec<_> = reg.select_latest(3).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[test]
    fn duplicate_slug_rejected() {
        let profile = ContentRegistry::builtin().unwrap().profile().clone();
        let err = ContentRegistry::from_table(ContentTable {
            profile,
            articles: vec![article("1", "same", "2025-01-01"), article("2", "same", "2025-01-02")],
        })
        .unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug(s) if s == "same"));
    }

    #[test]
    fn duplicate_id_rejected() {
        let profile = ContentRegistry::builtin().unwrap().profile().clone();
        let err = ContentRegistry::from_table(ContentTable {
            profile,
            articles: vec![article("7", "a", "2025-01-01"), article("7", "b", "2025-01-02")],
        })
        .unwrap_err();
        assert!(matches!(err, ContentError::DuplicateId(s) if s == "7"));
    }

    #[test]
    fn bad_slugs_rejected() {
        for slug in ["", "Upper", "has space", "-lead", "trail-", "a/b"] {
            assert!(!is_valid_slug(slug), "{slug:?} should be rejected");
        }
        assert!(is_valid_slug("future-of-ai"));
        assert!(is_valid_slug("web3"));
    }

    #[test]
    fn unknown_category_fails_to_parse() {
        let raw = r#"{"id":"1","title":"t","summary":"s","category":"Quantum",
                      "date":"2025-01-01","image":"x","slug":"x"}"#;
        assert!(serde_json::from_str::<ArticleSummary>(raw).is_err());
    }

    #[test]
    fn builtin_table_matches_published_posts() {
        let reg = ContentRegistry::builtin().expect("builtin table parses");
        assert_eq!(reg.len(), 3);

        let slugs: Vec<_> = reg.featured().map(|s| s.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec!["future-of-ai", "mastering-react-hooks", "scalable-systems-cloud"]
        );

        let latest: Vec<_> = reg.select_latest(3).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(latest, vec!["3", "2", "1"]);

        let ai = reg.article("future-of-ai").unwrap();
        assert_eq!(ai.summary.category, Category::Ai);
        assert!(!ai.body.is_empty());
        assert!(reg.article("missing").is_none());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ContentRegistry::load(Path::new("/nonexistent/blog.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }

    #[test]
    fn load_reads_table_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.json");
        std::fs::write(&path, BUILTIN_TABLE).unwrap();

        let reg = ContentRegistry::load_or_builtin(Some(&path)).unwrap();
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn category_labels_round_trip_through_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }
}
