use super::tag::Tag;
use crate::domain::editable::EditableRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys pre-filled in a new project's `technicalDetails` object.
pub const TECHNICAL_DETAIL_KEYS: [&str; 5] =
    ["architecture", "frontend", "backend", "database", "deployment"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectFeature {
    #[serde(default)]
    pub text: String,
}

impl ProjectFeature {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectScreenshot {
    pub image_url: String,
    pub sort_order: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub short_desc: String,
    pub long_description: String,
    pub cover_image_url: String,
    pub category: String,
    pub timeline: String,
    pub role: String,
    pub challenge: String,
    pub solution: String,
    pub results: Vec<String>,
    pub technical_details: Map<String, Value>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub is_featured: bool,
    pub sort_order: i64,
    pub tags: Vec<Tag>,
    pub features: Vec<ProjectFeature>,
    pub screenshots: Vec<ProjectScreenshot>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectField {
    Title(String),
    Slug(String),
    ShortDesc(String),
    LongDescription(String),
    CoverImageUrl(String),
    Category(String),
    Timeline(String),
    Role(String),
    Challenge(String),
    Solution(String),
    Results(Vec<String>),
    TechnicalDetails(Map<String, Value>),
    DemoUrl(Option<String>),
    RepoUrl(Option<String>),
    IsFeatured(bool),
    SortOrder(i64),
    Tags(Vec<Tag>),
    Features(Vec<ProjectFeature>),
    Screenshots(Vec<ProjectScreenshot>),
}

impl Project {
    pub fn technical_detail(&self, key: &str) -> Option<&str> {
        self.technical_details.get(key).and_then(Value::as_str)
    }
}

fn check_url(label: &str, value: Option<&str>) -> Result<(), String> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(());
    };
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(format!("{label} must start with http:// or https://"))
    }
}

impl EditableRecord for Project {
    type Field = ProjectField;

    const LABEL: &'static str = "Project";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn sort_order(&self) -> i64 {
        self.sort_order
    }

    fn blank(id: String, sort_order: i64) -> Self {
        let technical_details = TECHNICAL_DETAIL_KEYS
            .iter()
            .map(|key| ((*key).to_string(), Value::String(String::new())))
            .collect();
        Self {
            id,
            technical_details,
            demo_url: Some(String::new()),
            repo_url: Some(String::new()),
            sort_order,
            ..Self::default()
        }
    }

    fn tags(&self) -> &[Tag] {
        &self.tags
    }

    fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
    }

    fn apply(&mut self, field: ProjectField) {
        match field {
            ProjectField::Title(value) => self.title = value,
            ProjectField::Slug(value) => self.slug = value,
            ProjectField::ShortDesc(value) => self.short_desc = value,
            ProjectField::LongDescription(value) => self.long_description = value,
            ProjectField::CoverImageUrl(value) => self.cover_image_url = value,
            ProjectField::Category(value) => self.category = value,
            ProjectField::Timeline(value) => self.timeline = value,
            ProjectField::Role(value) => self.role = value,
            ProjectField::Challenge(value) => self.challenge = value,
            ProjectField::Solution(value) => self.solution = value,
            ProjectField::Results(value) => self.results = value,
            ProjectField::TechnicalDetails(value) => self.technical_details = value,
            ProjectField::DemoUrl(value) => self.demo_url = value,
            ProjectField::RepoUrl(value) => self.repo_url = value,
            ProjectField::IsFeatured(value) => self.is_featured = value,
            ProjectField::SortOrder(value) => self.sort_order = value,
            ProjectField::Tags(value) => self.tags = value,
            ProjectField::Features(value) => self.features = value,
            ProjectField::Screenshots(value) => self.screenshots = value,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        check_url("Demo URL", self.demo_url.as_deref())?;
        check_url("Repository URL", self.repo_url.as_deref())?;
        Ok(())
    }
}
