use super::tag::Tag;
use crate::domain::editable::EditableRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Highlight {
    #[serde(default)]
    pub text: String,
}

impl Highlight {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    /// Position held.
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub description: String,
    pub sort_order: i64,
    pub tags: Vec<Tag>,
    pub highlights: Vec<Highlight>,
}

/// One editable field of an [`Experience`] together with its new value.
#[derive(Debug, Clone, PartialEq)]
pub enum ExperienceField {
    Title(String),
    Company(String),
    Location(String),
    StartDate(String),
    EndDate(Option<String>),
    IsCurrent(bool),
    Description(String),
    SortOrder(i64),
    Tags(Vec<Tag>),
    Highlights(Vec<Highlight>),
}

fn parse_date(label: &str, value: &str) -> Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| format!("{label} must be a YYYY-MM-DD date"))
}

impl EditableRecord for Experience {
    type Field = ExperienceField;

    const LABEL: &'static str = "Experience";

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
        Self {
            id,
            end_date: Some(String::new()),
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

    fn apply(&mut self, field: ExperienceField) {
        match field {
            ExperienceField::Title(value) => self.title = value,
            ExperienceField::Company(value) => self.company = value,
            ExperienceField::Location(value) => self.location = value,
            ExperienceField::StartDate(value) => self.start_date = value,
            ExperienceField::EndDate(value) => self.end_date = value,
            ExperienceField::IsCurrent(value) => self.is_current = value,
            ExperienceField::Description(value) => self.description = value,
            ExperienceField::SortOrder(value) => self.sort_order = value,
            ExperienceField::Tags(value) => self.tags = value,
            ExperienceField::Highlights(value) => self.highlights = value,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }

        let start = parse_date("Start date", &self.start_date)?;
        if self.is_current {
            return Ok(());
        }
        let end = parse_date("End date", self.end_date.as_deref().unwrap_or_default())?;
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err("End date must not be before start date".to_string());
            }
        }
        Ok(())
    }
}
