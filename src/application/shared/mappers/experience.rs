use super::Upsertable;
use crate::domain::entities::Experience;
use crate::presentation::dto::experience_dto::ExperienceUpsertPayload;

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}

pub fn to_experience_upsert_payload(
    experience: &Experience,
    sort_order: i64,
) -> ExperienceUpsertPayload {
    let end_date = if experience.is_current {
        None
    } else {
        non_blank(experience.end_date.as_deref())
    };

    ExperienceUpsertPayload {
        title: experience.title.clone(),
        company: experience.company.clone(),
        location: experience.location.clone(),
        start_date: experience.start_date.clone(),
        end_date,
        is_current: experience.is_current,
        description: experience.description.clone(),
        sort_order,
        tag_ids: experience
            .tags
            .iter()
            .map(|tag| tag.id.clone())
            .filter(|id| !id.is_empty())
            .collect(),
        highlights: experience
            .highlights
            .iter()
            .map(|highlight| highlight.text.clone())
            .filter(|text| !text.trim().is_empty())
            .collect(),
    }
}

impl Upsertable for Experience {
    type Payload = ExperienceUpsertPayload;

    const RESOURCE: &'static str = "experiences";

    fn to_payload(&self, sort_order: i64) -> ExperienceUpsertPayload {
        to_experience_upsert_payload(self, sort_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Highlight, Tag};
    use serde_json::json;

    fn experience() -> Experience {
        Experience {
            id: "tmp_1".to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "2021-04-01".to_string(),
            end_date: Some("2023-01-31".to_string()),
            sort_order: 7,
            tags: vec![Tag::new("t1", "Rust", "language"), Tag::new("", "Ghost", "x")],
            highlights: vec![Highlight::new("Led rewrite"), Highlight::new("  ")],
            ..Experience::default()
        }
    }

    #[test]
    fn payload_uses_the_display_position() {
        let payload = to_experience_upsert_payload(&experience(), 1);
        assert_eq!(payload.sort_order, 1);
        assert_eq!(payload.tag_ids, vec!["t1"]);
        assert_eq!(payload.highlights, vec!["Led rewrite"]);
        assert_eq!(payload.end_date.as_deref(), Some("2023-01-31"));
    }

    #[test]
    fn current_or_blank_end_date_serializes_as_null() {
        let mut current = experience();
        current.is_current = true;
        let value = serde_json::to_value(to_experience_upsert_payload(&current, 1)).unwrap();
        assert_eq!(value["endDate"], json!(null));
        assert_eq!(value["isCurrent"], json!(true));

        let mut blank = experience();
        blank.end_date = Some(String::new());
        assert_eq!(to_experience_upsert_payload(&blank, 1).end_date, None);
    }

    #[test]
    fn payload_field_names_are_camel_case() {
        let value = serde_json::to_value(experience().to_payload(2)).unwrap();
        let keys = [
            "title",
            "company",
            "location",
            "startDate",
            "endDate",
            "isCurrent",
            "description",
            "sortOrder",
            "tagIds",
            "highlights",
        ];
        for key in keys {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert!(value.get("id").is_none());
    }
}
