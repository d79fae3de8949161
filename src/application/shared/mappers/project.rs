use super::text::slugify;
use super::Upsertable;
use crate::domain::entities::Project;
use crate::presentation::dto::project_dto::ProjectUpsertPayload;

fn trimmed_non_empty<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional_link(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}

pub fn to_project_upsert_payload(project: &Project, sort_order: i64) -> ProjectUpsertPayload {
    let slug = match project.slug.trim() {
        "" => slugify(&project.title),
        slug => slug.to_string(),
    };

    ProjectUpsertPayload {
        title: project.title.clone(),
        slug,
        short_desc: project.short_desc.clone(),
        long_description: project.long_description.clone(),
        cover_image_url: project.cover_image_url.clone(),
        category: project.category.clone(),
        timeline: project.timeline.clone(),
        role: project.role.clone(),
        challenge: project.challenge.clone(),
        solution: project.solution.clone(),
        results: trimmed_non_empty(project.results.iter().map(String::as_str)),
        technical_details: project.technical_details.clone(),
        demo_url: optional_link(project.demo_url.as_deref()),
        repo_url: optional_link(project.repo_url.as_deref()),
        screenshots: trimmed_non_empty(
            project.screenshots.iter().map(|shot| shot.image_url.as_str()),
        ),
        is_featured: project.is_featured,
        sort_order,
        tag_ids: project
            .tags
            .iter()
            .map(|tag| tag.id.clone())
            .filter(|id| !id.is_empty())
            .collect(),
        features: trimmed_non_empty(project.features.iter().map(|f| f.text.as_str())),
    }
}

impl Upsertable for Project {
    type Payload = ProjectUpsertPayload;

    const RESOURCE: &'static str = "projects";

    fn to_payload(&self, sort_order: i64) -> ProjectUpsertPayload {
        to_project_upsert_payload(self, sort_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::editable::EditableRecord;
    use crate::domain::entities::{ProjectFeature, ProjectScreenshot, Tag};
    use serde_json::json;

    #[test]
    fn blank_slug_falls_back_to_title() {
        let project = Project {
            title: "Portfolio Site 2.0".to_string(),
            slug: "   ".to_string(),
            ..Project::default()
        };
        assert_eq!(to_project_upsert_payload(&project, 1).slug, "portfolio-site-20");

        let explicit = Project {
            slug: " custom ".to_string(),
            ..project
        };
        assert_eq!(to_project_upsert_payload(&explicit, 1).slug, "custom");
    }

    #[test]
    fn lists_are_trimmed_and_filtered() {
        let project = Project {
            title: "Site".to_string(),
            results: vec![" 2x faster ".to_string(), "".to_string()],
            features: vec![ProjectFeature::new(" Search "), ProjectFeature::new(" ")],
            screenshots: vec![
                ProjectScreenshot { image_url: "https://a.png".to_string(), sort_order: 1 },
                ProjectScreenshot { image_url: " ".to_string(), sort_order: 2 },
            ],
            tags: vec![Tag::new("t1", "Rust", "language")],
            ..Project::default()
        };
        let payload = to_project_upsert_payload(&project, 3);
        assert_eq!(payload.results, vec!["2x faster"]);
        assert_eq!(payload.features, vec!["Search"]);
        assert_eq!(payload.screenshots, vec!["https://a.png"]);
        assert_eq!(payload.tag_ids, vec!["t1"]);
        assert_eq!(payload.sort_order, 3);
    }

    #[test]
    fn blank_links_serialize_as_null() {
        let draft = Project::blank("tmp_x".to_string(), 1);
        let value = serde_json::to_value(draft.to_payload(1)).unwrap();
        assert_eq!(value["demoUrl"], json!(null));
        assert_eq!(value["repoUrl"], json!(null));
        assert_eq!(value["technicalDetails"]["architecture"], json!(""));

        let linked = Project {
            repo_url: Some("https://github.com/me/site".to_string()),
            ..draft
        };
        assert_eq!(
            to_project_upsert_payload(&linked, 1).repo_url.as_deref(),
            Some("https://github.com/me/site")
        );
    }
}
