use crate::domain::entities::{Highlight, ProjectFeature, ProjectScreenshot};

/// Non-empty trimmed lines; every `\r` is dropped, not only line endings.
fn trimmed_lines(text: &str) -> Vec<String> {
    text.replace('\r', "")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn highlights_to_text(highlights: &[Highlight]) -> String {
    highlights
        .iter()
        .map(|highlight| highlight.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keeps blank lines so the text area does not fight the cursor while typing.
pub fn text_to_highlights(text: &str) -> Vec<Highlight> {
    text.replace('\r', "")
        .split('\n')
        .map(Highlight::new)
        .collect()
}

pub fn lines_to_text(lines: &[String]) -> String {
    lines.join("\n")
}

pub fn text_to_lines(text: &str) -> Vec<String> {
    trimmed_lines(text)
}

pub fn features_to_text(features: &[ProjectFeature]) -> String {
    features
        .iter()
        .map(|feature| feature.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn text_to_features(text: &str) -> Vec<ProjectFeature> {
    trimmed_lines(text)
        .into_iter()
        .map(ProjectFeature::new)
        .collect()
}

pub fn screenshots_to_text(screenshots: &[ProjectScreenshot]) -> String {
    screenshots
        .iter()
        .map(|shot| shot.image_url.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn text_to_screenshots(text: &str) -> Vec<ProjectScreenshot> {
    trimmed_lines(text)
        .into_iter()
        .enumerate()
        .map(|(index, image_url)| ProjectScreenshot {
            image_url,
            sort_order: index as i64 + 1,
        })
        .collect()
}

/// URL slug: lowercase ASCII word characters separated by single hyphens.
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for ch in lowered.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.push(ch);
        } else if ch == '-' || ch.is_whitespace() {
            pending_hyphen = true;
        }
    }
    if pending_hyphen {
        slug.push('-');
    }
    slug
}
