use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectStats {
    pub total: u64,
    pub featured: u64,
    pub recent_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceStats {
    pub total: u64,
    pub current: u64,
    pub recent_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactMessageStats {
    pub total: u64,
    pub unread: u64,
    pub recent_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemInfo {
    pub server_time: String,
    pub recent_days: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardOverview {
    pub projects: ProjectStats,
    pub experiences: ExperienceStats,
    pub contact_messages: ContactMessageStats,
    pub system: SystemInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u64,
    pub summary: String,
}

impl DashboardOverview {
    pub fn stat_cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                label: "Projects",
                value: self.projects.total,
                summary: format!(
                    "{} featured • {} recent",
                    self.projects.featured, self.projects.recent_count
                ),
            },
            StatCard {
                label: "Experiences",
                value: self.experiences.total,
                summary: format!(
                    "{} current • {} recent",
                    self.experiences.current, self.experiences.recent_count
                ),
            },
            StatCard {
                label: "Contact Info",
                value: self.contact_messages.total,
                summary: format!(
                    "{} unread • {} recent",
                    self.contact_messages.unread, self.contact_messages.recent_count
                ),
            },
        ]
    }
}
