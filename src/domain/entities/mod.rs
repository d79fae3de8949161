pub mod admin_user;
pub mod contact_message;
pub mod dashboard;
pub mod experience;
pub mod project;
pub mod tag;

pub use admin_user::{AdminUser, Role};
pub use contact_message::ContactMessage;
pub use dashboard::{DashboardOverview, StatCard};
pub use experience::{Experience, ExperienceField, Highlight};
pub use project::{Project, ProjectFeature, ProjectField, ProjectScreenshot};
pub use tag::{group_by_type, Tag};
