pub mod editable;
pub mod entities;
pub mod value_objects;

pub use editable::{EditableList, EditableRecord};
pub use entities::{AdminUser, ContactMessage, DashboardOverview, Experience, Project, Tag};
pub use value_objects::{is_uuid, RecordId};
