pub mod email;
pub mod record_id;

pub use email::is_valid_email;
pub use record_id::{is_uuid, RecordId, DRAFT_ID_PREFIX};
