use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix of locally generated placeholder ids. Never valid hex, so a draft id
/// can not be mistaken for a server UUID.
pub const DRAFT_ID_PREFIX: &str = "tmp_";

const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];
const VERSION_POSITION: usize = 14;
const VARIANT_POSITION: usize = 19;

/// Canonical 8-4-4-4-12 UUID text, version 1-5, RFC 4122 variant, any case.
pub fn is_uuid(id: &str) -> bool {
    let bytes = id.as_bytes();
    if bytes.len() != 36 {
        return false;
    }

    for (index, byte) in bytes.iter().enumerate() {
        if HYPHEN_POSITIONS.contains(&index) {
            if *byte != b'-' {
                return false;
            }
            continue;
        }
        if !byte.is_ascii_hexdigit() {
            return false;
        }
    }

    matches!(bytes[VERSION_POSITION], b'1'..=b'5')
        && matches!(
            bytes[VARIANT_POSITION].to_ascii_lowercase(),
            b'8' | b'9' | b'a' | b'b'
        )
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordId {
    Persisted(Uuid),
    Draft(String),
}

impl RecordId {
    pub fn classify(id: &str) -> Self {
        if is_uuid(id) {
            if let Ok(uuid) = Uuid::parse_str(id) {
                return RecordId::Persisted(uuid);
            }
        }
        RecordId::Draft(id.to_string())
    }

    pub fn new_draft() -> Self {
        RecordId::Draft(format!("{DRAFT_ID_PREFIX}{}", Uuid::new_v4().simple()))
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self, RecordId::Persisted(_))
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, RecordId::Draft(_))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Persisted(uuid) => write!(f, "{uuid}"),
            RecordId::Draft(id) => write!(f, "{id}"),
        }
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.to_string()
    }
}
