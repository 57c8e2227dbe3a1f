use super::ClassroomId;
use serde::{Deserialize, Serialize};

fn default_count() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    pub id: ClassroomId,
    pub name: String,
    #[serde(rename = "type")]
    pub classroom_type: String,
    /// Number of interchangeable rooms of this type.
    #[serde(default = "default_count")]
    pub count: u32,
}
