mod candidate;
mod classroom;
mod day;
mod grid;
mod input;
mod settings;
mod slot;
mod subject;
mod teacher;

pub use candidate::*;
pub use classroom::*;
pub use day::*;
pub use grid::*;
pub use input::*;
pub use settings::*;
pub use slot::*;
pub use subject::*;
pub use teacher::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype for teacher identifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeacherId(pub String);

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Newtype for subject identifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectId(pub String);

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Newtype for classroom identifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassroomId(pub String);

impl fmt::Display for ClassroomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reference to a subject as it appears on a teacher's qualification list.
///
/// The source data is inconsistent about whether `subjects` entries are
/// subject ids or subject names (see design notes); the generator resolves
/// every `SubjectRef` to a `SubjectId` once, up front, and never compares
/// names again downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectRef {
    ById(SubjectId),
    ByName(String),
}

impl fmt::Display for SubjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectRef::ById(id) => write!(f, "{}", id),
            SubjectRef::ByName(name) => write!(f, "{}", name),
        }
    }
}
