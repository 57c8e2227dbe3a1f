use super::{ClassroomId, Day, SubjectId, TeacherId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    TeacherConflict,
    ClassroomConflict,
    AssignmentRestriction,
    /// A caller-supplied checker outside the three built-ins, named by its
    /// `ConstraintChecker::name()`.
    Custom(String),
}

impl ViolationKind {
    /// Maps a `ConstraintChecker::name()` to its `ViolationKind`, falling
    /// back to `Custom` for anything outside the three built-ins.
    pub fn from_checker_name(name: &str) -> Self {
        match name {
            "TeacherConflict" => ViolationKind::TeacherConflict,
            "ClassroomConflict" => ViolationKind::ClassroomConflict,
            "AssignmentRestriction" => ViolationKind::AssignmentRestriction,
            other => ViolationKind::Custom(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub severity: Severity,
    pub message: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// One (grade, section, day, period) cell of the timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub class_grade: u8,
    pub class_section: String,
    pub day: Day,
    pub period: u8,
    pub subject: Option<SubjectId>,
    pub teacher: Option<TeacherId>,
    pub classroom: Option<ClassroomId>,
    #[serde(default)]
    pub has_violation: bool,
    #[serde(default)]
    pub violations: Vec<Violation>,
    pub violation_severity: Option<Severity>,
}

impl Slot {
    pub fn empty(class_grade: u8, class_section: String, day: Day, period: u8) -> Self {
        Self {
            class_grade,
            class_section,
            day,
            period,
            subject: None,
            teacher: None,
            classroom: None,
            has_violation: false,
            violations: Vec::new(),
            violation_severity: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subject.is_none()
    }

    pub fn belongs_to(&self, grade: u8, section: &str) -> bool {
        self.class_grade == grade && self.class_section == section
    }
}
