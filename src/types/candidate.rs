use super::{SubjectId, TeacherId};
use serde::{Deserialize, Serialize};

/// One assignment task: place `teacher`/`subject` into the timetable of
/// `(class_grade, class_section)` for `required_hours` weekly lessons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub teacher: TeacherId,
    pub subject: SubjectId,
    pub class_grade: u8,
    pub class_section: String,
    pub required_hours: u32,
    pub assigned_hours: u32,
}

impl Candidate {
    pub fn new(teacher: TeacherId, subject: SubjectId, class_grade: u8, class_section: String, required_hours: u32) -> Self {
        Self {
            teacher,
            subject,
            class_grade,
            class_section,
            required_hours,
            assigned_hours: 0,
        }
    }

    pub fn remaining_hours(&self) -> u32 {
        self.required_hours.saturating_sub(self.assigned_hours)
    }

    pub fn is_complete(&self) -> bool {
        self.assigned_hours >= self.required_hours
    }
}
