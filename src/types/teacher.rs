use super::{Day, SubjectRef, TeacherId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Strictness of an assignment restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RestrictionLevel {
    Mandatory,
    Preferred,
}

/// One restriction on where a teacher may be scheduled.
///
/// `Mandatory`: the teacher may be assigned on `restricted_day` only at
/// periods in `restricted_periods`; every other period on that day is
/// forbidden. `Preferred`: the teacher should be scheduled in the window,
/// but assignments outside it are permitted (and, in tolerant mode,
/// flagged as low-severity violations).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRestriction {
    pub restricted_day: Day,
    pub restricted_periods: HashSet<u8>,
    pub restriction_level: RestrictionLevel,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub display_order: u32,
}

impl AssignmentRestriction {
    /// Whether `period` on `day` falls inside this restriction's window.
    pub fn permits(&self, day: Day, period: u8) -> bool {
        self.restricted_day != day || self.restricted_periods.contains(&period)
    }

    pub fn is_mandatory(&self) -> bool {
        matches!(self.restriction_level, RestrictionLevel::Mandatory)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub subjects: Vec<SubjectRef>,
    pub grades: HashSet<u8>,
    #[serde(default)]
    pub assignment_restrictions: Vec<AssignmentRestriction>,
}

impl Teacher {
    pub fn may_teach_grade(&self, grade: u8) -> bool {
        self.grades.contains(&grade)
    }

    /// Mandatory restrictions covering `day`, if any.
    pub fn mandatory_restrictions_on(&self, day: Day) -> impl Iterator<Item = &AssignmentRestriction> {
        self.assignment_restrictions
            .iter()
            .filter(move |r| r.is_mandatory() && r.restricted_day == day)
    }

    /// Whether a MANDATORY restriction forbids this teacher at `(day, period)`.
    pub fn is_forbidden(&self, day: Day, period: u8) -> bool {
        self.mandatory_restrictions_on(day)
            .any(|r| !r.restricted_periods.contains(&period))
    }
}
