use super::super::context::SolveContext;
use super::{CheckOutcome, ConstraintChecker, Rejection};
use crate::types::{Candidate, Severity, Slot, Timetable};

/// Fails if some other slot at `(slot.day, slot.period)` anywhere in the
/// grid already holds `candidate.teacher`.
pub struct TeacherConflictChecker;

impl ConstraintChecker for TeacherConflictChecker {
    fn name(&self) -> &'static str {
        "TeacherConflict"
    }

    fn check(&self, slot: &Slot, candidate: &Candidate, grid: &Timetable, _ctx: &SolveContext) -> CheckOutcome {
        let conflict = grid
            .slots_at(slot.day, slot.period)
            .filter(|other| !other.belongs_to(slot.class_grade, &slot.class_section))
            .any(|other| other.teacher.as_ref() == Some(&candidate.teacher));

        if conflict {
            CheckOutcome::Violated(Rejection {
                checker: self.name(),
                severity: Severity::Medium,
                reason: format!(
                    "teacher {} already assigned at {} period {}",
                    candidate.teacher, slot.day, slot.period
                ),
            })
        } else {
            CheckOutcome::Ok
        }
    }
}
