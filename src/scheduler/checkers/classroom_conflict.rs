use super::super::context::SolveContext;
use super::{CheckOutcome, ConstraintChecker};
use crate::types::{Candidate, Slot, Timetable};

/// For subjects that do not require a special classroom, always OK. For
/// those that do, this checker is a conservative no-op: classroom
/// contention is enforced by the Classroom Resolver at commit time, and if
/// no room can be found, the Assigner reports a `NoSuitableClassroom`
/// condition (hard rejection in strict mode, a recorded violation in
/// tolerant mode). This mirrors the source behavior exactly, per the
/// design notes — it is not silently strengthened into a standalone
/// conflict predicate here.
pub struct ClassroomConflictChecker;

impl ConstraintChecker for ClassroomConflictChecker {
    fn name(&self) -> &'static str {
        "ClassroomConflict"
    }

    fn check(&self, _slot: &Slot, _candidate: &Candidate, _grid: &Timetable, _ctx: &SolveContext) -> CheckOutcome {
        CheckOutcome::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Day, GradeClasses, SchoolSettings, SubjectId, TeacherId, TimetableInput};

    #[test]
    fn is_always_ok_as_a_standalone_predicate() {
        let settings = SchoolSettings {
            classes_per_grade: vec![GradeClasses {
                grade: 1,
                sections: vec!["A".to_string()],
            }],
            daily_periods: 1,
            saturday_periods: 0,
        };
        let grid = Timetable::new(&settings).unwrap();
        let input = TimetableInput {
            settings,
            teachers: vec![],
            subjects: vec![],
            classrooms: vec![],
        };
        let ctx = SolveContext::new(&input);
        let slot = grid.slot(1, "A", Day::Mon, 1).unwrap().clone();
        let candidate = Candidate::new(TeacherId("t1".to_string()), SubjectId("sci".to_string()), 1, "A".to_string(), 1);
        assert!(ClassroomConflictChecker.check(&slot, &candidate, &grid, &ctx).is_ok());
    }
}
