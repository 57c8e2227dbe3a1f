use super::super::context::SolveContext;
use super::{CheckOutcome, ConstraintChecker, Rejection};
use crate::types::{Candidate, Severity, Slot, Teacher, Timetable};

/// Evaluates a candidate's teacher against every `AssignmentRestriction` on
/// record. For each restriction `R`:
///
/// - `R.restricted_day == slot.day` and `R.restricted_periods` contains
///   `slot.period`: accept, regardless of level.
/// - Same day, period not in the window, `MANDATORY`: reject.
/// - Otherwise (including `PREFERRED` outside its window): accept.
///
/// This is the literal source algorithm; see DESIGN.md for why a
/// `PREFERRED`-outside-window case is never flagged here even though
/// tolerant-mode violation recording reserves a `LOW` severity for it.
pub struct AssignmentRestrictionChecker;

impl AssignmentRestrictionChecker {
    pub fn evaluate_teacher(teacher: &Teacher, slot: &Slot) -> CheckOutcome {
        for restriction in &teacher.assignment_restrictions {
            if restriction.restricted_day != slot.day {
                continue;
            }
            if restriction.restricted_periods.contains(&slot.period) {
                continue;
            }
            if restriction.is_mandatory() {
                return CheckOutcome::Violated(Rejection {
                    checker: "AssignmentRestriction",
                    severity: Severity::Medium,
                    reason: format!(
                        "teacher {} is restricted to periods {:?} on {}",
                        teacher.id, restriction.restricted_periods, restriction.restricted_day
                    ),
                });
            }
        }
        CheckOutcome::Ok
    }
}

impl ConstraintChecker for AssignmentRestrictionChecker {
    fn name(&self) -> &'static str {
        "AssignmentRestriction"
    }

    fn check(&self, slot: &Slot, candidate: &Candidate, _grid: &Timetable, ctx: &SolveContext) -> CheckOutcome {
        match ctx.teacher(&candidate.teacher) {
            Some(teacher) => Self::evaluate_teacher(teacher, slot),
            // An unresolvable teacher id is a configuration error the
            // Candidate Generator should already have dropped; treat it as
            // a pass here rather than panicking inside the pipeline.
            None => CheckOutcome::Ok,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AssignmentRestriction, Day, RestrictionLevel, SubjectRef, TeacherId};
    use std::collections::HashSet;

    fn teacher_with(restrictions: Vec<AssignmentRestriction>) -> Teacher {
        Teacher {
            id: TeacherId("t1".to_string()),
            name: "T1".to_string(),
            subjects: vec![SubjectRef::ById(crate::types::SubjectId("math".to_string()))],
            grades: HashSet::from([1]),
            assignment_restrictions: restrictions,
        }
    }

    fn slot_at(day: Day, period: u8) -> Slot {
        Slot::empty(1, "A".to_string(), day, period)
    }

    #[test]
    fn accepts_inside_mandatory_window() {
        let teacher = teacher_with(vec![AssignmentRestriction {
            restricted_day: Day::Mon,
            restricted_periods: HashSet::from([1]),
            restriction_level: RestrictionLevel::Mandatory,
            reason: None,
            display_order: 0,
        }]);
        let outcome = AssignmentRestrictionChecker::evaluate_teacher(&teacher, &slot_at(Day::Mon, 1));
        assert!(outcome.is_ok());
    }

    #[test]
    fn rejects_outside_mandatory_window_same_day() {
        let teacher = teacher_with(vec![AssignmentRestriction {
            restricted_day: Day::Mon,
            restricted_periods: HashSet::from([1]),
            restriction_level: RestrictionLevel::Mandatory,
            reason: None,
            display_order: 0,
        }]);
        let outcome = AssignmentRestrictionChecker::evaluate_teacher(&teacher, &slot_at(Day::Mon, 2));
        assert!(!outcome.is_ok());
    }

    #[test]
    fn preferred_outside_window_is_accepted() {
        let teacher = teacher_with(vec![AssignmentRestriction {
            restricted_day: Day::Mon,
            restricted_periods: HashSet::from([1]),
            restriction_level: RestrictionLevel::Preferred,
            reason: None,
            display_order: 0,
        }]);
        let outcome = AssignmentRestrictionChecker::evaluate_teacher(&teacher, &slot_at(Day::Mon, 2));
        assert!(outcome.is_ok());
    }

    #[test]
    fn other_days_are_unaffected() {
        let teacher = teacher_with(vec![AssignmentRestriction {
            restricted_day: Day::Mon,
            restricted_periods: HashSet::from([1]),
            restriction_level: RestrictionLevel::Mandatory,
            reason: None,
            display_order: 0,
        }]);
        let outcome = AssignmentRestrictionChecker::evaluate_teacher(&teacher, &slot_at(Day::Tue, 5));
        assert!(outcome.is_ok());
    }
}
