use super::checkers::PipelineEvaluation;
use super::classroom_resolver::resolve_classroom;
use super::context::SolveContext;
use crate::types::{Candidate, Day, Severity, Subject, Timetable, Violation, ViolationKind};

/// Phase 4.F: the sole surface that mutates a `Slot`'s assignment fields.
///
/// Writes `(day, period)` into `candidate`'s target `(grade, section)` slot.
/// Resolves a classroom through the Classroom Resolver when the subject
/// requires one; returns `false` without mutating anything if none is
/// available. On success, increments `candidate.assigned_hours`.
pub fn assign_strict(
    grid: &mut Timetable,
    day: Day,
    period: u8,
    candidate: &mut Candidate,
    subject: &Subject,
    ctx: &SolveContext,
) -> bool {
    if subject.requires_special_classroom {
        let Some(classroom) = resolve_classroom(subject, day, period, grid, ctx) else {
            return false;
        };
        let classroom_id = classroom.id.clone();
        let Some(slot) = grid.slot_mut(candidate.class_grade, &candidate.class_section, day, period) else {
            return false;
        };
        slot.subject = Some(subject.id.clone());
        slot.teacher = Some(candidate.teacher.clone());
        slot.classroom = Some(classroom_id);
    } else {
        let Some(slot) = grid.slot_mut(candidate.class_grade, &candidate.class_section, day, period) else {
            return false;
        };
        slot.subject = Some(subject.id.clone());
        slot.teacher = Some(candidate.teacher.clone());
        slot.classroom = None;
    }

    candidate.assigned_hours += 1;
    true
}

/// Always commits, regardless of `evaluation`'s rejections. Appends every
/// rejection in `evaluation` as a `Violation`, plus a classroom-conflict
/// violation if the subject requires a room and none was free. Sets
/// `has_violation`/`violation_severity` from the resulting violations list.
pub fn assign_tolerant(
    grid: &mut Timetable,
    day: Day,
    period: u8,
    candidate: &mut Candidate,
    subject: &Subject,
    ctx: &SolveContext,
    evaluation: &PipelineEvaluation,
) {
    let classroom = if subject.requires_special_classroom {
        resolve_classroom(subject, day, period, grid, ctx)
    } else {
        None
    };
    let classroom_id = classroom.map(|c| c.id.clone());
    let needs_classroom_violation = subject.requires_special_classroom && classroom_id.is_none();

    let mut violations: Vec<Violation> = evaluation
        .rejections
        .iter()
        .map(|rejection| Violation {
            kind: ViolationKind::from_checker_name(rejection.checker),
            severity: rejection.severity,
            message: rejection.reason.clone(),
            reason: Some(rejection.checker.to_string()),
        })
        .collect();

    if needs_classroom_violation {
        violations.push(Violation {
            kind: ViolationKind::ClassroomConflict,
            severity: Severity::Medium,
            message: format!(
                "no free classroom of type '{}' for subject '{}' at {} period {}",
                subject.classroom_type.as_deref().unwrap_or("?"),
                subject.id,
                day,
                period
            ),
            reason: None,
        });
    }

    let max_severity = violations.iter().map(|v| v.severity).max();

    if let Some(slot) = grid.slot_mut(candidate.class_grade, &candidate.class_section, day, period) {
        slot.subject = Some(subject.id.clone());
        slot.teacher = Some(candidate.teacher.clone());
        slot.classroom = classroom_id;
        slot.has_violation = !violations.is_empty();
        slot.violation_severity = max_severity;
        slot.violations = violations;
    }

    candidate.assigned_hours += 1;
}

/// Clears a slot's assignment and any recorded violations in one step.
pub fn unassign(grid: &mut Timetable, grade: u8, section: &str, day: Day, period: u8) {
    if let Some(slot) = grid.slot_mut(grade, section, day, period) {
        slot.subject = None;
        slot.teacher = None;
        slot.classroom = None;
        slot.has_violation = false;
        slot.violations.clear();
        slot.violation_severity = None;
    }
}
