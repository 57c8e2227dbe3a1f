use crate::types::{Candidate, Day, Timetable, TimetableInput};
use crate::validator::{Severity, Violation};
use std::collections::{HashMap, HashSet};

/// Independent re-check of teacher double-booking across the whole grid.
/// Unlike the Constraint Checker of the same name, this scans a finished
/// grid rather than one candidate placement, and never short-circuits.
pub fn check_teacher_conflicts(grid: &Timetable) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen: HashMap<&str, HashSet<(Day, u8)>> = HashMap::new();

    for slot in grid.iter_all() {
        let Some(teacher) = &slot.teacher else { continue };
        let booked = seen.entry(teacher.0.as_str()).or_default();
        if !booked.insert((slot.day, slot.period)) {
            violations.push(Violation {
                constraint: "TeacherConflict".to_string(),
                message: format!("teacher '{}' is double-booked at {} period {}", teacher, slot.day, slot.period),
                severity: Severity::Error,
            });
        }
    }

    violations
}

/// Independent re-check of classroom double-booking, respecting rooms with
/// `count > 1` as interchangeable. Counts every committed slot naming a
/// classroom at a given `(day, period)` and compares against that room's
/// declared capacity.
pub fn check_classroom_conflicts(grid: &Timetable, input: &TimetableInput) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut booked: HashMap<(&str, Day, u8), u32> = HashMap::new();

    for slot in grid.iter_all() {
        let Some(classroom) = &slot.classroom else { continue };
        *booked.entry((classroom.0.as_str(), slot.day, slot.period)).or_insert(0) += 1;
    }

    for ((classroom_id, day, period), count) in &booked {
        let capacity = input
            .classrooms
            .iter()
            .find(|c| c.id.0 == *classroom_id)
            .map(|c| c.count)
            .unwrap_or(1);
        if *count > capacity {
            violations.push(Violation {
                constraint: "ClassroomConflict".to_string(),
                message: format!(
                    "classroom '{}' booked {} times at {} period {}, capacity is {}",
                    classroom_id, count, day, period, capacity
                ),
                severity: Severity::Error,
            });
        }
    }

    violations
}

/// Independent re-check that every committed slot respects its teacher's
/// MANDATORY assignment restrictions.
pub fn check_mandatory_restrictions(grid: &Timetable, input: &TimetableInput) -> Vec<Violation> {
    let mut violations = Vec::new();

    for slot in grid.iter_all() {
        let Some(teacher_id) = &slot.teacher else { continue };
        let Some(teacher) = input.teachers.iter().find(|t| &t.id == teacher_id) else { continue };
        if teacher.is_forbidden(slot.day, slot.period) {
            violations.push(Violation {
                constraint: "AssignmentRestriction".to_string(),
                message: format!(
                    "teacher '{}' is placed at {} period {} outside a mandatory window",
                    teacher_id, slot.day, slot.period
                ),
                severity: Severity::Error,
            });
        }
    }

    violations
}

/// Independent re-check of classroom-type compliance: every slot whose
/// subject requires a special classroom must name one of the matching type.
pub fn check_classroom_type_compliance(grid: &Timetable, input: &TimetableInput) -> Vec<Violation> {
    let mut violations = Vec::new();

    for slot in grid.iter_all() {
        let Some(subject_id) = &slot.subject else { continue };
        let Some(subject) = input.subjects.iter().find(|s| &s.id == subject_id) else { continue };
        if !subject.requires_special_classroom {
            continue;
        }
        match &slot.classroom {
            None => violations.push(Violation {
                constraint: "ClassroomTypeCompliance".to_string(),
                message: format!(
                    "subject '{}' requires a special classroom but slot at {} period {} has none assigned",
                    subject_id, slot.day, slot.period
                ),
                severity: Severity::Error,
            }),
            Some(classroom_id) => {
                let actual_type = input.classrooms.iter().find(|c| &c.id == classroom_id).map(|c| c.classroom_type.as_str());
                if actual_type != subject.classroom_type.as_deref() {
                    violations.push(Violation {
                        constraint: "ClassroomTypeCompliance".to_string(),
                        message: format!(
                            "subject '{}' requires classroom type '{:?}' but was placed in '{}' of type '{:?}'",
                            subject_id, subject.classroom_type, classroom_id, actual_type
                        ),
                        severity: Severity::Error,
                    });
                }
            }
        }
    }

    violations
}

/// Independent re-check that no candidate was assigned more hours than it
/// required, and that `assigned_hours` matches what the grid actually shows
/// for that `(teacher, subject, grade, section)` combination.
pub fn check_candidate_hour_bounds(grid: &Timetable, candidates: &[Candidate]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for candidate in candidates {
        let actual_hours = grid
            .slots_for(candidate.class_grade, &candidate.class_section)
            .iter()
            .filter(|s| s.subject.as_ref() == Some(&candidate.subject) && s.teacher.as_ref() == Some(&candidate.teacher))
            .count() as u32;

        if actual_hours > candidate.required_hours {
            violations.push(Violation {
                constraint: "HourBounds".to_string(),
                message: format!(
                    "candidate (teacher '{}', subject '{}', grade {} section '{}') has {} hours placed but required only {}",
                    candidate.teacher, candidate.subject, candidate.class_grade, candidate.class_section, actual_hours, candidate.required_hours
                ),
                severity: Severity::Error,
            });
        }

        if actual_hours != candidate.assigned_hours {
            violations.push(Violation {
                constraint: "HourBounds".to_string(),
                message: format!(
                    "candidate (teacher '{}', subject '{}', grade {} section '{}') reports assigned_hours={} but grid shows {}",
                    candidate.teacher, candidate.subject, candidate.class_grade, candidate.class_section, candidate.assigned_hours, actual_hours
                ),
                severity: Severity::Error,
            });
        }
    }

    violations
}

/// Independent re-check that `total_slots == assigned_slots + unassigned_slots`.
pub fn check_slot_count_consistency(grid: &Timetable) -> Vec<Violation> {
    let total = grid.total_slots();
    let assigned = grid.assigned_slots();
    let unassigned = total - assigned;

    if assigned + unassigned != total {
        vec![Violation {
            constraint: "SlotCountConsistency".to_string(),
            message: format!("total_slots ({}) != assigned ({}) + unassigned ({})", total, assigned, unassigned),
            severity: Severity::Error,
        }]
    } else {
        Vec::new()
    }
}
