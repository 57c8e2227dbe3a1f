use crate::types::{SubjectRef, TimetableInput};
use std::collections::HashSet;

/// Pre-solve sanity pass: duplicate ids, dangling references, unreachable
/// grades. Distinct from anything the Solver itself reports — this runs
/// before a grid even exists.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }
}

/// Runs every pre-solve check and returns the combined result. Does not
/// fail the call on its own — callers decide whether `errors` should abort
/// a run (the CLI's `validate`/`solve` subcommands do; library callers may
/// choose to proceed and let the Candidate Generator drop what it cannot
/// resolve).
pub fn validate_input(input: &TimetableInput) -> ValidationResult {
    let mut result = ValidationResult::default();

    check_duplicate_teacher_ids(input, &mut result);
    check_duplicate_subject_ids(input, &mut result);
    check_duplicate_classroom_ids(input, &mut result);
    check_dangling_subject_refs(input, &mut result);
    check_unreachable_grades(input, &mut result);
    check_classroom_type_coverage(input, &mut result);

    result
}

fn check_duplicate_teacher_ids(input: &TimetableInput, result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for teacher in &input.teachers {
        if !seen.insert(&teacher.id) {
            result.add_error(format!("duplicate teacher id '{}'", teacher.id));
        }
    }
}

fn check_duplicate_subject_ids(input: &TimetableInput, result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for subject in &input.subjects {
        if !seen.insert(&subject.id) {
            result.add_error(format!("duplicate subject id '{}'", subject.id));
        }
    }
}

fn check_duplicate_classroom_ids(input: &TimetableInput, result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for classroom in &input.classrooms {
        if !seen.insert(&classroom.id) {
            result.add_error(format!("duplicate classroom id '{}'", classroom.id));
        }
    }
}

fn check_dangling_subject_refs(input: &TimetableInput, result: &mut ValidationResult) {
    for teacher in &input.teachers {
        for subject_ref in &teacher.subjects {
            let resolves = match subject_ref {
                SubjectRef::ById(id) => input.subjects.iter().any(|s| &s.id == id),
                SubjectRef::ByName(name) => input.subjects.iter().any(|s| &s.name == name),
            };
            if !resolves {
                result.add_warning(format!(
                    "teacher '{}' references unknown subject '{}'",
                    teacher.id, subject_ref
                ));
            }
        }
    }
}

fn check_unreachable_grades(input: &TimetableInput, result: &mut ValidationResult) {
    let declared_grades: HashSet<u8> = input.settings.grades().into_iter().collect();
    for teacher in &input.teachers {
        for &grade in &teacher.grades {
            if !declared_grades.contains(&grade) {
                result.add_warning(format!(
                    "teacher '{}' is qualified for grade {} which the school settings do not declare",
                    teacher.id, grade
                ));
            }
        }
    }
    for subject in &input.subjects {
        for &grade in &subject.grades {
            if !declared_grades.contains(&grade) {
                result.add_warning(format!(
                    "subject '{}' applies to grade {} which the school settings do not declare",
                    subject.id, grade
                ));
            }
        }
    }
}

fn check_classroom_type_coverage(input: &TimetableInput, result: &mut ValidationResult) {
    for subject in &input.subjects {
        if !subject.requires_special_classroom {
            continue;
        }
        let Some(classroom_type) = &subject.classroom_type else {
            result.add_warning(format!(
                "subject '{}' requires a special classroom but declares no classroom_type",
                subject.id
            ));
            continue;
        };
        let has_match = input.classrooms.iter().any(|c| &c.classroom_type == classroom_type);
        if !has_match {
            result.add_warning(format!(
                "subject '{}' requires classroom type '{}' but no classroom of that type exists",
                subject.id, classroom_type
            ));
        }
    }
}
