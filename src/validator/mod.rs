mod invariants;

pub use invariants::{
    check_candidate_hour_bounds, check_classroom_conflicts, check_classroom_type_compliance, check_mandatory_restrictions,
    check_slot_count_consistency, check_teacher_conflicts,
};

use crate::types::{Candidate, Timetable, TimetableInput};

/// Severity of a validator finding. Distinct from `types::Severity`: a
/// validator violation is either a broken invariant (`Error`, should never
/// happen on a grid the Solver itself produced) or informational
/// (`Warning`, e.g. a statistic worth surfacing but not a bug).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Violation {
    pub constraint: String,
    pub message: String,
    pub severity: Severity,
}

/// The outcome of an independent post-solve re-check: every quantified
/// invariant from the design notes, re-derived from the grid itself rather
/// than trusted from solver bookkeeping.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.severity == Severity::Error)
    }
}

/// Runs every invariant check against a produced grid and its candidate
/// list. Used by the `validate` CLI subcommand and by property tests that
/// want to assert a solve never violates its own guarantees — this is
/// deliberately independent of the Constraint Checker pipeline so a bug
/// shared between the two wouldn't go unnoticed.
pub fn validate_timetable(grid: &Timetable, input: &TimetableInput, candidates: &[Candidate]) -> ValidationReport {
    let mut violations = Vec::new();

    violations.extend(check_teacher_conflicts(grid));
    violations.extend(check_classroom_conflicts(grid, input));
    violations.extend(check_mandatory_restrictions(grid, input));
    violations.extend(check_classroom_type_compliance(grid, input));
    violations.extend(check_candidate_hour_bounds(grid, candidates));
    violations.extend(check_slot_count_consistency(grid));

    let is_valid = violations.iter().all(|v| v.severity != Severity::Error);

    ValidationReport { is_valid, violations }
}
