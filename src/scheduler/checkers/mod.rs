mod assignment_restriction;
mod classroom_conflict;
mod teacher_conflict;

pub use assignment_restriction::AssignmentRestrictionChecker;
pub use classroom_conflict::ClassroomConflictChecker;
pub use teacher_conflict::TeacherConflictChecker;

use super::context::SolveContext;
use crate::types::{Candidate, Severity, Slot, Timetable};

/// A single checker's verdict on placing `candidate` into a target slot.
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    Ok,
    Violated(Rejection),
}

impl CheckOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckOutcome::Ok)
    }
}

/// A checker's rejection, carrying the severity tolerant mode should record
/// it at if the Solver decides to commit anyway.
#[derive(Debug, Clone)]
pub struct Rejection {
    pub checker: &'static str,
    pub severity: Severity,
    pub reason: String,
}

/// A pure predicate over `(slot, candidate, grid) -> ok | violated`.
/// Checkers must be side-effect-free; the pipeline order is fixed at
/// construction.
pub trait ConstraintChecker: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, slot: &Slot, candidate: &Candidate, grid: &Timetable, ctx: &SolveContext) -> CheckOutcome;
}

/// The fixed, extensible sequence of checkers run for every (slot, candidate)
/// pair under consideration.
pub struct CheckerPipeline {
    checkers: Vec<Box<dyn ConstraintChecker>>,
}

/// Outcome of running every checker in the pipeline against one
/// (slot, candidate) pair.
#[derive(Debug, Clone, Default)]
pub struct PipelineEvaluation {
    pub rejections: Vec<Rejection>,
}

impl PipelineEvaluation {
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty()
    }

    pub fn has_high_severity(&self) -> bool {
        self.rejections.iter().any(|r| r.severity == Severity::High)
    }

    /// The highest severity among all rejections, if any.
    pub fn max_severity(&self) -> Option<Severity> {
        self.rejections.iter().map(|r| r.severity).max()
    }
}

impl CheckerPipeline {
    /// The three built-in checkers, in fixed evaluation order: teacher
    /// conflicts, classroom conflicts, assignment restrictions.
    pub fn builtin() -> Self {
        Self {
            checkers: vec![
                Box::new(TeacherConflictChecker),
                Box::new(ClassroomConflictChecker),
                Box::new(AssignmentRestrictionChecker),
            ],
        }
    }

    /// Append caller-provided checkers after the built-ins.
    pub fn with_extra(mut self, extra: Vec<Box<dyn ConstraintChecker>>) -> Self {
        self.checkers.extend(extra);
        self
    }

    /// Run every checker in order and collect all rejections. Unlike a
    /// short-circuiting "first failure wins" pipeline, every checker always
    /// runs — tolerant mode needs every rejection, not just the first, to
    /// compute an aggregate severity.
    pub fn evaluate(&self, slot: &Slot, candidate: &Candidate, grid: &Timetable, ctx: &SolveContext) -> PipelineEvaluation {
        let mut evaluation = PipelineEvaluation::default();
        for checker in &self.checkers {
            if let CheckOutcome::Violated(rejection) = checker.check(slot, candidate, grid, ctx) {
                evaluation.rejections.push(rejection);
            }
        }
        evaluation
    }
}
