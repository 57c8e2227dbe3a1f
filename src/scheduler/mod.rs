mod assigner;
mod candidate_gen;
pub mod checkers;
mod classroom_resolver;
pub mod context;
mod difficulty;
mod solver;
mod stats;

pub use checkers::ConstraintChecker;
pub use stats::{QualityMetrics, SolveStatistics};

pub use candidate_gen::generate_candidates;
use context::SolveContext;
use difficulty::compute_difficulty;

use crate::error::Result;
use crate::types::{Candidate, TeacherId, Timetable, TimetableInput};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

/// Which of the two placement strategies a solve should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveMode {
    Strict,
    Tolerant,
}

/// Caller-tunable knobs for one solve. The `Default` instance runs
/// unbounded strict search, no deadline, no cancellation, no extra
/// checkers — the most permissive configuration.
#[derive(Default)]
pub struct SolveOptions {
    pub backtrack_limit: Option<u64>,
    pub deadline: Option<Instant>,
    pub cancel: Option<Arc<AtomicBool>>,
    pub extra_checkers: Vec<Box<dyn ConstraintChecker>>,
}

/// What a solve run concluded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Every candidate's required hours were placed.
    Complete,
    /// Some hours went unplaced; the run still ran to exhaustion (strict
    /// backtrack limit reached, or tolerant mode ran out of room).
    Partial,
    /// Cancelled or past its deadline before finishing.
    Interrupted,
}

/// The result of one solve: a structurally valid grid (even when
/// `status != Complete`), its statistics, and the outcome classification.
pub struct SolveOutcome {
    pub timetable: Timetable,
    pub statistics: SolveStatistics,
    pub status: SolveStatus,
}

/// The public entry point: builds the grid, generates candidates, sorts
/// them by descending teacher difficulty, and runs the requested mode's
/// placement algorithm, then summarizes the result.
///
/// `options` is consumed because `extra_checkers` holds owned trait
/// objects that are moved into the constraint pipeline for the run.
pub fn solve(input: &TimetableInput, mode: SolveMode, mut options: SolveOptions) -> Result<SolveOutcome> {
    let start = Instant::now();

    let mut grid = Timetable::new(&input.settings)?;
    let mut candidates = generate_candidates(&input.settings, &input.teachers, &input.subjects);
    sort_by_difficulty(&mut candidates, input);

    let ctx = SolveContext::new(input);
    let extra_checkers = std::mem::take(&mut options.extra_checkers);
    let pipeline = checkers::CheckerPipeline::builtin().with_extra(extra_checkers);

    let (backtrack_count, interrupted, complete) = match mode {
        SolveMode::Strict => {
            let result = solver::solve_strict(&mut grid, &mut candidates, &pipeline, &ctx, &options);
            (result.backtrack_count, result.interrupted, result.complete)
        }
        SolveMode::Tolerant => {
            let result = solver::solve_tolerant(&mut grid, &mut candidates, &pipeline, &ctx, &options);
            let complete = candidates.iter().all(|c| c.is_complete());
            (0, result.interrupted, complete)
        }
    };

    let (total_slots, assigned_slots, unassigned_slots, constraint_violations) = stats::collect_slot_statistics(&grid);
    let generation_time = start.elapsed();

    let status = if interrupted {
        SolveStatus::Interrupted
    } else if complete {
        SolveStatus::Complete
    } else {
        SolveStatus::Partial
    };

    let statistics = SolveStatistics {
        total_slots,
        assigned_slots,
        unassigned_slots,
        constraint_violations,
        backtrack_count,
        generation_time,
        interrupted,
        quality: None,
    };

    Ok(SolveOutcome {
        timetable: grid,
        statistics,
        status,
    })
}

fn sort_by_difficulty(candidates: &mut [Candidate], input: &TimetableInput) {
    let days = input.settings.days();
    let scores: HashMap<TeacherId, difficulty::Difficulty> =
        compute_difficulty(candidates, &input.teachers, &days, |day| input.settings.periods_on(day));

    let mut indexed: Vec<(usize, Candidate)> = candidates.iter().cloned().enumerate().collect();
    indexed.sort_by_key(|(original_index, candidate)| {
        let difficulty = scores.get(&candidate.teacher).map(|d| d.difficulty_percentage).unwrap_or(0.0);
        (Reverse(OrderedFloat(difficulty)), *original_index)
    });

    for (slot, (_, candidate)) in candidates.iter_mut().zip(indexed.into_iter()) {
        *slot = candidate;
    }
}

/// Minimal total-order wrapper so `f64` difficulty scores can serve as a
/// sort key; difficulty is always finite (`total / max(1, available)`).
#[derive(Debug, Clone, Copy, PartialEq)]
struct OrderedFloat(f64);

impl Eq for OrderedFloat {}

impl PartialOrd for OrderedFloat {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedFloat {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(std::cmp::Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GradeClasses, SchoolSettings, Subject, SubjectId, SubjectRef, Teacher, TeacherId, WeeklyHours};
    use std::collections::{HashMap, HashSet};

    fn basic_input() -> TimetableInput {
        let settings = SchoolSettings {
            classes_per_grade: vec![GradeClasses {
                grade: 1,
                sections: vec!["A".to_string()],
            }],
            daily_periods: 2,
            saturday_periods: 0,
        };
        let teacher = Teacher {
            id: TeacherId("t1".to_string()),
            name: "T1".to_string(),
            subjects: vec![SubjectRef::ById(SubjectId("math".to_string()))],
            grades: HashSet::from([1]),
            assignment_restrictions: vec![],
        };
        let subject = Subject {
            id: SubjectId("math".to_string()),
            name: "Math".to_string(),
            grades: vec![1],
            weekly_hours: WeeklyHours(HashMap::from([(1u8, 2)])),
            requires_special_classroom: false,
            classroom_type: None,
        };
        TimetableInput {
            settings,
            teachers: vec![teacher],
            subjects: vec![subject],
            classrooms: vec![],
        }
    }

    #[test]
    fn strict_solve_on_s1_completes_cleanly() {
        let input = basic_input();
        let outcome = solve(&input, SolveMode::Strict, SolveOptions::default()).unwrap();
        assert_eq!(outcome.status, SolveStatus::Complete);
        assert_eq!(outcome.statistics.assigned_slots, 2);
        assert_eq!(outcome.statistics.unassigned_slots, 0);
    }

    #[test]
    fn tolerant_solve_on_s1_completes_without_violations() {
        let input = basic_input();
        let outcome = solve(&input, SolveMode::Tolerant, SolveOptions::default()).unwrap();
        assert_eq!(outcome.statistics.assigned_slots, 2);
        assert_eq!(outcome.statistics.constraint_violations, 0);
    }

    #[test]
    fn invalid_settings_is_rejected_before_any_candidate_work() {
        let mut input = basic_input();
        input.settings.daily_periods = 0;
        assert!(solve(&input, SolveMode::Strict, SolveOptions::default()).is_err());
    }
}
