use super::assigner::{assign_strict, assign_tolerant, unassign};
use super::checkers::CheckerPipeline;
use super::context::SolveContext;
use super::SolveOptions;
use crate::types::{Candidate, Severity, Timetable};
use std::time::Instant;

/// Bookkeeping threaded through one strict-mode recursive search.
struct StrictState<'a> {
    backtrack_count: u64,
    limit_reached: bool,
    interrupted: bool,
    best_grid: Option<Timetable>,
    best_assigned: usize,
    options: &'a SolveOptions,
}

impl<'a> StrictState<'a> {
    fn should_stop(&mut self) -> bool {
        if let Some(limit) = self.options.backtrack_limit {
            if self.backtrack_count >= limit {
                self.limit_reached = true;
                return true;
            }
        }
        if let Some(cancel) = &self.options.cancel {
            if cancel.load(std::sync::atomic::Ordering::Relaxed) {
                self.interrupted = true;
                return true;
            }
        }
        if let Some(deadline) = self.options.deadline {
            if Instant::now() >= deadline {
                self.interrupted = true;
                return true;
            }
        }
        false
    }

    fn record_progress(&mut self, grid: &Timetable) {
        let assigned = grid.assigned_slots();
        if assigned > self.best_assigned {
            self.best_assigned = assigned;
            self.best_grid = Some(grid.clone());
        }
    }
}

/// Outcome of one strict-mode run.
pub struct StrictRunResult {
    pub backtrack_count: u64,
    pub limit_reached: bool,
    pub interrupted: bool,
    pub complete: bool,
}

/// Phase 4.G, strict mode: recursive backtracking over a flattened task
/// list (each candidate contributes one task per remaining required hour,
/// in candidate order), trying eligible slots in `(day, period)` reading
/// order and undoing on recursive failure.
///
/// `candidates` must already be sorted by descending teacher difficulty
/// (with a stable tie-break on original index) — that ordering is shared
/// with tolerant mode and computed once by the caller.
pub fn solve_strict(
    grid: &mut Timetable,
    candidates: &mut [Candidate],
    pipeline: &CheckerPipeline,
    ctx: &SolveContext,
    options: &SolveOptions,
) -> StrictRunResult {
    let tasks = flatten_tasks(candidates);
    let mut state = StrictState {
        backtrack_count: 0,
        limit_reached: false,
        interrupted: false,
        best_grid: None,
        best_assigned: grid.assigned_slots(),
        options,
    };

    let complete = backtrack(0, &tasks, candidates, grid, pipeline, ctx, &mut state);

    if !complete {
        if let Some(best) = state.best_grid.take() {
            if best.assigned_slots() > grid.assigned_slots() {
                *grid = best;
            }
        }
    }

    StrictRunResult {
        backtrack_count: state.backtrack_count,
        limit_reached: state.limit_reached,
        interrupted: state.interrupted,
        complete,
    }
}

/// One task: place hour number `n` of `candidates[candidate_index]`.
/// Flattening candidate-by-candidate (rather than round-robin) keeps each
/// candidate's placements contiguous in the search, matching "select the
/// next candidate with remaining hours" read literally.
fn flatten_tasks(candidates: &[Candidate]) -> Vec<usize> {
    let mut tasks = Vec::new();
    for (index, candidate) in candidates.iter().enumerate() {
        for _ in 0..candidate.required_hours {
            tasks.push(index);
        }
    }
    tasks
}

fn backtrack(
    task_index: usize,
    tasks: &[usize],
    candidates: &mut [Candidate],
    grid: &mut Timetable,
    pipeline: &CheckerPipeline,
    ctx: &SolveContext,
    state: &mut StrictState,
) -> bool {
    if task_index == tasks.len() {
        return true;
    }
    if state.should_stop() {
        return false;
    }

    let candidate_index = tasks[task_index];
    let grade = candidates[candidate_index].class_grade;
    let section = candidates[candidate_index].class_section.clone();
    let teacher_id = candidates[candidate_index].teacher.clone();
    let subject_id = candidates[candidate_index].subject.clone();
    let Some(subject) = ctx.subject(&subject_id) else {
        return false;
    };

    let timeslots: Vec<_> = grid.timeslots().to_vec();
    for (day, period) in timeslots {
        let Some(slot) = grid.slot(grade, &section, day, period) else {
            continue;
        };
        if !slot.is_empty() {
            continue;
        }
        if let Some(teacher) = ctx.teacher(&teacher_id) {
            if teacher.is_forbidden(day, period) {
                continue;
            }
        }
        let slot = slot.clone();
        let evaluation = pipeline.evaluate(&slot, &candidates[candidate_index], grid, ctx);
        if !evaluation.is_clean() {
            continue;
        }

        let committed = assign_strict(grid, day, period, &mut candidates[candidate_index], subject, ctx);
        if !committed {
            continue;
        }

        state.record_progress(grid);
        if backtrack(task_index + 1, tasks, candidates, grid, pipeline, ctx, state) {
            return true;
        }

        unassign(grid, grade, &section, day, period);
        candidates[candidate_index].assigned_hours -= 1;
    }

    state.backtrack_count += 1;
    false
}

/// Outcome of one tolerant-mode run.
pub struct TolerantRunResult {
    pub interrupted: bool,
}

/// Phase 4.G, tolerant mode: single greedy pass, never backtracks. For
/// each candidate (already difficulty-sorted), fills its remaining hours
/// into empty target slots — preferring a slot the pipeline passes
/// cleanly, falling back to the least-severe violating slot when none is
/// clean — and stops early if cancelled or past deadline.
pub fn solve_tolerant(
    grid: &mut Timetable,
    candidates: &mut [Candidate],
    pipeline: &CheckerPipeline,
    ctx: &SolveContext,
    options: &SolveOptions,
) -> TolerantRunResult {
    let mut interrupted = false;

    for candidate_index in 0..candidates.len() {
        if is_cancelled(options) || is_past_deadline(options) {
            interrupted = true;
            break;
        }

        while candidates[candidate_index].remaining_hours() > 0 {
            let grade = candidates[candidate_index].class_grade;
            let section = candidates[candidate_index].class_section.clone();
            let subject_id = candidates[candidate_index].subject.clone();
            let Some(subject) = ctx.subject(&subject_id) else {
                break;
            };

            let empty_slots: Vec<_> = grid
                .slots_for(grade, &section)
                .iter()
                .filter(|s| s.is_empty())
                .map(|s| (s.day, s.period))
                .collect();
            if empty_slots.is_empty() {
                break;
            }

            let mut clean_pick = None;
            let mut fallback_pick: Option<(crate::types::Day, u8, super::checkers::PipelineEvaluation)> = None;

            for (day, period) in empty_slots {
                let Some(slot) = grid.slot(grade, &section, day, period) else {
                    continue;
                };
                let slot = slot.clone();
                let evaluation = pipeline.evaluate(&slot, &candidates[candidate_index], grid, ctx);

                if !evaluation.has_high_severity() {
                    clean_pick = Some((day, period, evaluation));
                    break;
                }

                let candidate_severity = evaluation.max_severity().unwrap_or(Severity::Low);
                let better = match &fallback_pick {
                    None => true,
                    Some((_, _, current)) => {
                        candidate_severity < current.max_severity().unwrap_or(Severity::High)
                    }
                };
                if better {
                    fallback_pick = Some((day, period, evaluation));
                }
            }

            let Some((day, period, evaluation)) = clean_pick.or(fallback_pick) else {
                break;
            };

            assign_tolerant(grid, day, period, &mut candidates[candidate_index], subject, ctx, &evaluation);
        }
    }

    TolerantRunResult { interrupted }
}

fn is_cancelled(options: &SolveOptions) -> bool {
    options
        .cancel
        .as_ref()
        .map(|c| c.load(std::sync::atomic::Ordering::Relaxed))
        .unwrap_or(false)
}

fn is_past_deadline(options: &SolveOptions) -> bool {
    options.deadline.map(|d| Instant::now() >= d).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Day, GradeClasses, SchoolSettings, SubjectId, TeacherId, TimetableInput, Teacher, Subject, WeeklyHours};
    use std::collections::{HashMap, HashSet};

    fn settings(sections: Vec<&str>, daily_periods: u8) -> SchoolSettings {
        SchoolSettings {
            classes_per_grade: vec![GradeClasses {
                grade: 1,
                sections: sections.into_iter().map(String::from).collect(),
            }],
            daily_periods,
            saturday_periods: 0,
        }
    }

    fn teacher(id: &str) -> Teacher {
        Teacher {
            id: TeacherId(id.to_string()),
            name: id.to_string(),
            subjects: vec![],
            grades: HashSet::from([1]),
            assignment_restrictions: vec![],
        }
    }

    fn subject(hours: u32) -> Subject {
        Subject {
            id: SubjectId("math".to_string()),
            name: "Math".to_string(),
            grades: vec![1],
            weekly_hours: WeeklyHours(HashMap::from([(1u8, hours)])),
            requires_special_classroom: false,
            classroom_type: None,
        }
    }

    #[test]
    fn s1_minimal_feasible_assigns_every_hour() {
        let settings = settings(vec!["A"], 2);
        let mut grid = Timetable::new(&settings).unwrap();
        let t1 = teacher("t1");
        let subj = subject(2);
        let input = TimetableInput {
            settings: settings.clone(),
            teachers: vec![t1.clone()],
            subjects: vec![subj],
            classrooms: vec![],
        };
        let ctx = SolveContext::new(&input);
        let pipeline = CheckerPipeline::builtin();
        let options = SolveOptions::default();
        let mut candidates = vec![Candidate::new(t1.id.clone(), SubjectId("math".to_string()), 1, "A".to_string(), 2)];

        let result = solve_strict(&mut grid, &mut candidates, &pipeline, &ctx, &options);
        assert!(result.complete);
        assert_eq!(grid.assigned_slots(), 2);
        assert_eq!(candidates[0].assigned_hours, 2);
    }

    #[test]
    fn s2_teacher_conflict_forced_strict_leaves_one_unassigned() {
        let settings = settings(vec!["A", "B"], 1);
        let mut grid = Timetable::new(&settings).unwrap();
        let t1 = teacher("t1");
        let subj = subject(1);
        let input = TimetableInput {
            settings: settings.clone(),
            teachers: vec![t1.clone()],
            subjects: vec![subj],
            classrooms: vec![],
        };
        let ctx = SolveContext::new(&input);
        let pipeline = CheckerPipeline::builtin();
        let options = SolveOptions::default();
        let mut candidates = vec![
            Candidate::new(t1.id.clone(), SubjectId("math".to_string()), 1, "A".to_string(), 1),
            Candidate::new(t1.id.clone(), SubjectId("math".to_string()), 1, "B".to_string(), 1),
        ];

        let result = solve_strict(&mut grid, &mut candidates, &pipeline, &ctx, &options);
        assert!(!result.complete);
        assert_eq!(grid.assigned_slots(), 1);
    }

    #[test]
    fn s2_teacher_conflict_forced_tolerant_assigns_both_with_a_violation() {
        let settings = settings(vec!["A", "B"], 1);
        let mut grid = Timetable::new(&settings).unwrap();
        let t1 = teacher("t1");
        let subj = subject(1);
        let input = TimetableInput {
            settings: settings.clone(),
            teachers: vec![t1.clone()],
            subjects: vec![subj],
            classrooms: vec![],
        };
        let ctx = SolveContext::new(&input);
        let pipeline = CheckerPipeline::builtin();
        let options = SolveOptions::default();
        let mut candidates = vec![
            Candidate::new(t1.id.clone(), SubjectId("math".to_string()), 1, "A".to_string(), 1),
            Candidate::new(t1.id.clone(), SubjectId("math".to_string()), 1, "B".to_string(), 1),
        ];

        solve_tolerant(&mut grid, &mut candidates, &pipeline, &ctx, &options);
        assert_eq!(grid.assigned_slots(), 2);
        let violated = grid.iter_all().filter(|s| s.has_violation).count();
        assert_eq!(violated, 1);
    }

    #[test]
    fn s3_mandatory_restriction_confines_one_hour_to_its_window() {
        let settings = settings(vec!["A"], 3);
        let mut grid = Timetable::new(&settings).unwrap();
        let mut t1 = teacher("t1");
        t1.assignment_restrictions.push(crate::types::AssignmentRestriction {
            restricted_day: Day::Mon,
            restricted_periods: HashSet::from([1]),
            restriction_level: crate::types::RestrictionLevel::Mandatory,
            reason: None,
            display_order: 0,
        });
        let subj = subject(2);
        let input = TimetableInput {
            settings: settings.clone(),
            teachers: vec![t1.clone()],
            subjects: vec![subj],
            classrooms: vec![],
        };
        let ctx = SolveContext::new(&input);
        let pipeline = CheckerPipeline::builtin();
        let options = SolveOptions::default();
        let mut candidates = vec![Candidate::new(t1.id.clone(), SubjectId("math".to_string()), 1, "A".to_string(), 2)];

        let result = solve_strict(&mut grid, &mut candidates, &pipeline, &ctx, &options);
        assert!(result.complete);
        assert!(grid.slot(1, "A", Day::Mon, 1).unwrap().teacher.is_some());
        assert!(grid.slot(1, "A", Day::Mon, 2).unwrap().teacher.is_none());
        assert!(grid.slot(1, "A", Day::Mon, 3).unwrap().teacher.is_none());
    }
}
