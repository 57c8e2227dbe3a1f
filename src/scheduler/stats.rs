use crate::types::Timetable;
use std::time::Duration;

/// Phase 4.H: counts and timings summarizing one solve.
#[derive(Debug, Clone, Default)]
pub struct SolveStatistics {
    pub total_slots: usize,
    pub assigned_slots: usize,
    pub unassigned_slots: usize,
    pub constraint_violations: usize,
    pub backtrack_count: u64,
    pub generation_time: Duration,
    pub interrupted: bool,
    pub quality: Option<QualityMetrics>,
}

impl SolveStatistics {
    pub fn assignment_rate(&self) -> f64 {
        self.assigned_slots as f64 / self.total_slots.max(1) as f64
    }
}

/// Optional soft-quality scoring over the produced grid; not required for
/// any hard invariant, purely descriptive.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityMetrics {
    pub teacher_utilization_rate: f64,
    pub subject_distribution_balance: f64,
    pub load_balance_score: f64,
}

/// Derives the slot counts and violation count from a produced grid. The
/// caller fills in `backtrack_count`, `generation_time`, and `interrupted`,
/// which only the Solver itself can observe.
pub fn collect_slot_statistics(grid: &Timetable) -> (usize, usize, usize, usize) {
    let total_slots = grid.total_slots();
    let assigned_slots = grid.assigned_slots();
    let unassigned_slots = total_slots - assigned_slots;
    let constraint_violations = grid.iter_all().map(|s| s.violations.len()).sum();
    (total_slots, assigned_slots, unassigned_slots, constraint_violations)
}
