use crate::error::{Result, TimetableError};
use crate::scheduler::{SolveOutcome, SolveStatistics};
use crate::types::{ClassroomId, SubjectId, TeacherId, Timetable};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One cell of the day-major persisted representation. `None` fields mean
/// the slot is empty or, for `classroom`, that the class used its home
/// room.
#[derive(Debug, Clone, Serialize)]
pub struct PersistedCell {
    pub grade: u8,
    pub section: String,
    pub subject: Option<SubjectId>,
    pub teacher: Option<TeacherId>,
    pub classroom: Option<ClassroomId>,
}

/// The grid reshaped into `{day -> {period -> [cells]}}`, the wire layout
/// callers that persist a solve are expected to produce. Multiple cells
/// can share a `(day, period)` key — one per (grade, section) in session
/// at that time.
pub type DayMajorSchedule = BTreeMap<String, BTreeMap<u8, Vec<PersistedCell>>>;

pub fn to_day_major(grid: &Timetable) -> DayMajorSchedule {
    let mut out: DayMajorSchedule = BTreeMap::new();
    for slot in grid.iter_all() {
        let day_entry = out.entry(slot.day.name().to_string()).or_default();
        let period_entry = day_entry.entry(slot.period).or_default();
        period_entry.push(PersistedCell {
            grade: slot.class_grade,
            section: slot.class_section.clone(),
            subject: slot.subject.clone(),
            teacher: slot.teacher.clone(),
            classroom: slot.classroom.clone(),
        });
    }
    out
}

/// The full persisted record a caller would write to storage: run
/// identity, the day-major schedule, and the statistics record. The core
/// itself never writes this anywhere on its own — this is only the shape
/// the CLI's `solve`/`report` subcommands serialize.
#[derive(Debug, Clone, Serialize)]
pub struct PersistedRun {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub schedule: DayMajorSchedule,
    pub statistics: PersistedStatistics,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersistedStatistics {
    pub total_slots: usize,
    pub assigned_slots: usize,
    pub unassigned_slots: usize,
    pub constraint_violations: usize,
    pub backtrack_count: u64,
    pub generation_time_ms: u128,
    pub interrupted: bool,
    pub assignment_rate: f64,
}

impl From<&SolveStatistics> for PersistedStatistics {
    fn from(stats: &SolveStatistics) -> Self {
        Self {
            total_slots: stats.total_slots,
            assigned_slots: stats.assigned_slots,
            unassigned_slots: stats.unassigned_slots,
            constraint_violations: stats.constraint_violations,
            backtrack_count: stats.backtrack_count,
            generation_time_ms: stats.generation_time.as_millis(),
            interrupted: stats.interrupted,
            assignment_rate: stats.assignment_rate(),
        }
    }
}

pub fn build_persisted_run(outcome: &SolveOutcome, run_id: String, generated_at: DateTime<Utc>) -> PersistedRun {
    PersistedRun {
        run_id,
        generated_at,
        schedule: to_day_major(&outcome.timetable),
        statistics: PersistedStatistics::from(&outcome.statistics),
    }
}

/// JSON report of the full persisted run.
pub fn generate_json_report(run: &PersistedRun) -> Result<String> {
    Ok(serde_json::to_string_pretty(run)?)
}

/// Compact summary, for `--quiet` CLI output.
#[derive(Debug, Serialize)]
pub struct JsonSummary {
    pub total_slots: usize,
    pub assigned_slots: usize,
    pub unassigned_slots: usize,
    pub constraint_violations: usize,
    pub assignment_rate: f64,
    pub generation_time_ms: u128,
}

pub fn generate_json_summary(statistics: &SolveStatistics) -> Result<String> {
    let summary = JsonSummary {
        total_slots: statistics.total_slots,
        assigned_slots: statistics.assigned_slots,
        unassigned_slots: statistics.unassigned_slots,
        constraint_violations: statistics.constraint_violations,
        assignment_rate: statistics.assignment_rate(),
        generation_time_ms: statistics.generation_time.as_millis(),
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

/// Writes the grid's own serde representation, distinct from the
/// day-major view `generate_json_report` produces. The day-major shape is
/// what external callers persist; this raw form is what the CLI itself
/// round-trips through for `validate`/`report` against a prior `solve` run.
pub fn write_grid(grid: &Timetable, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(grid)?;
    std::fs::write(path, json).map_err(|e| {
        TimetableError::FileRead {
            path: path.display().to_string(),
            source: e,
        }
        .into()
    })
}

pub fn read_grid(path: &Path) -> Result<Timetable> {
    let content = std::fs::read_to_string(path).map_err(|e| TimetableError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content)
        .map_err(|e| {
            TimetableError::JsonParse {
                file: path.display().to_string(),
                message: e.to_string(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Day as DayType, GradeClasses, SchoolSettings};

    #[test]
    fn day_major_groups_cells_by_day_and_period() {
        let settings = SchoolSettings {
            classes_per_grade: vec![GradeClasses {
                grade: 1,
                sections: vec!["A".to_string(), "B".to_string()],
            }],
            daily_periods: 1,
            saturday_periods: 0,
        };
        let mut grid = Timetable::new(&settings).unwrap();
        grid.slot_mut(1, "A", DayType::Mon, 1).unwrap().subject = Some(SubjectId("math".to_string()));

        let day_major = to_day_major(&grid);
        let mon = &day_major["MON"];
        assert_eq!(mon[&1].len(), 2);
    }
}
