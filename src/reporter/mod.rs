mod json;
mod markdown;
mod text;

pub use json::*;
pub use markdown::*;
pub use text::*;

use crate::error::Result;
use crate::scheduler::{SolveOutcome, SolveStatistics};
use crate::types::{TeacherId, Timetable, TimetableInput};
use crate::validator::ValidationReport;
use chrono::Utc;
use std::fs;
use std::path::Path;

/// Output format for a `generate_reports` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Text,
}

/// Writes every requested report format to `output_dir`, creating it if
/// necessary. The JSON report is the canonical persisted-run shape;
/// markdown and text are display-only renderings of the same grid.
pub fn generate_reports(
    outcome: &SolveOutcome,
    input: &TimetableInput,
    validation: &ValidationReport,
    output_dir: &Path,
    formats: &[OutputFormat],
) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    for format in formats {
        match format {
            OutputFormat::Json => {
                let run_id = format!("run-{}", Utc::now().timestamp_millis());
                let run = build_persisted_run(outcome, run_id, Utc::now());
                let json = generate_json_report(&run)?;
                fs::write(output_dir.join("timetable.json"), json)?;
            }
            OutputFormat::Markdown => {
                let md = generate_markdown_report(&outcome.timetable, input, &outcome.statistics, validation);
                fs::write(output_dir.join("timetable.md"), md)?;
            }
            OutputFormat::Text => {
                let txt = generate_text_report(&outcome.timetable, input, &outcome.statistics, validation);
                fs::write(output_dir.join("timetable.txt"), txt)?;
            }
        }
    }

    Ok(())
}

/// Renders one teacher's week: every slot across every grade/section they
/// were placed into, grouped by day. Returns `None` if the teacher id is
/// unknown.
pub fn generate_teacher_schedule(grid: &Timetable, input: &TimetableInput, teacher_id: &TeacherId) -> Option<String> {
    let teacher = input.teachers.iter().find(|t| &t.id == teacher_id)?;

    let mut lines = vec![format!("# Schedule for {} ({})", teacher.name, teacher.id), String::new()];

    let mut placements: Vec<_> = grid.iter_all().filter(|s| s.teacher.as_ref() == Some(teacher_id)).collect();
    placements.sort_by_key(|s| (s.day.index(), s.period));

    if placements.is_empty() {
        lines.push("No periods assigned.".to_string());
        return Some(lines.join("\n"));
    }

    lines.push(format!("## {} periods this week\n", placements.len()));
    for slot in placements {
        let subject_name = slot
            .subject
            .as_ref()
            .and_then(|id| input.subjects.iter().find(|s| &s.id == id))
            .map(|s| s.name.as_str())
            .unwrap_or("Unknown");
        lines.push(format!(
            "- **{} P{}**: {} — Grade {} {}",
            slot.day, slot.period, subject_name, slot.class_grade, slot.class_section
        ));
    }

    Some(lines.join("\n"))
}

/// Renders one (grade, section)'s weekly timetable as a flat list, similar
/// in spirit to `generate_teacher_schedule` but keyed by class instead of
/// by teacher. Returns `None` if the grade/section pair doesn't exist.
pub fn generate_class_schedule(grid: &Timetable, input: &TimetableInput, grade: u8, section: &str) -> Option<String> {
    input.settings.sections_for_grade(grade)?.iter().find(|s| s.as_str() == section)?;

    let slots = grid.slots_for(grade, section);
    let mut lines = vec![format!("# Schedule for Grade {} — {}", grade, section), String::new()];

    for slot in slots.iter().filter(|s| !s.is_empty()) {
        let subject_name = slot
            .subject
            .as_ref()
            .and_then(|id| input.subjects.iter().find(|s| &s.id == id))
            .map(|s| s.name.as_str())
            .unwrap_or("Unknown");
        let teacher_name = slot
            .teacher
            .as_ref()
            .and_then(|id| input.teachers.iter().find(|t| &t.id == id))
            .map(|t| t.name.as_str())
            .unwrap_or("TBD");
        lines.push(format!("- **{} P{}**: {} ({})", slot.day, slot.period, subject_name, teacher_name));
    }

    Some(lines.join("\n"))
}

/// Prints the short terminal summary shared by `demo` and `solve`.
pub fn print_run_summary(statistics: &SolveStatistics, validation: &ValidationReport) {
    print_summary(statistics, validation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{solve, SolveMode, SolveOptions};
    use crate::types::{GradeClasses, SchoolSettings, Subject, SubjectId, SubjectRef, Teacher, WeeklyHours};
    use crate::validator::validate_timetable;
    use std::collections::{HashMap, HashSet};
    use tempfile::tempdir;

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
            name: "Ms. Lee".to_string(),
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
    fn generates_every_report_format_to_disk() {
        let input = basic_input();
        let outcome = solve(&input, SolveMode::Strict, SolveOptions::default()).unwrap();
        let validation = validate_timetable(&outcome.timetable, &input, &[]);
        let dir = tempdir().unwrap();

        generate_reports(
            &outcome,
            &input,
            &validation,
            dir.path(),
            &[OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text],
        )
        .unwrap();

        assert!(dir.path().join("timetable.json").exists());
        assert!(dir.path().join("timetable.md").exists());
        assert!(dir.path().join("timetable.txt").exists());
    }

    #[test]
    fn teacher_schedule_lists_every_placed_period() {
        let input = basic_input();
        let outcome = solve(&input, SolveMode::Strict, SolveOptions::default()).unwrap();
        let report = generate_teacher_schedule(&outcome.timetable, &input, &TeacherId("t1".to_string())).unwrap();
        assert!(report.contains("Ms. Lee"));
        assert!(report.contains("Math"));
    }

    #[test]
    fn unknown_teacher_id_yields_none() {
        let input = basic_input();
        let outcome = solve(&input, SolveMode::Strict, SolveOptions::default()).unwrap();
        assert!(generate_teacher_schedule(&outcome.timetable, &input, &TeacherId("ghost".to_string())).is_none());
    }
}
