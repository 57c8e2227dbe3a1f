use crate::scheduler::SolveStatistics;
use crate::types::{Day, Timetable, TimetableInput, ALL_DAYS};
use crate::validator::ValidationReport;

/// Generate a markdown report of a solve: a summary table, a validation
/// section, and one timetable table per `(grade, section)`.
pub fn generate_markdown_report(
    grid: &Timetable,
    input: &TimetableInput,
    statistics: &SolveStatistics,
    validation: &ValidationReport,
) -> String {
    let mut lines = vec!["# Timetable Report".to_string(), String::new()];

    lines.push("## Summary\n".to_string());
    lines.push("| Metric | Value |".to_string());
    lines.push("|--------|-------|".to_string());
    lines.push(format!("| Total slots | {} |", statistics.total_slots));
    lines.push(format!("| Assigned slots | {} |", statistics.assigned_slots));
    lines.push(format!("| Unassigned slots | {} |", statistics.unassigned_slots));
    lines.push(format!("| Assignment rate | {:.1}% |", statistics.assignment_rate() * 100.0));
    lines.push(format!("| Constraint violations | {} |", statistics.constraint_violations));
    lines.push(format!("| Backtrack count | {} |", statistics.backtrack_count));
    lines.push(format!("| Generation time | {}ms |", statistics.generation_time.as_millis()));
    lines.push(String::new());

    if validation.is_valid {
        lines.push("## Validation: PASSED\n".to_string());
    } else {
        lines.push("## Validation: FAILED\n".to_string());
        for violation in validation.errors() {
            lines.push(format!("- **{}**: {}", violation.constraint, violation.message));
        }
        lines.push(String::new());
    }

    let period_width = max_period(input);

    for grade in input.settings.grades() {
        let Some(sections) = input.settings.sections_for_grade(grade) else {
            continue;
        };
        for section in sections {
            lines.push(format!("## Grade {} — {}\n", grade, section));
            let header: Vec<String> = (1..=period_width).map(|p| format!("P{}", p)).collect();
            lines.push(format!("| Day | {} |", header.join(" | ")));
            lines.push(format!("|-----|{}", "---|".repeat(period_width as usize)));

            for day in ALL_DAYS.iter().filter(|d| input.settings.days().contains(d)) {
                let mut cells = Vec::new();
                for period in 1..=input.settings.periods_on(*day) {
                    cells.push(cell_text(grid, input, grade, section, *day, period));
                }
                for _ in input.settings.periods_on(*day)..period_width {
                    cells.push("—".to_string());
                }
                lines.push(format!("| {} | {} |", day, cells.join(" | ")));
            }
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

fn max_period(input: &TimetableInput) -> u8 {
    input.settings.days().iter().map(|d| input.settings.periods_on(*d)).max().unwrap_or(0)
}

fn cell_text(grid: &Timetable, input: &TimetableInput, grade: u8, section: &str, day: Day, period: u8) -> String {
    let Some(slot) = grid.slot(grade, section, day, period) else {
        return "—".to_string();
    };
    if slot.is_empty() {
        return "—".to_string();
    }

    let subject_name = slot
        .subject
        .as_ref()
        .and_then(|id| input.subjects.iter().find(|s| &s.id == id))
        .map(|s| s.name.as_str())
        .unwrap_or("?");
    let teacher_name = slot
        .teacher
        .as_ref()
        .and_then(|id| input.teachers.iter().find(|t| &t.id == id))
        .map(|t| t.name.as_str())
        .unwrap_or("?");

    let marker = if slot.has_violation { " ⚠" } else { "" };
    format!("{} ({}){}", subject_name, teacher_name, marker)
}
