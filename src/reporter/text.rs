use crate::scheduler::SolveStatistics;
use crate::types::{Severity, Timetable, TimetableInput};
use crate::validator::ValidationReport;
use colored::Colorize;
use std::collections::HashMap;

/// Plain text report (colored for a terminal), mirroring the structure of
/// the markdown report without the table markup.
pub fn generate_text_report(grid: &Timetable, input: &TimetableInput, statistics: &SolveStatistics, validation: &ValidationReport) -> String {
    let mut lines = Vec::new();

    lines.push("═".repeat(60));
    lines.push("               TIMETABLE REPORT".to_string());
    lines.push("═".repeat(60));
    lines.push(String::new());

    lines.push("─".repeat(40));
    lines.push("STATISTICS".to_string());
    lines.push("─".repeat(40));
    lines.push(format!("  Total slots:      {}", statistics.total_slots));
    lines.push(format!("  Assigned slots:   {}", statistics.assigned_slots));
    lines.push(format!("  Unassigned slots: {}", statistics.unassigned_slots));
    lines.push(format!("  Assignment rate:  {:.1}%", statistics.assignment_rate() * 100.0));
    lines.push(format!("  Violations:       {}", statistics.constraint_violations));
    lines.push(format!("  Backtracks:       {}", statistics.backtrack_count));
    lines.push(format!("  Time:             {}ms", statistics.generation_time.as_millis()));
    lines.push(String::new());

    lines.push("─".repeat(40));
    if validation.is_valid {
        lines.push("VALIDATION: PASSED".green().to_string());
    } else {
        lines.push("VALIDATION: FAILED".red().to_string());
        for violation in validation.errors() {
            lines.push(format!("  ! {}: {}", violation.constraint, violation.message));
        }
    }
    lines.push("─".repeat(40));
    lines.push(String::new());

    let teacher_names: HashMap<&str, &str> = input.teachers.iter().map(|t| (t.id.0.as_str(), t.name.as_str())).collect();
    let subject_names: HashMap<&str, &str> = input.subjects.iter().map(|s| (s.id.0.as_str(), s.name.as_str())).collect();

    lines.push("SLOTS BY GRADE/SECTION".to_string());
    lines.push("─".repeat(40));

    for grade in input.settings.grades() {
        let Some(sections) = input.settings.sections_for_grade(grade) else {
            continue;
        };
        for section in sections {
            let slots = grid.slots_for(grade, section);
            let assigned = slots.iter().filter(|s| !s.is_empty()).count();
            lines.push(format!("\n{} ({}/{} slots filled)", format!("Grade {} — {}", grade, section).bold(), assigned, slots.len()));

            for slot in slots.iter().filter(|s| !s.is_empty()) {
                let subject = slot.subject.as_ref().and_then(|id| subject_names.get(id.0.as_str())).unwrap_or(&"?");
                let teacher = slot.teacher.as_ref().and_then(|id| teacher_names.get(id.0.as_str())).unwrap_or(&"?");

                let marker = match slot.violation_severity {
                    Some(Severity::High) => "●".red(),
                    Some(Severity::Medium) => "●".yellow(),
                    Some(Severity::Low) => "●".dimmed(),
                    None => "●".green(),
                };

                lines.push(format!("  {} {} P{} | {} | {}", marker, slot.day, slot.period, subject, teacher));
            }
        }
    }

    lines.push(String::new());
    lines.push("═".repeat(60));
    lines.join("\n")
}

/// Print a quick summary to stdout after a solve.
pub fn print_summary(statistics: &SolveStatistics, validation: &ValidationReport) {
    println!();
    if validation.is_valid {
        println!("{}", "✓ Timetable generated successfully".green().bold());
    } else {
        println!("{}", "✗ Timetable has validation errors".red().bold());
    }
    println!();
    println!("  Total slots:      {}", statistics.total_slots);
    println!("  Assigned slots:   {}", statistics.assigned_slots);
    println!("  Unassigned slots: {}", statistics.unassigned_slots);
    println!("  Assignment rate:  {:.1}%", statistics.assignment_rate() * 100.0);
    println!("  Violations:       {}", statistics.constraint_violations);
    println!("  Time:             {}ms", statistics.generation_time.as_millis());
    println!();
}
