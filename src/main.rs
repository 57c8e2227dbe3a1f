use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};
use timetable_engine::parser::{load_input_from_dir, validate_input};
use timetable_engine::reporter::{
    generate_class_schedule, generate_json_summary, generate_reports, generate_teacher_schedule, print_summary, read_grid,
    write_grid, OutputFormat,
};
use timetable_engine::scheduler::{generate_candidates, solve, SolveMode, SolveOptions};
use timetable_engine::types::TeacherId;
use timetable_engine::validator::validate_timetable;

#[derive(Parser)]
#[command(name = "timetable-engine")]
#[command(about = "Constraint-driven school timetable generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a solve over bundled sample data
    Demo {
        /// STRICT (backtracking) or TOLERANT (greedy, constraint-relaxing)
        #[arg(short, long, default_value = "strict")]
        mode: String,
    },

    /// Generate a timetable from input data
    Solve {
        /// Directory containing settings.json, teachers.json, subjects.json, classrooms.json
        #[arg(short, long)]
        data: PathBuf,

        /// Output directory for report files
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// STRICT (backtracking) or TOLERANT (greedy, constraint-relaxing)
        #[arg(short, long, default_value = "strict")]
        mode: String,

        /// Output format(s): json, markdown, text, or all
        #[arg(short, long, default_value = "all")]
        format: String,

        /// Cap on the strict-mode backtrack counter; unbounded if absent
        #[arg(long)]
        backtrack_limit: Option<u64>,

        /// Wall-clock deadline in seconds from start; unbounded if absent
        #[arg(long)]
        deadline_secs: Option<u64>,

        /// Suppress progress output, print a JSON summary only
        #[arg(short, long)]
        quiet: bool,
    },

    /// Re-validate a previously solved grid against its input data
    Validate {
        /// Directory containing the original input data
        #[arg(short, long)]
        data: PathBuf,

        /// Path to a grid.json produced by `solve`'s JSON report
        #[arg(short, long)]
        grid: PathBuf,

        /// Show every violation, not just the pass/fail summary
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print a teacher's or class's schedule from a previously solved grid
    Report {
        /// Directory containing the original input data
        #[arg(short, long)]
        data: PathBuf,

        /// Path to a grid.json produced by `solve`'s JSON report
        #[arg(short, long)]
        grid: PathBuf,

        /// Print this teacher's weekly schedule
        #[arg(long)]
        teacher: Option<String>,

        /// Print this class's weekly schedule, as "grade:section" (e.g. "1:A")
        #[arg(long)]
        class: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::init();

    match cli.command {
        Commands::Demo { mode } => run_demo(&mode),
        Commands::Solve {
            data,
            output,
            mode,
            format,
            backtrack_limit,
            deadline_secs,
            quiet,
        } => run_solve(&data, &output, &mode, &format, backtrack_limit, deadline_secs, quiet),
        Commands::Validate { data, grid, verbose } => run_validate(&data, &grid, verbose),
        Commands::Report { data, grid, teacher, class } => run_report(&data, &grid, teacher, class),
    }
}

fn parse_mode(mode: &str) -> Result<SolveMode> {
    match mode.to_lowercase().as_str() {
        "strict" => Ok(SolveMode::Strict),
        "tolerant" => Ok(SolveMode::Tolerant),
        other => anyhow::bail!("unknown mode '{}', expected 'strict' or 'tolerant'", other),
    }
}

fn parse_formats(format: &str) -> Vec<OutputFormat> {
    if format.eq_ignore_ascii_case("all") {
        return vec![OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text];
    }
    format
        .split(',')
        .filter_map(|f| match f.trim().to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "text" | "txt" => Some(OutputFormat::Text),
            _ => None,
        })
        .collect()
}

fn run_demo(mode: &str) -> Result<()> {
    println!("{}", "Timetable Engine Demo".bold().cyan());
    println!("{}", "─".repeat(40));

    let demo_path = PathBuf::from("demos/basic");
    let output_path = PathBuf::from("output/demo");

    if !demo_path.join("settings.json").exists() {
        println!("{}", "Demo data not found. Creating sample data...".yellow());
        create_demo_data(&demo_path)?;
    }

    println!("Loading demo data from: {}", demo_path.display());
    run_solve(&demo_path, &output_path, mode, "all", None, None, false)
}

fn run_solve(
    data: &Path,
    output: &Path,
    mode: &str,
    format: &str,
    backtrack_limit: Option<u64>,
    deadline_secs: Option<u64>,
    quiet: bool,
) -> Result<()> {
    let input = load_input_from_dir(data).context("failed to load input data")?;
    let solve_mode = parse_mode(mode)?;

    if !quiet {
        let validation_result = validate_input(&input);
        for warning in &validation_result.warnings {
            println!("{} {}", "Warning:".yellow(), warning);
        }
        if !validation_result.is_valid() {
            for error in &validation_result.errors {
                println!("{} {}", "Error:".red(), error);
            }
            anyhow::bail!("input data failed pre-solve validation");
        }
        println!(
            "Loaded {} teachers, {} subjects, {} classrooms",
            input.teachers.len(),
            input.subjects.len(),
            input.classrooms.len()
        );
        println!();
    }

    let progress = (!quiet).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}").unwrap());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let options = SolveOptions {
        backtrack_limit,
        deadline: deadline_secs.map(|secs| Instant::now() + Duration::from_secs(secs)),
        cancel: Some(Arc::new(AtomicBool::new(false))),
        extra_checkers: Vec::new(),
    };

    if let Some(pb) = &progress {
        pb.set_message(format!("solving ({:?})...", solve_mode));
    }
    let outcome = solve(&input, solve_mode, options).context("solve failed")?;

    if let Some(pb) = &progress {
        pb.set_message("validating...".to_string());
    }
    let candidates = generate_candidates(&input.settings, &input.teachers, &input.subjects);
    let validation = validate_timetable(&outcome.timetable, &input, &candidates);

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    std::fs::create_dir_all(output)?;
    write_grid(&outcome.timetable, &output.join("grid.json"))?;
    generate_reports(&outcome, &input, &validation, output, &parse_formats(format))?;

    if quiet {
        println!("{}", generate_json_summary(&outcome.statistics)?);
    } else {
        print_summary(&outcome.statistics, &validation);
        println!("Reports written to: {}", output.display().to_string().green());
    }

    Ok(())
}

fn run_validate(data: &Path, grid_path: &Path, verbose: bool) -> Result<()> {
    let input = load_input_from_dir(data).context("failed to load input data")?;
    let grid = read_grid(grid_path).context("failed to load grid")?;
    let candidates = generate_candidates(&input.settings, &input.teachers, &input.subjects);
    let report = validate_timetable(&grid, &input, &candidates);

    if report.is_valid {
        println!("{}", "✓ Timetable is valid".green().bold());
    } else {
        println!("{}", "✗ Timetable has violations".red().bold());
        for violation in report.errors() {
            println!("  - {}: {}", violation.constraint.red(), violation.message);
        }
    }

    if verbose {
        println!("\n{}", "All findings:".bold());
        for violation in &report.violations {
            println!("  [{:?}] {}: {}", violation.severity, violation.constraint, violation.message);
        }
    }

    Ok(())
}

fn run_report(data: &Path, grid_path: &Path, teacher: Option<String>, class: Option<String>) -> Result<()> {
    let input = load_input_from_dir(data).context("failed to load input data")?;
    let grid = read_grid(grid_path).context("failed to load grid")?;

    if let Some(teacher_id) = teacher {
        match generate_teacher_schedule(&grid, &input, &TeacherId(teacher_id)) {
            Some(report) => println!("{}", report),
            None => println!("Teacher not found"),
        }
    } else if let Some(spec) = class {
        let Some((grade_str, section)) = spec.split_once(':') else {
            anyhow::bail!("--class expects \"grade:section\", e.g. \"1:A\"");
        };
        let grade: u8 = grade_str.parse().context("grade must be a number")?;
        match generate_class_schedule(&grid, &input, grade, section) {
            Some(report) => println!("{}", report),
            None => println!("Class not found"),
        }
    } else {
        let candidates = generate_candidates(&input.settings, &input.teachers, &input.subjects);
        let validation = validate_timetable(&grid, &input, &candidates);
        let total = grid.total_slots();
        let assigned = grid.assigned_slots();
        println!("Total slots: {total}, assigned: {assigned}, unassigned: {}", total - assigned);
        if validation.is_valid {
            println!("{}", "Validation: PASSED".green());
        } else {
            println!("{}", "Validation: FAILED".red());
        }
    }

    Ok(())
}

fn create_demo_data(path: &PathBuf) -> Result<()> {
    std::fs::create_dir_all(path)?;

    let settings = serde_json::json!({
        "classes_per_grade": [
            {"grade": 1, "sections": ["A"]},
            {"grade": 2, "sections": ["A"]},
            {"grade": 3, "sections": ["A"]}
        ],
        "daily_periods": 6,
        "saturday_periods": 0
    });
    std::fs::write(path.join("settings.json"), serde_json::to_string_pretty(&settings)?)?;

    let teachers = serde_json::json!([
        {
            "id": "t-math-1",
            "name": "Ms. Alvarez",
            "subjects": ["math"],
            "grades": [1],
            "assignment_restrictions": []
        },
        {
            "id": "t-math-all",
            "name": "Mr. Boone",
            "subjects": ["math"],
            "grades": [1, 2, 3],
            "assignment_restrictions": [
                {
                    "restricted_day": "Mon",
                    "restricted_periods": [1, 2, 3, 4, 5, 6],
                    "restriction_level": "PREFERRED",
                    "reason": "prefers morning-heavy Monday load",
                    "display_order": 0
                }
            ]
        },
        {
            "id": "t-sci",
            "name": "Dr. Castillo",
            "subjects": ["science"],
            "grades": [1, 2, 3],
            "assignment_restrictions": []
        }
    ]);
    std::fs::write(path.join("teachers.json"), serde_json::to_string_pretty(&teachers)?)?;

    let subjects = serde_json::json!([
        {
            "id": "math",
            "name": "Mathematics",
            "grades": [1, 2, 3],
            "weekly_hours": {"1": 4, "2": 4, "3": 4},
            "requires_special_classroom": false
        },
        {
            "id": "science",
            "name": "Science",
            "grades": [1, 2, 3],
            "weekly_hours": {"1": 2, "2": 2, "3": 2},
            "requires_special_classroom": true,
            "classroom_type": "LAB"
        }
    ]);
    std::fs::write(path.join("subjects.json"), serde_json::to_string_pretty(&subjects)?)?;

    let classrooms = serde_json::json!([
        {"id": "lab-1", "name": "Science Lab 1", "type": "LAB", "count": 1}
    ]);
    std::fs::write(path.join("classrooms.json"), serde_json::to_string_pretty(&classrooms)?)?;

    println!("{}", "Demo data created successfully!".green());
    Ok(())
}
