//! Constraint-driven school timetable generator.
//!
//! The crate builds a weekly timetable assigning (teacher, subject,
//! classroom) triples to the (grade, class-section, day, period) slots of
//! every class, subject to a pipeline of hard and soft constraints.
//!
//! # Algorithm overview
//!
//! A solve runs in four phases:
//! 1. **Grid initialization**: build the empty slot grid from school settings.
//! 2. **Candidate generation**: enumerate every (teacher, subject, grade,
//!    section) assignment task with its required weekly hour count.
//! 3. **Assignment**: fill the grid in either `Strict` (backtracking) or
//!    `Tolerant` (greedy, constraint-relaxing) mode.
//! 4. **Statistics**: summarize the run.
//!
//! # Example
//!
//! ```no_run
//! use timetable_engine::parser::load_input_from_dir;
//! use timetable_engine::scheduler::{solve, SolveMode, SolveOptions};
//! use std::path::Path;
//!
//! let input = load_input_from_dir(Path::new("./data/demo")).unwrap();
//! let outcome = solve(&input, SolveMode::Strict, SolveOptions::default()).unwrap();
//! println!("assigned {} slots", outcome.statistics.assigned_slots);
//! ```

pub mod error;
pub mod parser;
pub mod reporter;
pub mod scheduler;
pub mod types;
pub mod validator;

pub use error::{Result, TimetableError};
