use thiserror::Error;

/// Domain-specific errors for the timetable engine.
///
/// Only the five boundary errors documented in the design notes — this
/// enum's non-`Internal` variants plus cancellation — ever escape the
/// Solver to a caller; everything else is an ordinary branch failure
/// inside the recursion.
#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("invalid settings: {message}")]
    InvalidSettings { message: String },

    #[error("invalid grade {grade}: {message}")]
    InvalidGrade { grade: u8, message: String },

    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON in '{file}': {message}")]
    JsonParse { file: String, message: String },

    #[error("teacher '{teacher}' references unresolvable subject '{subject_ref}'")]
    UnknownReference { teacher: String, subject_ref: String },

    #[error("no suitable classroom of type '{classroom_type}' available for {context}")]
    NoSuitableClassroom { classroom_type: String, context: String },

    #[error("solve cancelled")]
    Cancelled,

    #[error("solve exceeded its deadline")]
    DeadlineExceeded,

    #[error("internal invariant violated: {0}")]
    InternalInvariantError(String),
}

/// Use `anyhow::Result` at application boundaries: keep `thiserror`
/// variants precise internally while letting callers compose context
/// freely with `.context(...)`.
pub type Result<T> = anyhow::Result<T>;
