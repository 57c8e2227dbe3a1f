mod json;
mod validation;

pub use json::{load_classrooms, load_input_from_dir, load_settings, load_subjects, load_teachers};
pub use validation::{validate_input, ValidationResult};
