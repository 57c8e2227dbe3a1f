use crate::error::{Result, TimetableError};
use crate::types::{Classroom, SchoolSettings, Subject, Teacher, TimetableInput};
use std::fs;
use std::path::Path;

/// Loads all four input files plus an optional `config.toml` override from
/// a directory, in the layout the `demo`/`solve` CLI subcommands expect:
/// `settings.json`, `teachers.json`, `subjects.json`, `classrooms.json`.
pub fn load_input_from_dir(dir: &Path) -> Result<TimetableInput> {
    let settings = load_settings(&dir.join("settings.json"))?;
    let teachers = load_teachers(&dir.join("teachers.json"))?;
    let subjects = load_subjects(&dir.join("subjects.json"))?;
    let classrooms = load_classrooms(&dir.join("classrooms.json"))?;
    apply_config_overrides(&dir.join("config.toml"), settings, teachers, subjects, classrooms)
}

pub fn load_settings(path: &Path) -> Result<SchoolSettings> {
    load_json_file(path)
}

pub fn load_teachers(path: &Path) -> Result<Vec<Teacher>> {
    load_json_file(path)
}

pub fn load_subjects(path: &Path) -> Result<Vec<Subject>> {
    load_json_file(path)
}

pub fn load_classrooms(path: &Path) -> Result<Vec<Classroom>> {
    load_json_file(path)
}

/// `config.toml` only ever tweaks `saturday_periods` today; absence is not
/// an error, a malformed file is.
fn apply_config_overrides(
    path: &Path,
    mut settings: SchoolSettings,
    teachers: Vec<Teacher>,
    subjects: Vec<Subject>,
    classrooms: Vec<Classroom>,
) -> Result<TimetableInput> {
    if path.exists() {
        let content = fs::read_to_string(path).map_err(|e| TimetableError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let overrides: ConfigOverrides = toml::from_str(&content).map_err(|e| TimetableError::JsonParse {
            file: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(saturday_periods) = overrides.saturday_periods {
            settings.saturday_periods = saturday_periods;
        }
    }

    Ok(TimetableInput {
        settings,
        teachers,
        subjects,
        classrooms,
    })
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigOverrides {
    saturday_periods: Option<u8>,
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| TimetableError::FileRead {
        path: path_str.clone(),
        source: e,
    })?;

    serde_json::from_str(&content)
        .map_err(|e| TimetableError::JsonParse {
            file: path_str,
            message: e.to_string(),
        })
        .map_err(Into::into)
}
