use super::{Classroom, SchoolSettings, Subject, Teacher};

/// All input data bundled together for one solve.
#[derive(Debug, Clone)]
pub struct TimetableInput {
    pub settings: SchoolSettings,
    pub teachers: Vec<Teacher>,
    pub subjects: Vec<Subject>,
    pub classrooms: Vec<Classroom>,
}
