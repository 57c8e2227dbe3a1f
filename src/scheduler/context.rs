use crate::types::{Classroom, Subject, SubjectId, Teacher, TeacherId, TimetableInput};
use std::collections::HashMap;

/// Immutable lookup tables resolving ids to the domain values the grid
/// itself only stores by reference-id. Owned alongside the grid and
/// candidate list for the lifetime of one solve; see the design notes on
/// avoiding ownership cycles between the grid and its domain values.
///
/// `classrooms` keeps input declaration order (a `Vec`, not a `HashMap`) so
/// that room resolution scans candidates in the same order every run —
/// `HashMap` iteration order would make the committed classroom id for a
/// shared `classroom_type` depend on hash randomization instead of input
/// order, breaking solve determinism.
pub struct SolveContext<'a> {
    teachers: HashMap<&'a TeacherId, &'a Teacher>,
    subjects: HashMap<&'a SubjectId, &'a Subject>,
    classrooms: Vec<&'a Classroom>,
}

impl<'a> SolveContext<'a> {
    pub fn new(input: &'a TimetableInput) -> Self {
        Self {
            teachers: input.teachers.iter().map(|t| (&t.id, t)).collect(),
            subjects: input.subjects.iter().map(|s| (&s.id, s)).collect(),
            classrooms: input.classrooms.iter().collect(),
        }
    }

    pub fn teacher(&self, id: &TeacherId) -> Option<&'a Teacher> {
        self.teachers.get(id).copied()
    }

    pub fn subject(&self, id: &SubjectId) -> Option<&'a Subject> {
        self.subjects.get(id).copied()
    }

    pub fn classrooms_of_type<'b>(&'b self, classroom_type: &'b str) -> impl Iterator<Item = &'a Classroom> + 'b {
        self.classrooms.iter().copied().filter(move |c| c.classroom_type == classroom_type)
    }
}
