use crate::types::{Candidate, SchoolSettings, Subject, SubjectRef, Teacher};

/// Phase 4.C: enumerate every (teacher, subject, grade, section) assignment
/// task with a positive required-hours count.
///
/// A teacher's `SubjectRef` is resolved against `subjects` by id first,
/// falling back to a name match (see the design notes on the source's
/// inconsistent id/name comparisons — ids are authoritative here). A ref
/// that resolves to nothing is dropped with a `log::warn!`, mirroring the
/// non-fatal `UnknownReference` path: the generator skips the offending
/// entry rather than failing the whole run.
pub fn generate_candidates(settings: &SchoolSettings, teachers: &[Teacher], subjects: &[Subject]) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for teacher in teachers {
        for subject_ref in &teacher.subjects {
            let subject = match resolve_subject(subject_ref, subjects) {
                Some(subject) => subject,
                None => {
                    log::warn!(
                        "teacher '{}' references unresolvable subject '{}', skipping",
                        teacher.id,
                        subject_ref
                    );
                    continue;
                }
            };

            for grade in settings.grades() {
                if !subject.applies_to_grade(grade) || !teacher.may_teach_grade(grade) {
                    continue;
                }

                let required_hours = subject.weekly_hours_for(grade);
                if required_hours == 0 {
                    continue;
                }

                let Some(sections) = settings.sections_for_grade(grade) else {
                    log::warn!("grade {} has no class sections declared, skipping", grade);
                    continue;
                };

                for section in sections {
                    candidates.push(Candidate::new(
                        teacher.id.clone(),
                        subject.id.clone(),
                        grade,
                        section.clone(),
                        required_hours,
                    ));
                }
            }
        }
    }

    candidates
}

fn resolve_subject<'a>(subject_ref: &SubjectRef, subjects: &'a [Subject]) -> Option<&'a Subject> {
    match subject_ref {
        SubjectRef::ById(id) => subjects.iter().find(|s| &s.id == id),
        SubjectRef::ByName(name) => subjects.iter().find(|s| &s.name == name),
    }
}
