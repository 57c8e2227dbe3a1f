use super::context::SolveContext;
use crate::types::{Classroom, Day, Subject, Timetable};

/// Phase 4.E: pick a classroom for a subject requiring one, or confirm none
/// is needed.
///
/// For a subject that does not require a special classroom this always
/// returns `None` (the slot uses its class's home room implicitly). For one
/// that does, this scans classrooms of the matching type in declaration
/// order and returns the first not already booked at `(day, period)`
/// anywhere in the grid. No capacity packing: a room is either free or not
/// at a given timeslot.
pub fn resolve_classroom<'a>(
    subject: &Subject,
    day: Day,
    period: u8,
    grid: &Timetable,
    ctx: &SolveContext<'a>,
) -> Option<&'a Classroom> {
    if !subject.requires_special_classroom {
        return None;
    }
    let classroom_type = subject.classroom_type.as_deref()?;

    ctx.classrooms_of_type(classroom_type)
        .find(|room| !is_booked(room, day, period, grid))
}

fn is_booked(room: &Classroom, day: Day, period: u8, grid: &Timetable) -> bool {
    let booked_count = grid
        .slots_at(day, period)
        .filter(|slot| slot.classroom.as_ref() == Some(&room.id))
        .count() as u32;
    booked_count >= room.count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ClassroomId, Day, GradeClasses, SchoolSettings, SubjectId, TimetableInput, WeeklyHours,
    };
    use std::collections::HashMap;

    fn lab_subject() -> Subject {
        Subject {
            id: SubjectId("sci".to_string()),
            name: "Science".to_string(),
            grades: vec![1],
            weekly_hours: WeeklyHours(HashMap::from([(1u8, 1)])),
            requires_special_classroom: true,
            classroom_type: Some("LAB".to_string()),
        }
    }

    fn settings() -> SchoolSettings {
        SchoolSettings {
            classes_per_grade: vec![GradeClasses {
                grade: 1,
                sections: vec!["A".to_string(), "B".to_string()],
            }],
            daily_periods: 2,
            saturday_periods: 0,
        }
    }

    #[test]
    fn returns_none_when_subject_does_not_require_special_classroom() {
        let mut subject = lab_subject();
        subject.requires_special_classroom = false;
        let grid = Timetable::new(&settings()).unwrap();
        let input = TimetableInput {
            settings: settings(),
            teachers: vec![],
            subjects: vec![],
            classrooms: vec![],
        };
        let ctx = SolveContext::new(&input);
        assert!(resolve_classroom(&subject, Day::Mon, 1, &grid, &ctx).is_none());
    }

    #[test]
    fn returns_first_free_room_of_matching_type() {
        let subject = lab_subject();
        let grid = Timetable::new(&settings()).unwrap();
        let classrooms = vec![
            Classroom {
                id: ClassroomId("lab1".to_string()),
                name: "Lab 1".to_string(),
                classroom_type: "LAB".to_string(),
                count: 1,
            },
            Classroom {
                id: ClassroomId("gym".to_string()),
                name: "Gym".to_string(),
                classroom_type: "GYM".to_string(),
                count: 1,
            },
        ];
        let input = TimetableInput {
            settings: settings(),
            teachers: vec![],
            subjects: vec![],
            classrooms,
        };
        let ctx = SolveContext::new(&input);
        let found = resolve_classroom(&subject, Day::Mon, 1, &grid, &ctx).unwrap();
        assert_eq!(found.id, ClassroomId("lab1".to_string()));
    }

    #[test]
    fn skips_rooms_already_booked_at_the_timeslot() {
        let subject = lab_subject();
        let mut grid = Timetable::new(&settings()).unwrap();
        grid.slot_mut(1, "A", Day::Mon, 1).unwrap().classroom = Some(ClassroomId("lab1".to_string()));

        let classrooms = vec![Classroom {
            id: ClassroomId("lab1".to_string()),
            name: "Lab 1".to_string(),
            classroom_type: "LAB".to_string(),
            count: 1,
        }];
        let input = TimetableInput {
            settings: settings(),
            teachers: vec![],
            subjects: vec![],
            classrooms,
        };
        let ctx = SolveContext::new(&input);
        assert!(resolve_classroom(&subject, Day::Mon, 1, &grid, &ctx).is_none());
    }

    #[test]
    fn a_room_with_count_two_admits_two_concurrent_bookings() {
        let subject = lab_subject();
        let mut grid = Timetable::new(&settings()).unwrap();
        grid.slot_mut(1, "A", Day::Mon, 1).unwrap().classroom = Some(ClassroomId("lab1".to_string()));

        let classrooms = vec![Classroom {
            id: ClassroomId("lab1".to_string()),
            name: "Lab 1".to_string(),
            classroom_type: "LAB".to_string(),
            count: 2,
        }];
        let input = TimetableInput {
            settings: settings(),
            teachers: vec![],
            subjects: vec![],
            classrooms,
        };
        let ctx = SolveContext::new(&input);
        assert!(resolve_classroom(&subject, Day::Mon, 1, &grid, &ctx).is_some());
    }
}
