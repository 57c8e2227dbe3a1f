use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::{HashMap, HashSet};
use timetable_engine::scheduler::{solve, SolveMode, SolveOptions};
use timetable_engine::types::{
    GradeClasses, SchoolSettings, Subject, SubjectId, SubjectRef, Teacher, TeacherId, TimetableInput, WeeklyHours,
};

/// Three grades, two sections each, two subjects per teacher roster —
/// large enough to exercise real backtracking without making the bench
/// itself slow.
fn medium_input() -> TimetableInput {
    let settings = SchoolSettings {
        classes_per_grade: vec![
            GradeClasses {
                grade: 1,
                sections: vec!["A".to_string(), "B".to_string()],
            },
            GradeClasses {
                grade: 2,
                sections: vec!["A".to_string(), "B".to_string()],
            },
            GradeClasses {
                grade: 3,
                sections: vec!["A".to_string(), "B".to_string()],
            },
        ],
        daily_periods: 7,
        saturday_periods: 4,
    };

    let subjects = vec![
        Subject {
            id: SubjectId("math".to_string()),
            name: "Mathematics".to_string(),
            grades: vec![1, 2, 3],
            weekly_hours: WeeklyHours(HashMap::from([(0u8, 5)])),
            requires_special_classroom: false,
            classroom_type: None,
        },
        Subject {
            id: SubjectId("science".to_string()),
            name: "Science".to_string(),
            grades: vec![1, 2, 3],
            weekly_hours: WeeklyHours(HashMap::from([(0u8, 3)])),
            requires_special_classroom: true,
            classroom_type: Some("LAB".to_string()),
        },
        Subject {
            id: SubjectId("art".to_string()),
            name: "Art".to_string(),
            grades: vec![1, 2, 3],
            weekly_hours: WeeklyHours(HashMap::from([(0u8, 2)])),
            requires_special_classroom: false,
            classroom_type: None,
        },
    ];

    let teachers = vec![
        Teacher {
            id: TeacherId("t-math".to_string()),
            name: "Math Teacher".to_string(),
            subjects: vec![SubjectRef::ById(SubjectId("math".to_string()))],
            grades: HashSet::from([1, 2, 3]),
            assignment_restrictions: vec![],
        },
        Teacher {
            id: TeacherId("t-sci".to_string()),
            name: "Science Teacher".to_string(),
            subjects: vec![SubjectRef::ById(SubjectId("science".to_string()))],
            grades: HashSet::from([1, 2, 3]),
            assignment_restrictions: vec![],
        },
        Teacher {
            id: TeacherId("t-art".to_string()),
            name: "Art Teacher".to_string(),
            subjects: vec![SubjectRef::ById(SubjectId("art".to_string()))],
            grades: HashSet::from([1, 2, 3]),
            assignment_restrictions: vec![],
        },
    ];

    TimetableInput {
        settings,
        teachers,
        subjects,
        classrooms: vec![timetable_engine::types::Classroom {
            id: timetable_engine::types::ClassroomId("lab-1".to_string()),
            name: "Lab 1".to_string(),
            classroom_type: "LAB".to_string(),
            count: 2,
        }],
    }
}

fn bench_strict(c: &mut Criterion) {
    let input = medium_input();
    c.bench_function("strict_solve_medium", |b| {
        b.iter(|| {
            let outcome = solve(black_box(&input), SolveMode::Strict, SolveOptions::default()).unwrap();
            black_box(outcome.statistics.assigned_slots)
        })
    });
}

fn bench_tolerant(c: &mut Criterion) {
    let input = medium_input();
    c.bench_function("tolerant_solve_medium", |b| {
        b.iter(|| {
            let outcome = solve(black_box(&input), SolveMode::Tolerant, SolveOptions::default()).unwrap();
            black_box(outcome.statistics.assigned_slots)
        })
    });
}

criterion_group!(benches, bench_strict, bench_tolerant);
criterion_main!(benches);
