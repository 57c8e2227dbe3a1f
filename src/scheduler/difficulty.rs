use crate::types::{Candidate, Day, Teacher, TeacherId};
use std::collections::HashMap;

/// Per-teacher difficulty score driving candidate processing order: the
/// ratio of hours a teacher still needs to place against the hours they
/// have left to place them in. Higher difficulty goes first, on the
/// assumption that a teacher with little slack is the one most likely to
/// become infeasible if scheduled last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub total_required_hours: u32,
    pub available_hours: u32,
    pub difficulty_percentage: f64,
}

/// Computes a difficulty score per teacher from the full candidate list and
/// the school's weekly period layout.
///
/// `available_hours` counts every `(day, period)` slot in the week that is
/// not forbidden to the teacher by a MANDATORY restriction — a teacher with
/// every period of every day restricted away has `available_hours == 0`
/// rather than a division by zero.
pub fn compute_difficulty(
    candidates: &[Candidate],
    teachers: &[Teacher],
    days: &[Day],
    periods_on: impl Fn(Day) -> u8,
) -> HashMap<TeacherId, Difficulty> {
    let mut required: HashMap<&TeacherId, u32> = HashMap::new();
    for candidate in candidates {
        *required.entry(&candidate.teacher).or_insert(0) += candidate.required_hours;
    }

    teachers
        .iter()
        .map(|teacher| {
            let total_required_hours = required.get(&teacher.id).copied().unwrap_or(0);
            let available_hours = available_hours_for(teacher, days, &periods_on);
            let difficulty_percentage = total_required_hours as f64 / available_hours.max(1) as f64;
            (
                teacher.id.clone(),
                Difficulty {
                    total_required_hours,
                    available_hours,
                    difficulty_percentage,
                },
            )
        })
        .collect()
}

fn available_hours_for(teacher: &Teacher, days: &[Day], periods_on: impl Fn(Day) -> u8) -> u32 {
    let mut total = 0u32;
    for &day in days {
        for period in 1..=periods_on(day) {
            if !teacher.is_forbidden(day, period) {
                total += 1;
            }
        }
    }
    total
}
