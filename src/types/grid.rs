use super::{Day, SchoolSettings, Slot};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The weekly slot grid, indexed `[gradeIndex][sectionIndex][timeslotIndex]`.
/// `timeslotIndex` enumerates days in settings order; for each day it lists
/// that day's periods in ascending order. The grid's shape is fixed at
/// construction and never grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timetable {
    grades: Vec<u8>,
    sections: Vec<Vec<String>>,
    timeslots: Vec<(Day, u8)>,
    cells: Vec<Vec<Vec<Slot>>>,
}

impl Timetable {
    /// Build the empty grid described by `settings`. Fails with
    /// `InvalidSettings`/`InvalidGrade` if settings are out of range or
    /// incomplete.
    pub fn new(settings: &SchoolSettings) -> Result<Self> {
        settings.validate()?;

        let timeslots = build_timeslots(settings);
        let grades = settings.grades();
        let mut sections = Vec::with_capacity(grades.len());
        let mut cells = Vec::with_capacity(grades.len());

        for grade_classes in &settings.classes_per_grade {
            let grade_sections = grade_classes.sections.clone();
            let mut grade_cells = Vec::with_capacity(grade_sections.len());
            for section in &grade_sections {
                let slots = timeslots
                    .iter()
                    .map(|(day, period)| Slot::empty(grade_classes.grade, section.clone(), *day, *period))
                    .collect();
                grade_cells.push(slots);
            }
            sections.push(grade_sections);
            cells.push(grade_cells);
        }

        Ok(Self {
            grades,
            sections,
            timeslots,
            cells,
        })
    }

    pub fn grades(&self) -> &[u8] {
        &self.grades
    }

    pub fn timeslots(&self) -> &[(Day, u8)] {
        &self.timeslots
    }

    pub fn sections_for_grade(&self, grade: u8) -> Option<&[String]> {
        self.grade_index(grade).map(|i| self.sections[i].as_slice())
    }

    fn grade_index(&self, grade: u8) -> Option<usize> {
        self.grades.iter().position(|g| *g == grade)
    }

    fn section_index(&self, grade_idx: usize, section: &str) -> Option<usize> {
        self.sections[grade_idx].iter().position(|s| s == section)
    }

    pub fn slot(&self, grade: u8, section: &str, day: Day, period: u8) -> Option<&Slot> {
        let gi = self.grade_index(grade)?;
        let si = self.section_index(gi, section)?;
        let ti = self.timeslot_index(day, period)?;
        Some(&self.cells[gi][si][ti])
    }

    pub fn slot_mut(&mut self, grade: u8, section: &str, day: Day, period: u8) -> Option<&mut Slot> {
        let gi = self.grade_index(grade)?;
        let si = self.section_index(gi, section)?;
        let ti = self.timeslot_index(day, period)?;
        Some(&mut self.cells[gi][si][ti])
    }

    fn timeslot_index(&self, day: Day, period: u8) -> Option<usize> {
        self.timeslots.iter().position(|(d, p)| *d == day && *p == period)
    }

    /// All slots for a given `(grade, section)`, in reading order.
    pub fn slots_for(&self, grade: u8, section: &str) -> &[Slot] {
        let gi = match self.grade_index(grade) {
            Some(gi) => gi,
            None => return &[],
        };
        match self.section_index(gi, section) {
            Some(si) => &self.cells[gi][si],
            None => &[],
        }
    }

    /// Every slot in the grid, grade-major then section-major then time-major.
    pub fn iter_all(&self) -> impl Iterator<Item = &Slot> {
        self.cells.iter().flat_map(|g| g.iter()).flat_map(|s| s.iter())
    }

    pub fn iter_all_mut(&mut self) -> impl Iterator<Item = &mut Slot> {
        self.cells.iter_mut().flat_map(|g| g.iter_mut()).flat_map(|s| s.iter_mut())
    }

    /// Every committed slot anywhere in the grid at `(day, period)`,
    /// regardless of grade/section — used by conflict checkers.
    pub fn slots_at(&self, day: Day, period: u8) -> impl Iterator<Item = &Slot> {
        self.iter_all().filter(move |s| s.day == day && s.period == period)
    }

    pub fn total_slots(&self) -> usize {
        self.iter_all().count()
    }

    pub fn assigned_slots(&self) -> usize {
        self.iter_all().filter(|s| !s.is_empty()).count()
    }
}

fn build_timeslots(settings: &SchoolSettings) -> Vec<(Day, u8)> {
    let mut timeslots = Vec::new();
    for day in settings.days() {
        for period in 1..=settings.periods_on(day) {
            timeslots.push((day, period));
        }
    }
    timeslots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GradeClasses;

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
    fn builds_every_cell_empty() {
        let grid = Timetable::new(&settings()).unwrap();
        assert_eq!(grid.total_slots(), 2 * 2 * 5);
        assert_eq!(grid.assigned_slots(), 0);
        assert!(grid.iter_all().all(Slot::is_empty));
    }

    #[test]
    fn slot_lookup_round_trips_coordinates() {
        let grid = Timetable::new(&settings()).unwrap();
        let slot = grid.slot(1, "A", Day::Mon, 1).unwrap();
        assert_eq!(slot.class_grade, 1);
        assert_eq!(slot.class_section, "A");
        assert_eq!(slot.day, Day::Mon);
        assert_eq!(slot.period, 1);
    }

    #[test]
    fn unknown_grade_or_section_is_none() {
        let grid = Timetable::new(&settings()).unwrap();
        assert!(grid.slot(9, "A", Day::Mon, 1).is_none());
        assert!(grid.slot(1, "Z", Day::Mon, 1).is_none());
    }
}
