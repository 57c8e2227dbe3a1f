use super::Day;
use crate::error::{Result, TimetableError};
use serde::{Deserialize, Serialize};

/// The ordered set of class-section labels offered for one grade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeClasses {
    pub grade: u8,
    /// Ordered section labels, e.g. `["A", "B", "C"]`.
    pub sections: Vec<String>,
}

/// School-wide configuration: grades offered, classes per grade, and the
/// weekly period layout. Declaration order of `classes_per_grade` is
/// preserved and is the authoritative order for `grades()` and for every
/// downstream enumeration that must be deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolSettings {
    pub classes_per_grade: Vec<GradeClasses>,
    pub daily_periods: u8,
    #[serde(default)]
    pub saturday_periods: u8,
}

impl SchoolSettings {
    /// Grade numbers in declaration order.
    pub fn grades(&self) -> Vec<u8> {
        self.classes_per_grade.iter().map(|g| g.grade).collect()
    }

    /// Active weekday labels, Monday through Saturday-if-present.
    pub fn days(&self) -> Vec<Day> {
        if self.saturday_periods > 0 {
            vec![Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri, Day::Sat]
        } else {
            vec![Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri]
        }
    }

    /// Number of periods scheduled on a given day.
    pub fn periods_on(&self, day: Day) -> u8 {
        match day {
            Day::Sat => self.saturday_periods,
            _ => self.daily_periods,
        }
    }

    pub fn sections_for_grade(&self, grade: u8) -> Option<&[String]> {
        self.classes_per_grade
            .iter()
            .find(|g| g.grade == grade)
            .map(|g| g.sections.as_slice())
    }

    /// Total number of weekly slots across every grade/section.
    pub fn total_slots(&self) -> usize {
        let periods_per_week: usize = ALL_DAY_CANDIDATES
            .iter()
            .filter(|d| **d != Day::Sat || self.saturday_periods > 0)
            .map(|d| self.periods_on(*d) as usize)
            .sum();

        let sections: usize = self.classes_per_grade.iter().map(|g| g.sections.len()).sum();
        sections * periods_per_week
    }

    /// Range/consistency checks performed at Grid Initializer time.
    pub fn validate(&self) -> Result<()> {
        if self.daily_periods == 0 || self.daily_periods > 10 {
            return Err(TimetableError::InvalidSettings {
                message: format!(
                    "daily_periods must be in 1..=10, got {}",
                    self.daily_periods
                ),
            }
            .into());
        }
        if self.saturday_periods > 8 {
            return Err(TimetableError::InvalidSettings {
                message: format!(
                    "saturday_periods must be in 0..=8, got {}",
                    self.saturday_periods
                ),
            }
            .into());
        }
        if self.classes_per_grade.is_empty() {
            return Err(TimetableError::InvalidSettings {
                message: "classes_per_grade must declare at least one grade".to_string(),
            }
            .into());
        }
        for grade in &self.classes_per_grade {
            if grade.sections.is_empty() {
                return Err(TimetableError::InvalidGrade {
                    grade: grade.grade,
                    message: "grade declares no class sections".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

const ALL_DAY_CANDIDATES: [Day; 6] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri, Day::Sat];

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(saturday_periods: u8) -> SchoolSettings {
        SchoolSettings {
            classes_per_grade: vec![GradeClasses {
                grade: 1,
                sections: vec!["A".to_string(), "B".to_string()],
            }],
            daily_periods: 6,
            saturday_periods,
        }
    }

    #[test]
    fn saturday_absent_when_zero() {
        let s = settings(0);
        assert_eq!(s.days(), vec![Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri]);
        assert_eq!(s.total_slots(), 2 * 5 * 6);
    }

    #[test]
    fn saturday_present_when_nonzero() {
        let s = settings(3);
        assert!(s.days().contains(&Day::Sat));
        assert_eq!(s.total_slots(), 2 * (5 * 6 + 3));
    }

    #[test]
    fn rejects_out_of_range_daily_periods() {
        let mut s = settings(0);
        s.daily_periods = 0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_empty_section_list() {
        let mut s = settings(0);
        s.classes_per_grade[0].sections.clear();
        assert!(s.validate().is_err());
    }
}
