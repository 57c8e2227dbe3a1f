use serde::{Deserialize, Serialize};

/// A weekday the school operates on. Ordered `Mon..Sat`, matching the
/// fixed reading order used for candidate and slot enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

pub const ALL_DAYS: [Day; 6] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri, Day::Sat];

impl Day {
    /// Ordinal position in the fixed `[MON, TUE, WED, THU, FRI, SAT]` order.
    pub fn index(self) -> usize {
        match self {
            Day::Mon => 0,
            Day::Tue => 1,
            Day::Wed => 2,
            Day::Thu => 3,
            Day::Fri => 4,
            Day::Sat => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Day> {
        ALL_DAYS.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Mon => "MON",
            Day::Tue => "TUE",
            Day::Wed => "WED",
            Day::Thu => "THU",
            Day::Fri => "FRI",
            Day::Sat => "SAT",
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
