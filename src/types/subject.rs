use super::SubjectId;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// `weeklyHours` as it appears in source data: either a bare number
/// (broadcast to every grade the subject applies to) or a per-grade
/// mapping, with key `0` acting as a default fallback. Collapsed at load
/// time into a dense `grade -> hours` map; nothing downstream ever sees
/// the scalar form again.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct WeeklyHours(pub HashMap<u8, u32>);

impl WeeklyHours {
    /// Required hours for `grade`, falling back to the `0` default entry.
    pub fn hours_for(&self, grade: u8) -> u32 {
        self.0
            .get(&grade)
            .copied()
            .unwrap_or_else(|| self.0.get(&0).copied().unwrap_or(0))
    }
}

impl<'de> Deserialize<'de> for WeeklyHours {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct WeeklyHoursVisitor;

        impl<'de> Visitor<'de> for WeeklyHoursVisitor {
            type Value = WeeklyHours;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a map from grade to weekly hours")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                // A scalar carries no grade list; store it under the
                // default key and let `Subject::weekly_hours_for` broadcast
                // it once `grades` is known.
                Ok(WeeklyHours(HashMap::from([(0u8, v as u32)])))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                self.visit_u64(v.max(0) as u64)
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut out = HashMap::new();
                while let Some((k, v)) = map.next_entry::<String, u32>()? {
                    let grade: u8 = k.parse().map_err(de::Error::custom)?;
                    out.insert(grade, v);
                }
                Ok(WeeklyHours(out))
            }
        }

        deserializer.deserialize_any(WeeklyHoursVisitor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub grades: Vec<u8>,
    pub weekly_hours: WeeklyHours,
    #[serde(default)]
    pub requires_special_classroom: bool,
    #[serde(default)]
    pub classroom_type: Option<String>,
}

impl Subject {
    pub fn applies_to_grade(&self, grade: u8) -> bool {
        self.grades.contains(&grade)
    }

    /// Required weekly lessons for `grade`. A scalar `weekly_hours` value
    /// (loaded as a single `{0: n}` default entry) falls through to every
    /// declared grade via the same default-key lookup used for an explicit
    /// per-grade map missing that grade's key.
    pub fn weekly_hours_for(&self, grade: u8) -> u32 {
        if !self.applies_to_grade(grade) {
            return 0;
        }
        self.weekly_hours.hours_for(grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_weekly_hours_broadcasts_to_every_grade() {
        let subject = Subject {
            id: SubjectId("math".to_string()),
            name: "Math".to_string(),
            grades: vec![1, 2, 3],
            weekly_hours: WeeklyHours(HashMap::from([(0u8, 6)])),
            requires_special_classroom: false,
            classroom_type: None,
        };
        assert_eq!(subject.weekly_hours_for(1), 6);
        assert_eq!(subject.weekly_hours_for(2), 6);
        assert_eq!(subject.weekly_hours_for(4), 0);
    }

    #[test]
    fn per_grade_map_overrides_default() {
        let subject = Subject {
            id: SubjectId("math".to_string()),
            name: "Math".to_string(),
            grades: vec![1, 2],
            weekly_hours: WeeklyHours(HashMap::from([(0u8, 4), (2u8, 6)])),
            requires_special_classroom: false,
            classroom_type: None,
        };
        assert_eq!(subject.weekly_hours_for(1), 4);
        assert_eq!(subject.weekly_hours_for(2), 6);
    }

    #[test]
    fn missing_grade_key_with_no_default_is_zero() {
        let subject = Subject {
            id: SubjectId("art".to_string()),
            name: "Art".to_string(),
            grades: vec![1],
            weekly_hours: WeeklyHours(HashMap::new()),
            requires_special_classroom: false,
            classroom_type: None,
        };
        assert_eq!(subject.weekly_hours_for(1), 0);
    }

    #[test]
    fn deserializes_scalar_form() {
        let v: WeeklyHours = serde_json::from_str("6").unwrap();
        assert_eq!(v.0.get(&0), Some(&6));
    }

    #[test]
    fn deserializes_map_form() {
        let v: WeeklyHours = serde_json::from_str(r#"{"1": 2, "0": 4}"#).unwrap();
        assert_eq!(v.0.get(&1), Some(&2));
        assert_eq!(v.0.get(&0), Some(&4));
    }
}
