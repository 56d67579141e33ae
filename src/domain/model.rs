use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Identifier of a submitted course.
///
/// Browser clients send strings, scripted clients often send integers. Integer ids
/// sort before text ids so that mixed schedules still have a total order.
///
/// `Unsigned` only holds values above `i64::MAX`; smaller integers are always `Number`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseId {
    Number(i64),
    Unsigned(u64),
    Text(String),
}

impl CourseId {
    fn as_integer(&self) -> Option<i128> {
        match self {
            CourseId::Number(n) => Some(i128::from(*n)),
            CourseId::Unsigned(n) => Some(i128::from(*n)),
            CourseId::Text(_) => None,
        }
    }
}

impl Ord for CourseId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_integer(), other.as_integer()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => match (self, other) {
                (CourseId::Text(a), CourseId::Text(b)) => a.cmp(b),
                _ => Ordering::Equal,
            },
        }
    }
}

impl PartialOrd for CourseId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseId::Number(n) => write!(f, "{}", n),
            CourseId::Unsigned(n) => write!(f, "{}", n),
            CourseId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for CourseId {
    fn from(value: i32) -> Self {
        CourseId::Number(i64::from(value))
    }
}

impl From<i64> for CourseId {
    fn from(value: i64) -> Self {
        CourseId::Number(value)
    }
}

impl From<u64> for CourseId {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => CourseId::Number(n),
            Err(_) => CourseId::Unsigned(value),
        }
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        CourseId::Text(value.to_string())
    }
}

/// One course placed in a day/time slot with its instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseAssignment {
    pub id: CourseId,
    pub professor: String,
    pub day: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CourseAssignment {
    pub fn new(
        id: impl Into<CourseId>,
        professor: impl Into<String>,
        day: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            professor: professor.into(),
            day: day.into(),
            time: time.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictGroup {
    pub ids: Vec<CourseId>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub conflicts: Vec<ConflictGroup>,
}

impl ValidationReport {
    pub fn from_conflicts(conflicts: Vec<ConflictGroup>) -> Self {
        Self {
            is_valid: conflicts.is_empty(),
            conflicts,
        }
    }
}

/// Wire shape of a validation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub courses: Vec<CourseAssignment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_id_ordering() {
        let mut ids = vec![
            CourseId::from("b"),
            CourseId::from(10),
            CourseId::from(u64::MAX),
            CourseId::from("a"),
            CourseId::from(2),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                CourseId::from(2),
                CourseId::from(10),
                CourseId::Unsigned(u64::MAX),
                CourseId::from("a"),
                CourseId::from("b"),
            ]
        );
    }

    #[test]
    fn test_small_unsigned_ids_normalize_to_number() {
        assert_eq!(CourseId::from(7u64), CourseId::Number(7));
        let parsed: CourseId = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(parsed, CourseId::Unsigned(u64::MAX));
        assert_eq!(parsed.to_string(), "18446744073709551615");
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = ValidationReport::from_conflicts(vec![ConflictGroup {
            ids: vec![CourseId::from(1), CourseId::from("x")],
            reason: "r".to_string(),
        }]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "isValid": false,
                "conflicts": [{"ids": [1, "x"], "reason": "r"}]
            })
        );
    }
}
