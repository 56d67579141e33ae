use crate::domain::model::{CourseAssignment, CourseId};
use crate::utils::error::{Result, ScheduleError};
use serde_json::{Map, Value};

/// Parses a raw request body into course records.
pub fn parse_body(body: &[u8]) -> Result<Vec<CourseAssignment>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ScheduleError::MalformedRequest);
    }

    let payload: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("request body is not JSON: {}", e);
        ScheduleError::MalformedRequest
    })?;

    parse_request(&payload)
}

/// Extracts the `courses` list from a decoded payload.
///
/// The payload must be a non-empty object whose `courses` member is an array. Each
/// entry must carry `id` (whole number or string) plus string `professor`, `day` and
/// `time`; the first entry that does not fails the whole request.
pub fn parse_request(payload: &Value) -> Result<Vec<CourseAssignment>> {
    let courses = payload
        .as_object()
        .filter(|obj| !obj.is_empty())
        .and_then(|obj| obj.get("courses"))
        .and_then(Value::as_array)
        .ok_or(ScheduleError::MalformedRequest)?;

    courses
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_course(index, entry))
        .collect()
}

pub fn parse_course(index: usize, entry: &Value) -> Result<CourseAssignment> {
    let obj = entry.as_object().ok_or_else(|| ScheduleError::MalformedRecord {
        index,
        id: None,
        field: "course".to_string(),
        reason: "must be a JSON object".to_string(),
    })?;

    let id = parse_id(index, obj)?;
    let id_label = Some(id.to_string());

    let professor = required_text(index, obj, "professor", &id_label)?;
    let day = required_text(index, obj, "day", &id_label)?;
    let time = required_text(index, obj, "time", &id_label)?;

    Ok(CourseAssignment {
        id,
        professor,
        day,
        time,
        name: obj.get("name").and_then(Value::as_str).map(str::to_string),
    })
}

fn parse_id(index: usize, obj: &Map<String, Value>) -> Result<CourseId> {
    match obj.get("id") {
        Some(Value::String(s)) => Ok(CourseId::Text(s.clone())),
        Some(Value::Number(n)) => numeric_id(n)
            .ok_or_else(|| malformed(index, None, "id", "must be a whole number or a string")),
        Some(Value::Null) | None => Err(malformed(index, None, "id", "is missing")),
        Some(_) => Err(malformed(index, None, "id", "must be a whole number or a string")),
    }
}

// 2.0 這類整數值的浮點數視為整數 id
fn numeric_id(n: &serde_json::Number) -> Option<CourseId> {
    if let Some(v) = n.as_i64() {
        return Some(CourseId::Number(v));
    }
    if let Some(v) = n.as_u64() {
        return Some(CourseId::from(v));
    }
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .map(|f| CourseId::Number(f as i64))
}

fn required_text(
    index: usize,
    obj: &Map<String, Value>,
    field: &str,
    id_label: &Option<String>,
) -> Result<String> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Null) | None => Err(malformed(index, id_label.clone(), field, "is missing")),
        Some(_) => Err(malformed(index, id_label.clone(), field, "must be a string")),
    }
}

fn malformed(index: usize, id: Option<String>, field: &str, reason: &str) -> ScheduleError {
    ScheduleError::MalformedRecord {
        index,
        id,
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
