use crate::core::intake::{parse_course, parse_request};
use crate::core::{CourseAssignment, Result};
use crate::utils::error::ScheduleError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// A CSV row; unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: Option<String>,
    professor: Option<String>,
    day: Option<String>,
    time: Option<String>,
    name: Option<String>,
}

/// Loads a schedule from a `.json` or `.csv` file.
pub fn load_schedule<P: AsRef<Path>>(path: P) -> Result<Vec<CourseAssignment>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    tracing::debug!("Loading schedule from {}", path.display());

    match extension.as_deref() {
        Some("json") => {
            let content = std::fs::read_to_string(path)?;
            parse_json_schedule(&content)
        }
        Some("csv") => {
            let content = std::fs::read_to_string(path)?;
            parse_csv_schedule(&content)
        }
        _ => Err(ScheduleError::InvalidConfigValueError {
            field: "schedule".to_string(),
            value: path.display().to_string(),
            reason: "Unsupported file extension. Allowed extensions: json, csv".to_string(),
        }),
    }
}

/// Accepts either `{"courses": [...]}` or a bare array of courses.
pub fn parse_json_schedule(content: &str) -> Result<Vec<CourseAssignment>> {
    let value: Value = serde_json::from_str(content)?;
    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, entry)| parse_course(index, entry))
            .collect(),
        other => parse_request(&other),
    }
}

pub fn parse_csv_schedule(content: &str) -> Result<Vec<CourseAssignment>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut courses = Vec::new();
    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        courses.push(parse_course(index, &row_to_value(row))?);
    }

    tracing::debug!("Parsed {} courses from CSV", courses.len());
    Ok(courses)
}

// 轉成 JSON 物件，讓 CSV 與 HTTP 共用同一套欄位檢查
fn row_to_value(row: CsvRow) -> Value {
    let mut obj = Map::new();

    if let Some(id) = row.id {
        obj.insert("id".to_string(), csv_id(id));
    }

    for (key, value) in [
        ("professor", row.professor),
        ("day", row.day),
        ("time", row.time),
        ("name", row.name),
    ] {
        if let Some(value) = value {
            obj.insert(key.to_string(), Value::String(value));
        }
    }

    Value::Object(obj)
}

// 只有標準寫法的整數才轉成數字，"007" 或 "+5" 保留原文
fn csv_id(id: String) -> Value {
    if let Ok(n) = id.parse::<i64>() {
        if n.to_string() == id {
            return Value::from(n);
        }
    }
    if let Ok(n) = id.parse::<u64>() {
        if n.to_string() == id {
            return Value::from(n);
        }
    }
    Value::String(id)
}
