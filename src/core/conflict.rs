//! Instructor double-booking detection.
//!
//! Courses are grouped by `(professor, day, time)`. Any group holding more than one
//! course is a conflict. Groups are reported in the order their slot was first seen,
//! and a given set of course ids is reported only once.

use crate::domain::model::{ConflictGroup, CourseAssignment, CourseId, ValidationReport};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictChecker;

impl ConflictChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, records: &[CourseAssignment]) -> ValidationReport {
        // slot key -> 在 groups 中的位置，保留首次出現的順序
        let mut slot_index: HashMap<(&str, &str, &str), usize> = HashMap::new();
        let mut groups: Vec<(&str, Vec<&CourseAssignment>)> = Vec::new();

        for record in records {
            let key = (
                record.professor.as_str(),
                record.day.as_str(),
                record.time.as_str(),
            );
            let position = *slot_index.entry(key).or_insert_with(|| {
                groups.push((record.professor.as_str(), Vec::new()));
                groups.len() - 1
            });
            groups[position].1.push(record);
        }

        let mut reported: HashSet<Vec<CourseId>> = HashSet::new();
        let mut conflicts = Vec::new();

        for (professor, scheduled) in groups {
            if scheduled.len() < 2 {
                continue;
            }

            let mut ids: Vec<CourseId> = scheduled.iter().map(|c| c.id.clone()).collect();
            ids.sort();

            if reported.insert(ids.clone()) {
                tracing::debug!(professor, courses = ids.len(), "conflict detected");
                conflicts.push(ConflictGroup {
                    ids,
                    reason: conflict_reason(professor),
                });
            }
        }

        ValidationReport::from_conflicts(conflicts)
    }
}

pub fn conflict_reason(professor: &str) -> String {
    format!(
        "Professor {} is scheduled for multiple courses at the same time.",
        professor
    )
}
