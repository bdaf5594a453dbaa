//! In-memory reductions behind the dashboard.

use crate::models::{Emotion, GradeLevel, Visit};
use chrono::Timelike;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Count of visits per grade; all nine grades are always present.
pub fn grade_breakdown(visits: &[Visit]) -> BTreeMap<GradeLevel, i64> {
    let mut out: BTreeMap<GradeLevel, i64> = GradeLevel::ALL.iter().map(|g| (*g, 0)).collect();
    for v in visits {
        *out.entry(v.grade_level).or_insert(0) += 1;
    }
    out
}

/// Count of visits per emotion; all seven emotions are always present.
pub fn emotion_breakdown(visits: &[Visit]) -> BTreeMap<Emotion, i64> {
    let mut out: BTreeMap<Emotion, i64> = Emotion::ALL.iter().map(|e| (*e, 0)).collect();
    for v in visits {
        *out.entry(v.emotion).or_insert(0) += 1;
    }
    out
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimeOfDay {
    /// Local check-in hour before 12.
    pub morning: i64,
    pub afternoon: i64,
}

pub fn time_of_day_breakdown(visits: &[Visit]) -> TimeOfDay {
    let mut out = TimeOfDay::default();
    for v in visits {
        if v.time_in.hour() < 12 {
            out.morning += 1;
        } else {
            out.afternoon += 1;
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequentVisitor {
    pub student_name: String,
    pub grade_level: GradeLevel,
    pub visit_count: i64,
}

/// Students (by name and grade) with at least `min_visits` visits, most
/// visits first. Ties keep the order in which students first appear.
pub fn frequent_visitors(visits: &[Visit], min_visits: usize) -> Vec<FrequentVisitor> {
    let mut index: HashMap<(&str, GradeLevel), usize> = HashMap::new();
    let mut groups: Vec<FrequentVisitor> = Vec::new();

    for v in visits {
        let key = (v.student_name.as_str(), v.grade_level);
        match index.get(&key) {
            Some(&i) => groups[i].visit_count += 1,
            None => {
                index.insert(key, groups.len());
                groups.push(FrequentVisitor {
                    student_name: v.student_name.clone(),
                    grade_level: v.grade_level,
                    visit_count: 1,
                });
            }
        }
    }

    groups.retain(|g| g.visit_count >= min_visits as i64);
    groups.sort_by(|a, b| b.visit_count.cmp(&a.visit_count));
    groups
}
