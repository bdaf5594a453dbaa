//! State of the "currently here" view.
//!
//! The view owns a snapshot of the active visits. Refreshing recomputes the
//! duration labels from that snapshot without querying the store again; the
//! snapshot and the refresh loop go away with the view.

use crate::core::calculator::duration::{duration_label, elapsed_minutes};
use crate::core::visits::list_active;
use crate::db::VisitStore;
use crate::errors::AppResult;
use crate::models::{GradeLevel, Visit};
use crate::utils::time::format_time_12h;
use chrono::{DateTime, Local};
use std::thread;
use std::time::Duration;

/// One rendered "student card".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentCard {
    pub visit_id: i64,
    pub student_name: String,
    pub grade_level: GradeLevel,
    pub checked_in: String,
    pub duration: String,
    pub elapsed_minutes: i64,
}

#[derive(Debug, Clone, Default)]
pub struct CurrentView {
    visits: Vec<Visit>,
}

impl CurrentView {
    pub fn load<S: VisitStore + ?Sized>(store: &S) -> AppResult<Self> {
        Ok(Self::from_visits(list_active(store)?))
    }

    pub fn from_visits(visits: Vec<Visit>) -> Self {
        Self { visits }
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn cards(&self, now: &DateTime<Local>) -> Vec<CurrentCard> {
        self.visits
            .iter()
            .map(|v| CurrentCard {
                visit_id: v.id,
                student_name: v.student_name.clone(),
                grade_level: v.grade_level,
                checked_in: format_time_12h(&v.time_in),
                duration: duration_label(&v.time_in, now),
                elapsed_minutes: elapsed_minutes(&v.time_in, now),
            })
            .collect()
    }
}

/// Periodic duration refresh for a visible view.
pub struct DurationRefresh {
    interval: Duration,
    max_ticks: Option<u32>,
}

impl DurationRefresh {
    pub fn new(interval: Duration, max_ticks: Option<u32>) -> Self {
        Self {
            interval,
            max_ticks,
        }
    }

    /// Call `on_tick` once per interval until `max_ticks` refreshes have
    /// run (forever when unbounded). Returns the number of refreshes.
    pub fn run<F: FnMut(u32)>(&self, mut on_tick: F) -> u32 {
        let mut ticks = 0;
        while self.max_ticks.is_none_or(|max| ticks < max) {
            thread::sleep(self.interval);
            ticks += 1;
            on_tick(ticks);
        }
        ticks
    }
}
