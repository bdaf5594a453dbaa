//! Store-independent description of a read against the `visits` table.
//!
//! Mirrors the capability the gateway needs from any backing store:
//! comparison and pattern filters on named columns, ordering, an optional
//! limit, and a count-only variant.

use crate::models::{Emotion, GradeLevel};
use chrono::{DateTime, Local, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    StudentName,
    GradeLevel,
    StaffName,
    Date,
    TimeIn,
    TimeOut,
    Reason,
    Emotion,
}

impl Column {
    pub fn name(&self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::StudentName => "student_name",
            Column::GradeLevel => "grade_level",
            Column::StaffName => "staff_name",
            Column::Date => "date",
            Column::TimeIn => "time_in",
            Column::TimeOut => "time_out",
            Column::Reason => "reason",
            Column::Emotion => "emotion",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Text(String),
    Date(NaiveDate),
    Timestamp(DateTime<Local>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Local>> for Value {
    fn from(v: DateTime<Local>) -> Self {
        Value::Timestamp(v)
    }
}

impl From<GradeLevel> for Value {
    fn from(v: GradeLevel) -> Self {
        Value::Text(v.to_db_str().to_string())
    }
}

impl From<Emotion> for Value {
    fn from(v: Emotion) -> Self {
        Value::Text(v.to_db_str().to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq(Column, Value),
    Gte(Column, Value),
    Lte(Column, Value),
    IsNull(Column),
    /// Case-insensitive "contains".
    ILike(Column, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: Column,
    pub ascending: bool,
}

/// A filtered, ordered select over `visits`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisitQuery {
    pub filters: Vec<Filter>,
    pub order: Vec<Order>,
    pub limit: Option<usize>,
}

impl VisitQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: Column, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Eq(column, value.into()));
        self
    }

    pub fn gte(mut self, column: Column, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Gte(column, value.into()));
        self
    }

    pub fn lte(mut self, column: Column, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Lte(column, value.into()));
        self
    }

    pub fn is_null(mut self, column: Column) -> Self {
        self.filters.push(Filter::IsNull(column));
        self
    }

    pub fn ilike(mut self, column: Column, needle: &str) -> Self {
        self.filters.push(Filter::ILike(column, needle.to_string()));
        self
    }

    pub fn order(mut self, column: Column, ascending: bool) -> Self {
        self.order.push(Order { column, ascending });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Apply optional inclusive bounds on `date`.
    pub fn date_between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        if let Some(s) = start {
            self = self.gte(Column::Date, s);
        }
        if let Some(e) = end {
            self = self.lte(Column::Date, e);
        }
        self
    }
}
