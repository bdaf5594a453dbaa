use crate::db::pool::CONTAINS_FN;
use crate::db::query::{Filter, Value, VisitQuery};
use crate::errors::{AppError, AppResult};
use crate::models::{Emotion, GradeLevel, NewVisit, Visit};
use crate::utils::time::{parse_db_timestamp, to_db_timestamp};
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, OptionalExtension, Result, Row, params, params_from_iter};

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

/// Map one `visits` row into a typed [`Visit`].
pub fn map_row(row: &Row) -> Result<Visit> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(0, AppError::InvalidDate(date_str.clone())))?;

    let time_in_str: String = row.get("time_in")?;
    let time_in = parse_db_timestamp(&time_in_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidTime(time_in_str.clone())))?;

    let time_out_str: Option<String> = row.get("time_out")?;
    let time_out = match time_out_str {
        Some(s) => Some(
            parse_db_timestamp(&s).ok_or_else(|| conversion_error(0, AppError::InvalidTime(s)))?,
        ),
        None => None,
    };

    let grade_str: String = row.get("grade_level")?;
    let grade_level = GradeLevel::from_db_str(&grade_str).ok_or_else(|| {
        conversion_error(
            0,
            AppError::InvalidRow(format!("Invalid grade level: {}", grade_str)),
        )
    })?;

    let emotion_str: String = row.get("emotion")?;
    let emotion = Emotion::from_db_str(&emotion_str).ok_or_else(|| {
        conversion_error(
            0,
            AppError::InvalidRow(format!("Invalid emotion: {}", emotion_str)),
        )
    })?;

    Ok(Visit {
        id: row.get("id")?,
        student_name: row.get("student_name")?,
        grade_level,
        staff_name: row.get("staff_name")?,
        date,
        time_in,
        time_out,
        reason: row.get("reason")?,
        emotion,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_visit(conn: &Connection, v: &NewVisit) -> AppResult<Visit> {
    let visit = conn.query_row(
        "INSERT INTO visits (student_name, grade_level, staff_name, date, time_in, time_out, reason, emotion, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, NULL, ?6, ?7, ?8)
         RETURNING *",
        params![
            v.student_name,
            v.grade_level.to_db_str(),
            v.staff_name,
            v.date.format("%Y-%m-%d").to_string(),
            to_db_timestamp(&v.time_in),
            v.reason,
            v.emotion.to_db_str(),
            Local::now().to_rfc3339(),
        ],
        map_row,
    )?;
    Ok(visit)
}

/// Set `time_out` by id. Returns `None` when no row matched.
pub fn update_time_out(
    conn: &Connection,
    id: i64,
    time_out: DateTime<Local>,
) -> AppResult<Option<Visit>> {
    let visit = conn
        .query_row(
            "UPDATE visits SET time_out = ?1 WHERE id = ?2 RETURNING *",
            params![to_db_timestamp(&time_out), id],
            map_row,
        )
        .optional()?;
    Ok(visit)
}

fn to_sql_value(v: &Value) -> SqlValue {
    match v {
        Value::Int(i) => SqlValue::Integer(*i),
        Value::Text(s) => SqlValue::Text(s.clone()),
        Value::Date(d) => SqlValue::Text(d.format("%Y-%m-%d").to_string()),
        Value::Timestamp(t) => SqlValue::Text(to_db_timestamp(t)),
    }
}

/// Build the `WHERE` clause and its positional parameters.
fn build_where(query: &VisitQuery) -> (String, Vec<SqlValue>) {
    let mut clauses = Vec::new();
    let mut args = Vec::new();

    for f in &query.filters {
        match f {
            Filter::Eq(col, v) => {
                clauses.push(format!("{} = ?", col.name()));
                args.push(to_sql_value(v));
            }
            Filter::Gte(col, v) => {
                clauses.push(format!("{} >= ?", col.name()));
                args.push(to_sql_value(v));
            }
            Filter::Lte(col, v) => {
                clauses.push(format!("{} <= ?", col.name()));
                args.push(to_sql_value(v));
            }
            Filter::IsNull(col) => {
                clauses.push(format!("{} IS NULL", col.name()));
            }
            Filter::ILike(col, needle) => {
                // Literal match; no wildcards to escape
                clauses.push(format!("{}({}, ?)", CONTAINS_FN, col.name()));
                args.push(SqlValue::Text(needle.clone()));
            }
        }
    }

    if clauses.is_empty() {
        (String::new(), args)
    } else {
        (format!(" WHERE {}", clauses.join(" AND ")), args)
    }
}

pub fn select_visits(conn: &Connection, query: &VisitQuery) -> AppResult<Vec<Visit>> {
    let (where_sql, mut args) = build_where(query);
    let mut sql = format!("SELECT * FROM visits{}", where_sql);

    if !query.order.is_empty() {
        let order: Vec<String> = query
            .order
            .iter()
            .map(|o| {
                format!(
                    "{} {}",
                    o.column.name(),
                    if o.ascending { "ASC" } else { "DESC" }
                )
            })
            .collect();
        sql.push_str(&format!(" ORDER BY {}", order.join(", ")));
    }

    if let Some(limit) = query.limit {
        sql.push_str(" LIMIT ?");
        args.push(SqlValue::Integer(limit as i64));
    }

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(args), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_visits(conn: &Connection, query: &VisitQuery) -> AppResult<i64> {
    let (where_sql, args) = build_where(query);
    let sql = format!("SELECT COUNT(*) FROM visits{}", where_sql);
    let count = conn.query_row(&sql, params_from_iter(args), |row| row.get(0))?;
    Ok(count)
}

/// Rows of the internal `log` table, oldest first.
pub fn load_log(conn: &Connection) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt = conn
        .prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            row.get(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
