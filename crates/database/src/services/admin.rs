use crate::{
    admin::AdminConfig,
    entities::reservation::{Column, Entity},
};
use chrono::{Months, NaiveDate, NaiveTime};
use log::debug;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    sea_query::{Expr, Func, LikeExpr},
};
use serde_json::{Map, Value};

/// Filters accepted by the admin listing
#[derive(Debug, Clone, Default)]
pub struct AdminQuery {
    /// Whitespace-separated search terms; every term must match a search field
    pub q: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminListing {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Map<String, Value>>,
}

pub struct AdminService;

impl AdminService {
    pub async fn list(
        db: &DatabaseConnection,
        config: &AdminConfig,
        query: &AdminQuery,
    ) -> Result<AdminListing, DbErr> {
        let columns = config.column_names();
        let mut select = Entity::find();

        if let Some(date) = query.date.filter(|_| config.filters_on(Column::Date)) {
            select = select.filter(Column::Date.eq(date));
        }
        if let Some(time) = query.time.filter(|_| config.filters_on(Column::Time)) {
            select = select.filter(Column::Time.eq(time));
        }

        if let (Some(column), Some(year)) = (config.date_hierarchy, query.year) {
            let Some((start, end)) = date_range(year, query.month, query.day) else {
                debug!("Ignoring admin listing for invalid date drill-down");
                return Ok(AdminListing {
                    columns,
                    rows: Vec::new(),
                });
            };
            select = select.filter(column.gte(start)).filter(column.lt(end));
        }

        if let Some(q) = query.q.as_deref() {
            select = select.filter(search_condition(config, q));
        }

        for (column, direction) in config.ordering {
            select = select.order_by(*column, (*direction).into());
        }
        select = select.order_by_desc(Column::Id);

        let rows = select
            .all(db)
            .await?
            .into_iter()
            .map(|model| {
                let mut record = match serde_json::to_value(model) {
                    Ok(Value::Object(record)) => record,
                    _ => Map::new(),
                };
                let mut row = Map::new();
                if let Some(id) = record.remove("id") {
                    row.insert("id".to_string(), id);
                }
                for name in &columns {
                    if let Some(value) = record.remove(*name) {
                        row.insert(name.to_string(), value);
                    }
                }
                row
            })
            .collect();

        Ok(AdminListing { columns, rows })
    }
}

/// Every term must appear, case-insensitively, in at least one search field
fn search_condition(config: &AdminConfig, q: &str) -> Condition {
    q.split_whitespace()
        .fold(Condition::all(), |all, term| {
            let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
            let any = config
                .search_fields
                .iter()
                .fold(Condition::any(), |any, column| {
                    any.add(
                        Expr::expr(Func::lower(Expr::col((Entity, *column))))
                            .like(LikeExpr::new(pattern.clone()).escape('\\')),
                    )
                });
            all.add(any)
        })
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Half-open `[start, end)` range for a year, month or day drill-down.
/// A day without a month names no range.
fn date_range(year: i32, month: Option<u32>, day: Option<u32>) -> Option<(NaiveDate, NaiveDate)> {
    match (month, day) {
        (None, Some(_)) => None,
        (None, None) => Some((
            NaiveDate::from_ymd_opt(year, 1, 1)?,
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
        )),
        (Some(month), None) => {
            let start = NaiveDate::from_ymd_opt(year, month, 1)?;
            Some((start, start.checked_add_months(Months::new(1))?))
        }
        (Some(month), Some(day)) => {
            let start = NaiveDate::from_ymd_opt(year, month, day)?;
            Some((start, start.succ_opt()?))
        }
    }
}
