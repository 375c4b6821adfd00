//! Filtered, paginated reads over a single table.
//!
//! A read is always built in the same order: every present predicate is
//! joined with `AND`, the result is sorted by the table's id column, and only
//! then is the `LIMIT`/`OFFSET` window applied. Absent criteria never reach
//! the SQL, and every value is sent as a bound parameter.

use chrono::NaiveDate;
use sqlx::sqlite::{Sqlite, SqlitePool, SqliteRow};
use sqlx::{FromRow, QueryBuilder};

pub const DEFAULT_SKIP: i64 = 0;
pub const DEFAULT_LIMIT: i64 = 100;

/// A table that can be read through [`fetch_page`], [`fetch_by_id`] and [`count`].
///
/// Identifiers here are spliced into SQL text, so they must be fixed names
/// defined in code.
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    const TABLE: &'static str;
    const ID_COLUMN: &'static str;
    const COLUMNS: &'static str;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    /// Inclusive lower bound
    AtLeast,
}

impl Comparison {
    fn operator(self) -> &'static str {
        match self {
            Comparison::Eq => " = ",
            Comparison::AtLeast => " >= ",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: &'static str,
    pub comparison: Comparison,
    pub value: Value,
}

/// Conjunction of predicates. An empty filter matches every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `column = value`, or nothing when `value` is `None`.
    pub fn eq<V: Into<Value>>(self, column: &'static str, value: Option<V>) -> Self {
        self.with(column, Comparison::Eq, value)
    }

    /// Adds `column >= value`, or nothing when `value` is `None`.
    pub fn at_least<V: Into<Value>>(self, column: &'static str, value: Option<V>) -> Self {
        self.with(column, Comparison::AtLeast, value)
    }

    fn with<V: Into<Value>>(mut self, column: &'static str, comparison: Comparison, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.predicates.push(Predicate {
                column,
                comparison,
                value: value.into(),
            });
        }
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    fn push_where(&self, builder: &mut QueryBuilder<'_, Sqlite>) {
        for (i, predicate) in self.predicates.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            builder.push(predicate.column);
            builder.push(predicate.comparison.operator());
            match &predicate.value {
                Value::Text(text) => builder.push_bind(text.clone()),
                Value::Integer(n) => builder.push_bind(*n),
                Value::Date(date) => builder.push_bind(*date),
            };
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PageError {
    #[error("skip must be a non-negative integer, got {0}")]
    NegativeSkip(i64),
    #[error("limit must be a non-negative integer, got {0}")]
    NegativeLimit(i64),
}

/// Pagination window applied after filtering. A limit of zero returns no rows;
/// it is not "unlimited".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    skip: i64,
    limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Page {
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Result<Self, PageError> {
        let skip = skip.unwrap_or(DEFAULT_SKIP);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if skip < 0 {
            return Err(PageError::NegativeSkip(skip));
        }
        if limit < 0 {
            return Err(PageError::NegativeLimit(limit));
        }

        Ok(Page { skip, limit })
    }

    pub fn skip(&self) -> i64 {
        self.skip
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

fn select_page<E: Entity>(filter: &Filter, page: Page) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(format!("SELECT {} FROM {}", E::COLUMNS, E::TABLE));
    filter.push_where(&mut builder);
    builder.push(" ORDER BY ").push(E::ID_COLUMN);
    builder.push(" LIMIT ").push_bind(page.limit);
    builder.push(" OFFSET ").push_bind(page.skip);
    builder
}

/// Returns the rows matching `filter`, windowed by `page`. No match is an
/// empty vec, not an error.
pub async fn fetch_page<E: Entity>(
    pool: &SqlitePool,
    filter: &Filter,
    page: Page,
) -> Result<Vec<E>, sqlx::Error> {
    let mut builder = select_page::<E>(filter, page);
    builder.build_query_as::<E>().fetch_all(pool).await
}

pub async fn fetch_by_id<E: Entity>(pool: &SqlitePool, id: i64) -> Result<Option<E>, sqlx::Error> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {} FROM {} WHERE {} = ",
        E::COLUMNS,
        E::TABLE,
        E::ID_COLUMN
    ));
    builder.push_bind(id);
    builder.build_query_as::<E>().fetch_optional(pool).await
}

/// Unfiltered row count for the table.
pub async fn count<E: Entity>(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {}", E::TABLE);
    sqlx::query_scalar::<_, i64>(&sql).fetch_one(pool).await
}
