//! Helpers for repository tests run against `sea_orm::MockDatabase`.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, Statement, Value};

/// Every timestamp bound as a parameter of `statement`, in bind order.
pub(super) fn written_timestamps(statement: &Statement) -> Vec<DateTime<Utc>> {
    statement
        .values
        .iter()
        .flat_map(|values| values.0.iter())
        .filter_map(|value| match value {
            Value::ChronoDateTimeUtc(Some(at)) => Some(**at),
            _ => None,
        })
        .collect()
}

/// SQL of an UPDATE up to its RETURNING clause, i.e. the columns it writes.
pub(super) fn assignments(statement: &Statement) -> &str {
    statement
        .sql
        .split("RETURNING")
        .next()
        .unwrap_or(&statement.sql)
}

/// Statements the mock connection received, one entry per executed query.
pub(super) fn executed(db: DatabaseConnection) -> Vec<Statement> {
    db.into_transaction_log()
        .iter()
        .flat_map(|transaction| transaction.statements().to_vec())
        .collect()
}
