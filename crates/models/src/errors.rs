use sea_orm::{DbErr, RuntimeErr};

/// The store's own wording for a failed statement.
///
/// Database-reported errors (unique and foreign-key violations, check
/// constraints, bad casts) come back exactly as Postgres phrased them, e.g.
/// `duplicate key value violates unique constraint "companies_pkey"`.
/// Anything else falls back to sea-orm's display text.
pub fn store_message(err: &DbErr) -> String {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(e))) => e.message().to_string(),
        other => other.to_string(),
    }
}

/// True for unique and foreign-key violations.
pub fn is_constraint_violation(err: &DbErr) -> bool {
    err.sql_err().is_some()
}
