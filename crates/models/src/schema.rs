//! Idempotent DDL for the four tables, for local development and tests.
//!
//! Constraint names are the Postgres defaults (`companies_pkey`,
//! `invoices_comp_code_fkey`, ...) since clients see them in 500 bodies.
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};
use tracing::info;

pub const CREATE_STATEMENTS: [&str; 4] = [
    r#"CREATE TABLE IF NOT EXISTS companies (
        code text PRIMARY KEY,
        name text NOT NULL,
        description text NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS invoices (
        id serial PRIMARY KEY,
        comp_code text NOT NULL REFERENCES companies ON DELETE CASCADE,
        amt double precision NOT NULL CHECK (amt > 0),
        paid boolean NOT NULL DEFAULT false,
        add_date date NOT NULL DEFAULT CURRENT_DATE,
        paid_date date
    )"#,
    r#"CREATE TABLE IF NOT EXISTS industries (
        code text PRIMARY KEY,
        field text NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS industries_companies (
        company_code text NOT NULL REFERENCES companies ON DELETE CASCADE,
        industry_code text NOT NULL REFERENCES industries ON DELETE CASCADE,
        PRIMARY KEY (company_code, industry_code)
    )"#,
];

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    for stmt in CREATE_STATEMENTS {
        db.execute_unprepared(stmt).await?;
    }
    info!(tables = CREATE_STATEMENTS.len(), "schema ensured");
    Ok(())
}
