use async_trait::async_trait;
use sea_orm::{
    sea_query::Query, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use models::{company, industry, industry_company, invoice};
use crate::errors::ServiceError;

/// Store access for companies.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<company::Summary>, ServiceError>;
    /// Rows of the company/invoice/industry join for one code.
    async fn detail_rows(&self, code: &str) -> Result<Vec<company::DetailRow>, ServiceError>;
    /// `None` arguments are written as SQL NULL.
    async fn insert(
        &self,
        code: Option<String>,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<company::Model, ServiceError>;
    /// `None` when no row has `code`; otherwise NULL arguments hit the column constraints.
    async fn update(
        &self,
        code: &str,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Option<company::Model>, ServiceError>;
    /// `false` when nothing was deleted.
    async fn delete(&self, code: &str) -> Result<bool, ServiceError>;
}

/// Invoices are left-joined so a company without invoices still yields rows;
/// industries are inner-joined so a company without industries yields none.
pub fn detail_select(code: &str) -> Select<company::Entity> {
    company::Entity::find()
        .select_only()
        .column(company::Column::Code)
        .column(company::Column::Name)
        .column(company::Column::Description)
        .column_as(invoice::Column::Id, "invoice_id")
        .column_as(industry::Column::Field, "industry")
        .join(JoinType::LeftJoin, company::Relation::Invoices.def())
        .join(JoinType::InnerJoin, company::Relation::IndustryLinks.def())
        .join(JoinType::InnerJoin, industry_company::Relation::Industry.def())
        .filter(company::Column::Code.eq(code))
        .order_by_asc(invoice::Column::Id)
}

/// `UPDATE companies ... RETURNING *`; no row back means no company has `code`.
pub fn update_statement(
    code: &str,
    name: Option<String>,
    description: Option<String>,
) -> sea_orm::sea_query::UpdateStatement {
    Query::update()
        .table(company::Entity)
        .values([
            (company::Column::Name, name.into()),
            (company::Column::Description, description.into()),
        ])
        .and_where(company::Column::Code.eq(code))
        .returning_all()
        .to_owned()
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn list(&self) -> Result<Vec<company::Summary>, ServiceError> {
        company::Entity::find()
            .select_only()
            .column(company::Column::Code)
            .column(company::Column::Name)
            .order_by_asc(company::Column::Code)
            .into_model::<company::Summary>()
            .all(&self.db)
            .await
            .map_err(ServiceError::store)
    }

    async fn detail_rows(&self, code: &str) -> Result<Vec<company::DetailRow>, ServiceError> {
        detail_select(code)
            .into_model::<company::DetailRow>()
            .all(&self.db)
            .await
            .map_err(ServiceError::store)
    }

    async fn insert(
        &self,
        code: Option<String>,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<company::Model, ServiceError> {
        let stmt = Query::insert()
            .into_table(company::Entity)
            .columns([company::Column::Code, company::Column::Name, company::Column::Description])
            .values([code.into(), name.into(), description.into()])
            .map_err(|e| ServiceError::Store(e.to_string()))?
            .returning_all()
            .to_owned();
        let backend = self.db.get_database_backend();
        company::Model::find_by_statement(backend.build(&stmt))
            .one(&self.db)
            .await
            .map_err(ServiceError::store)?
            .ok_or_else(|| ServiceError::Store("insert into companies returned no row".into()))
    }

    async fn update(
        &self,
        code: &str,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Option<company::Model>, ServiceError> {
        let stmt = update_statement(code, name, description);
        let backend = self.db.get_database_backend();
        company::Model::find_by_statement(backend.build(&stmt))
            .one(&self.db)
            .await
            .map_err(ServiceError::store)
    }

    async fn delete(&self, code: &str) -> Result<bool, ServiceError> {
        let res = company::Entity::delete_by_id(code.to_owned())
            .exec(&self.db)
            .await
            .map_err(ServiceError::store)?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn detail_query_left_joins_invoices_and_inner_joins_industries() {
        let sql = detail_select("apple").build(DbBackend::Postgres).to_string();
        assert!(sql.contains(r#"LEFT JOIN "invoices""#), "{sql}");
        assert!(sql.contains(r#"INNER JOIN "industries_companies""#), "{sql}");
        assert!(sql.contains(r#"INNER JOIN "industries""#), "{sql}");
        assert!(sql.contains(r#""invoices"."id" AS "invoice_id""#), "{sql}");
        assert!(sql.contains(r#""industries"."field" AS "industry""#), "{sql}");
        assert!(sql.contains(r#"WHERE "companies"."code" = 'apple'"#), "{sql}");
    }

    #[test]
    fn update_writes_null_for_missing_fields() {
        let sql = DbBackend::Postgres.build(&update_statement("apple", None, Some("d".into()))).to_string();
        assert!(sql.starts_with(r#"UPDATE "companies" SET "name" = NULL, "description" = 'd'"#), "{sql}");
        assert!(sql.contains(r#""companies"."code" = 'apple'"#), "{sql}");
        assert!(sql.ends_with("RETURNING *"), "{sql}");
    }

    #[test]
    fn detail_query_joins_in_dependency_order() {
        let sql = detail_select("apple").build(DbBackend::Postgres).to_string();
        let invoices = sql.find(r#"LEFT JOIN "invoices""#).expect("invoices join");
        let links = sql.find(r#"INNER JOIN "industries_companies""#).expect("links join");
        let industries = sql.find(r#"INNER JOIN "industries" "#).expect("industries join");
        assert!(invoices < links && links < industries, "{sql}");
    }
}
