use async_trait::async_trait;
use sea_orm::{
    sea_query::Query, ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryOrder, QuerySelect, RelationTrait, Select,
};

use models::{industry, industry_company};
use crate::errors::ServiceError;

/// Store access for industries and the company links.
#[async_trait]
pub trait IndustryRepository: Send + Sync {
    /// Every industry left-joined to its links, ordered by industry then company code.
    async fn list_rows(&self) -> Result<Vec<industry::CompanyRow>, ServiceError>;
    /// `None` arguments are written as SQL NULL.
    async fn insert(&self, code: Option<String>, field: Option<String>) -> Result<industry::Model, ServiceError>;
    async fn associate(
        &self,
        industry_code: &str,
        company_code: Option<String>,
    ) -> Result<industry_company::Model, ServiceError>;
}

pub fn rows_select() -> Select<industry::Entity> {
    industry::Entity::find()
        .select_only()
        .column(industry::Column::Code)
        .column(industry::Column::Field)
        .column(industry_company::Column::CompanyCode)
        .join(JoinType::LeftJoin, industry::Relation::CompanyLinks.def())
        .order_by_asc(industry::Column::Code)
        .order_by_asc(industry_company::Column::CompanyCode)
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmIndustryRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl IndustryRepository for SeaOrmIndustryRepository {
    async fn list_rows(&self) -> Result<Vec<industry::CompanyRow>, ServiceError> {
        rows_select()
            .into_model::<industry::CompanyRow>()
            .all(&self.db)
            .await
            .map_err(ServiceError::store)
    }

    async fn insert(&self, code: Option<String>, field: Option<String>) -> Result<industry::Model, ServiceError> {
        let stmt = Query::insert()
            .into_table(industry::Entity)
            .columns([industry::Column::Code, industry::Column::Field])
            .values([code.into(), field.into()])
            .map_err(|e| ServiceError::Store(e.to_string()))?
            .returning_all()
            .to_owned();
        let backend = self.db.get_database_backend();
        industry::Model::find_by_statement(backend.build(&stmt))
            .one(&self.db)
            .await
            .map_err(ServiceError::store)?
            .ok_or_else(|| ServiceError::Store("insert into industries returned no row".into()))
    }

    async fn associate(
        &self,
        industry_code: &str,
        company_code: Option<String>,
    ) -> Result<industry_company::Model, ServiceError> {
        let stmt = Query::insert()
            .into_table(industry_company::Entity)
            .columns([industry_company::Column::CompanyCode, industry_company::Column::IndustryCode])
            .values([company_code.into(), industry_code.into()])
            .map_err(|e| ServiceError::Store(e.to_string()))?
            .returning_all()
            .to_owned();
        let backend = self.db.get_database_backend();
        industry_company::Model::find_by_statement(backend.build(&stmt))
            .one(&self.db)
            .await
            .map_err(ServiceError::store)?
            .ok_or_else(|| ServiceError::Store("insert into industries_companies returned no row".into()))
    }
}
