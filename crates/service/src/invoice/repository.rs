use async_trait::async_trait;
use sea_orm::{
    sea_query::Query, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, QuerySelect,
};

use models::{company, invoice};
use crate::errors::ServiceError;

/// Store access for invoices.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<invoice::Summary>, ServiceError>;
    async fn find(&self, id: i32) -> Result<Option<invoice::Model>, ServiceError>;
    /// The company referenced by invoice `id`.
    async fn company_of(&self, id: i32) -> Result<Option<company::Model>, ServiceError>;
    /// Insert with store defaults for id, paid, add_date and paid_date.
    /// `None` arguments are written as SQL NULL.
    async fn insert(&self, comp_code: Option<String>, amt: Option<f64>) -> Result<invoice::Model, ServiceError>;
    /// `None` when no row has `id`.
    async fn update_amount(&self, id: i32, amt: Option<f64>) -> Result<Option<invoice::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmInvoiceRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl InvoiceRepository for SeaOrmInvoiceRepository {
    async fn list(&self) -> Result<Vec<invoice::Summary>, ServiceError> {
        invoice::Entity::find()
            .select_only()
            .column(invoice::Column::Id)
            .column(invoice::Column::CompCode)
            .order_by_asc(invoice::Column::Id)
            .into_model::<invoice::Summary>()
            .all(&self.db)
            .await
            .map_err(ServiceError::store)
    }

    async fn find(&self, id: i32) -> Result<Option<invoice::Model>, ServiceError> {
        invoice::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::store)
    }

    async fn company_of(&self, id: i32) -> Result<Option<company::Model>, ServiceError> {
        company::Entity::find()
            .inner_join(invoice::Entity)
            .filter(invoice::Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(ServiceError::store)
    }

    async fn insert(&self, comp_code: Option<String>, amt: Option<f64>) -> Result<invoice::Model, ServiceError> {
        let stmt = Query::insert()
            .into_table(invoice::Entity)
            .columns([invoice::Column::CompCode, invoice::Column::Amt])
            .values([comp_code.into(), amt.into()])
            .map_err(|e| ServiceError::Store(e.to_string()))?
            .returning_all()
            .to_owned();
        let backend = self.db.get_database_backend();
        invoice::Model::find_by_statement(backend.build(&stmt))
            .one(&self.db)
            .await
            .map_err(ServiceError::store)?
            .ok_or_else(|| ServiceError::Store("insert into invoices returned no row".into()))
    }

    async fn update_amount(&self, id: i32, amt: Option<f64>) -> Result<Option<invoice::Model>, ServiceError> {
        let stmt = Query::update()
            .table(invoice::Entity)
            .value(invoice::Column::Amt, amt)
            .and_where(invoice::Column::Id.eq(id))
            .returning_all()
            .to_owned();
        let backend = self.db.get_database_backend();
        invoice::Model::find_by_statement(backend.build(&stmt))
            .one(&self.db)
            .await
            .map_err(ServiceError::store)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = invoice::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(ServiceError::store)?;
        Ok(res.rows_affected > 0)
    }
}
