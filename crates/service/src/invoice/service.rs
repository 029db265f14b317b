use std::sync::Arc;

use tracing::{info, instrument};

use models::invoice;

use super::domain::{InvoiceDetail, InvoiceInput, InvoiceUpdate};
use super::repository::InvoiceRepository;
use crate::errors::ServiceError;
use crate::input::{amount, text};

const ENTITY: &str = "Invoice";

/// Invoice business rules, independent of the web framework.
pub struct InvoiceService {
    repo: Arc<dyn InvoiceRepository>,
}

impl InvoiceService {
    pub fn new(repo: Arc<dyn InvoiceRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<invoice::Summary>, ServiceError> {
        self.repo.list().await
    }

    /// Two reads, not wrapped in a transaction: the invoice, then its company.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<InvoiceDetail, ServiceError> {
        let inv = self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found(ENTITY))?;
        let company = self.repo.company_of(id).await?;
        Ok(InvoiceDetail::new(inv, company))
    }

    /// A `comp_code` with no company surfaces the store's foreign-key message.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: InvoiceInput) -> Result<invoice::Model, ServiceError> {
        let (Some(comp_code), Some(amt)) = (input.comp_code, input.amt) else {
            return Err(ServiceError::MissingInputs);
        };
        let amt = amount(amt)?;
        let created = self.repo.insert(text(comp_code), amt).await?;
        info!(id = created.id, comp_code = %created.comp_code, "invoice_created");
        Ok(created)
    }

    /// A missing `amt` is written as NULL, which the store rejects for an
    /// existing row.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: InvoiceUpdate) -> Result<invoice::Model, ServiceError> {
        let amt = match input.amt {
            Some(v) => amount(v)?,
            None => None,
        };
        self.repo
            .update_amount(id, amt)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(ENTITY));
        }
        info!("invoice_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    use crate::company::{domain::CompanyInput, CompanyService};
    use crate::memory::MemoryStore;

    async fn store_with_company(code: &str) -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::default());
        CompanyService::new(store.clone())
            .create(CompanyInput {
                code: Some(json!(code)),
                name: Some(json!(code.to_uppercase())),
                description: Some(json!("test company")),
            })
            .await
            .expect("company");
        store
    }

    fn input(comp_code: &str, amt: Value) -> InvoiceInput {
        InvoiceInput { comp_code: Some(json!(comp_code)), amt: Some(amt) }
    }

    #[tokio::test]
    async fn create_applies_store_defaults() {
        let svc = InvoiceService::new(store_with_company("ibm").await);
        let inv = svc.create(input("ibm", json!(250.5))).await.expect("create");
        assert_eq!(inv.comp_code, "ibm");
        assert_eq!(inv.amt, 250.5);
        assert!(!inv.paid);
        assert!(inv.paid_date.is_none());
    }

    #[tokio::test]
    async fn numeric_string_amounts_are_accepted() {
        let svc = InvoiceService::new(store_with_company("ibm").await);
        let inv = svc.create(input("ibm", json!("100"))).await.expect("create");
        assert_eq!(inv.amt, 100.0);

        let err = svc.create(input("ibm", json!("a lot"))).await.unwrap_err();
        assert!(!err.is_classified());
        assert!(err.to_string().contains("double precision"), "{err}");
    }

    #[tokio::test]
    async fn create_requires_comp_code_and_amt() {
        let svc = InvoiceService::new(Arc::new(MemoryStore::default()));
        let err = svc.create(InvoiceInput { comp_code: Some(json!("ibm")), amt: None }).await;
        assert_eq!(err, Err(ServiceError::MissingInputs));
        let err = svc.create(InvoiceInput { comp_code: None, amt: Some(json!(1)) }).await;
        assert_eq!(err, Err(ServiceError::MissingInputs));
    }

    #[tokio::test]
    async fn null_amount_hits_the_not_null_constraint() {
        let svc = InvoiceService::new(store_with_company("ibm").await);
        let err = svc.create(input("ibm", Value::Null)).await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::Store("null value in column \"amt\" of relation \"invoices\" violates not-null constraint".into())
        );
    }

    #[tokio::test]
    async fn unknown_company_is_a_foreign_key_failure() {
        let svc = InvoiceService::new(Arc::new(MemoryStore::default()));
        let err = svc.create(input("ghost", json!(10))).await.unwrap_err();
        assert!(!err.is_classified());
        assert!(err.to_string().contains("foreign key constraint"), "{err}");
    }

    #[tokio::test]
    async fn update_without_amount_is_not_found_or_a_store_failure() {
        let store = store_with_company("ibm").await;
        let svc = InvoiceService::new(store);
        assert_eq!(svc.update(999, InvoiceUpdate::default()).await, Err(ServiceError::not_found("Invoice")));

        let inv = svc.create(input("ibm", json!(5))).await.expect("create");
        let err = svc.update(inv.id, InvoiceUpdate::default()).await.unwrap_err();
        assert!(!err.is_classified());
        assert!(err.to_string().contains("not-null constraint"), "{err}");
    }

    #[tokio::test]
    async fn get_attaches_company_then_delete_makes_it_unfindable() {
        let store = store_with_company("zoom").await;
        let svc = InvoiceService::new(store.clone());
        let inv = svc.create(input("zoom", json!(99))).await.expect("create");

        let detail = svc.get(inv.id).await.expect("detail");
        assert_eq!(detail.company.as_ref().map(|c| c.code.as_str()), Some("zoom"));

        let updated = svc.update(inv.id, InvoiceUpdate { amt: Some(json!("150")) }).await.expect("update");
        assert_eq!(updated.amt, 150.0);

        svc.delete(inv.id).await.expect("delete");
        assert_eq!(svc.get(inv.id).await, Err(ServiceError::not_found("Invoice")));
        assert_eq!(svc.delete(inv.id).await, Err(ServiceError::not_found("Invoice")));
        assert_eq!(
            svc.update(inv.id, InvoiceUpdate { amt: Some(json!(1)) }).await,
            Err(ServiceError::not_found("Invoice"))
        );
    }
}
