use std::sync::Arc;

use serde_json::Value;
use slug::slugify;
use tracing::{info, instrument};

use models::company;

use super::domain::{CompanyDetail, CompanyInput, CompanyUpdate};
use super::repository::CompanyRepository;
use crate::errors::ServiceError;
use crate::input::text;

const ENTITY: &str = "Company";

/// Company business rules, independent of the web framework.
pub struct CompanyService {
    repo: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(repo: Arc<dyn CompanyRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<company::Summary>, ServiceError> {
        self.repo.list().await
    }

    /// Company with its invoice ids and industry fields.
    ///
    /// A company linked to no industry is reported as not found, exactly like
    /// a code that does not exist.
    #[instrument(skip(self))]
    pub async fn get(&self, code: &str) -> Result<CompanyDetail, ServiceError> {
        let rows = self.repo.detail_rows(code).await?;
        info!(rows = rows.len(), "company detail rows");
        CompanyDetail::from_rows(rows).ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    /// Insert with the code slugified. A duplicate code surfaces the store's
    /// unique-violation message, a `null` field its not-null message.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CompanyInput) -> Result<company::Model, ServiceError> {
        let (Some(code), Some(name), Some(description)) = (input.code, input.name, input.description) else {
            return Err(ServiceError::MissingInputs);
        };
        let code = match code {
            Value::Null => None,
            Value::String(raw) => Some(slugify(raw)),
            _ => return Err(ServiceError::Store("company code must be a string".into())),
        };
        let created = self.repo.insert(code, text(name), text(description)).await?;
        info!(code = %created.code, "company_created");
        Ok(created)
    }

    /// Update name and description of the company at `code` (taken as-is).
    /// Missing fields are written as NULL, which the store rejects for an
    /// existing row.
    #[instrument(skip(self, input))]
    pub async fn update(&self, code: &str, input: CompanyUpdate) -> Result<company::Model, ServiceError> {
        let name = input.name.and_then(text);
        let description = input.description.and_then(text);
        self.repo
            .update(code, name, description)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, code: &str) -> Result<(), ServiceError> {
        if !self.repo.delete(code).await? {
            return Err(ServiceError::not_found(ENTITY));
        }
        info!("company_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::industry::domain::{AssociationInput, IndustryInput};
    use crate::memory::MemoryStore;

    fn input(code: Option<Value>, name: Option<Value>, description: Option<Value>) -> CompanyInput {
        CompanyInput { code, name, description }
    }

    fn full(code: &str, name: &str, description: &str) -> CompanyInput {
        input(Some(json!(code)), Some(json!(name)), Some(json!(description)))
    }

    #[tokio::test]
    async fn create_requires_every_field() {
        let svc = CompanyService::new(Arc::new(MemoryStore::default()));
        for missing in [
            input(None, Some(json!("Apple")), Some(json!("d"))),
            input(Some(json!("apple")), None, Some(json!("d"))),
            input(Some(json!("apple")), Some(json!("Apple")), None),
        ] {
            assert_eq!(svc.create(missing).await, Err(ServiceError::MissingInputs));
        }
    }

    #[tokio::test]
    async fn create_slugifies_code_and_accepts_empty_strings() {
        let svc = CompanyService::new(Arc::new(MemoryStore::default()));
        let created = svc.create(full("Big Apple", "Apple", "")).await.expect("create");
        assert_eq!(created.code, "big-apple");
        assert_eq!(created.description, "");

        let empty = svc.create(full("", "", "")).await.expect("create empty");
        assert_eq!(empty.code, "");
    }

    #[tokio::test]
    async fn create_transliterates_accented_codes() {
        let svc = CompanyService::new(Arc::new(MemoryStore::default()));
        let created = svc.create(full("Café Société", "Café", "Coffee.")).await.expect("create");
        assert_eq!(created.code, "cafe-societe");
        assert_eq!(created.name, "Café");
    }

    #[tokio::test]
    async fn null_fields_reach_the_store() {
        let svc = CompanyService::new(Arc::new(MemoryStore::default()));
        let err = svc
            .create(input(Some(json!("acme")), Some(Value::Null), Some(json!("d"))))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ServiceError::Store(
                "null value in column \"name\" of relation \"companies\" violates not-null constraint".into()
            )
        );

        let err = svc.create(input(Some(Value::Null), Some(json!("A")), Some(json!("d")))).await.unwrap_err();
        assert!(!err.is_classified());
        assert!(err.to_string().contains("\"code\""), "{err}");
    }

    #[tokio::test]
    async fn non_string_values_follow_the_column_rules() {
        let svc = CompanyService::new(Arc::new(MemoryStore::default()));
        let created = svc
            .create(input(Some(json!("num")), Some(json!(123)), Some(json!(true))))
            .await
            .expect("create");
        assert_eq!(created.name, "123");
        assert_eq!(created.description, "true");

        let err = svc.create(input(Some(json!(123)), Some(json!("A")), Some(json!("d")))).await.unwrap_err();
        assert!(!err.is_classified());
    }

    #[tokio::test]
    async fn duplicate_code_is_an_unclassified_store_error() {
        let svc = CompanyService::new(Arc::new(MemoryStore::default()));
        svc.create(full("ibm", "IBM", "Big blue")).await.expect("create");
        let err = svc.create(full("IBM", "IBM", "again")).await.unwrap_err();
        assert!(!err.is_classified());
        assert!(err.to_string().contains("companies_pkey"), "{err}");
    }

    #[tokio::test]
    async fn company_without_industry_is_not_found() {
        let store = Arc::new(MemoryStore::default());
        let svc = CompanyService::new(store.clone());
        svc.create(full("zoom", "Zoom", "video")).await.expect("create");
        assert_eq!(svc.get("zoom").await, Err(ServiceError::not_found("Company")));

        let industries = crate::industry::IndustryService::new(store);
        industries
            .create(IndustryInput { code: Some(json!("tech")), field: Some(json!("Technology")) })
            .await
            .expect("industry");
        industries
            .associate("tech", AssociationInput { company_code: Some(json!("zoom")) })
            .await
            .expect("link");

        let detail = svc.get("zoom").await.expect("detail");
        assert_eq!(detail.invoices, vec![None]);
        assert_eq!(detail.industries, vec!["Technology"]);
    }

    #[tokio::test]
    async fn update_reports_unknown_codes_before_missing_fields() {
        let svc = CompanyService::new(Arc::new(MemoryStore::default()));
        let partial = CompanyUpdate { name: Some(json!("x")), description: None };
        assert_eq!(svc.update("nope", partial.clone()).await, Err(ServiceError::not_found("Company")));
        assert_eq!(svc.update("nope", CompanyUpdate::default()).await, Err(ServiceError::not_found("Company")));

        svc.create(full("acme", "Acme", "anvils")).await.expect("create");
        let err = svc.update("acme", partial).await.unwrap_err();
        assert!(!err.is_classified());
        assert!(err.to_string().contains("\"description\""), "{err}");

        let upd = CompanyUpdate { name: Some(json!("Acme Corp")), description: Some(json!("rockets")) };
        let updated = svc.update("acme", upd).await.expect("update");
        assert_eq!(updated.name, "Acme Corp");
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let svc = CompanyService::new(Arc::new(MemoryStore::default()));
        svc.create(full("acme", "Acme", "anvils")).await.expect("create");
        svc.delete("acme").await.expect("first delete");
        assert_eq!(svc.delete("acme").await, Err(ServiceError::not_found("Company")));
    }
}
