//! In-memory store implementing every repository trait.
//!
//! Emulates the Postgres schema's constraints and reports violations with the
//! messages Postgres uses, checked in its order: NOT NULL, then CHECK, then
//! keys. Services and HTTP handlers run against it without a database.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::Local;
use tokio::sync::Mutex;

use models::{company, industry, industry_company, invoice};

use crate::company::repository::CompanyRepository;
use crate::errors::ServiceError;
use crate::industry::repository::IndustryRepository;
use crate::invoice::repository::InvoiceRepository;

#[derive(Default)]
struct Tables {
    companies: BTreeMap<String, company::Model>,
    invoices: BTreeMap<i32, invoice::Model>,
    last_invoice_id: i32,
    industries: BTreeMap<String, industry::Model>,
    /// (company_code, industry_code)
    links: BTreeSet<(String, String)>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

/// Unwrap a column value or fail like a NOT NULL column.
fn required<T>(value: Option<T>, table: &str, column: &str) -> Result<T, ServiceError> {
    value.ok_or_else(|| {
        ServiceError::Store(format!(
            "null value in column \"{column}\" of relation \"{table}\" violates not-null constraint"
        ))
    })
}

fn unique_violation(constraint: &str) -> ServiceError {
    ServiceError::Store(format!("duplicate key value violates unique constraint \"{constraint}\""))
}

fn foreign_key_violation(table: &str, constraint: &str) -> ServiceError {
    ServiceError::Store(format!(
        "insert or update on table \"{table}\" violates foreign key constraint \"{constraint}\""
    ))
}

fn amount_check(amt: f64) -> Result<(), ServiceError> {
    if amt > 0.0 {
        return Ok(());
    }
    Err(ServiceError::Store(
        "new row for relation \"invoices\" violates check constraint \"invoices_amt_check\"".into(),
    ))
}

impl MemoryStore {
    /// Insert a company directly, replacing any row with the same code.
    pub async fn seed_company(&self, code: &str, name: &str, description: &str) -> company::Model {
        let model = company::Model { code: code.into(), name: name.into(), description: description.into() };
        self.tables.lock().await.companies.insert(model.code.clone(), model.clone());
        model
    }
}

#[async_trait]
impl CompanyRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<company::Summary>, ServiceError> {
        let t = self.tables.lock().await;
        Ok(t.companies
            .values()
            .map(|c| company::Summary { code: c.code.clone(), name: c.name.clone() })
            .collect())
    }

    async fn detail_rows(&self, code: &str) -> Result<Vec<company::DetailRow>, ServiceError> {
        let t = self.tables.lock().await;
        let Some(found) = t.companies.get(code) else {
            return Ok(Vec::new());
        };

        let mut invoice_ids: Vec<Option<i32>> = t
            .invoices
            .values()
            .filter(|inv| inv.comp_code == code)
            .map(|inv| Some(inv.id))
            .collect();
        if invoice_ids.is_empty() {
            invoice_ids.push(None);
        }
        let fields: Vec<&str> = t
            .links
            .iter()
            .filter(|(company_code, _)| company_code == code)
            .filter_map(|(_, industry_code)| t.industries.get(industry_code))
            .map(|ind| ind.field.as_str())
            .collect();

        let mut rows = Vec::with_capacity(invoice_ids.len() * fields.len());
        for invoice_id in &invoice_ids {
            for field in &fields {
                rows.push(company::DetailRow {
                    code: found.code.clone(),
                    name: found.name.clone(),
                    description: found.description.clone(),
                    invoice_id: *invoice_id,
                    industry: (*field).to_owned(),
                });
            }
        }
        Ok(rows)
    }

    async fn insert(
        &self,
        code: Option<String>,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<company::Model, ServiceError> {
        let company = company::Model {
            code: required(code, "companies", "code")?,
            name: required(name, "companies", "name")?,
            description: required(description, "companies", "description")?,
        };
        let mut t = self.tables.lock().await;
        if t.companies.contains_key(&company.code) {
            return Err(unique_violation("companies_pkey"));
        }
        t.companies.insert(company.code.clone(), company.clone());
        Ok(company)
    }

    async fn update(
        &self,
        code: &str,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Option<company::Model>, ServiceError> {
        let mut t = self.tables.lock().await;
        let Some(found) = t.companies.get_mut(code) else {
            return Ok(None);
        };
        let name = required(name, "companies", "name")?;
        let description = required(description, "companies", "description")?;
        found.name = name;
        found.description = description;
        Ok(Some(found.clone()))
    }

    async fn delete(&self, code: &str) -> Result<bool, ServiceError> {
        let mut t = self.tables.lock().await;
        if t.companies.remove(code).is_none() {
            return Ok(false);
        }
        t.invoices.retain(|_, inv| inv.comp_code != code);
        t.links.retain(|(company_code, _)| company_code != code);
        Ok(true)
    }
}

#[async_trait]
impl InvoiceRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<invoice::Summary>, ServiceError> {
        let t = self.tables.lock().await;
        Ok(t.invoices
            .values()
            .map(|inv| invoice::Summary { id: inv.id, comp_code: inv.comp_code.clone() })
            .collect())
    }

    async fn find(&self, id: i32) -> Result<Option<invoice::Model>, ServiceError> {
        Ok(self.tables.lock().await.invoices.get(&id).cloned())
    }

    async fn company_of(&self, id: i32) -> Result<Option<company::Model>, ServiceError> {
        let t = self.tables.lock().await;
        Ok(t.invoices.get(&id).and_then(|inv| t.companies.get(&inv.comp_code)).cloned())
    }

    async fn insert(&self, comp_code: Option<String>, amt: Option<f64>) -> Result<invoice::Model, ServiceError> {
        let comp_code = required(comp_code, "invoices", "comp_code")?;
        let amt = required(amt, "invoices", "amt")?;
        amount_check(amt)?;
        let mut t = self.tables.lock().await;
        if !t.companies.contains_key(&comp_code) {
            return Err(foreign_key_violation("invoices", "invoices_comp_code_fkey"));
        }
        t.last_invoice_id += 1;
        let model = invoice::Model {
            id: t.last_invoice_id,
            comp_code,
            amt,
            paid: false,
            add_date: Local::now().date_naive(),
            paid_date: None,
        };
        t.invoices.insert(model.id, model.clone());
        Ok(model)
    }

    async fn update_amount(&self, id: i32, amt: Option<f64>) -> Result<Option<invoice::Model>, ServiceError> {
        let mut t = self.tables.lock().await;
        let Some(inv) = t.invoices.get_mut(&id) else {
            return Ok(None);
        };
        let amt = required(amt, "invoices", "amt")?;
        amount_check(amt)?;
        inv.amt = amt;
        Ok(Some(inv.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.tables.lock().await.invoices.remove(&id).is_some())
    }
}

#[async_trait]
impl IndustryRepository for MemoryStore {
    async fn list_rows(&self) -> Result<Vec<industry::CompanyRow>, ServiceError> {
        let t = self.tables.lock().await;
        let mut rows = Vec::new();
        for ind in t.industries.values() {
            let mut companies: Vec<&String> = t
                .links
                .iter()
                .filter(|(_, industry_code)| *industry_code == ind.code)
                .map(|(company_code, _)| company_code)
                .collect();
            companies.sort();
            if companies.is_empty() {
                rows.push(industry::CompanyRow { code: ind.code.clone(), field: ind.field.clone(), company_code: None });
            }
            for company_code in companies {
                rows.push(industry::CompanyRow {
                    code: ind.code.clone(),
                    field: ind.field.clone(),
                    company_code: Some(company_code.clone()),
                });
            }
        }
        Ok(rows)
    }

    async fn insert(&self, code: Option<String>, field: Option<String>) -> Result<industry::Model, ServiceError> {
        let industry = industry::Model {
            code: required(code, "industries", "code")?,
            field: required(field, "industries", "field")?,
        };
        let mut t = self.tables.lock().await;
        if t.industries.contains_key(&industry.code) {
            return Err(unique_violation("industries_pkey"));
        }
        t.industries.insert(industry.code.clone(), industry.clone());
        Ok(industry)
    }

    async fn associate(
        &self,
        industry_code: &str,
        company_code: Option<String>,
    ) -> Result<industry_company::Model, ServiceError> {
        let company_code = required(company_code, "industries_companies", "company_code")?;
        let mut t = self.tables.lock().await;
        if !t.companies.contains_key(&company_code) {
            return Err(foreign_key_violation("industries_companies", "industries_companies_company_code_fkey"));
        }
        if !t.industries.contains_key(industry_code) {
            return Err(foreign_key_violation("industries_companies", "industries_companies_industry_code_fkey"));
        }
        if !t.links.insert((company_code.clone(), industry_code.to_owned())) {
            return Err(unique_violation("industries_companies_pkey"));
        }
        Ok(industry_company::Model { company_code, industry_code: industry_code.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn add_invoice(store: &MemoryStore, comp_code: &str, amt: f64) -> Result<invoice::Model, ServiceError> {
        InvoiceRepository::insert(store, Some(comp_code.into()), Some(amt)).await
    }

    #[tokio::test]
    async fn detail_rows_follow_join_cardinality() {
        let store = MemoryStore::default();
        store.seed_company("ibm", "IBM", "Big blue.").await;
        IndustryRepository::insert(&store, Some("tech".into()), Some("Technology".into()))
            .await
            .expect("industry");
        IndustryRepository::insert(&store, Some("acct".into()), Some("Accounting".into()))
            .await
            .expect("industry");

        assert!(store.detail_rows("ibm").await.expect("rows").is_empty());

        store.associate("tech", Some("ibm".into())).await.expect("link");
        store.associate("acct", Some("ibm".into())).await.expect("link");
        assert_eq!(store.detail_rows("ibm").await.expect("rows").len(), 2);

        add_invoice(&store, "ibm", 10.0).await.expect("invoice");
        add_invoice(&store, "ibm", 20.0).await.expect("invoice");
        assert_eq!(store.detail_rows("ibm").await.expect("rows").len(), 4);
    }

    #[tokio::test]
    async fn deleting_a_company_cascades() {
        let store = MemoryStore::default();
        store.seed_company("ibm", "IBM", "Big blue.").await;
        let inv = add_invoice(&store, "ibm", 10.0).await.expect("invoice");

        assert!(CompanyRepository::delete(&store, "ibm").await.expect("delete"));
        assert!(store.find(inv.id).await.expect("find").is_none());
        assert!(!CompanyRepository::delete(&store, "ibm").await.expect("delete"));
    }

    #[tokio::test]
    async fn invoice_ids_are_never_reused() {
        let store = MemoryStore::default();
        store.seed_company("ibm", "IBM", "Big blue.").await;
        let first = add_invoice(&store, "ibm", 10.0).await.expect("invoice");
        InvoiceRepository::delete(&store, first.id).await.expect("delete");
        let second = add_invoice(&store, "ibm", 10.0).await.expect("invoice");
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn non_positive_amounts_fail_the_check() {
        let store = MemoryStore::default();
        store.seed_company("ibm", "IBM", "Big blue.").await;
        let err = add_invoice(&store, "ibm", 0.0).await.unwrap_err();
        assert!(err.to_string().contains("invoices_amt_check"));
    }

    #[tokio::test]
    async fn null_columns_fail_before_keys_are_checked() {
        let store = MemoryStore::default();
        let err = InvoiceRepository::insert(&store, Some("ghost".into()), None).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "null value in column \"amt\" of relation \"invoices\" violates not-null constraint"
        );

        store.seed_company("ibm", "IBM", "Big blue.").await;
        let err = CompanyRepository::insert(&store, Some("ibm".into()), None, None).await.unwrap_err();
        assert!(err.to_string().contains("\"name\""), "{err}");
    }

    #[tokio::test]
    async fn updating_a_missing_row_skips_column_checks() {
        let store = MemoryStore::default();
        assert!(CompanyRepository::update(&store, "ghost", None, None).await.expect("update").is_none());
        assert!(store.update_amount(1, None).await.expect("update").is_none());

        store.seed_company("ibm", "IBM", "Big blue.").await;
        let err = CompanyRepository::update(&store, "ibm", Some("IBM".into()), None).await.unwrap_err();
        assert!(err.to_string().contains("\"description\""), "{err}");
    }
}
