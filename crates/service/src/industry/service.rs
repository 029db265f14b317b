use std::sync::Arc;

use serde_json::Value;
use slug::slugify;
use tracing::{info, instrument};

use models::{industry, industry_company};

use super::domain::{group_rows, AssociationInput, IndustryInput, IndustryView};
use super::repository::IndustryRepository;
use crate::errors::ServiceError;
use crate::input::text;

pub struct IndustryService {
    repo: Arc<dyn IndustryRepository>,
}

impl IndustryService {
    pub fn new(repo: Arc<dyn IndustryRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<IndustryView>, ServiceError> {
        Ok(group_rows(self.repo.list_rows().await?))
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: IndustryInput) -> Result<industry::Model, ServiceError> {
        let (Some(code), Some(field)) = (input.code, input.field) else {
            return Err(ServiceError::MissingInputs);
        };
        let code = match code {
            Value::Null => None,
            Value::String(raw) => Some(slugify(raw)),
            _ => return Err(ServiceError::Store("industry code must be a string".into())),
        };
        let created = self.repo.insert(code, text(field)).await?;
        info!(code = %created.code, "industry_created");
        Ok(created)
    }

    /// Link a company to the industry at `industry_code` (taken as-is).
    /// Unknown codes on either side surface the store's foreign-key message.
    #[instrument(skip(self, input))]
    pub async fn associate(&self, industry_code: &str, input: AssociationInput) -> Result<industry_company::Model, ServiceError> {
        let Some(company_code) = input.company_code else {
            return Err(ServiceError::MissingInputs);
        };
        let link = self.repo.associate(industry_code, text(company_code)).await?;
        info!(company_code = %link.company_code, "industry_linked");
        Ok(link)
    }
}
