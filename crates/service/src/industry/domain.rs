use serde::{Deserialize, Serialize};
use serde_json::Value;

use models::industry;

use crate::input::present;

/// Body of `POST /industries`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndustryInput {
    #[serde(default, deserialize_with = "present")]
    pub code: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub field: Option<Value>,
}

/// Body of `POST /industries/:code/companies`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssociationInput {
    #[serde(default, deserialize_with = "present")]
    pub company_code: Option<Value>,
}

/// An industry with the codes of the companies linked to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryView {
    pub code: String,
    pub field: String,
    pub companies: Vec<String>,
}

/// Group rows ordered by industry code into one view per industry.
pub fn group_rows(rows: Vec<industry::CompanyRow>) -> Vec<IndustryView> {
    let mut out: Vec<IndustryView> = Vec::new();
    for row in rows {
        if let Some(last) = out.last_mut().filter(|v| v.code == row.code) {
            last.companies.extend(row.company_code);
            continue;
        }
        out.push(IndustryView {
            code: row.code,
            field: row.field,
            companies: row.company_code.into_iter().collect(),
        });
    }
    out
}
