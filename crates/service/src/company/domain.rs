use serde::{Deserialize, Serialize};
use serde_json::Value;

use models::company;

use crate::input::present;

/// Body of `POST /companies`. A field is present when it is `Some`, even if
/// it holds `null` or an empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyInput {
    #[serde(default, deserialize_with = "present")]
    pub code: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Value>,
}

/// Body of `PUT /companies/:code`. Absent and `null` both write NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyUpdate {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
}

/// A company with the ids of its invoices and the fields of its industries.
///
/// Both lists hold one entry per joined row, so a company with two invoices
/// and two industries reports each id and each field twice. A company with
/// no invoices reports `null` ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: String,
    pub invoices: Vec<Option<i32>>,
    pub industries: Vec<String>,
}

impl CompanyDetail {
    /// Collapse the joined rows of a single company; `None` when there are none.
    pub fn from_rows(rows: Vec<company::DetailRow>) -> Option<Self> {
        let first = rows.first()?;
        let mut detail = CompanyDetail {
            code: first.code.clone(),
            name: first.name.clone(),
            description: first.description.clone(),
            invoices: Vec::with_capacity(rows.len()),
            industries: Vec::with_capacity(rows.len()),
        };
        for row in rows {
            detail.invoices.push(row.invoice_id);
            detail.industries.push(row.industry);
        }
        Some(detail)
    }
}
