use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use models::{company, invoice};

use crate::errors::ServiceError;
use crate::input::present;

/// Body of `POST /invoices`. `amt` may be a number or a numeric string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceInput {
    #[serde(default, deserialize_with = "present")]
    pub comp_code: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub amt: Option<Value>,
}

/// Body of `PUT /invoices/:id`. Absent and `null` both write NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceUpdate {
    #[serde(default)]
    pub amt: Option<Value>,
}

/// An invoice with its owning company attached under `company`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    /// Absent only if the company vanished between the two reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<company::Model>,
}

impl InvoiceDetail {
    pub fn new(inv: invoice::Model, company: Option<company::Model>) -> Self {
        Self {
            id: inv.id,
            amt: inv.amt,
            paid: inv.paid,
            add_date: inv.add_date,
            paid_date: inv.paid_date,
            company,
        }
    }
}

/// Read a path id the way the store reads an integer parameter, failing
/// with its messages.
pub fn parse_id(raw: &str) -> Result<i32, ServiceError> {
    let trimmed = raw.trim();
    if let Ok(id) = trimmed.parse::<i32>() {
        return Ok(id);
    }
    let digits = trimmed.strip_prefix(|c| c == '+' || c == '-').unwrap_or(trimmed);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ServiceError::Store(format!("value \"{raw}\" is out of range for type integer")));
    }
    Err(ServiceError::Store(format!("invalid input syntax for type integer: \"{raw}\"")))
}
