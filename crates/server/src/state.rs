use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::company::{repository::SeaOrmCompanyRepository, CompanyService};
use service::industry::{repository::SeaOrmIndustryRepository, IndustryService};
use service::invoice::{repository::SeaOrmInvoiceRepository, InvoiceService};
use service::memory::MemoryStore;

/// Shared handler state. Holds no per-request data; the store is the only
/// shared mutable resource.
#[derive(Clone)]
pub struct ServerState {
    pub companies: Arc<CompanyService>,
    pub invoices: Arc<InvoiceService>,
    pub industries: Arc<IndustryService>,
}

impl ServerState {
    /// Services over one Postgres pool owned by the process bootstrap.
    pub fn with_db(db: DatabaseConnection) -> Self {
        Self {
            companies: Arc::new(CompanyService::new(Arc::new(SeaOrmCompanyRepository { db: db.clone() }))),
            invoices: Arc::new(InvoiceService::new(Arc::new(SeaOrmInvoiceRepository { db: db.clone() }))),
            industries: Arc::new(IndustryService::new(Arc::new(SeaOrmIndustryRepository { db }))),
        }
    }

    /// Services over a fresh in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::default());
        Self {
            companies: Arc::new(CompanyService::new(store.clone())),
            invoices: Arc::new(InvoiceService::new(store.clone())),
            industries: Arc::new(IndustryService::new(store)),
        }
    }
}
