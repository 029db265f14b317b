use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorBody { pub message: String, pub status: u16 }

/// Classified failure.
#[derive(ToSchema)]
pub struct ErrorEnvelope { pub error: ErrorBody }

/// Unclassified store failure, always 500.
#[derive(ToSchema)]
pub struct StoreErrorDoc { pub message: String }

#[derive(ToSchema)]
pub struct DeletedDoc { pub status: String }

#[derive(ToSchema)]
pub struct CompanySummaryDoc { pub code: String, pub name: String }

#[derive(ToSchema)]
pub struct CompanyDoc { pub code: String, pub name: String, pub description: String }

#[derive(ToSchema)]
pub struct CompanyEnvelope { pub company: CompanyDoc }

#[derive(ToSchema)]
pub struct CompanyDetailDoc {
    pub code: String,
    pub name: String,
    pub description: String,
    pub invoices: Vec<Option<i32>>,
    pub industries: Vec<String>,
}

#[derive(ToSchema)]
pub struct CompanyDetailEnvelope { pub company: CompanyDetailDoc }

#[derive(ToSchema)]
pub struct CompanyInputDoc { pub code: String, pub name: String, pub description: String }

#[derive(ToSchema)]
pub struct CompanyUpdateDoc { pub name: String, pub description: String }

#[derive(ToSchema)]
pub struct InvoiceSummaryDoc { pub id: i32, pub comp_code: String }

#[derive(ToSchema)]
pub struct InvoiceListDoc { pub invoices: Vec<Vec<InvoiceSummaryDoc>> }

#[derive(ToSchema)]
pub struct InvoiceDoc {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    /// `YYYY-MM-DD`
    pub add_date: String,
    pub paid_date: Option<String>,
}

#[derive(ToSchema)]
pub struct InvoiceEnvelope { pub invoice: InvoiceDoc }

#[derive(ToSchema)]
pub struct InvoiceDetailDoc {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: String,
    pub paid_date: Option<String>,
    pub company: CompanyDoc,
}

#[derive(ToSchema)]
pub struct InvoiceDetailEnvelope { pub invoice: InvoiceDetailDoc }

#[derive(ToSchema)]
pub struct InvoiceInputDoc { pub comp_code: String, pub amt: f64 }

#[derive(ToSchema)]
pub struct InvoiceUpdateDoc { pub amt: f64 }

#[derive(ToSchema)]
pub struct IndustryDoc { pub code: String, pub field: String }

#[derive(ToSchema)]
pub struct IndustryEnvelope { pub industry: IndustryDoc }

#[derive(ToSchema)]
pub struct IndustryViewDoc { pub code: String, pub field: String, pub companies: Vec<String> }

#[derive(ToSchema)]
pub struct IndustryListDoc { pub industries: Vec<IndustryViewDoc> }

#[derive(ToSchema)]
pub struct IndustryInputDoc { pub code: String, pub field: String }

#[derive(ToSchema)]
pub struct AssociationInputDoc { pub company_code: String }

#[derive(ToSchema)]
pub struct AssociationDoc { pub industry_code: String, pub company_code: String }

#[derive(ToSchema)]
pub struct AssociationEnvelope { pub association: AssociationDoc }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::list,
        crate::routes::companies::get,
        crate::routes::companies::create,
        crate::routes::companies::update,
        crate::routes::companies::delete,
        crate::routes::invoices::list,
        crate::routes::invoices::get,
        crate::routes::invoices::create,
        crate::routes::invoices::update,
        crate::routes::invoices::delete,
        crate::routes::industries::list,
        crate::routes::industries::create,
        crate::routes::industries::associate,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            ErrorEnvelope,
            StoreErrorDoc,
            DeletedDoc,
            CompanySummaryDoc,
            CompanyDoc,
            CompanyEnvelope,
            CompanyDetailDoc,
            CompanyDetailEnvelope,
            CompanyInputDoc,
            CompanyUpdateDoc,
            InvoiceSummaryDoc,
            InvoiceListDoc,
            InvoiceDoc,
            InvoiceEnvelope,
            InvoiceDetailDoc,
            InvoiceDetailEnvelope,
            InvoiceInputDoc,
            InvoiceUpdateDoc,
            IndustryDoc,
            IndustryEnvelope,
            IndustryViewDoc,
            IndustryListDoc,
            IndustryInputDoc,
            AssociationInputDoc,
            AssociationDoc,
            AssociationEnvelope,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies"),
        (name = "invoices"),
        (name = "industries")
    )
)]
pub struct ApiDoc;
