use sea_orm::{entity::prelude::*, FromQueryResult};
use serde::{Deserialize, Serialize};

use crate::{industry, industry_company, invoice};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub name: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Invoices,
    IndustryLinks,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Invoices => Entity::has_many(invoice::Entity).into(),
            Relation::IndustryLinks => Entity::has_many(industry_company::Entity).into(),
        }
    }
}

impl Related<invoice::Entity> for Entity {
    fn to() -> RelationDef { Relation::Invoices.def() }
}

impl Related<industry_company::Entity> for Entity {
    fn to() -> RelationDef { Relation::IndustryLinks.def() }
}

impl Related<industry::Entity> for Entity {
    fn to() -> RelationDef { industry_company::Relation::Industry.def() }
    fn via() -> Option<RelationDef> { Some(industry_company::Relation::Company.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// `{code, name}` projection used by the company listing.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct Summary {
    pub code: String,
    pub name: String,
}

/// One row of `companies LEFT JOIN invoices JOIN industries_companies JOIN industries`.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct DetailRow {
    pub code: String,
    pub name: String,
    pub description: String,
    pub invoice_id: Option<i32>,
    pub industry: String,
}
