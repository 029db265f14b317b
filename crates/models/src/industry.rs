use sea_orm::{entity::prelude::*, FromQueryResult};
use serde::{Deserialize, Serialize};

use crate::{company, industry_company};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "industries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub field: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    CompanyLinks,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::CompanyLinks => Entity::has_many(industry_company::Entity).into(),
        }
    }
}

impl Related<industry_company::Entity> for Entity {
    fn to() -> RelationDef { Relation::CompanyLinks.def() }
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef { industry_company::Relation::Company.def() }
    fn via() -> Option<RelationDef> { Some(industry_company::Relation::Industry.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// One row of `industries LEFT JOIN industries_companies`.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct CompanyRow {
    pub code: String,
    pub field: String,
    pub company_code: Option<String>,
}
