//! Many-to-many link between companies and industries.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{company, industry};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "industries_companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub company_code: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub industry_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Company,
    Industry,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Company => Entity::belongs_to(company::Entity)
                .from(Column::CompanyCode)
                .to(company::Column::Code)
                .into(),
            Relation::Industry => Entity::belongs_to(industry::Entity)
                .from(Column::IndustryCode)
                .to(industry::Column::Code)
                .into(),
        }
    }
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef { Relation::Company.def() }
}

impl Related<industry::Entity> for Entity {
    fn to() -> RelationDef { Relation::Industry.def() }
}

impl ActiveModelBehavior for ActiveModel {}
