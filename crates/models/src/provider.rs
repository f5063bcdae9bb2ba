use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::fruit;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "provider")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub country: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Fruit,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Fruit => Entity::has_many(fruit::Entity).into(),
        }
    }
}

impl Related<fruit::Entity> for Entity {
    fn to() -> RelationDef { Relation::Fruit.def() }
}

impl ActiveModelBehavior for ActiveModel {}
