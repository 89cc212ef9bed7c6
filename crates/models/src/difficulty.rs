use sea_orm::entity::prelude::*;

use crate::walk;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "difficulty")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Walk }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Walk => Entity::has_many(walk::Entity).into(),
        }
    }
}

impl Related<walk::Entity> for Entity {
    fn to() -> RelationDef { Relation::Walk.def() }
}

impl ActiveModelBehavior for ActiveModel {}
