use rust_decimal::Decimal;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{service, visit};

/// Service performed during a visit, with the fee charged that time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "visit_service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub visit_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub service_id: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub service_fee: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Visit,
    Service,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Visit => Entity::belongs_to(visit::Entity)
                .from(Column::VisitId)
                .to(visit::Column::VisitId)
                .into(),
            Relation::Service => Entity::belongs_to(service::Entity)
                .from(Column::ServiceId)
                .to(service::Column::ServiceId)
                .into(),
        }
    }
}

impl Related<visit::Entity> for Entity {
    fn to() -> RelationDef { Relation::Visit.def() }
}

impl Related<service::Entity> for Entity {
    fn to() -> RelationDef { Relation::Service.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn insert_line<C: ConnectionTrait>(
    db: &C,
    visit_id: i32,
    service_id: i32,
    service_fee: Decimal,
) -> Result<Model, DbErr> {
    let am = ActiveModel {
        visit_id: Set(visit_id),
        service_id: Set(service_id),
        service_fee: Set(service_fee),
    };
    am.insert(db).await
}
