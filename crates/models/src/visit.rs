use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{client, errors::ModelError, mechanic, visit_service};

/// Visit header. The id is supplied by the caller; `date` is stamped when the
/// row is written.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "visit")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub visit_id: i32,
    pub client_id: i32,
    pub mechanic_id: i32,
    pub date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Client,
    Mechanic,
    VisitService,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Client => Entity::belongs_to(client::Entity)
                .from(Column::ClientId)
                .to(client::Column::ClientId)
                .into(),
            Relation::Mechanic => Entity::belongs_to(mechanic::Entity)
                .from(Column::MechanicId)
                .to(mechanic::Column::MechanicId)
                .into(),
            Relation::VisitService => Entity::has_many(visit_service::Entity).into(),
        }
    }
}

impl Related<client::Entity> for Entity {
    fn to() -> RelationDef { Relation::Client.def() }
}

impl Related<mechanic::Entity> for Entity {
    fn to() -> RelationDef { Relation::Mechanic.def() }
}

impl Related<visit_service::Entity> for Entity {
    fn to() -> RelationDef { Relation::VisitService.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn exists<C: ConnectionTrait>(db: &C, visit_id: i32) -> Result<bool, ModelError> {
    Ok(Entity::find_by_id(visit_id).one(db).await?.is_some())
}

/// Insert the header row stamped with the given time.
pub async fn insert_header<C: ConnectionTrait>(
    db: &C,
    visit_id: i32,
    client_id: i32,
    mechanic_id: i32,
    date: DateTimeWithTimeZone,
) -> Result<Model, DbErr> {
    let am = ActiveModel {
        visit_id: Set(visit_id),
        client_id: Set(client_id),
        mechanic_id: Set(mechanic_id),
        date: Set(date),
    };
    am.insert(db).await
}
