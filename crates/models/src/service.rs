use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A kind of work the workshop performs. Carries no price; fees are
/// recorded per visit in `visit_service`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub service_id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_id_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<Option<i32>, ModelError> {
    let found = Entity::find().filter(Column::Name.eq(name)).one(db).await?;
    Ok(found.map(|s| s.service_id))
}

pub async fn create<C: ConnectionTrait>(db: &C, service_id: i32, name: &str) -> Result<Model, ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("service name required".into()));
    }
    let am = ActiveModel {
        service_id: Set(service_id),
        name: Set(name.to_string()),
    };
    Ok(am.insert(db).await?)
}
