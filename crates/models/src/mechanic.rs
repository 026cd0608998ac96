use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mechanic")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub mechanic_id: i32,
    pub licence_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Resolve a licence number to the mechanic's internal id.
pub async fn find_id_by_licence<C: ConnectionTrait>(db: &C, licence_number: &str) -> Result<Option<i32>, ModelError> {
    let found = Entity::find()
        .filter(Column::LicenceNumber.eq(licence_number))
        .one(db)
        .await?;
    Ok(found.map(|m| m.mechanic_id))
}

pub async fn create<C: ConnectionTrait>(db: &C, mechanic_id: i32, licence_number: &str) -> Result<Model, ModelError> {
    if licence_number.trim().is_empty() {
        return Err(ModelError::Validation("licence number required".into()));
    }
    let am = ActiveModel {
        mechanic_id: Set(mechanic_id),
        licence_number: Set(licence_number.to_string()),
    };
    Ok(am.insert(db).await?)
}
