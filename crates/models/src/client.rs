use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Workshop customer. Read-only for the visit workflows.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Date,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn exists<C: ConnectionTrait>(db: &C, client_id: i32) -> Result<bool, ModelError> {
    Ok(Entity::find_by_id(client_id).one(db).await?.is_some())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    client_id: i32,
    first_name: &str,
    last_name: &str,
    date_of_birth: Date,
) -> Result<Model, ModelError> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() {
        return Err(ModelError::Validation("first and last name required".into()));
    }
    let am = ActiveModel {
        client_id: Set(client_id),
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        date_of_birth: Set(date_of_birth),
    };
    Ok(am.insert(db).await?)
}
