use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "apps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub secret: String,
    pub refresh_secret: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Provision an app with an operator-assigned id and its two signing
/// secrets. The secrets must differ, otherwise an access token would verify
/// as a refresh token and vice versa.
pub async fn create(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
    secret: &str,
    refresh_secret: &str,
) -> Result<Model, ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if secret.is_empty() || refresh_secret.is_empty() {
        return Err(ModelError::Validation("both signing secrets are required".into()));
    }
    if secret == refresh_secret {
        return Err(ModelError::Validation("access and refresh secrets must differ".into()));
    }
    let am = ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        secret: Set(secret.to_string()),
        refresh_secret: Set(refresh_secret.to_string()),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
