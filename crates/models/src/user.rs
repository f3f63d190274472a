use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub email: String,
    pub pass_hash: String,
    pub is_admin: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a new user row and return it.
///
/// The unique constraint on `email` is the only duplicate check: the insert
/// is a single atomic statement, never a read-then-write.
pub async fn create(db: &DatabaseConnection, email: &str, pass_hash: &str) -> Result<Model, ModelError> {
    if email.trim().is_empty() {
        return Err(ModelError::Validation("email required".into()));
    }
    if pass_hash.trim().is_empty() {
        return Err(ModelError::Validation("password hash required".into()));
    }
    let am = ActiveModel {
        id: NotSet,
        email: Set(email.to_string()),
        pass_hash: Set(pass_hash.to_string()),
        is_admin: Set(false),
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ModelError::Conflict("email already registered".into())
        }
        _ => ModelError::Db(e.to_string()),
    })
}

pub async fn by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::Email.eq(email))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Remove a user row. Admin tooling only; the auth workflows never call it.
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<(), ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ModelError::Validation("user not found".into()));
    }
    Ok(())
}
